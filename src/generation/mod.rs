//! Level definitions.
//!
//! An ordered, immutable table of level descriptors. Five levels ship built
//! in; hosts may load a replacement table from RON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::economy::ResourceType;
use crate::loot::CollectibleSpawn;

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("Level table read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Level table parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Level table is empty")]
    Empty,
    #[error("Level {index} has difficulty {difficulty}, expected 1..=5")]
    Difficulty { index: usize, difficulty: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Ruins,
    Alien,
    Mechanical,
    Wasteland,
    Underground,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub id: u32,
    pub name: String,
    pub theme: Theme,
    pub description: String,
    pub ground_color: String,
    pub sky_color: String,
    pub obstacle_count: u32,
    pub obstacle_color: String,
    pub enemy_count: u32,
    pub collectibles: Vec<CollectibleSpawn>,
    pub objectives: Vec<String>,
    /// 1 (easiest) to 5
    pub difficulty: u32,
}

impl LevelDefinition {
    pub fn total_collectibles(&self) -> usize {
        self.collectibles.iter().map(|c| c.count as usize).sum()
    }

    /// Completion score with a bonus for finishing under 300 seconds
    pub fn completion_score(&self, time_completed: f32) -> u64 {
        let base = self.difficulty as f32 * 1000.0;
        let time_bonus = (300.0 - time_completed).max(0.0) * 10.0;
        (base + time_bonus).round() as u64
    }
}

/// Ordered level table. Never empty: every constructor, deserialization
/// included, goes through [`LevelTable::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LevelTableFile")]
pub struct LevelTable {
    levels: Vec<LevelDefinition>,
}

/// On-disk shape before validation
#[derive(Deserialize)]
struct LevelTableFile {
    levels: Vec<LevelDefinition>,
}

impl TryFrom<LevelTableFile> for LevelTable {
    type Error = LevelError;

    fn try_from(file: LevelTableFile) -> Result<Self, Self::Error> {
        LevelTable::new(file.levels)
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            levels: builtin_levels(),
        }
    }
}

impl LevelTable {
    /// Rejects an empty table and difficulties outside 1..=5
    pub fn new(levels: Vec<LevelDefinition>) -> Result<Self, LevelError> {
        check_levels(&levels)?;
        Ok(Self { levels })
    }

    pub fn from_ron_str(text: &str) -> Result<Self, LevelError> {
        let file: LevelTableFile = ron::from_str(text)?;
        Self::new(file.levels)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Load from `path`, falling back to the built-in table on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using built-in level table");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        check_levels(&self.levels)
    }

    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    /// Level at `index`, or level 0 when out of range. The table is
    /// non-empty by construction.
    pub fn get(&self, index: usize) -> &LevelDefinition {
        match self.levels.get(index) {
            Some(level) => level,
            None => {
                tracing::warn!(index, "level index out of range, falling back to level 0");
                &self.levels[0]
            }
        }
    }

    pub fn next(&self, index: usize) -> Option<&LevelDefinition> {
        self.levels.get(index + 1)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

fn check_levels(levels: &[LevelDefinition]) -> Result<(), LevelError> {
    if levels.is_empty() {
        return Err(LevelError::Empty);
    }
    for (index, level) in levels.iter().enumerate() {
        if !(1..=5).contains(&level.difficulty) {
            return Err(LevelError::Difficulty {
                index,
                difficulty: level.difficulty,
            });
        }
    }
    Ok(())
}

fn spawn(resource: ResourceType, count: u32) -> CollectibleSpawn {
    CollectibleSpawn { resource, count }
}

#[allow(clippy::too_many_arguments)]
fn level(
    id: u32,
    name: &str,
    theme: Theme,
    description: &str,
    colors: (&str, &str, &str),
    obstacle_count: u32,
    enemy_count: u32,
    collectibles: Vec<CollectibleSpawn>,
    objectives: &[&str],
    difficulty: u32,
) -> LevelDefinition {
    let (ground_color, sky_color, obstacle_color) = colors;
    LevelDefinition {
        id,
        name: name.to_string(),
        theme,
        description: description.to_string(),
        ground_color: ground_color.to_string(),
        sky_color: sky_color.to_string(),
        obstacle_count,
        obstacle_color: obstacle_color.to_string(),
        enemy_count,
        collectibles,
        objectives: objectives.iter().map(|s| s.to_string()).collect(),
        difficulty,
    }
}

fn builtin_levels() -> Vec<LevelDefinition> {
    use ResourceType::*;
    vec![
        level(
            0,
            "Abandoned Outpost",
            Theme::Ruins,
            "The remnants of a once-thriving settlement. Learn the basics of survival here.",
            ("#666666", "#8B7355", "#8D6E63"),
            8,
            3,
            vec![spawn(Metal, 5), spawn(Energy, 3)],
            &[
                "Collect all resources",
                "Defeat the scavenger bots",
                "Practice using your shadow clone",
            ],
            1,
        ),
        level(
            1,
            "Crystal Caves",
            Theme::Alien,
            "Underground caverns filled with mysterious alien crystals.",
            ("#4A148C", "#1A0033", "#7B1FA2"),
            12,
            5,
            vec![spawn(Crystal, 8), spawn(Bio, 4), spawn(Energy, 2)],
            &[
                "Harvest alien crystals",
                "Avoid crystal guardian drones",
                "Use shadow clone to access hidden areas",
            ],
            2,
        ),
        level(
            2,
            "Mechanical Graveyard",
            Theme::Mechanical,
            "A vast field of broken machinery and defunct robots.",
            ("#263238", "#37474F", "#455A64"),
            15,
            7,
            vec![spawn(Metal, 12), spawn(Energy, 6), spawn(Crystal, 3)],
            &[
                "Salvage mechanical parts",
                "Disable security systems",
                "Clone must activate distant switches",
            ],
            3,
        ),
        level(
            3,
            "Toxic Wasteland",
            Theme::Wasteland,
            "A poisoned landscape where only the strongest survive.",
            ("#2E7D32", "#4CAF50", "#388E3C"),
            18,
            8,
            vec![spawn(Bio, 10), spawn(Metal, 6), spawn(Energy, 4)],
            &[
                "Collect bio-samples safely",
                "Survive toxic enemy attacks",
                "Use clone to navigate hazards",
            ],
            4,
        ),
        level(
            4,
            "The Nexus Core",
            Theme::Alien,
            "The heart of the alien technology. The final challenge awaits.",
            ("#1A237E", "#000051", "#3F51B5"),
            25,
            12,
            vec![
                spawn(Crystal, 15),
                spawn(Energy, 10),
                spawn(Bio, 8),
                spawn(Metal, 8),
            ],
            &[
                "Gather enough resources to power the escape portal",
                "Defeat the Nexus Guardian",
                "Coordinate with shadow clone for complex puzzles",
                "Survive the final onslaught",
            ],
            5,
        ),
    ]
}
