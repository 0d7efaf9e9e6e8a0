use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Every tuning knob of the simulation. Missing JSON fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub seed: u64,

    pub move_speed: f32,
    pub jump_impulse: f32,
    pub gravity: f32,
    pub ground_height: f32,
    pub player_size: [f32; 3],
    pub player_max_health: f32,

    pub world_half_extent: f32,
    pub day_length: f32,

    pub chase_radius: f32,
    pub attack_range: f32,
    pub attack_damage: f32,
    pub attack_cooldown: f32,
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    pub ring_radius_min: f32,
    pub ring_radius_max: f32,

    pub melee_range: f32,
    pub melee_damage: f32,

    pub collectible_spread: f32,
    pub pickup_radius: f32,
    pub pickup_score: u64,
    pub kill_score: u64,
    pub win_score_per_difficulty: u64,
    pub level_complete_delay: f32,

    pub clone_cooldown: f32,
    pub clone_lifetime: f32,
    pub clone_speed: f32,
    pub clone_target_spread: f32,

    pub health_pack_heal: f32,

    /// Enemy strikes reduce player health
    pub enemy_attacks_damage_player: bool,
    /// Player health reaching zero ends the run
    pub game_over_on_death: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            move_speed: PLAYER_MOVE_SPEED,
            jump_impulse: PLAYER_JUMP_IMPULSE,
            gravity: GRAVITY,
            ground_height: GROUND_HEIGHT,
            player_size: PLAYER_SIZE,
            player_max_health: PLAYER_MAX_HEALTH,
            world_half_extent: WORLD_HALF_EXTENT,
            day_length: DAY_LENGTH_SECS,
            chase_radius: ENEMY_CHASE_RADIUS,
            attack_range: ENEMY_ATTACK_RANGE,
            attack_damage: ENEMY_ATTACK_DAMAGE,
            attack_cooldown: ENEMY_ATTACK_COOLDOWN_SECS,
            enemy_speed_min: ENEMY_SPEED_MIN,
            enemy_speed_max: ENEMY_SPEED_MAX,
            ring_radius_min: ENEMY_RING_RADIUS_MIN,
            ring_radius_max: ENEMY_RING_RADIUS_MAX,
            melee_range: MELEE_RANGE,
            melee_damage: MELEE_DAMAGE,
            collectible_spread: COLLECTIBLE_SPREAD,
            pickup_radius: PICKUP_RADIUS,
            pickup_score: PICKUP_SCORE,
            kill_score: KILL_SCORE,
            win_score_per_difficulty: WIN_SCORE_PER_DIFFICULTY,
            level_complete_delay: LEVEL_COMPLETE_DELAY_SECS,
            clone_cooldown: CLONE_COOLDOWN_SECS,
            clone_lifetime: CLONE_LIFETIME_SECS,
            clone_speed: CLONE_SPEED,
            clone_target_spread: CLONE_TARGET_SPREAD,
            health_pack_heal: HEALTH_PACK_HEAL,
            enemy_attacks_damage_player: true,
            game_over_on_death: true,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("move_speed", self.move_speed),
            ("gravity", self.gravity),
            ("player_max_health", self.player_max_health),
            ("world_half_extent", self.world_half_extent),
            ("day_length", self.day_length),
            ("clone_speed", self.clone_speed),
            ("clone_lifetime", self.clone_lifetime),
            ("pickup_radius", self.pickup_radius),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be > 0, got {value}")));
            }
        }
        if self.player_size.iter().any(|s| !(*s > 0.0)) {
            return Err(ConfigError::Invalid("player_size must be positive".into()));
        }
        if self.enemy_speed_max < self.enemy_speed_min {
            return Err(ConfigError::Invalid("enemy_speed_max < enemy_speed_min".into()));
        }
        if self.ring_radius_max < self.ring_radius_min {
            return Err(ConfigError::Invalid("ring_radius_max < ring_radius_min".into()));
        }
        let non_negative = [
            ("attack_cooldown", self.attack_cooldown),
            ("clone_cooldown", self.clone_cooldown),
            ("level_complete_delay", self.level_complete_delay),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be >= 0, got {value}")));
            }
        }
        Ok(())
    }
}
