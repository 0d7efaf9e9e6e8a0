//! Crafting recipes.
//!
//! A recipe maps an item id to the resources it consumes. The ledger side
//! (check-and-consume) lives in [`crate::player::inventory::Inventory`].

use serde::{Deserialize, Serialize};

use super::ResourceType;

pub const HEALTH_PACK: &str = "health_pack";
pub const ENERGY_BOOST: &str = "energy_boost";
pub const SHIELD: &str = "shield";
pub const CLONE_ENHANCE: &str = "clone_enhance";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftingRecipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub requires: Vec<(ResourceType, u32)>,
}

impl CraftingRecipe {
    fn new(id: &str, name: &str, description: &str, requires: &[(ResourceType, u32)]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            requires: requires.to_vec(),
        }
    }
}

/// Recipes available from the inventory screen
pub fn default_recipes() -> Vec<CraftingRecipe> {
    use ResourceType::*;
    vec![
        CraftingRecipe::new(HEALTH_PACK, "Health Pack", "Restore 50 HP", &[(Bio, 3), (Energy, 1)]),
        CraftingRecipe::new(
            ENERGY_BOOST,
            "Energy Boost",
            "Temporary speed increase",
            &[(Energy, 2), (Crystal, 1)],
        ),
        CraftingRecipe::new(SHIELD, "Shield", "Damage protection", &[(Metal, 4), (Crystal, 2)]),
        CraftingRecipe::new(
            CLONE_ENHANCE,
            "Clone Enhancer",
            "Longer clone duration",
            &[(Bio, 2), (Energy, 3), (Crystal, 1)],
        ),
    ]
}

pub fn find_recipe<'a>(recipes: &'a [CraftingRecipe], id: &str) -> Option<&'a CraftingRecipe> {
    recipes.iter().find(|r| r.id == id)
}
