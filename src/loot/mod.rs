//! Collectible pickups.
//!
//! Each level expands its manifest into individual pickups scattered in a
//! square around the origin. A pickup is collected at most once.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::economy::ResourceType;
use crate::geometry::{distance, random_position_in_square, SimRng};

/// One manifest line: `count` pickups of `resource`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectibleSpawn {
    pub resource: ResourceType,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub id: u32,
    pub resource: ResourceType,
    pub position: Vec3,
    pub collected: bool,
}

/// Emitted the frame a collectible is picked up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    pub id: u32,
    pub resource: ResourceType,
    pub position: Vec3,
}

#[derive(Debug, Clone, Default)]
pub struct CollectibleRegistry {
    items: Vec<Collectible>,
}

impl CollectibleRegistry {
    /// Replace the registry with the expanded manifest
    pub fn spawn_from_manifest(
        &mut self,
        manifest: &[CollectibleSpawn],
        rng: &mut SimRng,
        spread: f32,
        height: f32,
    ) {
        self.items.clear();
        let mut next_id = 0u32;
        for spawn in manifest {
            for _ in 0..spawn.count {
                self.items.push(Collectible {
                    id: next_id,
                    resource: spawn.resource,
                    position: random_position_in_square(rng, spread, height),
                    collected: false,
                });
                next_id += 1;
            }
        }
        tracing::debug!(count = self.items.len(), "collectibles spawned");
    }

    /// Collect everything strictly within `radius` of the player.
    pub fn check_proximity(&mut self, player_position: Vec3, radius: f32) -> Vec<Pickup> {
        let mut pickups = Vec::new();
        for item in self.items.iter_mut().filter(|c| !c.collected) {
            if distance(item.position, player_position) < radius {
                item.collected = true;
                pickups.push(Pickup {
                    id: item.id,
                    resource: item.resource,
                    position: item.position,
                });
            }
        }
        pickups
    }

    pub fn get(&self, id: u32) -> Option<&Collectible> {
        self.items.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collectible> {
        self.items.iter()
    }

    /// Uncollected pickups, in spawn order
    pub fn remaining(&self) -> impl Iterator<Item = &Collectible> {
        self.items.iter().filter(|c| !c.collected)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn collected_count(&self) -> usize {
        self.items.iter().filter(|c| c.collected).count()
    }

    pub fn all_collected(&self) -> bool {
        self.items.iter().all(|c| c.collected)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
