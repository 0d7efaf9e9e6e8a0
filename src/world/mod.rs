//! Static collision world.
//!
//! A fixed catalogue of obstacle boxes inside a square boundary. Answers
//! point-vs-world queries for anything that moves with collision gating.

use bevy::math::Vec3;

use crate::constants::{STATIC_OBSTACLES, WORLD_HALF_EXTENT};
use crate::geometry::Aabb;

pub mod day_cycle;

pub use day_cycle::DayCycle;

#[derive(Debug, Clone)]
pub struct CollisionWorld {
    half_extent: f32,
    obstacles: Vec<Aabb>,
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new(WORLD_HALF_EXTENT)
    }
}

impl CollisionWorld {
    /// World with the built-in obstacle catalogue
    pub fn new(half_extent: f32) -> Self {
        let obstacles = STATIC_OBSTACLES
            .iter()
            .map(|(center, size)| Aabb::new(Vec3::from_array(*center), Vec3::from_array(*size)))
            .collect();
        Self::with_obstacles(half_extent, obstacles)
    }

    pub fn with_obstacles(half_extent: f32, obstacles: Vec<Aabb>) -> Self {
        Self {
            half_extent,
            obstacles,
        }
    }

    /// Boundary only, no obstacles
    pub fn empty(half_extent: f32) -> Self {
        Self::with_obstacles(half_extent, Vec::new())
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    pub fn obstacles(&self) -> &[Aabb] {
        &self.obstacles
    }

    /// True when the box centered at `position` leaves the boundary on X/Z
    /// or overlaps any obstacle.
    pub fn check_collision(&self, position: Vec3, size: Vec3) -> bool {
        if self.out_of_bounds(position) {
            return true;
        }
        let probe = Aabb::new(position, size);
        self.obstacles.iter().any(|obstacle| probe.overlaps(obstacle))
    }

    fn out_of_bounds(&self, position: Vec3) -> bool {
        position.x < -self.half_extent
            || position.x > self.half_extent
            || position.z < -self.half_extent
            || position.z > self.half_extent
    }
}
