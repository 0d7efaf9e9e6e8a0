//! Player character controller.
//!
//! Owns the player's kinematic state and health. Each frame applies intent,
//! jump impulse, gravity, the ground clamp and finally a collision-gated
//! position commit.

use bevy::math::Vec3;

use crate::engine::SimConfig;
use crate::movement::{apply_gravity, move_direction, InputIntent};
use crate::world::CollisionWorld;

pub mod inventory;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub health: f32,
    pub max_health: f32,
    pub on_ground: bool,
}

impl PlayerState {
    pub fn spawn(ground_height: f32, max_health: f32) -> Self {
        Self {
            position: Vec3::new(0.0, ground_height, 0.0),
            velocity: Vec3::ZERO,
            health: max_health,
            max_health,
            on_ground: true,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::spawn(crate::constants::GROUND_HEIGHT, crate::constants::PLAYER_MAX_HEALTH)
    }
}

/// Result of one [`PlayerController::step`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The candidate position collided and was not committed
    pub blocked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerController {
    state: PlayerState,
}

impl PlayerController {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            state: PlayerState::spawn(config.ground_height, config.player_max_health),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn health(&self) -> f32 {
        self.state.health
    }

    pub fn is_dead(&self) -> bool {
        self.state.health <= 0.0
    }

    /// Advance one frame of variable-delta movement
    pub fn step(
        &mut self,
        input: &InputIntent,
        delta_seconds: f32,
        world: &CollisionWorld,
        config: &SimConfig,
    ) -> StepOutcome {
        let mut velocity = self.state.velocity;
        let mut on_ground = self.state.on_ground;

        let direction = move_direction(input);
        velocity.x = direction.x * config.move_speed;
        velocity.z = direction.z * config.move_speed;

        if input.jump && on_ground {
            velocity.y = config.jump_impulse;
            on_ground = false;
        }

        if !on_ground {
            apply_gravity(&mut velocity, config.gravity, delta_seconds);
        }

        let mut candidate = self.state.position + velocity * delta_seconds;

        if candidate.y <= config.ground_height {
            candidate.y = config.ground_height;
            velocity.y = 0.0;
            on_ground = true;
        } else {
            on_ground = false;
        }

        let blocked = world.check_collision(candidate, Vec3::from_array(config.player_size));
        if !blocked {
            self.state.position = candidate;
        }
        self.state.velocity = velocity;
        self.state.on_ground = on_ground;

        StepOutcome { blocked }
    }

    /// Grounded-only jump. Returns whether the impulse was applied.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if !self.state.on_ground {
            return false;
        }
        self.state.velocity.y = impulse;
        self.state.on_ground = false;
        true
    }

    /// Returns the damage actually absorbed
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let before = self.state.health;
        self.state.health = (before - amount.max(0.0)).max(0.0);
        before - self.state.health
    }

    /// Returns the health actually restored
    pub fn heal(&mut self, amount: f32) -> f32 {
        let before = self.state.health;
        self.state.health = (before + amount.max(0.0)).min(self.state.max_health);
        self.state.health - before
    }

    pub fn teleport(&mut self, position: Vec3) {
        self.state.position = position;
    }

    pub fn reset(&mut self, config: &SimConfig) {
        self.state = PlayerState::spawn(config.ground_height, config.player_max_health);
    }
}
