//! Shadow clone decoy.
//!
//! A single decoy that walks from the player's position toward a random
//! nearby point and expires after a fixed lifetime. Activation is gated by a
//! cooldown and by the clone not already being out.

use bevy::math::Vec3;

use crate::countdown::Countdown;
use crate::engine::SimConfig;
use crate::geometry::{random_range, SimRng};
use crate::movement::seek_horizontal;

/// Lifecycle changes reported by [`ShadowClone::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CloneEvent {
    Activated { position: Vec3, target: Vec3 },
    Expired { position: Vec3 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowClone {
    pub active: bool,
    pub position: Vec3,
    pub target: Vec3,
    pub cooldown: Countdown,
    /// Seconds since activation, simulation clock
    pub age: f32,
}

impl ShadowClone {
    pub fn can_activate(&self) -> bool {
        !self.active && self.cooldown.is_ready()
    }

    /// Spawn the clone at `origin`. Returns false while active or cooling down.
    pub fn try_activate(&mut self, origin: Vec3, rng: &mut SimRng, config: &SimConfig) -> bool {
        if !self.can_activate() {
            tracing::debug!(
                active = self.active,
                cooldown = self.cooldown.remaining(),
                "clone activation rejected"
            );
            return false;
        }
        let spread = config.clone_target_spread;
        let offset = Vec3::new(
            random_range(rng, -spread, spread),
            0.0,
            random_range(rng, -spread, spread),
        );
        self.active = true;
        self.position = origin;
        self.target = origin + offset;
        self.age = 0.0;
        self.cooldown.start(config.clone_cooldown);
        tracing::debug!(?origin, target = ?self.target, "clone activated");
        true
    }

    /// Advance one frame. `activate` is the rising edge of the clone input.
    pub fn update(
        &mut self,
        activate: bool,
        origin: Vec3,
        delta_seconds: f32,
        rng: &mut SimRng,
        config: &SimConfig,
    ) -> Option<CloneEvent> {
        self.cooldown.tick(delta_seconds);

        if activate && self.try_activate(origin, rng, config) {
            return Some(CloneEvent::Activated {
                position: self.position,
                target: self.target,
            });
        }

        if !self.active {
            return None;
        }

        self.position = seek_horizontal(self.position, self.target, config.clone_speed, delta_seconds);
        self.age += delta_seconds;
        if self.age > config.clone_lifetime {
            self.active = false;
            tracing::debug!(position = ?self.position, "clone expired");
            return Some(CloneEvent::Expired {
                position: self.position,
            });
        }
        None
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
