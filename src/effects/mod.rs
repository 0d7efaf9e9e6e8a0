//! Transient particle bursts.
//!
//! Presentation-only: bursts are spawned on pickups, hits and victories and
//! pruned once their life runs out. Nothing in the simulation reads them.

use bevy::math::Vec3;
use rand::Rng;

use crate::constants::{PARTICLES_PER_BURST, PARTICLE_GRAVITY, PARTICLE_LIFE_SECS};
use crate::countdown::Countdown;
use crate::geometry::SimRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    Collect,
    Hit,
    Victory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub life: Countdown,
    pub kind: BurstKind,
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn spawn_burst(&mut self, origin: Vec3, kind: BurstKind, rng: &mut SimRng) {
        for _ in 0..PARTICLES_PER_BURST {
            let velocity = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 10.0,
                rng.gen::<f32>() * 5.0 + 5.0,
                (rng.gen::<f32>() - 0.5) * 10.0,
            );
            self.particles.push(Particle {
                position: origin,
                velocity,
                life: Countdown::from_secs(PARTICLE_LIFE_SECS),
                kind,
            });
        }
    }

    /// Integrate and drop expired particles
    pub fn update(&mut self, delta_seconds: f32) {
        for p in &mut self.particles {
            p.velocity.y -= PARTICLE_GRAVITY * delta_seconds;
            p.position += p.velocity * delta_seconds;
            p.life.tick(delta_seconds);
        }
        self.particles.retain(|p| !p.life.is_ready());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
