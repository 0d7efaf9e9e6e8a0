//! Enemies and the per-level roster.
//!
//! Enemies are kept in a stable-id arena for the whole level. A defeated enemy
//! stays in the roster with zero health so win checks can count it.

use bevy::math::Vec3;

use crate::constants::ENEMY_MAX_HEALTH;
use crate::countdown::Countdown;
use crate::engine::SimConfig;
use crate::geometry::{random_range, ring_position, SimRng};

pub mod ai;

pub use ai::{AiConfig, AiState, EnemyAttack};

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub position: Vec3,
    pub health: f32,
    pub state: AiState,
    pub speed: f32,
    /// Per-enemy offset into the patrol wander
    pub patrol_phase: f32,
    pub attack_cooldown: Countdown,
}

/// What a hit did to the enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    /// Already defeated
    Ignored,
    Damaged { remaining: f32 },
    /// Health reached zero on this hit. Reported once per enemy.
    Defeated,
}

impl Enemy {
    pub fn new(id: u32, position: Vec3, speed: f32) -> Self {
        Self {
            id,
            position,
            health: ENEMY_MAX_HEALTH,
            state: AiState::Patrol,
            speed,
            patrol_phase: id as f32,
            attack_cooldown: Countdown::ready(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_chasing(&self) -> bool {
        self.state == AiState::Chase
    }

    pub fn on_hit(&mut self, damage: f32) -> HitOutcome {
        if !self.is_alive() {
            return HitOutcome::Ignored;
        }
        self.health = (self.health - damage.max(0.0)).max(0.0);
        if self.is_alive() {
            HitOutcome::Damaged {
                remaining: self.health,
            }
        } else {
            HitOutcome::Defeated
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EnemyRoster {
    enemies: Vec<Enemy>,
}

impl EnemyRoster {
    /// Replace the roster with `count` enemies on a ring around the origin
    pub fn spawn_ring(&mut self, count: usize, rng: &mut SimRng, config: &SimConfig) {
        self.enemies.clear();
        for i in 0..count {
            let radius = random_range(rng, config.ring_radius_min, config.ring_radius_max);
            let speed = random_range(rng, config.enemy_speed_min, config.enemy_speed_max);
            let position = ring_position(i, count, radius, config.ground_height);
            self.enemies.push(Enemy::new(i as u32, position, speed));
        }
        tracing::debug!(count, "enemies spawned");
    }

    /// Advance every alive enemy; returns the strikes that landed
    pub fn update(
        &mut self,
        player_position: Vec3,
        elapsed: f32,
        delta_seconds: f32,
        config: &AiConfig,
    ) -> Vec<EnemyAttack> {
        self.enemies
            .iter_mut()
            .filter_map(|enemy| ai::update_enemy(enemy, player_position, elapsed, delta_seconds, config))
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Enemy> {
        self.enemies.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    pub fn defeated_count(&self) -> usize {
        self.len() - self.alive_count()
    }

    /// Vacuously true for an empty roster
    pub fn all_defeated(&self) -> bool {
        self.enemies.iter().all(|e| !e.is_alive())
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }
}
