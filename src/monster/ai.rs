//! Enemy AI behavior.
//!
//! Two-state machine driven by distance to the player: chase inside the
//! detection radius, wander otherwise. Attacks need chase, range and a ready
//! cooldown.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use super::Enemy;
use crate::constants::{ENEMY_PATROL_RATE, ENEMY_PATROL_STEP};
use crate::engine::SimConfig;
use crate::geometry::{distance, normalize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    #[default]
    Patrol,
    Chase,
}

/// Thresholds and damage pulled from [`SimConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiConfig {
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_damage: f32,
    pub attack_cooldown: f32,
}

impl AiConfig {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            detection_range: config.chase_radius,
            attack_range: config.attack_range,
            attack_damage: config.attack_damage,
            attack_cooldown: config.attack_cooldown,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

/// An enemy strike landing on the player this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyAttack {
    pub enemy_id: u32,
    pub position: Vec3,
    pub damage: f32,
}

/// Advance one alive enemy for this frame.
///
/// `player_position` must be the frame-start snapshot. Dead enemies are
/// skipped and never attack.
pub fn update_enemy(
    enemy: &mut Enemy,
    player_position: Vec3,
    elapsed: f32,
    delta_seconds: f32,
    config: &AiConfig,
) -> Option<EnemyAttack> {
    if !enemy.is_alive() {
        return None;
    }

    enemy.attack_cooldown.tick(delta_seconds);

    let dist = distance(enemy.position, player_position);
    if dist < config.detection_range {
        enemy.state = AiState::Chase;
        let dir = normalize(player_position - enemy.position);
        enemy.position += dir * enemy.speed * delta_seconds;
    } else {
        enemy.state = AiState::Patrol;
        let angle = elapsed * ENEMY_PATROL_RATE + enemy.patrol_phase;
        enemy.position.x += angle.cos() * ENEMY_PATROL_STEP;
        enemy.position.z += angle.sin() * ENEMY_PATROL_STEP;
    }

    if dist < config.attack_range && enemy.is_chasing() && enemy.attack_cooldown.is_ready() {
        enemy.attack_cooldown.start(config.attack_cooldown);
        return Some(EnemyAttack {
            enemy_id: enemy.id,
            position: enemy.position,
            damage: config.attack_damage,
        });
    }
    None
}
