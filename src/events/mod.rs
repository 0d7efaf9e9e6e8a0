//! Outbound simulation events.
//!
//! The simulation buffers these during a tick; hosts drain them and feed
//! presentation (effects, sounds, HUD). They are the core's only observable
//! output besides its state.

use bevy::math::Vec3;
use bevy::prelude::Event;

use crate::economy::ResourceType;
use crate::gameflow::GameState;

#[derive(Event, Debug, Clone, PartialEq)]
pub enum SimEvent {
    Collected {
        id: u32,
        resource: ResourceType,
        position: Vec3,
    },
    EnemyHit {
        enemy_id: u32,
        position: Vec3,
        damage: f32,
    },
    /// Fired once per enemy, the hit that takes health to zero
    EnemyDefeated { enemy_id: u32, position: Vec3 },
    PlayerDamaged {
        enemy_id: u32,
        damage: f32,
        health: f32,
    },
    Victory { level: usize, position: Vec3 },
    ScoreChanged { delta: u64, total: u64 },
    StateChanged { from: GameState, to: GameState },
    CloneActivated { position: Vec3, target: Vec3 },
    CloneExpired { position: Vec3 },
    ItemCrafted { item: String },
    ItemUsed { item: String },
}

/// Per-tick event buffer
#[derive(Debug, Default, Clone)]
pub struct EventQueue {
    events: Vec<SimEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn as_slice(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
