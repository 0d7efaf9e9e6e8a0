//! Countdown timer shared by cooldowns, lifetimes and transition delays.
//!
//! `remaining -= dt`, clamped at zero; ready once `remaining <= 0`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    /// A countdown that is already ready
    pub fn ready() -> Self {
        Self { remaining: 0.0 }
    }

    pub fn from_secs(secs: f32) -> Self {
        Self {
            remaining: secs.max(0.0),
        }
    }

    /// Restart from `secs`
    pub fn start(&mut self, secs: f32) {
        self.remaining = secs.max(0.0);
    }

    pub fn tick(&mut self, delta_seconds: f32) {
        self.remaining = (self.remaining - delta_seconds).max(0.0);
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }
}
