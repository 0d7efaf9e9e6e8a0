//! Day/Night Cycle
//!
//! One full cycle every `day_length` simulated seconds. The phase is a smooth
//! scalar in [0, 1] (0 = night, 1 = day) consumed by presentation only.

use std::f32::consts::TAU;

/// Phase at `elapsed` seconds: `sin(2π·(t mod L)/L)·0.5 + 0.5`
pub fn day_phase(elapsed: f32, day_length: f32) -> f32 {
    if day_length <= 0.0 {
        return 0.5;
    }
    let cycle = elapsed.rem_euclid(day_length) / day_length;
    (cycle * TAU).sin() * 0.5 + 0.5
}

#[derive(Debug, Clone)]
pub struct DayCycle {
    day_length: f32,
    phase: f32,
}

impl DayCycle {
    pub fn new(day_length: f32) -> Self {
        Self {
            day_length,
            phase: day_phase(0.0, day_length),
        }
    }

    /// Recompute the phase from the simulation clock
    pub fn update(&mut self, elapsed: f32) {
        self.phase = day_phase(elapsed, self.day_length);
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn is_day(&self) -> bool {
        self.phase > 0.5
    }

    pub fn day_length(&self) -> f32 {
        self.day_length
    }
}
