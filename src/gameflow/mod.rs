//! Game Flow State Machine
//!
//! Menu → Playing ⇄ Paused → LevelComplete → Playing (next level) → … → GameComplete
//!
//! `reset` returns to Menu from any state. Invalid transitions are no-ops
//! reported through the return value.

use bevy::prelude::States;
use serde::{Deserialize, Serialize};

use crate::countdown::Countdown;

/// Top-level game states
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Paused,
    /// Level won; auto-resumes into the next level after a delay
    LevelComplete,
    /// Last level won. Terminal until reset.
    GameComplete,
    /// Player died. Terminal until reset.
    GameOver,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::GameComplete | GameState::GameOver)
    }
}

/// Where a won level leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    NextLevel(usize),
    GameComplete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub state: GameState,
    pub current_level: usize,
    /// Fraction of the current level's pickups and enemies cleared
    pub level_progress: f32,
    pub score: u64,
    /// One-shot guard: the current level's win has fired
    level_won: bool,
    resume_timer: Countdown,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            state: GameState::Menu,
            current_level: 0,
            level_progress: 0.0,
            score: 0,
            level_won: false,
            resume_timer: Countdown::ready(),
        }
    }
}

impl GameSession {
    /// Fresh run at level 0
    pub fn start(&mut self) {
        *self = Self {
            state: GameState::Playing,
            ..Self::default()
        };
        tracing::info!("GameFlow: starting new game");
    }

    pub fn pause(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = GameState::Paused;
        tracing::info!("GameFlow: paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != GameState::Paused {
            return false;
        }
        self.state = GameState::Playing;
        tracing::info!("GameFlow: resumed");
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::info!("GameFlow: back to menu");
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    pub fn level_won(&self) -> bool {
        self.level_won
    }

    /// Clear the per-level guard and progress for a freshly initialized level
    pub fn begin_level(&mut self) {
        self.level_won = false;
        self.level_progress = 0.0;
    }

    /// Record the win for the current level and pick the next state.
    ///
    /// Fires at most once per level; later calls return `None` until
    /// [`GameSession::begin_level`].
    pub fn complete_level(
        &mut self,
        difficulty: u32,
        level_count: usize,
        score_per_difficulty: u64,
        resume_delay: f32,
    ) -> Option<LevelOutcome> {
        if self.level_won || self.state != GameState::Playing {
            return None;
        }
        self.level_won = true;
        self.add_score(difficulty as u64 * score_per_difficulty);

        let next = self.current_level + 1;
        if next < level_count {
            self.state = GameState::LevelComplete;
            self.current_level = next;
            self.level_progress = 0.0;
            self.resume_timer.start(resume_delay);
            tracing::info!(next_level = next, score = self.score, "GameFlow: level complete");
            Some(LevelOutcome::NextLevel(next))
        } else {
            self.state = GameState::GameComplete;
            tracing::info!(score = self.score, "GameFlow: game complete");
            Some(LevelOutcome::GameComplete)
        }
    }

    /// Count down the level-complete delay. Returns true on the frame play
    /// resumes; the caller initializes `current_level` then.
    pub fn advance_transition(&mut self, delta_seconds: f32) -> bool {
        if self.state != GameState::LevelComplete {
            return false;
        }
        self.resume_timer.tick(delta_seconds);
        if !self.resume_timer.is_ready() {
            return false;
        }
        self.state = GameState::Playing;
        tracing::info!(level = self.current_level, "GameFlow: next level");
        true
    }

    pub fn game_over(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = GameState::GameOver;
        tracing::info!(score = self.score, "GameFlow: game over");
        true
    }

    /// Seconds left before LevelComplete resumes
    pub fn resume_remaining(&self) -> f32 {
        self.resume_timer.remaining()
    }
}
