//! Centralized game constants for the shadow survivor core.
//!
//! These are the defaults behind [`crate::engine::SimConfig`]. Gameplay code
//! reads tuning through the config so tests and hosts can override them; the
//! collision catalogue and particle numbers are fixed here.

// =====================================================
// Player
// =====================================================

/// Horizontal move speed in units/sec
pub const PLAYER_MOVE_SPEED: f32 = 8.0;

/// Vertical velocity set by a grounded jump
pub const PLAYER_JUMP_IMPULSE: f32 = 12.0;

/// Downward acceleration applied while airborne (units/sec^2)
pub const GRAVITY: f32 = 25.0;

/// Height of the player's center when standing on the ground plane
pub const GROUND_HEIGHT: f32 = 1.0;

/// Player bounding box extents (x, y, z)
pub const PLAYER_SIZE: [f32; 3] = [1.0, 2.0, 1.0];

pub const PLAYER_MAX_HEALTH: f32 = 100.0;

// =====================================================
// World
// =====================================================

/// Half-extent of the playable square on X and Z
pub const WORLD_HALF_EXTENT: f32 = 50.0;

/// Static obstacle catalogue: (center, size)
pub const STATIC_OBSTACLES: [([f32; 3], [f32; 3]); 4] = [
    ([10.0, 1.0, 10.0], [2.0, 2.0, 2.0]),
    ([-10.0, 1.0, -10.0], [2.0, 2.0, 2.0]),
    ([15.0, 1.5, -5.0], [3.0, 3.0, 3.0]),
    ([-15.0, 1.0, 15.0], [2.0, 4.0, 2.0]),
];

/// Length of one full day/night cycle in seconds
pub const DAY_LENGTH_SECS: f32 = 120.0;

// =====================================================
// Enemies
// =====================================================

pub const ENEMY_MAX_HEALTH: f32 = 100.0;

/// Distance under which an enemy switches from patrol to chase
pub const ENEMY_CHASE_RADIUS: f32 = 10.0;

/// Distance under which a chasing enemy can strike
pub const ENEMY_ATTACK_RANGE: f32 = 2.0;

pub const ENEMY_ATTACK_DAMAGE: f32 = 10.0;

pub const ENEMY_ATTACK_COOLDOWN_SECS: f32 = 1.0;

/// Enemy speed is rolled uniformly in [MIN, MAX) at spawn
pub const ENEMY_SPEED_MIN: f32 = 2.0;
pub const ENEMY_SPEED_MAX: f32 = 4.0;

/// Spawn ring radius is rolled uniformly in [MIN, MAX)
pub const ENEMY_RING_RADIUS_MIN: f32 = 15.0;
pub const ENEMY_RING_RADIUS_MAX: f32 = 25.0;

/// Per-frame patrol wander step (not scaled by delta time)
pub const ENEMY_PATROL_STEP: f32 = 0.1;

/// Angular rate of the patrol wander (radians per simulated second)
pub const ENEMY_PATROL_RATE: f32 = 0.5;

// =====================================================
// Combat (player side)
// =====================================================

pub const MELEE_RANGE: f32 = 3.0;
pub const MELEE_DAMAGE: f32 = 25.0;

// =====================================================
// Collectibles & scoring
// =====================================================

/// Side length of the square collectibles are scattered in
pub const COLLECTIBLE_SPREAD: f32 = 40.0;

pub const PICKUP_RADIUS: f32 = 2.0;

pub const PICKUP_SCORE: u64 = 50;
pub const KILL_SCORE: u64 = 100;

/// Level clear bonus = difficulty * WIN_SCORE_PER_DIFFICULTY
pub const WIN_SCORE_PER_DIFFICULTY: u64 = 500;

/// Seconds spent in levelComplete before the next level starts
pub const LEVEL_COMPLETE_DELAY_SECS: f32 = 3.0;

// =====================================================
// Shadow clone
// =====================================================

pub const CLONE_COOLDOWN_SECS: f32 = 7.0;
pub const CLONE_LIFETIME_SECS: f32 = 5.0;
pub const CLONE_SPEED: f32 = 5.0;

/// Target offset is rolled in [-SPREAD, SPREAD] on X and Z
pub const CLONE_TARGET_SPREAD: f32 = 15.0;

// =====================================================
// Items
// =====================================================

/// HP restored by a health pack
pub const HEALTH_PACK_HEAL: f32 = 50.0;

// =====================================================
// Effects
// =====================================================

pub const PARTICLES_PER_BURST: usize = 20;
pub const PARTICLE_LIFE_SECS: f32 = 2.0;
pub const PARTICLE_GRAVITY: f32 = 9.8;
