//! Edge case & boundary tests
//!
//! Behavior at system boundaries:
//! - Malformed / empty config and level files -> typed errors, never panics
//! - Out-of-range level indices and snapshot levels
//! - Zero and negative deltas
//! - World boundary and obstacle contact
//! - Health clamping at zero and max

use bevy::math::Vec3;

use shadow_core::abilities::ShadowClone;
use shadow_core::engine::ConfigError;
use shadow_core::generation::{LevelError, LevelTable};
use shadow_core::geometry::{aabb_overlap, format_time, seeded_rng};
use shadow_core::player::PlayerController;
use shadow_core::save::{SaveError, SaveSnapshot, SaveStore};
use shadow_core::world::CollisionWorld;
use shadow_core::{GameState, InputIntent, SimConfig, Simulation};

fn right() -> InputIntent {
    InputIntent {
        rightward: true,
        ..Default::default()
    }
}

// ============================================================
// 1. Config & level files
// ============================================================

#[test]
fn test_empty_json_config_uses_defaults() {
    let config = SimConfig::from_json("{}").unwrap();
    assert_eq!(config, SimConfig::default());
}

#[test]
fn test_malformed_json_config_is_error() {
    assert!(matches!(SimConfig::from_json("{ seed: "), Err(ConfigError::Json(_))));
    assert!(matches!(SimConfig::from_json(""), Err(ConfigError::Json(_))));
}

#[test]
fn test_invalid_config_values_rejected() {
    let cases = [
        r#"{"move_speed": 0.0}"#,
        r#"{"gravity": -1.0}"#,
        r#"{"ring_radius_min": 30.0, "ring_radius_max": 10.0}"#,
        r#"{"clone_cooldown": -0.5}"#,
        r#"{"player_size": [1.0, 0.0, 1.0]}"#,
    ];
    for json in cases {
        assert!(
            matches!(SimConfig::from_json(json), Err(ConfigError::Invalid(_))),
            "should reject {json}"
        );
    }
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(SimConfig::load(&missing), Err(ConfigError::Io(_))));
}

#[test]
fn test_empty_level_table_rejected() {
    assert!(matches!(
        LevelTable::from_ron_str("(levels: [])"),
        Err(LevelError::Empty)
    ));
}

#[test]
fn test_malformed_ron_is_parse_error() {
    assert!(matches!(
        LevelTable::from_ron_str("(levels: [(id: 0,"),
        Err(LevelError::Parse(_))
    ));
}

#[test]
fn test_missing_level_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let table = LevelTable::load_or_default(dir.path().join("levels.ron"));
    assert_eq!(table, LevelTable::default());
}

#[test]
fn test_level_table_ron_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("levels.ron");
    let mut levels = LevelTable::default().levels().to_vec();
    levels[2].enemy_count = 1;
    let table = LevelTable::new(levels).unwrap();
    std::fs::write(&path, table.to_ron_string().unwrap()).unwrap();

    let loaded = LevelTable::load(&path).unwrap();
    assert_eq!(loaded.get(2).enemy_count, 1);
}

#[test]
fn test_empty_level_table_unrepresentable() {
    assert!(matches!(LevelTable::new(Vec::new()), Err(LevelError::Empty)));
    assert!(
        serde_json::from_str::<LevelTable>(r#"{"levels": []}"#).is_err(),
        "json must not yield an empty table"
    );
    assert!(
        ron::from_str::<LevelTable>("(levels: [])").is_err(),
        "ron must not yield an empty table"
    );

    let single = LevelTable::new(LevelTable::default().levels()[..1].to_vec()).unwrap();
    assert_eq!(single.get(7).id, 0, "out-of-range lookup falls back");
    let mut sim = Simulation::with_levels(SimConfig::default(), single);
    sim.start_game();
    sim.tick(&right(), 1.0 / 60.0);
    assert_eq!(sim.state(), GameState::Playing);
    assert_eq!(sim.current_level_definition().id, 0);
}

#[test]
fn test_out_of_range_level_falls_back_to_first() {
    let table = LevelTable::default();
    assert_eq!(table.get(99).id, 0);
    assert!(table.next(4).is_none());
}

// ============================================================
// 2. Save files
// ============================================================

#[test]
fn test_truncated_save_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::in_dir(dir.path());
    std::fs::write(store.path(), r#"{"version": 1, "score":"#).unwrap();
    assert!(matches!(store.load(), Err(SaveError::Format(_))));
}

#[test]
fn test_snapshot_level_beyond_table_is_clamped() {
    let snapshot = SaveSnapshot::new(Default::default(), 10, 42);
    let mut sim = Simulation::default();
    sim.restore_snapshot(&snapshot);
    assert_eq!(sim.current_level(), 4);
    assert_eq!(sim.enemies().len(), 12);
}

// ============================================================
// 3. Deltas
// ============================================================

#[test]
fn test_negative_delta_is_treated_as_zero() {
    let mut sim = Simulation::default();
    sim.start_game();
    let start = sim.player_position();
    sim.tick(&right(), -1.0);
    assert_eq!(sim.elapsed(), 0.0);
    assert_eq!(sim.player_position(), start);
}

#[test]
fn test_zero_delta_moves_nothing() {
    let mut sim = Simulation::default();
    sim.start_game();
    let enemies: Vec<Vec3> = sim.enemies().iter().map(|e| e.position).collect();
    sim.tick(&right(), 0.0);
    let after: Vec<Vec3> = sim.enemies().iter().map(|e| e.position).collect();
    assert_eq!(enemies, after);
}

#[test]
fn test_large_delta_does_not_sink_below_ground() {
    let config = SimConfig::default();
    let world = CollisionWorld::empty(config.world_half_extent);
    let mut player = PlayerController::new(&config);
    let jump = InputIntent {
        jump: true,
        ..Default::default()
    };
    player.step(&jump, 0.016, &world, &config);
    player.step(&InputIntent::idle(), 10.0, &world, &config);
    assert_eq!(player.position().y, config.ground_height);
    assert!(player.state().on_ground);
}

// ============================================================
// 4. World boundary & obstacles
// ============================================================

#[test]
fn test_boundary_blocks_whole_move() {
    let config = SimConfig::default();
    let world = CollisionWorld::empty(config.world_half_extent);
    let mut player = PlayerController::new(&config);
    player.teleport(Vec3::new(49.9, 1.0, 0.0));

    let outcome = player.step(&right(), 0.1, &world, &config);
    assert!(outcome.blocked);
    assert_eq!(player.position(), Vec3::new(49.9, 1.0, 0.0), "no sliding along the wall");
}

#[test]
fn test_exact_boundary_is_inside() {
    let world = CollisionWorld::empty(50.0);
    assert!(!world.check_collision(Vec3::new(50.0, 1.0, -50.0), Vec3::ONE));
    assert!(world.check_collision(Vec3::new(50.01, 1.0, 0.0), Vec3::ONE));
}

#[test]
fn test_touching_boxes_do_not_overlap() {
    assert!(!aabb_overlap(Vec3::ZERO, Vec3::ONE, Vec3::new(1.0, 0.0, 0.0), Vec3::ONE));
    assert!(aabb_overlap(Vec3::ZERO, Vec3::ONE, Vec3::new(0.99, 0.0, 0.0), Vec3::ONE));
}

#[test]
fn test_obstacle_blocks_approach() {
    let config = SimConfig::default();
    let world = CollisionWorld::default();
    let mut player = PlayerController::new(&config);
    // obstacle centered at (10, 1, 10) with size 2
    player.teleport(Vec3::new(8.05, 1.0, 10.0));
    let outcome = player.step(&right(), 0.1, &world, &config);
    assert!(outcome.blocked);
    assert_eq!(player.position().x, 8.05);
}

// ============================================================
// 5. Health & session guards
// ============================================================

#[test]
fn test_health_clamped_at_bounds() {
    let config = SimConfig::default();
    let mut player = PlayerController::new(&config);
    assert_eq!(player.heal(30.0), 0.0, "already full");
    assert_eq!(player.take_damage(250.0), 100.0);
    assert_eq!(player.health(), 0.0);
    assert!(player.is_dead());
    assert_eq!(player.take_damage(10.0), 0.0);
    assert_eq!(player.take_damage(-5.0), 0.0, "negative damage ignored");
}

#[test]
fn test_pause_and_resume_outside_play_are_noops() {
    let mut sim = Simulation::default();
    assert!(!sim.pause_game());
    assert!(!sim.resume_game());
    assert_eq!(sim.state(), GameState::Menu);

    sim.start_game();
    assert!(!sim.resume_game(), "not paused");
    assert!(sim.pause_game());
    assert!(!sim.pause_game(), "already paused");
}

#[test]
fn test_hit_enemy_only_while_playing() {
    let mut sim = Simulation::default();
    sim.start_game();
    let id = sim.enemies().iter().next().map(|e| e.id).unwrap();
    let health = sim.enemies().get(id).unwrap().health;

    sim.pause_game();
    assert!(!sim.hit_enemy(id, 1.0), "paused hits are ignored");
    assert_eq!(sim.enemies().get(id).unwrap().health, health);

    sim.resume_game();
    assert!(sim.hit_enemy(id, 1.0));
}

#[test]
fn test_subsystems_read_through_accessors() {
    let mut sim = Simulation::default();
    sim.start_game();
    assert_eq!(sim.session().state, GameState::Playing);
    assert_eq!(sim.config(), &SimConfig::default());
    assert_eq!(sim.levels().len(), 5);
    assert!(sim.shadow_clone().can_activate());
    assert!(!sim.recipes().is_empty());
    assert_eq!(sim.player().position(), sim.player_position());

    let spot = Vec3::new(-5.0, 1.0, -5.0);
    assert!(sim.teleport_player(spot));
    assert_eq!(sim.player().position(), spot);

    sim.pause_game();
    assert!(!sim.teleport_player(Vec3::ZERO), "teleport ignored while paused");
    assert_eq!(sim.player_position(), spot);
}

#[test]
fn test_clone_unavailable_during_cooldown() {
    let config = SimConfig::default();
    let mut clone = ShadowClone::default();
    let mut rng = seeded_rng(9);
    assert!(clone.try_activate(Vec3::ZERO, &mut rng, &config));
    assert!(!clone.can_activate());
    assert!(!clone.try_activate(Vec3::ZERO, &mut rng, &config));
}

#[test]
fn test_format_time_edges() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(-3.0), "0:00");
    assert_eq!(format_time(59.9), "0:59");
    assert_eq!(format_time(3600.0), "60:00");
}
