//! Property-based tests using proptest
//!
//! Invariants that must hold for ALL inputs:
//! - Movement: direction length <= 1, player stays inside the boundary
//! - Timers: countdowns never go negative and never grow when ticked
//! - Economy: crafting is all-or-nothing
//! - Combat: an enemy is defeated at most once
//! - Spawning: rings and pickup fields stay inside their configured extents
//! - Session: score never decreases, progress stays in [0, 1]

use bevy::math::{Vec2, Vec3};
use proptest::prelude::*;

use shadow_core::countdown::Countdown;
use shadow_core::economy::crafting::default_recipes;
use shadow_core::economy::ResourceType;
use shadow_core::geometry::{aabb_overlap, seeded_rng};
use shadow_core::loot::{CollectibleRegistry, CollectibleSpawn};
use shadow_core::monster::{Enemy, EnemyRoster, HitOutcome};
use shadow_core::movement::move_direction;
use shadow_core::player::inventory::Inventory;
use shadow_core::player::PlayerController;
use shadow_core::world::day_cycle::day_phase;
use shadow_core::world::CollisionWorld;
use shadow_core::{InputIntent, SimConfig, Simulation};

fn arb_intent() -> impl Strategy<Value = InputIntent> {
    (
        any::<[bool; 9]>(),
        -2.0f32..2.0,
        -2.0f32..2.0,
    )
        .prop_map(|(flags, jx, jy)| InputIntent {
            forward: flags[0],
            backward: flags[1],
            leftward: flags[2],
            rightward: flags[3],
            jump: flags[4],
            interact: flags[5],
            clone: flags[6],
            inventory: flags[7],
            pause: flags[8],
            joystick: Vec2::new(jx, jy),
        })
}

fn arb_vec3(extent: f32) -> impl Strategy<Value = Vec3> {
    (-extent..extent, -extent..extent, -extent..extent).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

// ============================================================
// Movement Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_move_direction_never_exceeds_unit(intent in arb_intent()) {
        let dir = move_direction(&intent);
        prop_assert!(dir.length() <= 1.0 + 1e-5, "direction too long: {dir:?}");
        prop_assert_eq!(dir.y, 0.0);
    }

    #[test]
    fn prop_player_stays_in_bounds(
        inputs in prop::collection::vec(arb_intent(), 1..120),
        dt in 0.0f32..0.5,
    ) {
        let config = SimConfig::default();
        let world = CollisionWorld::default();
        let mut player = PlayerController::new(&config);
        for input in &inputs {
            player.step(input, dt, &world, &config);
            let pos = player.position();
            prop_assert!(pos.x.abs() <= config.world_half_extent, "x out of bounds: {pos:?}");
            prop_assert!(pos.z.abs() <= config.world_half_extent, "z out of bounds: {pos:?}");
            prop_assert!(pos.y >= config.ground_height, "below ground: {pos:?}");
        }
    }

    #[test]
    fn prop_aabb_overlap_is_symmetric(
        a in arb_vec3(10.0),
        b in arb_vec3(10.0),
        sa in arb_vec3(4.0),
        sb in arb_vec3(4.0),
    ) {
        let (sa, sb) = (sa.abs(), sb.abs());
        prop_assert_eq!(aabb_overlap(a, sa, b, sb), aabb_overlap(b, sb, a, sa));
    }
}

// ============================================================
// Timer Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_countdown_is_clamped_and_monotonic(
        start in -5.0f32..20.0,
        ticks in prop::collection::vec(0.0f32..3.0, 0..50),
    ) {
        let mut timer = Countdown::from_secs(start);
        let mut last = timer.remaining();
        prop_assert!(last >= 0.0);
        for dt in ticks {
            timer.tick(dt);
            prop_assert!(timer.remaining() >= 0.0);
            prop_assert!(timer.remaining() <= last, "countdown grew");
            last = timer.remaining();
        }
        prop_assert_eq!(timer.is_ready(), timer.remaining() == 0.0);
    }

    #[test]
    fn prop_day_phase_in_unit_range(elapsed in -1e5f32..1e5, length in 0.1f32..1000.0) {
        let phase = day_phase(elapsed, length);
        prop_assert!((0.0..=1.0).contains(&phase), "phase {phase} out of range");
    }
}

// ============================================================
// Economy Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_crafting_is_all_or_nothing(
        balances in any::<[u8; 4]>(),
        recipe_index in 0usize..4,
    ) {
        let mut inv = Inventory::default();
        for (res, amount) in ResourceType::ALL.iter().zip(balances) {
            inv.add_resource(*res, amount as u32 % 8);
        }
        let before = inv.resources().clone();
        let recipe = &default_recipes()[recipe_index];

        let crafted = inv.craft_item(&recipe.id, &recipe.requires);
        if crafted {
            prop_assert_eq!(inv.item(&recipe.id), 1);
            for (res, amount) in &recipe.requires {
                let had = before.get(res).copied().unwrap_or(0);
                prop_assert_eq!(inv.resource(*res), had - amount);
            }
        } else {
            prop_assert_eq!(inv.resources(), &before, "failed craft must not consume");
            prop_assert_eq!(inv.item(&recipe.id), 0);
        }
    }

    #[test]
    fn prop_remove_resource_never_underflows(start in 0u32..20, take in 0u32..40) {
        let mut inv = Inventory::default();
        inv.add_resource(ResourceType::Metal, start);
        let ok = inv.remove_resource(ResourceType::Metal, take);
        prop_assert_eq!(ok, take <= start);
        let expected = if ok { start - take } else { start };
        prop_assert_eq!(inv.resource(ResourceType::Metal), expected);
    }
}

// ============================================================
// Combat & Spawning Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_enemy_defeated_at_most_once(hits in prop::collection::vec(0.0f32..80.0, 1..30)) {
        let mut enemy = Enemy::new(0, Vec3::ZERO, 3.0);
        let mut defeats = 0;
        for dmg in hits {
            if enemy.on_hit(dmg) == HitOutcome::Defeated {
                defeats += 1;
            }
            prop_assert!(enemy.health >= 0.0);
        }
        prop_assert!(defeats <= 1);
        prop_assert_eq!(defeats == 1, !enemy.is_alive());
    }

    #[test]
    fn prop_ring_spawn_within_radius(seed in any::<u64>(), count in 0usize..20) {
        let config = SimConfig::default();
        let mut roster = EnemyRoster::default();
        roster.spawn_ring(count, &mut seeded_rng(seed), &config);
        prop_assert_eq!(roster.len(), count);
        for enemy in roster.iter() {
            let r = Vec2::new(enemy.position.x, enemy.position.z).length();
            prop_assert!(r > config.ring_radius_min - 1e-3 && r < config.ring_radius_max + 1e-3);
            prop_assert!(enemy.speed >= config.enemy_speed_min && enemy.speed <= config.enemy_speed_max);
        }
    }

    #[test]
    fn prop_collectibles_within_spread(seed in any::<u64>(), count in 0u32..40) {
        let manifest = [CollectibleSpawn { resource: ResourceType::Crystal, count }];
        let mut registry = CollectibleRegistry::default();
        registry.spawn_from_manifest(&manifest, &mut seeded_rng(seed), 40.0, 1.0);
        prop_assert_eq!(registry.len(), count as usize);
        for item in registry.iter() {
            prop_assert!(item.position.x.abs() <= 20.0 && item.position.z.abs() <= 20.0);
            prop_assert_eq!(item.position.y, 1.0);
        }
    }
}

// ============================================================
// Session Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_score_monotonic_under_random_play(
        seed in any::<u64>(),
        inputs in prop::collection::vec(arb_intent(), 1..200),
    ) {
        let mut sim = Simulation::new(SimConfig { seed, ..Default::default() });
        sim.start_game();
        let mut last = sim.score();
        for input in &inputs {
            sim.tick(input, 1.0 / 30.0);
            prop_assert!(sim.score() >= last, "score decreased");
            last = sim.score();
            let progress = sim.level_progress();
            prop_assert!((0.0..=1.0).contains(&progress));
            prop_assert!(sim.player().health() >= 0.0);
        }
    }

    #[test]
    fn prop_same_seed_same_run(
        seed in any::<u64>(),
        inputs in prop::collection::vec(arb_intent(), 1..100),
    ) {
        let config = SimConfig { seed, ..Default::default() };
        let mut a = Simulation::new(config.clone());
        let mut b = Simulation::new(config);
        a.start_game();
        b.start_game();
        for input in &inputs {
            a.tick(input, 1.0 / 60.0);
            b.tick(input, 1.0 / 60.0);
        }
        prop_assert_eq!(a.player_position(), b.player_position());
        prop_assert_eq!(a.score(), b.score());
        prop_assert_eq!(a.drain_events(), b.drain_events());
    }
}
