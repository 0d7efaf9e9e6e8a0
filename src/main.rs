//! Headless demo: runs the simulation under bevy with a simple autopilot.
//!
//! Environment:
//!   SHADOW_CONFIG    JSON `SimConfig` (defaults when unset)
//!   SHADOW_LEVELS    RON level table (falls back to config/levels.ron, then built-in)
//!   SHADOW_FRAMES    frame budget at 60 fps (default 18000)
//!   SHADOW_SAVE_DIR  write a save snapshot here when the run ends

use std::time::Duration;

use anyhow::Context;
use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use shadow_core::engine::plugin::simulation_tick_system;
use shadow_core::engine::{FrameInput, SimulationResource};
use shadow_core::generation::LevelTable;
use shadow_core::geometry::{distance, format_time};
use shadow_core::logging::LoggingPlugin;
use shadow_core::save::SaveStore;
use shadow_core::{GameState, InputIntent, SimConfig, SimulationPlugin};

const FRAME_SECS: f64 = 1.0 / 60.0;
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 5;
const DEFAULT_LEVELS_PATH: &str = "config/levels.ron";

#[derive(Resource)]
struct DemoRun {
    frame: u64,
    max_frames: u64,
    last_position: Vec3,
    finished: bool,
    save: Option<SaveStore>,
}

fn main() -> anyhow::Result<()> {
    let config = match std::env::var("SHADOW_CONFIG") {
        Ok(path) => SimConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        Err(_) => SimConfig::default(),
    };
    let levels = match std::env::var("SHADOW_LEVELS") {
        Ok(path) => LevelTable::load(&path).with_context(|| format!("loading levels {path}"))?,
        Err(_) => LevelTable::load_or_default(DEFAULT_LEVELS_PATH),
    };
    let max_frames = std::env::var("SHADOW_FRAMES")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES);
    let save = std::env::var("SHADOW_SAVE_DIR").ok().map(SaveStore::in_dir);

    let exit = App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)))
        .add_plugins(StatesPlugin)
        .add_plugins(LoggingPlugin::default())
        .add_plugins(SimulationPlugin { config, levels })
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            FRAME_SECS,
        )))
        .insert_resource(DemoRun {
            frame: 0,
            max_frames,
            last_position: Vec3::ZERO,
            finished: false,
            save,
        })
        .add_systems(Startup, start_run)
        .add_systems(Update, autopilot_system.before(simulation_tick_system))
        .add_systems(Update, finish_run_system.after(simulation_tick_system))
        .add_systems(OnEnter(GameState::LevelComplete), announce_level_clear)
        .run();

    if let AppExit::Error(code) = exit {
        anyhow::bail!("demo exited with code {code}");
    }
    Ok(())
}

fn start_run(mut sim: ResMut<SimulationResource>) {
    tracing::info!("Starting headless Shadow Survivor run");
    sim.0.start_game();
}

/// Walk toward the nearest pickup or live enemy, strike when close, drop a
/// clone whenever it is ready and hop when blocked.
fn autopilot_system(
    sim: Res<SimulationResource>,
    mut run: ResMut<DemoRun>,
    mut input: ResMut<FrameInput>,
) {
    let sim = &sim.0;
    let mut intent = InputIntent::idle();

    if sim.state() == GameState::Playing {
        let player = sim.player_position();
        let target = sim
            .collectibles()
            .remaining()
            .map(|c| c.position)
            .chain(sim.enemies().iter().filter(|e| e.is_alive()).map(|e| e.position))
            .min_by(|a, b| distance(*a, player).total_cmp(&distance(*b, player)));

        // alternate frames so held actions produce fresh presses
        let press = run.frame % 2 == 0;
        if let Some(target) = target {
            let offset = target - player;
            intent.joystick = Vec2::new(offset.x, offset.z).normalize_or_zero();
            intent.jump = run.last_position == player && sim.player().state().on_ground;
        }
        intent.interact = press
            && sim
                .enemies()
                .iter()
                .any(|e| e.is_alive() && distance(e.position, player) < sim.config().melee_range);
        intent.clone = press && sim.shadow_clone().can_activate();
        run.last_position = player;
    }

    input.0 = intent;
}

fn finish_run_system(
    mut run: ResMut<DemoRun>,
    sim: Res<SimulationResource>,
    mut exit: EventWriter<AppExit>,
) {
    run.frame += 1;
    let sim = &sim.0;
    if run.finished || (run.frame < run.max_frames && !sim.state().is_terminal()) {
        return;
    }
    run.finished = true;

    tracing::info!(
        frames = run.frame,
        state = ?sim.state(),
        score = sim.score(),
        level = sim.current_level(),
        time = %format_time(sim.elapsed()),
        "run finished"
    );
    if let Some(store) = &run.save {
        match store.save(&sim.snapshot()) {
            Ok(()) => tracing::info!(path = %store.path().display(), "snapshot written"),
            Err(e) => tracing::error!(error = %e, "failed to write snapshot"),
        }
    }
    exit.send(AppExit::Success);
}

fn announce_level_clear(sim: Res<SimulationResource>) {
    let sim = &sim.0;
    tracing::info!(
        next_level = sim.current_level(),
        name = %sim.current_level_definition().name,
        score = sim.score(),
        "level cleared"
    );
}
