use bevy::prelude::*;

use crate::engine::config::SimConfig;
use crate::engine::simulation::Simulation;
use crate::events::SimEvent;
use crate::gameflow::GameState;
use crate::generation::LevelTable;
use crate::movement::InputIntent;

/// Runs the simulation inside a bevy app.
///
/// Needs `StatesPlugin` (or `DefaultPlugins`) for `GameState`.
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: SimConfig,
    pub levels: LevelTable,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let simulation = Simulation::with_levels(self.config.clone(), self.levels.clone());

        app.init_state::<GameState>()
            .add_event::<SimEvent>()
            .init_resource::<FrameInput>()
            .insert_resource(SimulationResource(simulation))
            .add_systems(
                Update,
                (
                    simulation_tick_system,
                    forward_events_system,
                    sync_game_state_system,
                )
                    .chain(),
            );
    }
}

#[derive(Resource)]
pub struct SimulationResource(pub Simulation);

/// Input intent for the coming frame, written by the host's input layer
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct FrameInput(pub InputIntent);

pub fn simulation_tick_system(
    time: Res<Time>,
    input: Res<FrameInput>,
    mut sim: ResMut<SimulationResource>,
) {
    sim.0.tick(&input.0, time.delta_secs());
}

fn forward_events_system(mut sim: ResMut<SimulationResource>, mut writer: EventWriter<SimEvent>) {
    for event in sim.0.drain_events() {
        writer.send(event);
    }
}

fn sync_game_state_system(
    sim: Res<SimulationResource>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let current = sim.0.state();
    if *state.get() != current {
        next.set(current);
    }
}
