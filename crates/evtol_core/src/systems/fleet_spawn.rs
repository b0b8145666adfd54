use bevy_ecs::prelude::{Commands, Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::ecs::{Aircraft, AircraftState};
use crate::scenario::SimulationHorizon;
use crate::spawner::FleetSpawner;

use super::common::schedule_flight;

/// Spawns the whole fleet at simulation start and sends every aircraft on its
/// first flight. An aircraft whose maiden flight would already overrun the
/// horizon is spawned retired; it never produces an event.
pub fn simulation_started_system(
    mut commands: Commands,
    mut clock: ResMut<SimulationClock>,
    mut spawner: ResMut<FleetSpawner>,
    horizon: Res<SimulationHorizon>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::SimulationStarted {
        return;
    }

    let start_time = event.0.timestamp;
    for _ in 0..spawner.fleet_size() {
        let Some(vehicle_type) = spawner.sample_type() else {
            break;
        };

        let entity = commands.spawn_empty().id();
        let state = if schedule_flight(&mut clock, horizon.0, entity, &vehicle_type, start_time) {
            AircraftState::Flying
        } else {
            AircraftState::Retired
        };
        commands.entity(entity).insert(Aircraft {
            vehicle_type,
            state,
        });
    }
}
