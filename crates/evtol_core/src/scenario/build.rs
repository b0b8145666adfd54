use bevy_ecs::prelude::World;

use crate::chargers::ChargerPool;
use crate::clock::SimulationClock;
use crate::faults::FaultModel;
use crate::scenario::params::{ScenarioParams, SimulationHorizon};
use crate::spawner::FleetSpawner;
use crate::telemetry::FleetTelemetry;

/// Inserts the resources a simulation run needs into `world`. Fleet sampling
/// and fault sampling draw from separately seeded RNG streams.
pub fn build_scenario(world: &mut World, params: ScenarioParams) {
    world.insert_resource(SimulationClock::default());
    world.insert_resource(SimulationHorizon(params.horizon_hours));
    world.insert_resource(FleetTelemetry::default());
    world.insert_resource(ChargerPool::new(params.charger_count));

    let seed = params.seed.unwrap_or(0);
    world.insert_resource(FleetSpawner::new(
        params.fleet_size,
        params.catalog,
        Some(seed),
    ));
    world.insert_resource(FaultModel::new(Some(seed.wrapping_add(0x0bad_fa17))));
}
