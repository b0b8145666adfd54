#![allow(dead_code)]

use bevy_ecs::prelude::World;
use evtol_core::catalog::reference_catalog;
use evtol_core::chargers::ChargerPool;
use evtol_core::clock::SimulationClock;
use evtol_core::ecs::VehicleType;
use evtol_core::faults::FaultModel;
use evtol_core::scenario::SimulationHorizon;
use evtol_core::spawner::FleetSpawner;
use evtol_core::telemetry::FleetTelemetry;

/// Builder configuration for reproducible test worlds.
#[derive(Clone, Debug)]
pub struct TestWorldConfig {
    pub seed: u64,
    pub fleet_size: usize,
    pub charger_count: usize,
    pub horizon_hours: f64,
    pub catalog: Vec<VehicleType>,
}

impl Default for TestWorldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            fleet_size: 20,
            charger_count: 3,
            horizon_hours: 3.0,
            catalog: reference_catalog(),
        }
    }
}

/// Helper that populates the ECS world with all shared resources used in integration tests.
#[derive(Debug, Default)]
pub struct TestWorldBuilder {
    config: TestWorldConfig,
}

impl TestWorldBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the RNG seed used by all deterministically seeded helpers.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Override the number of aircraft spawned at simulation start.
    pub fn with_fleet_size(mut self, fleet_size: usize) -> Self {
        self.config.fleet_size = fleet_size;
        self
    }

    /// Override the number of charger slots shared by the fleet.
    pub fn with_charger_count(mut self, charger_count: usize) -> Self {
        self.config.charger_count = charger_count;
        self
    }

    /// Override the operating horizon in simulation hours.
    pub fn with_horizon_hours(mut self, horizon_hours: f64) -> Self {
        self.config.horizon_hours = horizon_hours;
        self
    }

    /// Replace the vehicle type catalog the fleet is sampled from.
    pub fn with_catalog(mut self, catalog: Vec<VehicleType>) -> Self {
        self.config.catalog = catalog;
        self
    }

    /// Build the ECS world with the configured resources.
    pub fn build(self) -> World {
        let TestWorldConfig {
            seed,
            fleet_size,
            charger_count,
            horizon_hours,
            catalog,
        } = self.config;

        let mut world = World::new();
        world.insert_resource(SimulationClock::default());
        world.insert_resource(SimulationHorizon(horizon_hours));
        world.insert_resource(FleetTelemetry::default());
        world.insert_resource(ChargerPool::new(charger_count));
        world.insert_resource(FleetSpawner::new(fleet_size, catalog, Some(seed)));
        world.insert_resource(FaultModel::new(Some(seed.wrapping_add(0xA5A5_A5A5))));
        world
    }
}
