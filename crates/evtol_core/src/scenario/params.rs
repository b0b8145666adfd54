use bevy_ecs::prelude::Resource;

use crate::catalog::reference_catalog;
use crate::ecs::VehicleType;

/// Default operating horizon: 3 simulated hours.
pub const DEFAULT_HORIZON_HOURS: f64 = 3.0;

/// Default fleet size.
pub const DEFAULT_FLEET_SIZE: usize = 20;

/// Default number of charger slots shared by the fleet.
pub const DEFAULT_CHARGER_COUNT: usize = 3;

/// Operating horizon in simulation hours. The runner stops once the next event
/// lies strictly past this timestamp; an event at exactly the horizon still
/// executes.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SimulationHorizon(pub f64);

/// Parameters for building a simulation scenario.
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub fleet_size: usize,
    pub charger_count: usize,
    pub horizon_hours: f64,
    /// Vehicle types the fleet is sampled from.
    pub catalog: Vec<VehicleType>,
    /// Seed for RNG (for reproducibility). If None, defaults to 0.
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            fleet_size: DEFAULT_FLEET_SIZE,
            charger_count: DEFAULT_CHARGER_COUNT,
            horizon_hours: DEFAULT_HORIZON_HOURS,
            catalog: reference_catalog(),
            seed: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fleet_size(mut self, fleet_size: usize) -> Self {
        self.fleet_size = fleet_size;
        self
    }

    pub fn with_charger_count(mut self, charger_count: usize) -> Self {
        self.charger_count = charger_count;
        self
    }

    /// Set the operating horizon in hours.
    pub fn with_horizon_hours(mut self, hours: f64) -> Self {
        self.horizon_hours = hours;
        self
    }

    /// Replace the vehicle type catalog the fleet is sampled from.
    pub fn with_catalog(mut self, catalog: Vec<VehicleType>) -> Self {
        self.catalog = catalog;
        self
    }
}
