//! Scenario setup: horizon, charger capacity, fleet composition, seeds.
//!
//! [build_scenario] turns [ScenarioParams] into world resources; the runner
//! then drives everything from the scheduled events.

mod build;
mod params;

pub use build::build_scenario;
pub use params::{
    ScenarioParams, SimulationHorizon, DEFAULT_CHARGER_COUNT, DEFAULT_FLEET_SIZE,
    DEFAULT_HORIZON_HOURS,
};
