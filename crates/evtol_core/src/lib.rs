pub mod catalog;
pub mod chargers;
pub mod clock;
pub mod ecs;
pub mod faults;
pub mod profiling;
pub mod runner;
pub mod scenario;
pub mod spawner;
pub mod systems;
pub mod telemetry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
