//! Load tests for evtol_core: validate performance under large fleets.

use bevy_ecs::prelude::World;
use evtol_core::runner::{initialize_simulation, run_until_empty, simulation_schedule};
use evtol_core::scenario::{build_scenario, ScenarioParams};
use std::time::Instant;

#[test]
#[ignore] // Only run explicitly: cargo test --package evtol_core --test load_tests -- --ignored
fn test_large_fleet_throughput() {
    let mut world = World::new();
    let params = ScenarioParams::default()
        .with_fleet_size(5_000)
        .with_charger_count(500)
        .with_seed(42);
    build_scenario(&mut world, params);

    let start = Instant::now();
    initialize_simulation(&mut world);
    let mut schedule = simulation_schedule();
    let events = run_until_empty(&mut world, &mut schedule, 10_000_000);
    let duration = start.elapsed();

    let events_per_sec = events as f64 / duration.as_secs_f64();
    println!(
        "Large fleet test: {} events in {:.2}s ({:.0} events/sec)",
        events,
        duration.as_secs_f64(),
        events_per_sec
    );

    // Assert minimum performance threshold
    assert!(
        events_per_sec > 1000.0,
        "Should process >1000 events/sec, got {:.0}",
        events_per_sec
    );
}

#[test]
#[ignore]
fn test_long_horizon() {
    // Long horizon: many flight/charge cycles per aircraft. This tests for
    // queue growth and stability over time.
    let mut world = World::new();
    let params = ScenarioParams::default()
        .with_fleet_size(500)
        .with_charger_count(50)
        .with_horizon_hours(240.0)
        .with_seed(42);
    build_scenario(&mut world, params);

    let start = Instant::now();
    initialize_simulation(&mut world);
    let mut schedule = simulation_schedule();
    let events = run_until_empty(&mut world, &mut schedule, 50_000_000);
    let duration = start.elapsed();

    let events_per_sec = events as f64 / duration.as_secs_f64();
    println!(
        "Long horizon test: {} events in {:.2}s ({:.0} events/sec)",
        events,
        duration.as_secs_f64(),
        events_per_sec
    );

    // Should maintain consistent performance
    assert!(
        events_per_sec > 500.0,
        "Should process >500 events/sec over a long horizon, got {:.0}",
        events_per_sec
    );
}
