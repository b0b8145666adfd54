//! Run the default 20-aircraft / 3-charger scenario and print per-operator
//! totals.
//!
//! Run with: cargo run -p evtol_core --example fleet_run

use bevy_ecs::prelude::World;
use evtol_core::profiling::EventMetrics;
use evtol_core::runner::{initialize_simulation, run_until_empty, simulation_schedule};
use evtol_core::scenario::{build_scenario, ScenarioParams};

fn main() {
    const FLEET_SIZE: usize = 20;
    const CHARGER_COUNT: usize = 3;

    let mut world = World::new();
    build_scenario(
        &mut world,
        ScenarioParams::default()
            .with_fleet_size(FLEET_SIZE)
            .with_charger_count(CHARGER_COUNT)
            .with_seed(123),
    );
    world.insert_resource(EventMetrics::default());

    initialize_simulation(&mut world);
    let mut schedule = simulation_schedule();
    let steps = run_until_empty(&mut world, &mut schedule, 1_000_000);

    let clock = world.resource::<evtol_core::clock::SimulationClock>();
    println!(
        "--- Fleet run ({} aircraft, {} chargers, seed 123) ---",
        FLEET_SIZE, CHARGER_COUNT
    );
    println!("Steps executed: {}", steps);
    println!("Final event time: {:.3} h", clock.now());

    let telemetry = world.resource::<evtol_core::telemetry::FleetTelemetry>();
    println!("\nPer-operator totals:");
    for (operator, stats) in &telemetry.stats {
        println!(
            "  {:8} flights={:3}  avg_flight={:.3} h  avg_distance={:.1} mi  charges={:3}  avg_charge={:.3} h  faults={}  passenger_miles={:.1}",
            operator.name(),
            stats.total_flights,
            stats.avg_flight_hours(),
            stats.avg_distance_miles(),
            stats.total_charges,
            stats.avg_charge_hours(),
            stats.total_faults,
            stats.passenger_miles,
        );
    }

    if let Some(metrics) = world.get_resource::<EventMetrics>() {
        metrics.print_summary();
    }
}
