//! Summary extraction from completed simulation worlds.
//!
//! This module condenses the telemetry a finished run leaves behind into
//! per-operator rows, combined with fleet composition read straight from
//! the ECS world.

use bevy_ecs::prelude::World;
use evtol_core::chargers::ChargerPool;
use evtol_core::ecs::{Aircraft, AircraftState, Operator};
use evtol_core::scenario::SimulationHorizon;
use evtol_core::telemetry::FleetTelemetry;
use std::collections::BTreeMap;

/// Aggregated per-operator metrics from a single simulation run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OperatorSummary {
    /// Operator the row aggregates over.
    pub operator: Operator,
    /// Number of aircraft of this operator in the fleet.
    pub vehicle_count: usize,
    /// Aircraft that ended the run retired.
    pub vehicles_retired: usize,
    /// Number of completed flights.
    pub total_flights: u32,
    /// Average flight duration in hours.
    pub avg_flight_hours: f64,
    /// Average distance per flight in miles.
    pub avg_distance_miles: f64,
    /// Number of completed charge sessions.
    pub total_charges: u32,
    /// Average charge session duration in hours.
    pub avg_charge_hours: f64,
    /// Total faults across all flights.
    pub total_faults: u32,
    /// Total passenger miles across all flights.
    pub passenger_miles: f64,
}

/// Fleet-wide summary of a completed run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FleetSummary {
    /// Number of aircraft spawned.
    pub fleet_size: usize,
    /// Number of charger slots available.
    pub charger_count: usize,
    /// Simulated horizon in hours.
    pub horizon_hours: f64,
    /// Per-operator rows, ordered by operator.
    pub operators: Vec<OperatorSummary>,
}

/// Extract a fleet summary from a completed simulation world.
///
/// Reads per-operator flight and charge statistics from the telemetry
/// resource, then queries the world for fleet composition. Operators with
/// aircraft but no completed flights still get a row with zeroed stats.
pub fn extract_summary(world: &mut World) -> FleetSummary {
    // Extract telemetry and scenario resources first (immutable borrows)
    let stats_by_operator = {
        let telemetry = world
            .get_resource::<FleetTelemetry>()
            .expect("FleetTelemetry resource not found");
        telemetry.stats.clone()
    };
    let horizon_hours = world
        .get_resource::<SimulationHorizon>()
        .expect("SimulationHorizon resource not found")
        .0;
    let charger_count = world
        .get_resource::<ChargerPool>()
        .expect("ChargerPool resource not found")
        .capacity();

    // Now we can do mutable queries (resource borrows are dropped)
    let mut vehicle_counts: BTreeMap<Operator, (usize, usize)> = BTreeMap::new();
    let mut fleet_size = 0;
    for aircraft in world.query::<&Aircraft>().iter(world) {
        let entry = vehicle_counts.entry(aircraft.operator()).or_default();
        entry.0 += 1;
        if aircraft.state == AircraftState::Retired {
            entry.1 += 1;
        }
        fleet_size += 1;
    }

    let operators = vehicle_counts
        .iter()
        .map(|(&operator, &(vehicle_count, vehicles_retired))| {
            let stats = stats_by_operator
                .get(&operator)
                .copied()
                .unwrap_or_default();
            OperatorSummary {
                operator,
                vehicle_count,
                vehicles_retired,
                total_flights: stats.total_flights,
                avg_flight_hours: stats.avg_flight_hours(),
                avg_distance_miles: stats.avg_distance_miles(),
                total_charges: stats.total_charges,
                avg_charge_hours: stats.avg_charge_hours(),
                total_faults: stats.total_faults,
                passenger_miles: stats.passenger_miles,
            }
        })
        .collect();

    FleetSummary {
        fleet_size,
        charger_count,
        horizon_hours,
        operators,
    }
}
