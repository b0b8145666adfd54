//! Telemetry / KPIs: per-operator accumulators plus append-only logs of
//! completed flights and charges. Written by lifecycle systems as a side
//! effect of transitions; read-only once the engine halts.

use std::collections::BTreeMap;

use bevy_ecs::prelude::{Entity, Resource};
use serde::Serialize;

use crate::ecs::Operator;

/// One completed flight, recorded when its completion event fires.
/// Timestamps are simulation hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightRecord {
    pub aircraft: Entity,
    pub operator: Operator,
    pub departed_at: f64,
    pub completed_at: f64,
    pub distance_miles: f64,
    pub fault: bool,
}

impl FlightRecord {
    pub fn duration_hours(&self) -> f64 {
        self.completed_at - self.departed_at
    }
}

/// One completed charge, recorded when the slot is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeRecord {
    pub aircraft: Entity,
    pub operator: Operator,
    pub slot: usize,
    pub started_at: f64,
    pub completed_at: f64,
}

impl ChargeRecord {
    pub fn duration_hours(&self) -> f64 {
        self.completed_at - self.started_at
    }
}

/// Accumulated counters for one operator. Created lazily on the first event
/// touching that operator; never reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OperatorStats {
    pub total_flight_hours: f64,
    pub total_distance_miles: f64,
    pub total_charge_hours: f64,
    pub passenger_miles: f64,
    pub total_flights: u32,
    pub total_charges: u32,
    pub total_faults: u32,
}

impl OperatorStats {
    pub fn record_flight(&mut self, duration_hours: f64, distance_miles: f64, passengers: u32) {
        self.total_flight_hours += duration_hours;
        self.total_distance_miles += distance_miles;
        self.passenger_miles += passengers as f64 * distance_miles;
        self.total_flights += 1;
    }

    pub fn record_charge(&mut self, duration_hours: f64) {
        self.total_charge_hours += duration_hours;
        self.total_charges += 1;
    }

    pub fn record_fault(&mut self) {
        self.total_faults += 1;
    }

    /// Mean flight duration; 0 when no flights completed.
    pub fn avg_flight_hours(&self) -> f64 {
        if self.total_flights == 0 {
            0.0
        } else {
            self.total_flight_hours / self.total_flights as f64
        }
    }

    /// Mean distance per flight; 0 when no flights completed.
    pub fn avg_distance_miles(&self) -> f64 {
        if self.total_flights == 0 {
            0.0
        } else {
            self.total_distance_miles / self.total_flights as f64
        }
    }

    /// Mean charge duration; 0 when no charges completed.
    pub fn avg_charge_hours(&self) -> f64 {
        if self.total_charges == 0 {
            0.0
        } else {
            self.total_charge_hours / self.total_charges as f64
        }
    }
}

/// Collects simulation telemetry. `stats` iterates in `Operator` order so
/// reports come out deterministic.
#[derive(Debug, Default, Resource)]
pub struct FleetTelemetry {
    pub stats: BTreeMap<Operator, OperatorStats>,
    pub flights: Vec<FlightRecord>,
    pub charges: Vec<ChargeRecord>,
}

impl FleetTelemetry {
    /// Accumulator for one operator, created on first touch.
    pub fn operator_mut(&mut self, operator: Operator) -> &mut OperatorStats {
        self.stats.entry(operator).or_default()
    }

    /// Stats for one operator; zeroed if that operator never produced an
    /// event.
    pub fn operator_stats(&self, operator: Operator) -> OperatorStats {
        self.stats.get(&operator).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_guard_division_by_zero() {
        let stats = OperatorStats::default();
        assert_eq!(stats.avg_flight_hours(), 0.0);
        assert_eq!(stats.avg_distance_miles(), 0.0);
        assert_eq!(stats.avg_charge_hours(), 0.0);
    }

    #[test]
    fn flight_accumulation_tracks_passenger_miles() {
        let mut stats = OperatorStats::default();
        stats.record_flight(0.5, 50.0, 4);
        stats.record_flight(0.5, 50.0, 4);

        assert_eq!(stats.total_flights, 2);
        assert_eq!(stats.total_flight_hours, 1.0);
        assert_eq!(stats.total_distance_miles, 100.0);
        assert_eq!(stats.passenger_miles, 400.0);
        assert_eq!(stats.avg_flight_hours(), 0.5);
        assert_eq!(stats.avg_distance_miles(), 50.0);
    }

    #[test]
    fn operator_entries_are_created_lazily() {
        let mut telemetry = FleetTelemetry::default();
        assert!(telemetry.stats.is_empty());

        telemetry.operator_mut(Operator::Charlie).record_charge(0.8);
        assert_eq!(telemetry.stats.len(), 1);
        assert_eq!(telemetry.operator_stats(Operator::Charlie).total_charges, 1);
        assert_eq!(telemetry.operator_stats(Operator::Alpha).total_charges, 0);
    }

    #[test]
    fn record_durations_derive_from_timestamps() {
        let flight = FlightRecord {
            aircraft: Entity::from_raw(1),
            operator: Operator::Alpha,
            departed_at: 0.0,
            completed_at: 1.6666,
            distance_miles: 200.0,
            fault: false,
        };
        assert!((flight.duration_hours() - 1.6666).abs() < 1e-9);

        let charge = ChargeRecord {
            aircraft: Entity::from_raw(1),
            operator: Operator::Alpha,
            slot: 0,
            started_at: 1.6666,
            completed_at: 2.2666,
        };
        assert!((charge.duration_hours() - 0.6).abs() < 1e-9);
    }
}
