//! Test helpers for common test setup and utilities.
//!
//! This module provides canned vehicle types so tests agree on round numbers.

use crate::ecs::{Operator, VehicleType};

/// A vehicle with round numbers: 0.5 h flights over 50 miles, 0.25 h charges,
/// no faults.
pub fn quick_turnaround_type() -> VehicleType {
    VehicleType {
        operator: Operator::Bravo,
        cruise_speed_mph: 100.0,
        battery_capacity_kwh: 100.0,
        time_to_charge_hours: 0.25,
        energy_per_mile_kwh: 2.0,
        passenger_count: 4,
        fault_prob_per_hour: 0.0,
    }
}

/// A vehicle whose 10 h charge overruns any short horizon; flies the same
/// 0.5 h legs as [quick_turnaround_type].
pub fn long_charge_type() -> VehicleType {
    VehicleType {
        operator: Operator::Charlie,
        cruise_speed_mph: 100.0,
        battery_capacity_kwh: 50.0,
        time_to_charge_hours: 10.0,
        energy_per_mile_kwh: 1.0,
        passenger_count: 2,
        fault_prob_per_hour: 0.0,
    }
}
