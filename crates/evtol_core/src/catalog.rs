//! Reference vehicle-type catalog: the fixed set of aircraft models the
//! scenario draws from. Supplied once at startup, immutable thereafter.

use crate::ecs::{Operator, VehicleType};

/// The five-entry reference table used by the default scenario.
pub fn reference_catalog() -> Vec<VehicleType> {
    vec![
        VehicleType {
            operator: Operator::Alpha,
            cruise_speed_mph: 120.0,
            battery_capacity_kwh: 320.0,
            time_to_charge_hours: 0.6,
            energy_per_mile_kwh: 1.6,
            passenger_count: 4,
            fault_prob_per_hour: 0.25,
        },
        VehicleType {
            operator: Operator::Bravo,
            cruise_speed_mph: 100.0,
            battery_capacity_kwh: 100.0,
            time_to_charge_hours: 0.2,
            energy_per_mile_kwh: 1.5,
            passenger_count: 5,
            fault_prob_per_hour: 0.10,
        },
        VehicleType {
            operator: Operator::Charlie,
            cruise_speed_mph: 160.0,
            battery_capacity_kwh: 220.0,
            time_to_charge_hours: 0.8,
            energy_per_mile_kwh: 2.2,
            passenger_count: 3,
            fault_prob_per_hour: 0.05,
        },
        VehicleType {
            operator: Operator::Delta,
            cruise_speed_mph: 90.0,
            battery_capacity_kwh: 120.0,
            time_to_charge_hours: 0.62,
            energy_per_mile_kwh: 0.8,
            passenger_count: 2,
            fault_prob_per_hour: 0.22,
        },
        VehicleType {
            operator: Operator::Echo,
            cruise_speed_mph: 30.0,
            battery_capacity_kwh: 150.0,
            time_to_charge_hours: 0.3,
            energy_per_mile_kwh: 5.8,
            passenger_count: 2,
            fault_prob_per_hour: 0.61,
        },
    ]
}
