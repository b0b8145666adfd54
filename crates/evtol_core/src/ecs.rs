use bevy_ecs::prelude::Component;
use serde::Serialize;

/// Fleet owner an aircraft and its aggregated stats belong to. Ordered so
/// per-operator maps iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Operator {
    Alpha,
    Bravo,
    Charlie,
    Delta,
    Echo,
}

impl Operator {
    pub fn name(self) -> &'static str {
        match self {
            Operator::Alpha => "Alpha",
            Operator::Bravo => "Bravo",
            Operator::Charlie => "Charlie",
            Operator::Delta => "Delta",
            Operator::Echo => "Echo",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable performance envelope of one aircraft model. Every aircraft is
/// bound to exactly one of these at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VehicleType {
    pub operator: Operator,
    /// Cruise speed in mph.
    pub cruise_speed_mph: f64,
    /// Battery capacity in kWh.
    pub battery_capacity_kwh: f64,
    /// Hours to recharge a drained battery.
    pub time_to_charge_hours: f64,
    /// Energy drawn per mile flown, in kWh.
    pub energy_per_mile_kwh: f64,
    pub passenger_count: u32,
    /// Fault probability mass per hour of flight. The fault check uses the
    /// linear approximation `P ≈ rate × duration`, valid while that product
    /// stays below 1.
    pub fault_prob_per_hour: f64,
}

impl VehicleType {
    /// Hours of flight a full battery supports.
    pub fn flight_duration_hours(&self) -> f64 {
        self.battery_capacity_kwh / (self.cruise_speed_mph * self.energy_per_mile_kwh)
    }

    /// Miles covered on a full battery.
    pub fn distance_per_flight_miles(&self) -> f64 {
        self.cruise_speed_mph * self.flight_duration_hours()
    }
}

/// Where an aircraft sits in the flight/charge cycle. An aircraft is in
/// exactly one of these at any simulated instant; `Retired` means its next
/// transition would overrun the horizon and it is no longer simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftState {
    Flying,
    WaitingForCharger,
    Charging,
    Retired,
}

/// One simulated aircraft: its type binding plus lifecycle state. Flight
/// duration and distance are derived from the type, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Aircraft {
    pub vehicle_type: VehicleType,
    pub state: AircraftState,
}

impl Aircraft {
    pub fn new(vehicle_type: VehicleType) -> Self {
        Self {
            vehicle_type,
            state: AircraftState::Flying,
        }
    }

    pub fn operator(&self) -> Operator {
        self.vehicle_type.operator
    }
}
