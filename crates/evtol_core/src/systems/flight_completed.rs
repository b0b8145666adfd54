use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::chargers::ChargerPool;
use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Aircraft, AircraftState};
use crate::faults::FaultModel;
use crate::scenario::SimulationHorizon;
use crate::telemetry::{FleetTelemetry, FlightRecord};

use super::common::assign_chargers;

/// Handles a landing: credits the flight to the operator, samples for a
/// fault, then sends the aircraft into the charging queue. Freed or free
/// charger slots are filled immediately at the same timestamp.
pub fn flight_completed_system(
    mut clock: ResMut<SimulationClock>,
    mut pool: ResMut<ChargerPool>,
    mut telemetry: ResMut<FleetTelemetry>,
    mut faults: ResMut<FaultModel>,
    horizon: Res<SimulationHorizon>,
    event: Res<CurrentEvent>,
    mut fleet: Query<&mut Aircraft>,
) {
    if event.0.kind != EventKind::FlightCompleted {
        return;
    }
    let Some(EventSubject::Flight {
        aircraft,
        departed_at,
        duration_hours,
    }) = event.0.subject
    else {
        return;
    };
    // Mirrors the scheduling-time check; a landing past the horizon is
    // dropped without touching any state.
    if departed_at + duration_hours > horizon.0 {
        return;
    }

    let vehicle_type = {
        let Ok(mut craft) = fleet.get_mut(aircraft) else {
            return;
        };
        craft.state = AircraftState::WaitingForCharger;
        craft.vehicle_type
    };

    let now = event.0.timestamp;
    let distance_miles = vehicle_type.distance_per_flight_miles();
    let fault = faults.sample_fault(vehicle_type.fault_prob_per_hour, duration_hours);

    let stats = telemetry.operator_mut(vehicle_type.operator);
    stats.record_flight(duration_hours, distance_miles, vehicle_type.passenger_count);
    if fault {
        stats.record_fault();
    }
    telemetry.flights.push(FlightRecord {
        aircraft,
        operator: vehicle_type.operator,
        departed_at,
        completed_at: now,
        distance_miles,
        fault,
    });

    pool.enqueue(aircraft);
    assign_chargers(&mut clock, &mut pool, horizon.0, now, &mut fleet);
}
