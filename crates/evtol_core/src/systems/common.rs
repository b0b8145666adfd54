//! Helpers shared by the lifecycle systems: flight scheduling against the
//! horizon and charger slot assignment.

use bevy_ecs::prelude::{Entity, Query};

use crate::chargers::ChargerPool;
use crate::clock::{EventKind, EventSubject, SimulationClock};
use crate::ecs::{Aircraft, AircraftState, VehicleType};

/// Schedules the completion of a full-battery flight departing at
/// `start_time`. Returns `false` without scheduling when the flight would
/// land past the horizon; the caller decides what happens to the aircraft.
pub fn schedule_flight(
    clock: &mut SimulationClock,
    horizon_hours: f64,
    aircraft: Entity,
    vehicle_type: &VehicleType,
    start_time: f64,
) -> bool {
    let duration_hours = vehicle_type.flight_duration_hours();
    if start_time + duration_hours > horizon_hours {
        return false;
    }

    clock.schedule_at(
        start_time + duration_hours,
        EventKind::FlightCompleted,
        Some(EventSubject::Flight {
            aircraft,
            departed_at: start_time,
            duration_hours,
        }),
    );
    true
}

/// Moves waiting aircraft onto free charger slots, one candidate per slot.
///
/// A candidate whose charge would finish past the horizon is retired instead
/// of re-queued, and its slot stays empty for this round; the next free slot
/// still gets the next waiting aircraft.
pub fn assign_chargers(
    clock: &mut SimulationClock,
    pool: &mut ChargerPool,
    horizon_hours: f64,
    now: f64,
    aircraft: &mut Query<&mut Aircraft>,
) {
    for slot in 0..pool.capacity() {
        if pool.occupant(slot).is_some() {
            continue;
        }
        let Some(candidate) = pool.dequeue() else {
            break;
        };
        let Ok(mut craft) = aircraft.get_mut(candidate) else {
            continue;
        };

        let charge_end = now + craft.vehicle_type.time_to_charge_hours;
        if charge_end > horizon_hours {
            craft.state = AircraftState::Retired;
            continue;
        }

        craft.state = AircraftState::Charging;
        pool.occupy(slot, candidate);
        clock.schedule_at(
            charge_end,
            EventKind::ChargeCompleted,
            Some(EventSubject::Charge {
                aircraft: candidate,
                slot,
                started_at: now,
            }),
        );
    }
}
