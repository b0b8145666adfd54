use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::chargers::ChargerPool;
use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Aircraft, AircraftState};
use crate::scenario::SimulationHorizon;
use crate::telemetry::{ChargeRecord, FleetTelemetry};

use super::common::{assign_chargers, schedule_flight};

/// Handles a full battery: releases the slot, credits the charge, and sends
/// the aircraft back out on its next flight if one still fits the horizon.
/// All timing is anchored on the firing event's own timestamp, never on
/// whatever happens to sit at the head of the queue.
pub fn charge_completed_system(
    mut clock: ResMut<SimulationClock>,
    mut pool: ResMut<ChargerPool>,
    mut telemetry: ResMut<FleetTelemetry>,
    horizon: Res<SimulationHorizon>,
    event: Res<CurrentEvent>,
    mut fleet: Query<&mut Aircraft>,
) {
    if event.0.kind != EventKind::ChargeCompleted {
        return;
    }
    let Some(EventSubject::Charge {
        aircraft,
        slot,
        started_at,
    }) = event.0.subject
    else {
        return;
    };

    let now = event.0.timestamp;
    pool.release(slot);

    {
        let Ok(mut craft) = fleet.get_mut(aircraft) else {
            return;
        };
        let vehicle_type = craft.vehicle_type;

        telemetry
            .operator_mut(vehicle_type.operator)
            .record_charge(vehicle_type.time_to_charge_hours);
        telemetry.charges.push(ChargeRecord {
            aircraft,
            operator: vehicle_type.operator,
            slot,
            started_at,
            completed_at: now,
        });

        craft.state = if schedule_flight(&mut clock, horizon.0, aircraft, &vehicle_type, now) {
            AircraftState::Flying
        } else {
            AircraftState::Retired
        };
    }

    assign_chargers(&mut clock, &mut pool, horizon.0, now, &mut fleet);
}
