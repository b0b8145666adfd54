//! Event-reacting systems, one per [crate::clock::EventKind].

pub mod charge_completed;
pub mod fleet_spawn;
pub mod flight_completed;

mod common;
