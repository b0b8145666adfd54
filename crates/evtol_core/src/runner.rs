//! Simulation runner: advances the clock and routes events into the ECS.
//!
//! Clock progression and event routing happen here, outside systems. Each step
//! pops the next event from [SimulationClock], inserts it as [CurrentEvent],
//! then runs the schedule.

use bevy_ecs::prelude::Res;
use bevy_ecs::prelude::{Schedule, World};
use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

use crate::clock::{CurrentEvent, Event, EventKind, SimulationClock};
use crate::profiling::EventMetrics;
use crate::scenario::SimulationHorizon;
use crate::systems::{
    charge_completed::charge_completed_system, fleet_spawn::simulation_started_system,
    flight_completed::flight_completed_system,
};

// Condition functions for each event kind
fn is_simulation_started(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::SimulationStarted)
        .unwrap_or(false)
}

fn is_flight_completed(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::FlightCompleted)
        .unwrap_or(false)
}

fn is_charge_completed(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::ChargeCompleted)
        .unwrap_or(false)
}

/// Runs one simulation step: pops the next event, inserts it as [CurrentEvent], then runs the schedule.
/// Returns `true` if an event was processed, `false` if the clock was empty or if the next event
/// lies strictly past [SimulationHorizon] (when that resource is present). An event landing at
/// exactly the horizon still runs.
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> bool {
    let stop_after = world.get_resource::<SimulationHorizon>().map(|h| h.0);
    let next_ts = world
        .get_resource::<SimulationClock>()
        .and_then(|c| c.next_event_time());
    if let (Some(horizon), Some(ts)) = (stop_after, next_ts) {
        if ts > horizon {
            return false;
        }
    }

    let event = match world.resource_mut::<SimulationClock>().pop_next() {
        Some(e) => e,
        None => return false,
    };
    world.insert_resource(CurrentEvent(event));

    // Track event metrics if EventMetrics resource exists
    if let Some(mut metrics) = world.get_resource_mut::<EventMetrics>() {
        metrics.record_event(event.kind);
    }

    schedule.run(world);
    true
}

/// Runs one simulation step and invokes `hook` after the schedule completes.
pub fn run_next_event_with_hook<F>(world: &mut World, schedule: &mut Schedule, mut hook: F) -> bool
where
    F: FnMut(&World, &Event),
{
    let stop_after = world.get_resource::<SimulationHorizon>().map(|h| h.0);
    let next_ts = world
        .get_resource::<SimulationClock>()
        .and_then(|c| c.next_event_time());
    if let (Some(horizon), Some(ts)) = (stop_after, next_ts) {
        if ts > horizon {
            return false;
        }
    }

    let event = match world.resource_mut::<SimulationClock>().pop_next() {
        Some(e) => e,
        None => return false,
    };
    world.insert_resource(CurrentEvent(event));

    // Track event metrics if EventMetrics resource exists
    if let Some(mut metrics) = world.get_resource_mut::<EventMetrics>() {
        metrics.record_event(event.kind);
    }

    schedule.run(world);
    hook(world, &event);
    true
}

/// Runs simulation steps until the event queue is empty or `max_steps` is reached.
/// Returns the number of steps executed.
pub fn run_until_empty(world: &mut World, schedule: &mut Schedule, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && run_next_event(world, schedule) {
        steps += 1;
    }
    steps
}

/// Runs simulation steps until empty and invokes `hook` after each step.
pub fn run_until_empty_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    max_steps: usize,
    mut hook: F,
) -> usize
where
    F: FnMut(&World, &Event),
{
    let mut steps = 0;
    while steps < max_steps && run_next_event_with_hook(world, schedule, &mut hook) {
        steps += 1;
    }
    steps
}

/// Builds the default simulation schedule: all event-reacting systems plus [apply_deferred]
/// so that aircraft spawned at startup are applied before their first landing fires.
///
/// Systems are conditionally executed based on event type to reduce overhead.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    schedule.add_systems((
        // SimulationStarted
        simulation_started_system.run_if(is_simulation_started),
        // FlightCompleted
        flight_completed_system.run_if(is_flight_completed),
        // ChargeCompleted
        charge_completed_system.run_if(is_charge_completed),
        // Always run apply_deferred to ensure spawned entities are available
        apply_deferred,
    ));

    schedule
}

/// Initializes the simulation by scheduling the SimulationStarted event at time 0.
/// Call this after building the scenario and before running events.
pub fn initialize_simulation(world: &mut World) {
    let mut clock = world.resource_mut::<SimulationClock>();
    clock.schedule_at(0.0, EventKind::SimulationStarted, None);
}
