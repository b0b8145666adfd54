use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::{Entity, Resource};

/// Kinds of deferred work the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    SimulationStarted,
    FlightCompleted,
    ChargeCompleted,
}

/// Payload attached to an event: the aircraft it concerns plus the context
/// its handler needs to complete the transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventSubject {
    Flight {
        aircraft: Entity,
        /// Simulation time the flight departed (hours).
        departed_at: f64,
        /// Full-battery flight duration (hours).
        duration_hours: f64,
    },
    Charge {
        aircraft: Entity,
        /// Charger slot index the aircraft occupies.
        slot: usize,
        /// Simulation time the charge began (hours).
        started_at: f64,
    },
}

/// One scheduled state transition. Timestamps are absolute simulation hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub timestamp: f64,
    pub kind: EventKind,
    pub subject: Option<EventSubject>,
}

/// The event most recently popped by the runner, visible to systems.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

/// Heap entry: reverse ordering turns `BinaryHeap` into a min-heap by
/// timestamp; the insertion sequence breaks ties FIFO so runs with the same
/// seed replay identically.
#[derive(Debug, Clone, Copy)]
struct Scheduled {
    event: Event,
    seq: u64,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .event
            .timestamp
            .total_cmp(&self.event.timestamp)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Time-ordered queue of pending transitions; the engine's sole driver of
/// progress. `now` only moves forward, to the timestamp of the last popped
/// event.
#[derive(Debug, Default, Resource)]
pub struct SimulationClock {
    now: f64,
    next_seq: u64,
    events: BinaryHeap<Scheduled>,
}

impl SimulationClock {
    /// Current simulation time in hours.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Schedule an event at an absolute simulation time.
    pub fn schedule_at(&mut self, timestamp: f64, kind: EventKind, subject: Option<EventSubject>) {
        debug_assert!(
            timestamp >= self.now,
            "event timestamp must be >= current time"
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push(Scheduled {
            event: Event {
                timestamp,
                kind,
                subject,
            },
            seq,
        });
    }

    /// Schedule an event `delay` hours from now.
    pub fn schedule_in(&mut self, delay: f64, kind: EventKind, subject: Option<EventSubject>) {
        self.schedule_at(self.now + delay, kind, subject);
    }

    /// Remove and return the earliest pending event, advancing `now` to its
    /// timestamp.
    pub fn pop_next(&mut self) -> Option<Event> {
        let scheduled = self.events.pop()?;
        self.now = scheduled.event.timestamp;
        Some(scheduled.event)
    }

    /// Timestamp of the earliest pending event, if any.
    pub fn next_event_time(&self) -> Option<f64> {
        self.events.peek().map(|scheduled| scheduled.event.timestamp)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
