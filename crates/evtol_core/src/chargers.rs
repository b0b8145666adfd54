//! Charging resource pool: a fixed number of charger slots plus a FIFO queue
//! of aircraft waiting for one. Slot order is fixed, so assignment walks the
//! same sequence every round.

use std::collections::VecDeque;

use bevy_ecs::prelude::{Entity, Resource};

/// Pool state. Each slot holds at most one aircraft; the wait queue is
/// strictly first-queued, first-served with no priority by operator or
/// battery level.
#[derive(Debug, Resource)]
pub struct ChargerPool {
    slots: Vec<Option<Entity>>,
    waiting: VecDeque<Entity>,
}

impl ChargerPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            waiting: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding an aircraft.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn occupant(&self, slot: usize) -> Option<Entity> {
        self.slots.get(slot).copied().flatten()
    }

    /// Append an aircraft to the back of the wait queue.
    pub fn enqueue(&mut self, aircraft: Entity) {
        self.waiting.push_back(aircraft);
    }

    /// Pop the front of the wait queue.
    pub fn dequeue(&mut self) -> Option<Entity> {
        self.waiting.pop_front()
    }

    pub fn queue_len(&self) -> usize {
        self.waiting.len()
    }

    pub fn queue_is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Place an aircraft into a slot. The slot must be empty.
    pub fn occupy(&mut self, slot: usize, aircraft: Entity) {
        debug_assert!(self.slots[slot].is_none(), "charger slot already occupied");
        self.slots[slot] = Some(aircraft);
    }

    /// Empty a slot, returning its previous occupant.
    pub fn release(&mut self, slot: usize) -> Option<Entity> {
        self.slots.get_mut(slot).and_then(|entry| entry.take())
    }
}
