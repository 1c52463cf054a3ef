//! Agent activation events and their deterministic ordering.
//!
//! # Ordering
//!
//! Events are ordered by the full key `(phase, virtual_time, insertion
//! sequence)`: all Outbound activations drain before Inbound ones, ties on
//! phase break by virtual time, and remaining ties pop in insertion (FIFO)
//! order.  The explicit sequence number closes the reproducibility gap a
//! bare `(phase, time)` key would leave — two events queued for the same
//! instant would otherwise pop in whatever order the heap happens to hold
//! them.
//!
//! Outbound-before-Inbound is load-bearing: agents leave the Outbound pool
//! only by flipping at the destination, so the colony finishes pushing its
//! outward trails before replaying them backward.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fly_core::{AntId, Stamp};

// ── Phase ────────────────────────────────────────────────────────────────────

/// Direction of an agent's walk.  Declaration order defines priority:
/// `Outbound < Inbound`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Phase {
    /// Travelling origin → destination, forward in time.
    Outbound,
    /// Travelling destination → origin, backward in time.
    Inbound,
}

// ── Event ────────────────────────────────────────────────────────────────────

/// One pending agent activation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub phase: Phase,
    pub at: Stamp,
    pub ant: AntId,
}

// ── EventQueue ───────────────────────────────────────────────────────────────

/// Min-heap of pending activations under the `(phase, time, seq)` key.
///
/// Every live agent has exactly one pending event at any moment: processing
/// an event enqueues exactly one successor (for the advanced agent or its
/// replacement), so stale activations cannot exist and slots can be reused
/// without generation counters.
#[derive(Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<(Phase, Stamp, u64, AntId)>>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an activation for `ant` at virtual time `at`.
    pub fn push(&mut self, phase: Phase, at: Stamp, ant: AntId) {
        self.heap.push(Reverse((phase, at, self.next_seq, ant)));
        self.next_seq += 1;
    }

    /// Remove and return the next activation under the ordering key.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap
            .pop()
            .map(|Reverse((phase, at, _seq, ant))| Event { phase, at, ant })
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
