//! Virtual-time scheduler for the match's timed phases.
//!
//! Matchmaking, play resolution and the opponent's think time are delays,
//! not threads. Each one is an entry in this scheduler tagged with the
//! [`Generation`] of the match that scheduled it. Time only moves when the
//! owner calls [`Scheduler::pop_due`] or [`Scheduler::advance_to`], so a
//! test can step through a match deterministically.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identity of one match lifetime.
///
/// Bumped whenever a match is queued or reset. A timer whose generation no
/// longer matches the engine's is stale and must be ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// State transitions that happen after a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Matchmaking finished; deal the opening hands.
    MatchFound,
    /// The player's roll animation finished; apply the hit.
    ResolvePlay,
    /// The opponent finished thinking; take its turn.
    OpponentTurn,
}

/// A timer that came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired {
    pub at: Duration,
    pub generation: Generation,
    pub event: TimerEvent,
}

#[derive(Clone, Debug)]
struct Entry {
    due: Duration,
    seq: u64,
    generation: Generation,
    event: TimerEvent,
}

/// Pending timers ordered by due time, then by scheduling order.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_seq: u64,
    pending: Vec<Entry>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `event` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, generation: Generation, event: TimerEvent) {
        let entry = Entry {
            due: self.now + delay,
            seq: self.next_seq,
            generation,
            event,
        };
        self.next_seq += 1;

        let pos = self
            .pending
            .partition_point(|e| (e.due, e.seq) <= (entry.due, entry.seq));
        self.pending.insert(pos, entry);
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|e| e.due)
    }

    /// Remove and return the earliest timer due at or before `until`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired> {
        if self.pending.first()?.due > until {
            return None;
        }
        let entry = self.pending.remove(0);
        self.now = self.now.max(entry.due);
        Some(Fired {
            at: entry.due,
            generation: entry.generation,
            event: entry.event,
        })
    }

    /// Move the clock forward to `at`. Never moves it backwards.
    pub fn advance_to(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }

    /// Drop every timer belonging to `generation`. Returns how many were
    /// dropped.
    pub fn cancel(&mut self, generation: Generation) -> usize {
        let before = self.pending.len();
        self.pending.retain(|e| e.generation != generation);
        before - self.pending.len()
    }

    /// Pending timers, earliest first.
    pub fn pending(&self) -> impl Iterator<Item = (Duration, TimerEvent)> + '_ {
        self.pending.iter().map(|e| (e.due, e.event))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
