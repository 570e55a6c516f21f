//! Combat log, newest entry first.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Who an entry is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogKind {
    System,
    Player,
    Opponent,
}

impl From<Side> for LogKind {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => LogKind::Player,
            Side::Opponent => LogKind::Opponent,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub kind: LogKind,
    pub message: String,
}

impl LogEntry {
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Append-only log of what happened in a match.
///
/// Backed by a persistent vector so snapshots share structure with the live
/// log instead of copying it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLog {
    entries: Vector<LogEntry>,
}

impl CombatLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry at the head of the log.
    pub fn push(&mut self, kind: LogKind, message: impl Into<String>) {
        self.entries.push_front(LogEntry::new(kind, message));
    }

    /// Most recent entry.
    #[must_use]
    pub fn head(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Cheap clone of the underlying entries.
    #[must_use]
    pub fn entries(&self) -> Vector<LogEntry> {
        self.entries.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
