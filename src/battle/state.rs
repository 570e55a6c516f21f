//! Match state and its serializable snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::log::{CombatLog, LogEntry};
use crate::cards::CardInstance;
use crate::core::{InstanceId, Side, SideMap};
use crate::zones::{SideZones, Zone};

/// Whose turn it is once a match has started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Nobody has rolled for turn order yet.
    #[default]
    Undecided,
    Player,
    Opponent,
}

impl Turn {
    /// The side to act, if decided.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Turn::Undecided => None,
            Turn::Player => Some(Side::Player),
            Turn::Opponent => Some(Side::Opponent),
        }
    }
}

impl From<Side> for Turn {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Turn::Player,
            Side::Opponent => Turn::Opponent,
        }
    }
}

/// Where the battle engine is in a match's lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Idle,
    /// Waiting for matchmaking to finish.
    Queuing,
    Matched(Turn),
    Finished(Side),
}

impl MatchPhase {
    /// Queued, matched or finished but not yet reset.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, MatchPhase::Idle)
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, MatchPhase::Finished(_))
    }
}

/// A player play waiting on its resolution timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPlay {
    pub card: InstanceId,
    pub roll: u8,
}

/// Mutable state of one match.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    pub hp: SideMap<u32>,
    pub zones: SideMap<SideZones>,
    pub turn: Turn,
    pub last_roll: Option<u8>,
    pub winner: Option<Side>,
    pub pending_play: Option<PendingPlay>,
    pub log: CombatLog,
}

impl Match {
    #[must_use]
    pub fn new(starting_hp: u32) -> Self {
        Self {
            hp: SideMap::with_value(starting_hp),
            zones: SideMap::default(),
            turn: Turn::Undecided,
            last_roll: None,
            winner: None,
            pending_play: None,
            log: CombatLog::new(),
        }
    }
}

/// Read-only view of a match for rendering or persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub phase: MatchPhase,
    pub hp: SideMap<u32>,
    pub hands: SideMap<Vec<CardInstance>>,
    pub draw_pile_sizes: SideMap<usize>,
    pub discard_sizes: SideMap<usize>,
    pub last_roll: Option<u8>,
    pub resolving: bool,
    pub log: Vector<LogEntry>,
}

impl MatchSnapshot {
    pub(crate) fn capture(phase: MatchPhase, state: &Match) -> Self {
        Self {
            phase,
            hp: state.hp.clone(),
            hands: state.zones.map(|_, z| z.hand().to_vec()),
            draw_pile_sizes: state.zones.map(|_, z| z.size(Zone::DrawPile)),
            discard_sizes: state.zones.map(|_, z| z.size(Zone::Discard)),
            last_roll: state.last_roll,
            resolving: state.pending_play.is_some(),
            log: state.log.entries(),
        }
    }

    /// The turn, if the match is in progress.
    #[must_use]
    pub fn turn(&self) -> Option<Turn> {
        match self.phase {
            MatchPhase::Matched(turn) => Some(turn),
            _ => None,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Finished(side) => Some(side),
            _ => None,
        }
    }
}
