//! Dice card battle against a scripted opponent.
//!
//! ## Key Types
//!
//! - `BattleEngine`: The match state machine
//! - `MatchPhase` / `Turn`: Where a match is and whose move it is
//! - `MatchSnapshot`: Serializable view of a match
//! - `CombatLog`: Newest-first record of what happened
//! - `Scheduler`: Virtual-time timers for the match's delays
//! - `OpponentPolicy`: How the opponent picks its card
//! - `MatchListener`: Lifecycle hooks (deck unlock on reset)

pub mod ai;
pub mod engine;
pub mod listener;
pub mod log;
pub mod scheduler;
pub mod state;

pub use ai::{FrontOfHand, OpponentPolicy, UniformCard};
pub use engine::BattleEngine;
pub use listener::MatchListener;
pub use log::{CombatLog, LogEntry, LogKind};
pub use scheduler::{Generation, Scheduler, TimerEvent};
pub use state::{MatchPhase, MatchSnapshot, Turn};
