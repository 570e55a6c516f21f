//! # gacha-duel
//!
//! A gacha card pull, a ten-card deck, and a turn-based dice card battle
//! against a scripted opponent.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every random decision goes through a seeded
//!    `GameRng` or an injected `Dice`, so a seed replays a whole session.
//!
//! 2. **Virtual Time**: The battle's delays are timers on a scheduler the
//!    caller advances. Nothing sleeps and nothing spawns threads.
//!
//! 3. **Typed Rejections**: Illegal commands return an error and leave state
//!    untouched.
//!
//! ## Architecture
//!
//! - **Gacha → Collection → Deck → Battle**: Pulls mint card instances into
//!   the session's collection; the deck references collection ids; queuing
//!   hands a resolved copy of the deck to the battle engine.
//!
//! - **Shared Definitions**: Card definitions live behind `Arc`, so every
//!   instance of a card points at the same static data.
//!
//! ## Modules
//!
//! - `core`: Instance ids, sides, RNG and dice, configuration
//! - `cards`: Card definitions, instances, and the catalog
//! - `gacha`: Weighted pulls
//! - `collection`: Collection, deck, and session
//! - `zones`: Draw pile, hand, and discard per side
//! - `rules`: Turn order, damage, and the win check
//! - `battle`: The match state machine
//! - `arena`: Everything above behind one facade
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod gacha;
pub mod collection;
pub mod zones;
pub mod rules;
pub mod battle;
pub mod arena;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    InstanceId, InstanceIdAllocator,
    Side, SideMap,
    Dice, GameRng, ScriptedDice,
    ArenaConfig, GachaConfig, MatchConfig, RarityWeights,
};

pub use crate::cards::{CardCatalog, CardDefinition, CardInstance, Rarity};

pub use crate::gacha::GachaEngine;

pub use crate::collection::{Collection, Deck, DeckLock, Session, DECK_SIZE};

pub use crate::zones::{SideZones, Zone};

pub use crate::battle::{
    BattleEngine, MatchPhase, MatchSnapshot, Turn,
    CombatLog, LogEntry, LogKind,
    MatchListener, OpponentPolicy, FrontOfHand, UniformCard,
};

pub use crate::arena::Arena;

pub use crate::error::{BattleError, CatalogError, DeckError, GachaError, SessionError};
