//! Core types: instance ids, sides, RNG and dice, configuration.
//!
//! These are the building blocks shared by the gacha, the collection and the
//! battle engine.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;

pub use entity::{InstanceId, InstanceIdAllocator};
pub use player::{Side, SideMap};
pub use rng::{Dice, GameRng, ScriptedDice, DIE_FACES};
pub use config::{ArenaConfig, GachaConfig, MatchConfig, RarityWeights};
