//! Duel rules.
//!
//! The battle engine calls into these functions for every roll and hit but
//! never hard-codes the arithmetic itself.

pub mod engine;

pub use engine::{apply_damage, damage, first_turn, winner};
