//! Zone system for card locations during a match.
//!
//! ## Key Types
//!
//! - `Zone`: Draw pile, hand, or discard
//! - `SideZones`: One side's three zones and the moves between them

pub mod manager;

pub use manager::{SideZones, Zone};
