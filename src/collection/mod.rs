//! Pre-match card ownership: the collection, the deck, and the session that
//! owns them.
//!
//! ## Key Types
//!
//! - `Collection`: Append-only multiset of pulled cards
//! - `Deck`: Up to 10 distinct collection ids, in insertion order
//! - `Session`: Signed-in user plus their collection and deck
//! - `DeckLock`: Shared flag that freezes editing while a match runs

pub mod deck;
pub mod session;
mod store;

pub use deck::{Deck, DECK_SIZE};
pub use session::{DeckLock, Session};
pub use store::Collection;
