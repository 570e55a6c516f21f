//! Hooks the battle engine fires at lifecycle boundaries.

use crate::collection::DeckLock;

/// Observer for match lifecycle events.
pub trait MatchListener: Send {
    /// The match was reset and the engine is idle again.
    fn on_match_reset(&mut self);
}

impl MatchListener for DeckLock {
    fn on_match_reset(&mut self) {
        self.unlock();
    }
}
