//! Deck selection.
//!
//! A deck is an ordered list of distinct collection ids. It only stores ids;
//! [`Deck::resolve`] turns them back into cards when a match starts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::store::Collection;
use crate::cards::CardInstance;
use crate::core::InstanceId;
use crate::error::DeckError;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 10;

/// Up to [`DECK_SIZE`] distinct card ids selected from a collection.
///
/// ## Example
///
/// ```
/// use gacha_duel::cards::CardCatalog;
/// use gacha_duel::collection::{Collection, Deck};
/// use gacha_duel::core::{GachaConfig, GameRng};
/// use gacha_duel::gacha::GachaEngine;
///
/// let mut gacha = GachaEngine::new(&CardCatalog::standard(), &GachaConfig::default()).unwrap();
/// let mut rng = GameRng::new(1);
/// let mut collection = Collection::new();
/// let card = gacha.pull(&mut rng);
/// let id = card.id;
/// collection.add(card);
///
/// let mut deck = Deck::new();
/// deck.add(id, &collection).unwrap();
/// assert!(deck.add(id, &collection).is_err()); // no duplicates
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    ids: SmallVec<[InstanceId; DECK_SIZE]>,
    capacity: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::with_capacity(DECK_SIZE)
    }
}

impl Deck {
    /// An empty ten-card deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty deck holding at most `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: SmallVec::new(),
            capacity,
        }
    }

    /// Add a specific card.
    pub fn add(&mut self, id: InstanceId, collection: &Collection) -> Result<(), DeckError> {
        if self.is_full() {
            return Err(DeckError::DeckFull(self.ids.len()));
        }
        if self.contains(id) {
            return Err(DeckError::DuplicateCard(id));
        }
        if !collection.contains(id) {
            return Err(DeckError::NotInCollection(id));
        }
        self.ids.push(id);
        Ok(())
    }

    /// Add the oldest copy of `key` that is not already in the deck.
    ///
    /// Returns the id that was added.
    pub fn add_by_key(&mut self, key: &str, collection: &Collection) -> Result<InstanceId, DeckError> {
        let id = collection
            .iter()
            .find(|c| c.key() == key && !self.contains(c.id))
            .map(|c| c.id)
            .ok_or_else(|| DeckError::NoAvailableCopy(key.to_string()))?;

        self.add(id, collection)?;
        Ok(id)
    }

    /// Remove a card. Returns false if it was not in the deck.
    pub fn remove(&mut self, id: InstanceId) -> bool {
        match self.ids.iter().position(|&d| d == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn ids(&self) -> &[InstanceId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    /// Look the deck's cards up in `collection`, in deck order.
    ///
    /// Ids missing from the collection are skipped.
    #[must_use]
    pub fn resolve(&self, collection: &Collection) -> Vec<CardInstance> {
        self.ids
            .iter()
            .filter_map(|&id| collection.get(id).cloned())
            .collect()
    }
}
