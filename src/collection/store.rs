//! Append-only card collection.

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashMap;

use crate::cards::{CardDefinition, CardInstance};
use crate::core::InstanceId;

/// Every card a session has pulled.
///
/// Cards are kept in pull order. The collection never shrinks; decks refer
/// to its cards by id. Backed by `im::Vector`, so cloning it for a snapshot
/// is O(1).
#[derive(Clone, Debug, Default)]
pub struct Collection {
    cards: Vector<CardInstance>,
    index: FxHashMap<InstanceId, usize>,
}

impl Collection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card.
    ///
    /// Returns false (and keeps the collection unchanged) if a card with the
    /// same id is already present.
    pub fn add(&mut self, card: CardInstance) -> bool {
        if self.index.contains_key(&card.id) {
            return false;
        }
        self.index.insert(card.id, self.cards.len());
        self.cards.push_back(card);
        true
    }

    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&CardInstance> {
        self.index.get(&id).and_then(|&idx| self.cards.get(idx))
    }

    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in pull order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Cards newest first, the order a collection screen lists them.
    pub fn newest_first(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter().rev()
    }

    /// Copies owned per card definition, in order of first pull.
    #[must_use]
    pub fn counts(&self) -> Vec<(Arc<CardDefinition>, usize)> {
        let mut counts: Vec<(Arc<CardDefinition>, usize)> = Vec::new();
        let mut slots: FxHashMap<&str, usize> = FxHashMap::default();

        for card in &self.cards {
            match slots.get(card.key()) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(card.key(), counts.len());
                    counts.push((Arc::clone(&card.definition), 1));
                }
            }
        }

        counts
    }

    /// Copies owned of one card.
    #[must_use]
    pub fn count_of(&self, key: &str) -> usize {
        self.cards.iter().filter(|c| c.key() == key).count()
    }
}
