//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores the fixed set of cards the gacha can produce.
//! Definitions keep their registration order, which makes the gacha's
//! weight table (and therefore seeded pulls) reproducible.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, Rarity};
use crate::error::CatalogError;

/// Ordered catalog of card definitions, keyed by card name.
///
/// ## Example
///
/// ```
/// use gacha_duel::cards::{CardCatalog, CardDefinition, Rarity};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new("Stone Golem", Rarity::N, 2, 1)).unwrap();
///
/// let found = catalog.get("Stone Golem").unwrap();
/// assert_eq!(found.power, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Arc<CardDefinition>>,
    by_key: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The eight-card launch catalog.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for def in [
            CardDefinition::new("Aegis Knight", Rarity::R, 3, 1),
            CardDefinition::new("Pyre Mage", Rarity::SR, 5, 2),
            CardDefinition::new("Shadow Rogue", Rarity::R, 4, 1),
            CardDefinition::new("Stone Golem", Rarity::N, 2, 1),
            CardDefinition::new("Storm Drake", Rarity::UR, 7, 3),
            CardDefinition::new("Temple Healer", Rarity::N, 1, 1),
            CardDefinition::new("Frost Archer", Rarity::R, 3, 1),
            CardDefinition::new("Void Warlock", Rarity::SR, 6, 2),
        ] {
            catalog.insert(def);
        }
        catalog
    }

    /// Build a catalog from definitions, validating each one.
    pub fn from_definitions(
        defs: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for def in defs {
            catalog.register(def)?;
        }
        Ok(catalog)
    }

    /// Register a card definition.
    ///
    /// Fails if the key is taken or the card costs nothing.
    pub fn register(&mut self, card: CardDefinition) -> Result<Arc<CardDefinition>, CatalogError> {
        if self.by_key.contains_key(&card.key) {
            return Err(CatalogError::DuplicateKey(card.key));
        }
        if card.cost == 0 {
            return Err(CatalogError::ZeroCost(card.key));
        }
        Ok(self.insert(card))
    }

    fn insert(&mut self, card: CardDefinition) -> Arc<CardDefinition> {
        let card = Arc::new(card);
        self.by_key.insert(card.key.clone(), self.cards.len());
        self.cards.push(Arc::clone(&card));
        card
    }

    /// Get a card definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Arc<CardDefinition>> {
        self.by_key.get(key).map(|&idx| &self.cards[idx])
    }

    /// Check if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.iter()
    }

    /// Find cards of a rarity, in registration order.
    pub fn find_by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.iter().filter(move |c| c.rarity == rarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.find_by_rarity(Rarity::UR).count(), 1);
        assert_eq!(catalog.find_by_rarity(Rarity::SR).count(), 2);
        assert_eq!(catalog.find_by_rarity(Rarity::R).count(), 3);
        assert_eq!(catalog.find_by_rarity(Rarity::N).count(), 2);

        let drake = catalog.get("Storm Drake").unwrap();
        assert_eq!(drake.power, 7);
        assert_eq!(drake.cost, 3);
        assert!(catalog.iter().all(|c| c.cost > 0));
    }

    #[test]
    fn test_registration_order() {
        let catalog = CardCatalog::from_definitions([
            CardDefinition::new("B", Rarity::N, 1, 1),
            CardDefinition::new("A", Rarity::N, 1, 1),
        ])
        .unwrap();

        let keys: Vec<_> = catalog.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new("Golem", Rarity::N, 2, 1)).unwrap();

        let err = catalog
            .register(CardDefinition::new("Golem", Rarity::UR, 9, 1))
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateKey("Golem".to_string()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Golem").unwrap().rarity, Rarity::N);
    }

    #[test]
    fn test_zero_cost_rejected() {
        let err = CardCatalog::from_definitions([CardDefinition::new("Free", Rarity::N, 1, 0)])
            .unwrap_err();
        assert_eq!(err, CatalogError::ZeroCost("Free".to_string()));
    }

    #[test]
    fn test_contains() {
        let catalog = CardCatalog::standard();
        assert!(catalog.contains("Pyre Mage"));
        assert!(!catalog.contains("Lightning Bolt"));
        assert!(catalog.get("Lightning Bolt").is_none());
    }
}
