//! Card instances - individual owned cards.
//!
//! A `CardInstance` is one minted copy of a catalog card. The definition is
//! shared with the catalog through an `Arc`, so copying an instance between
//! zones never copies card data.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, Rarity};
use crate::core::InstanceId;

/// A uniquely identified card.
///
/// Instances are never mutated after minting. They move between the
/// collection, a deck, and the zones of a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this copy.
    pub id: InstanceId,

    /// The catalog card this is a copy of.
    pub definition: Arc<CardDefinition>,
}

impl CardInstance {
    /// Create an instance of `definition`.
    #[must_use]
    pub fn new(id: InstanceId, definition: Arc<CardDefinition>) -> Self {
        Self { id, definition }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.definition.key
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.definition.rarity
    }

    #[must_use]
    pub fn power(&self) -> u32 {
        self.definition.power
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.definition.cost
    }
}
