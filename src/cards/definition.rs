//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a catalog card.
//! "Storm Drake" is always UR, power 7, cost 3 - these are part of the
//! definition. Which copy of the Drake you own is a `CardInstance`.

use serde::{Deserialize, Serialize};

/// Card rarity, from most to least common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    N,
    R,
    SR,
    UR,
}

impl Rarity {
    /// All rarities, most common first.
    pub const ALL: [Rarity; 4] = [Rarity::N, Rarity::R, Rarity::SR, Rarity::UR];

    /// Short label ("N", "R", "SR", "UR").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rarity::N => "N",
            Rarity::R => "R",
            Rarity::SR => "SR",
            Rarity::UR => "UR",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use gacha_duel::cards::{CardDefinition, Rarity};
///
/// let drake = CardDefinition::new("Storm Drake", Rarity::UR, 7, 3);
///
/// assert_eq!(drake.key, "Storm Drake");
/// assert_eq!(drake.power, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name, unique within its catalog.
    pub key: String,

    pub rarity: Rarity,

    /// Base damage dealt when played (before the die roll).
    pub power: u32,

    /// Cost printed on the card. Always at least 1 in a valid catalog.
    pub cost: u32,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(key: impl Into<String>, rarity: Rarity, power: u32, cost: u32) -> Self {
        Self {
            key: key.into(),
            rarity,
            power,
            cost,
        }
    }
}

impl std::fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] Power {} / Cost {}", self.key, self.rarity, self.power, self.cost)
    }
}
