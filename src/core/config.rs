//! Configuration types.
//!
//! The engines are configured at startup by providing:
//! - `GachaConfig`: Rarity weights for pulls
//! - `MatchConfig`: HP, deck and hand sizes, phase delays
//! - `ArenaConfig`: Combines both, plus the seed
//!
//! All configs are plain serde structs with builder methods, so the demo
//! binary can load them from JSON.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::Rarity;

/// Integer drop weight per rarity.
///
/// Each catalog card contributes the weight of its rarity to the pool, so a
/// rarity's share of pulls is `weight * cards_of_that_rarity / total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityWeights {
    pub n: u32,
    pub r: u32,
    pub sr: u32,
    pub ur: u32,
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            n: 12,
            r: 7,
            sr: 3,
            ur: 1,
        }
    }
}

impl RarityWeights {
    /// Weight for a rarity.
    #[must_use]
    pub const fn weight(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::N => self.n,
            Rarity::R => self.r,
            Rarity::SR => self.sr,
            Rarity::UR => self.ur,
        }
    }

    /// Return a copy with one rarity's weight replaced.
    #[must_use]
    pub fn with_weight(mut self, rarity: Rarity, weight: u32) -> Self {
        match rarity {
            Rarity::N => self.n = weight,
            Rarity::R => self.r = weight,
            Rarity::SR => self.sr = weight,
            Rarity::UR => self.ur = weight,
        }
        self
    }
}

/// Gacha configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GachaConfig {
    /// Drop weights per rarity.
    #[serde(default)]
    pub weights: RarityWeights,
}

impl GachaConfig {
    /// Set the rarity weights.
    #[must_use]
    pub fn with_weights(mut self, weights: RarityWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Battle configuration.
///
/// Delays are virtual: they are measured against the battle scheduler's
/// clock, not wall time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// HP each side starts with (also the HP ceiling).
    pub starting_hp: u32,

    /// Minimum number of cards needed to queue.
    pub min_deck_size: usize,

    /// Cards each side draws when the match starts.
    pub starting_hand_size: usize,

    /// The player's start-of-turn draw only happens below this hand size.
    pub max_hand_size: usize,

    /// Time from queueing until the match is found.
    pub matchmaking_delay_ms: u64,

    /// Time the opponent "thinks" before playing.
    pub opponent_delay_ms: u64,

    /// Time between rolling for a play and resolving its damage.
    pub resolution_delay_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_hp: 20,
            min_deck_size: 10,
            starting_hand_size: 3,
            max_hand_size: 5,
            matchmaking_delay_ms: 900,
            opponent_delay_ms: 900,
            resolution_delay_ms: 500,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_starting_hp(mut self, hp: u32) -> Self {
        self.starting_hp = hp;
        self
    }

    #[must_use]
    pub fn with_min_deck_size(mut self, size: usize) -> Self {
        self.min_deck_size = size;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Set all three delays at once.
    #[must_use]
    pub fn with_delays(mut self, matchmaking_ms: u64, opponent_ms: u64, resolution_ms: u64) -> Self {
        self.matchmaking_delay_ms = matchmaking_ms;
        self.opponent_delay_ms = opponent_ms;
        self.resolution_delay_ms = resolution_ms;
        self
    }

    #[must_use]
    pub fn matchmaking_delay(&self) -> Duration {
        Duration::from_millis(self.matchmaking_delay_ms)
    }

    #[must_use]
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    #[must_use]
    pub fn resolution_delay(&self) -> Duration {
        Duration::from_millis(self.resolution_delay_ms)
    }
}

/// Complete configuration for an arena.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Seed for every random stream. `None` seeds from the OS.
    pub seed: Option<u64>,

    pub gacha: GachaConfig,

    #[serde(rename = "match")]
    pub battle: MatchConfig,
}

impl ArenaConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_gacha(mut self, gacha: GachaConfig) -> Self {
        self.gacha = gacha;
        self
    }

    #[must_use]
    pub fn with_match(mut self, battle: MatchConfig) -> Self {
        self.battle = battle;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = RarityWeights::default();
        assert_eq!(weights.weight(Rarity::UR), 1);
        assert_eq!(weights.weight(Rarity::SR), 3);
        assert_eq!(weights.weight(Rarity::R), 7);
        assert_eq!(weights.weight(Rarity::N), 12);
    }

    #[test]
    fn test_with_weight() {
        let weights = RarityWeights::default().with_weight(Rarity::UR, 50);
        assert_eq!(weights.weight(Rarity::UR), 50);
        assert_eq!(weights.weight(Rarity::N), 12);
    }

    #[test]
    fn test_match_config_defaults() {
        let config = MatchConfig::default();

        assert_eq!(config.starting_hp, 20);
        assert_eq!(config.min_deck_size, 10);
        assert_eq!(config.starting_hand_size, 3);
        assert_eq!(config.max_hand_size, 5);
        assert_eq!(config.matchmaking_delay(), Duration::from_millis(900));
        assert_eq!(config.opponent_delay(), Duration::from_millis(900));
        assert_eq!(config.resolution_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_match_config_builder() {
        let config = MatchConfig::default()
            .with_starting_hp(5)
            .with_min_deck_size(4)
            .with_delays(0, 10, 20);

        assert_eq!(config.starting_hp, 5);
        assert_eq!(config.min_deck_size, 4);
        assert_eq!(config.matchmaking_delay(), Duration::ZERO);
        assert_eq!(config.resolution_delay(), Duration::from_millis(20));
    }

    #[test]
    fn test_arena_config_partial_json() {
        let json = r#"{ "seed": 7, "match": { "starting_hp": 12 } }"#;
        let config: ArenaConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.battle.starting_hp, 12);
        assert_eq!(config.battle.min_deck_size, 10);
        assert_eq!(config.gacha, GachaConfig::default());
    }

    #[test]
    fn test_arena_config_round_trip() {
        let config = ArenaConfig::default()
            .with_seed(3)
            .with_gacha(GachaConfig::default().with_weights(RarityWeights::default().with_weight(Rarity::N, 1)));

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ArenaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
