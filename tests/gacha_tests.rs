//! Gacha pull tests.
//!
//! These tests verify the pull distribution and id minting:
//! - Every pull comes from the catalog
//! - Ids are unique and increasing
//! - Zero-weight rarities never drop
//! - Observed rarity rates track the configured weights

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use gacha_duel::cards::{CardCatalog, Rarity};
use gacha_duel::core::{GachaConfig, GameRng, RarityWeights};
use gacha_duel::gacha::GachaEngine;

fn standard() -> GachaEngine {
    GachaEngine::new(&CardCatalog::standard(), &GachaConfig::default()).unwrap()
}

proptest! {
    /// Any seed yields catalog cards with fresh, increasing ids.
    #[test]
    fn prop_pulls_are_catalog_cards_with_fresh_ids(seed in any::<u64>(), count in 1usize..200) {
        let catalog = CardCatalog::standard();
        let mut gacha = standard();
        let mut rng = GameRng::new(seed);

        let mut seen = FxHashSet::default();
        let mut last = 0u64;
        for _ in 0..count {
            let card = gacha.pull(&mut rng);
            prop_assert!(catalog.contains(card.key()));
            prop_assert!(seen.insert(card.id));
            prop_assert!(card.id.raw() > last);
            last = card.id.raw();
        }
        prop_assert_eq!(gacha.pulls(), count as u64);
    }

    /// A rarity with weight 0 never drops, whatever the seed.
    #[test]
    fn prop_zero_weight_never_drops(seed in any::<u64>()) {
        let config = GachaConfig::default()
            .with_weights(RarityWeights::default().with_weight(Rarity::UR, 0));
        let mut gacha = GachaEngine::new(&CardCatalog::standard(), &config).unwrap();
        let mut rng = GameRng::new(seed);

        for _ in 0..100 {
            prop_assert_ne!(gacha.pull(&mut rng).rarity(), Rarity::UR);
        }
    }
}

/// Test exact rarity probabilities for the standard catalog.
#[test]
fn test_standard_probabilities() {
    let gacha = standard();

    // 2 N x 12, 3 R x 7, 2 SR x 3, 1 UR x 1
    assert_eq!(gacha.total_weight(), 52);
    assert!((gacha.rarity_probability(Rarity::N) - 24.0 / 52.0).abs() < 1e-12);
    assert!((gacha.rarity_probability(Rarity::R) - 21.0 / 52.0).abs() < 1e-12);
    assert!((gacha.rarity_probability(Rarity::SR) - 6.0 / 52.0).abs() < 1e-12);
    assert!((gacha.rarity_probability(Rarity::UR) - 1.0 / 52.0).abs() < 1e-12);
}

/// Test that observed rates converge on the weights.
#[test]
fn test_observed_rates() {
    let mut gacha = standard();
    let mut rng = GameRng::new(2024);
    let pulls = 52_000;

    let mut counts = [0usize; 4];
    for _ in 0..pulls {
        let idx = Rarity::ALL
            .iter()
            .position(|&r| r == gacha.pull(&mut rng).rarity())
            .unwrap();
        counts[idx] += 1;
    }

    for (i, rarity) in Rarity::ALL.iter().enumerate() {
        let expected = gacha.rarity_probability(*rarity);
        let observed = counts[i] as f64 / pulls as f64;
        assert!(
            (observed - expected).abs() < 0.01,
            "{rarity}: observed {observed:.4}, expected {expected:.4}"
        );
    }
}

/// Test that the same seed replays the same pulls.
#[test]
fn test_seed_replays_pulls() {
    let mut a = standard();
    let mut b = standard();
    let mut rng_a = GameRng::new(5);
    let mut rng_b = GameRng::new(5);

    let keys_a: Vec<_> = (0..50).map(|_| a.pull(&mut rng_a).key().to_string()).collect();
    let keys_b: Vec<_> = (0..50).map(|_| b.pull(&mut rng_b).key().to_string()).collect();
    assert_eq!(keys_a, keys_b);
}

/// Test that a config with every weight at 0 is rejected.
#[test]
fn test_all_zero_weights() {
    let weights = RarityWeights { n: 0, r: 0, sr: 0, ur: 0 };
    let config = GachaConfig::default().with_weights(weights);

    assert!(GachaEngine::new(&CardCatalog::standard(), &config).is_err());
}
