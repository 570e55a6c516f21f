//! Gacha engine: rarity-weighted card minting.

use std::sync::Arc;

use tracing::debug;

use crate::cards::{CardCatalog, CardDefinition, CardInstance, Rarity};
use crate::core::{GachaConfig, GameRng, InstanceIdAllocator, RarityWeights};
use crate::error::GachaError;

/// Draws cards from a catalog with rarity-weighted probability.
///
/// Every catalog card contributes its rarity's weight to a cumulative table;
/// a pull draws one ticket uniformly from `0..total` and binary-searches the
/// table. Cards whose rarity has weight 0 never drop.
///
/// ## Example
///
/// ```
/// use gacha_duel::cards::CardCatalog;
/// use gacha_duel::core::{GachaConfig, GameRng};
/// use gacha_duel::gacha::GachaEngine;
///
/// let mut gacha = GachaEngine::new(&CardCatalog::standard(), &GachaConfig::default()).unwrap();
/// let mut rng = GameRng::new(42);
///
/// let a = gacha.pull(&mut rng);
/// let b = gacha.pull(&mut rng);
/// assert_ne!(a.id, b.id);
/// ```
#[derive(Clone, Debug)]
pub struct GachaEngine {
    pool: Vec<Arc<CardDefinition>>,
    /// `cumulative[i]` is the summed weight of `pool[..=i]`.
    cumulative: Vec<u64>,
    weights: RarityWeights,
    ids: InstanceIdAllocator,
}

impl GachaEngine {
    /// Build the weight table for `catalog`.
    ///
    /// Fails if no catalog card has a positive weight.
    pub fn new(catalog: &CardCatalog, config: &GachaConfig) -> Result<Self, GachaError> {
        Self::with_allocator(catalog, config, InstanceIdAllocator::new())
    }

    /// Build the weight table, minting ids from `ids`.
    pub fn with_allocator(
        catalog: &CardCatalog,
        config: &GachaConfig,
        ids: InstanceIdAllocator,
    ) -> Result<Self, GachaError> {
        let weights = config.weights;
        let mut pool = Vec::with_capacity(catalog.len());
        let mut cumulative = Vec::with_capacity(catalog.len());
        let mut total = 0u64;

        for def in catalog.iter() {
            let weight = u64::from(weights.weight(def.rarity));
            if weight == 0 {
                continue;
            }
            total += weight;
            pool.push(Arc::clone(def));
            cumulative.push(total);
        }

        if pool.is_empty() {
            return Err(GachaError::EmptyPool);
        }

        Ok(Self {
            pool,
            cumulative,
            weights,
            ids,
        })
    }

    /// Pull one card.
    ///
    /// Never fails. The returned instance has an id this engine has never
    /// handed out before.
    pub fn pull(&mut self, rng: &mut GameRng) -> CardInstance {
        let ticket = rng.gen_range_u64(0..self.total_weight());
        let idx = self.cumulative.partition_point(|&c| c <= ticket);
        let definition = Arc::clone(&self.pool[idx]);
        let card = CardInstance::new(self.ids.alloc(), definition);

        debug!(id = %card.id, key = card.key(), rarity = %card.rarity(), "gacha pull");
        card
    }

    /// Summed weight of every card in the pool.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Exact probability that a pull lands on `rarity`.
    #[must_use]
    pub fn rarity_probability(&self, rarity: Rarity) -> f64 {
        let count = self.pool.iter().filter(|c| c.rarity == rarity).count() as u64;
        let weight = u64::from(self.weights.weight(rarity)) * count;
        weight as f64 / self.total_weight() as f64
    }

    /// Cards that can drop, in catalog order.
    #[must_use]
    pub fn pool(&self) -> &[Arc<CardDefinition>] {
        &self.pool
    }

    /// Number of cards minted so far.
    #[must_use]
    pub fn pulls(&self) -> u64 {
        self.ids.allocated()
    }
}
