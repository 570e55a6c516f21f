//! Weighted gacha pulls.
//!
//! The [`GachaEngine`] turns a [`CardCatalog`](crate::cards::CardCatalog)
//! and a set of [`RarityWeights`](crate::core::RarityWeights) into a
//! cumulative weight table, then mints a fresh
//! [`CardInstance`](crate::cards::CardInstance) per pull. Adding the result
//! to a collection is the caller's job.

mod engine;

pub use engine::GachaEngine;
