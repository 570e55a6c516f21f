//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `Rarity`: N, R, SR, UR
//! - `CardDefinition`: Static card data (key, rarity, power, cost)
//! - `CardInstance`: One uniquely identified copy of a definition
//! - `CardCatalog`: The fixed, ordered set of definitions the gacha draws from

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, Rarity};
pub use instance::CardInstance;
