//! Deterministic random number generation and dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical pulls, shuffles and rolls
//! - **Context streams**: The gacha, the shuffles and the dice each draw from
//!   their own sequence derived from one seed
//!
//! ## Dice
//!
//! Battle rolls go through the [`Dice`] trait so that a match can be driven
//! by a seeded [`GameRng`] in play and by [`ScriptedDice`] when a test needs
//! to force a particular roll.
//!
//! ```
//! use gacha_duel::core::{Dice, GameRng, ScriptedDice};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_d6();
//! assert!((1..=6).contains(&roll));
//!
//! let mut forced = ScriptedDice::new([6, 1]);
//! assert_eq!(forced.roll_d6(), 6);
//! assert_eq!(forced.roll_d6(), 1);
//! ```

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on the battle die.
pub const DIE_FACES: u8 = 6;

/// Seeded game RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// e.g. `"gacha"` and `"battle"` never share draws.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Roll a die with `sides` faces, returning a value in `1..=sides`.
    ///
    /// A zero-sided die is treated as one-sided.
    pub fn roll_die(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides.max(1))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Generate a random u64 in the given range.
    pub fn gen_range_u64(&mut self, range: std::ops::Range<u64>) -> u64 {
        self.inner.gen_range(range)
    }
}

/// Source of six-sided die rolls for the battle.
pub trait Dice {
    /// Roll one d6, returning a value in `1..=6`.
    fn roll_d6(&mut self) -> u8;
}

impl Dice for GameRng {
    fn roll_d6(&mut self) -> u8 {
        self.roll_die(DIE_FACES)
    }
}

/// Dice that replay a fixed script of rolls.
///
/// Once the script runs out, rolls fall back to a seeded [`GameRng`].
/// Values outside `1..=6` are clamped onto the die.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: VecDeque<u8>,
    fallback: GameRng,
}

impl ScriptedDice {
    /// Create dice that return `rolls` in order, then fall back to seed 0.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self::with_fallback(rolls, GameRng::new(0))
    }

    /// Create dice that return `rolls` in order, then use `fallback`.
    pub fn with_fallback(rolls: impl IntoIterator<Item = u8>, fallback: GameRng) -> Self {
        Self {
            script: rolls.into_iter().collect(),
            fallback,
        }
    }

    /// Queue another forced roll at the end of the script.
    pub fn push(&mut self, roll: u8) {
        self.script.push_back(roll);
    }

    /// Number of forced rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Dice for ScriptedDice {
    fn roll_d6(&mut self) -> u8 {
        match self.script.pop_front() {
            Some(roll) => roll.clamp(1, DIE_FACES),
            None => self.fallback.roll_d6(),
        }
    }
}
