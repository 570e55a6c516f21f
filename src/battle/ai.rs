//! Opponent card choice.
//!
//! The scripted opponent always plays the front of its hand. The choice is a
//! trait so other behaviours can be dropped in without touching the engine.

use crate::cards::CardInstance;
use crate::core::{GameRng, InstanceId};

/// Picks which card the opponent plays on its turn.
pub trait OpponentPolicy: Send {
    /// Choose a card from `hand`, or `None` to pass.
    fn choose_card(&mut self, hand: &[CardInstance], rng: &mut GameRng) -> Option<InstanceId>;
}

/// Always plays the oldest card in hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrontOfHand;

impl OpponentPolicy for FrontOfHand {
    fn choose_card(&mut self, hand: &[CardInstance], _rng: &mut GameRng) -> Option<InstanceId> {
        hand.first().map(|c| c.id)
    }
}

/// Plays a uniformly random card from hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformCard;

impl OpponentPolicy for UniformCard {
    fn choose_card(&mut self, hand: &[CardInstance], rng: &mut GameRng) -> Option<InstanceId> {
        if hand.is_empty() {
            return None;
        }
        Some(hand[rng.gen_range_usize(0..hand.len())].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, Rarity};
    use std::sync::Arc;

    fn hand() -> Vec<CardInstance> {
        let def = Arc::new(CardDefinition::new("Golem", Rarity::N, 2, 1));
        (1..=3).map(|i| CardInstance::new(InstanceId(i), Arc::clone(&def))).collect()
    }

    #[test]
    fn test_front_of_hand() {
        let mut rng = GameRng::new(1);
        assert_eq!(FrontOfHand.choose_card(&hand(), &mut rng), Some(InstanceId(1)));
        assert_eq!(FrontOfHand.choose_card(&[], &mut rng), None);
    }

    #[test]
    fn test_uniform_picks_from_hand() {
        let mut rng = GameRng::new(7);
        let hand = hand();
        for _ in 0..20 {
            let id = UniformCard.choose_card(&hand, &mut rng).unwrap();
            assert!(hand.iter().any(|c| c.id == id));
        }
        assert_eq!(UniformCard.choose_card(&[], &mut rng), None);
    }
}
