//! Per-side card zones and movement between them.
//!
//! Each side of a match owns three zones:
//! - the draw pile, drawn from the front
//! - the hand, filled at the back and played from anywhere
//! - the discard pile, where played cards end up
//!
//! A card is in exactly one zone at a time; every move takes it out of one
//! zone before putting it in the next.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardInstance;
use crate::core::{GameRng, InstanceId};

/// Zones a card can occupy during a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    DrawPile,
    Hand,
    Discard,
}

/// One side's draw pile, hand and discard pile.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use gacha_duel::cards::{CardDefinition, CardInstance, Rarity};
/// use gacha_duel::core::InstanceId;
/// use gacha_duel::zones::{SideZones, Zone};
///
/// let def = Arc::new(CardDefinition::new("Stone Golem", Rarity::N, 2, 1));
/// let cards = (1..=4).map(|i| CardInstance::new(InstanceId(i), Arc::clone(&def)));
///
/// let mut zones = SideZones::from_pile(cards);
/// zones.draw_many(3);
///
/// assert_eq!(zones.size(Zone::Hand), 3);
/// assert_eq!(zones.size(Zone::DrawPile), 1);
/// assert_eq!(zones.zone_of(InstanceId(1)), Some(Zone::Hand));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SideZones {
    draw_pile: VecDeque<CardInstance>,
    hand: SmallVec<[CardInstance; 5]>,
    discard: Vec<CardInstance>,
}

impl SideZones {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zones with `cards` as the draw pile, in order (front first).
    pub fn from_pile(cards: impl IntoIterator<Item = CardInstance>) -> Self {
        Self {
            draw_pile: cards.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Zones with a shuffled copy of `cards` as the draw pile.
    #[must_use]
    pub fn shuffled(cards: &[CardInstance], rng: &mut GameRng) -> Self {
        let mut pile = cards.to_vec();
        rng.shuffle(&mut pile);
        Self::from_pile(pile)
    }

    /// Move the front card of the draw pile to the back of the hand.
    ///
    /// Returns the drawn card, or `None` if the pile is empty.
    pub fn draw(&mut self) -> Option<&CardInstance> {
        let card = self.draw_pile.pop_front()?;
        self.hand.push(card);
        self.hand.last()
    }

    /// Draw up to `count` cards. Returns how many were drawn.
    pub fn draw_many(&mut self, count: usize) -> usize {
        (0..count).take_while(|_| self.draw().is_some()).count()
    }

    /// Move a card from the hand to the discard pile.
    ///
    /// Returns the discarded card, or `None` if it was not in hand.
    pub fn discard_from_hand(&mut self, id: InstanceId) -> Option<&CardInstance> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        let card = self.hand.remove(pos);
        self.discard.push(card);
        self.discard.last()
    }

    /// Find a card in hand.
    #[must_use]
    pub fn hand_card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// The first card in hand (the oldest one drawn).
    #[must_use]
    pub fn front_of_hand(&self) -> Option<&CardInstance> {
        self.hand.first()
    }

    /// Which zone a card is in, if any.
    #[must_use]
    pub fn zone_of(&self, id: InstanceId) -> Option<Zone> {
        if self.hand.iter().any(|c| c.id == id) {
            Some(Zone::Hand)
        } else if self.draw_pile.iter().any(|c| c.id == id) {
            Some(Zone::DrawPile)
        } else if self.discard.iter().any(|c| c.id == id) {
            Some(Zone::Discard)
        } else {
            None
        }
    }

    #[must_use]
    pub fn size(&self, zone: Zone) -> usize {
        match zone {
            Zone::DrawPile => self.draw_pile.len(),
            Zone::Hand => self.hand.len(),
            Zone::Discard => self.discard.len(),
        }
    }

    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    pub fn draw_pile(&self) -> impl Iterator<Item = &CardInstance> {
        self.draw_pile.iter()
    }

    #[must_use]
    pub fn discard(&self) -> &[CardInstance] {
        &self.discard
    }

    /// Total cards across all three zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.discard.len()
    }

    /// Empty every zone.
    pub fn clear(&mut self) {
        self.draw_pile.clear();
        self.hand.clear();
        self.discard.clear();
    }
}
