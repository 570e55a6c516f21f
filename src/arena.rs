//! The arena: one signed-in player, their gacha pulls, and their matches.
//!
//! `Arena` wires the three engines together. The gacha and the battle each
//! get their own random stream derived from one seed, so replaying a seed
//! replays both the pulls and the match. Queuing for a match takes the
//! session's [`DeckLock`](crate::collection::DeckLock); resetting the match
//! releases it.

use std::time::Duration;

use tracing::info;

use crate::battle::{BattleEngine, MatchPhase, MatchSnapshot, OpponentPolicy};
use crate::cards::{CardCatalog, CardInstance};
use crate::collection::Session;
use crate::core::{ArenaConfig, Dice, GameRng, InstanceId, Side};
use crate::error::{GachaError, Result};
use crate::gacha::GachaEngine;

pub struct Arena {
    session: Session,
    gacha: GachaEngine,
    battle: BattleEngine,
    rng: GameRng,
}

impl Arena {
    /// Arena over the standard catalog.
    pub fn new(config: &ArenaConfig) -> std::result::Result<Self, GachaError> {
        Self::with_catalog(&CardCatalog::standard(), config)
    }

    pub fn with_catalog(
        catalog: &CardCatalog,
        config: &ArenaConfig,
    ) -> std::result::Result<Self, GachaError> {
        let root = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let gacha = GachaEngine::new(catalog, &config.gacha)?;
        let session = Session::new();
        let mut battle = BattleEngine::new(config.battle.clone(), root.for_context("battle"));
        battle.set_listener(session.deck_lock().clone());

        Ok(Self {
            session,
            gacha,
            battle,
            rng: root.for_context("gacha"),
        })
    }

    /// Replace the battle dice.
    #[must_use]
    pub fn with_dice(mut self, dice: impl Dice + Send + 'static) -> Self {
        self.battle = self.battle.with_dice(dice);
        self
    }

    /// Replace the opponent's card choice.
    #[must_use]
    pub fn with_policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.battle = self.battle.with_policy(policy);
        self
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn sign_in(&mut self, name: &str) -> Result<()> {
        self.session.sign_in(name)
    }

    pub fn sign_out(&mut self) {
        self.session.sign_out();
    }

    /// Pull one card and add it to the collection.
    pub fn pull(&mut self) -> Result<CardInstance> {
        self.session.ensure_editable()?;
        let card = self.gacha.pull(&mut self.rng);
        self.session.receive_pull(card.clone())?;
        Ok(card)
    }

    /// Add an unused copy of `key` to the deck.
    pub fn add_to_deck(&mut self, key: &str) -> Result<InstanceId> {
        self.session.add_to_deck(key)
    }

    pub fn add_card_to_deck(&mut self, id: InstanceId) -> Result<()> {
        self.session.add_card_to_deck(id)
    }

    pub fn remove_from_deck(&mut self, id: InstanceId) -> Result<bool> {
        self.session.remove_from_deck(id)
    }

    // =========================================================================
    // Battle
    // =========================================================================

    /// Queue the current deck for a match and lock deck editing.
    pub fn find_match(&mut self) -> Result<()> {
        self.battle.start_queue(self.session.deck_cards())?;
        self.session.deck_lock().lock();
        info!(user = self.session.user().unwrap_or("-"), "looking for a match");
        Ok(())
    }

    pub fn roll_for_turn(&mut self) -> Result<Side> {
        Ok(self.battle.roll_for_turn()?)
    }

    pub fn play_card(&mut self, card: InstanceId) -> Result<u8> {
        Ok(self.battle.play_card(card)?)
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.battle.advance(elapsed);
    }

    pub fn settle(&mut self) -> usize {
        self.battle.settle()
    }

    /// Leave the match. Deck editing is allowed again afterwards.
    pub fn reset_match(&mut self) {
        self.battle.reset();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn gacha(&self) -> &GachaEngine {
        &self.gacha
    }

    #[must_use]
    pub fn battle(&self) -> &BattleEngine {
        &self.battle
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.battle.phase()
    }

    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        self.battle.snapshot()
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("user", &self.session.user())
            .field("collection", &self.session.collection().len())
            .field("deck", &self.session.deck().len())
            .field("battle", &self.battle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BattleError, SessionError};

    fn arena() -> Arena {
        Arena::new(&ArenaConfig::default().with_seed(11)).unwrap()
    }

    fn ready(arena: &mut Arena) {
        arena.sign_in("ada").unwrap();
        for _ in 0..10 {
            let card = arena.pull().unwrap();
            arena.add_card_to_deck(card.id).unwrap();
        }
    }

    #[test]
    fn test_pull_requires_sign_in() {
        let mut arena = arena();
        assert_eq!(arena.pull(), Err(SessionError::SignedOut));
        assert_eq!(arena.gacha().pulls(), 0);
    }

    #[test]
    fn test_find_match_needs_full_deck() {
        let mut arena = arena();
        arena.sign_in("ada").unwrap();
        arena.pull().unwrap();

        assert_eq!(
            arena.find_match(),
            Err(SessionError::Battle(BattleError::InsufficientDeck { size: 0, required: 10 }))
        );
        assert!(!arena.session().deck_lock().is_locked());
    }

    #[test]
    fn test_match_locks_deck_until_reset() {
        let mut arena = arena();
        ready(&mut arena);
        arena.find_match().unwrap();

        assert_eq!(arena.pull(), Err(SessionError::MatchInProgress));
        let id = arena.session().deck().ids()[0];
        assert_eq!(arena.remove_from_deck(id), Err(SessionError::MatchInProgress));

        arena.reset_match();
        assert_eq!(arena.phase(), MatchPhase::Idle);
        assert_eq!(arena.remove_from_deck(id), Ok(true));
    }

    #[test]
    fn test_same_seed_same_pulls() {
        let mut a = arena();
        let mut b = arena();
        a.sign_in("a").unwrap();
        b.sign_in("b").unwrap();

        for _ in 0..20 {
            assert_eq!(a.pull().unwrap().key(), b.pull().unwrap().key());
        }
    }
}
