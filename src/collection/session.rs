//! Signed-in session owning a collection and a deck.
//!
//! Identity lives here and nowhere else: the gacha and the battle engine
//! never see a user name. Signing out clears the deck selection but keeps
//! the collection. Editing is refused while signed out or while the
//! session's [`DeckLock`] is held by a running match.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use super::deck::Deck;
use super::store::Collection;
use crate::cards::CardInstance;
use crate::core::InstanceId;
use crate::error::{Result, SessionError};

/// Shared "a match is using this deck" flag.
///
/// Clones observe the same flag, so the battle side can release a lock the
/// session side took.
#[derive(Clone, Debug, Default)]
pub struct DeckLock(Arc<AtomicBool>);

impl DeckLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn unlock(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A user's session.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<String>,
    collection: Collection,
    deck: Deck,
    last_pull: Option<CardInstance>,
    lock: DeckLock,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in under a nickname. Surrounding whitespace is trimmed.
    pub fn sign_in(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        info!(user = name, "signed in");
        self.user = Some(name.to_string());
        Ok(())
    }

    /// Sign out and drop the deck selection.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user, "signed out");
        }
        self.deck.clear();
    }

    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The most recent card received from the gacha.
    #[must_use]
    pub fn last_pull(&self) -> Option<&CardInstance> {
        self.last_pull.as_ref()
    }

    /// Handle to this session's deck lock.
    #[must_use]
    pub fn deck_lock(&self) -> &DeckLock {
        &self.lock
    }

    /// Check that the collection and deck may be edited right now.
    pub fn ensure_editable(&self) -> Result<()> {
        if !self.is_signed_in() {
            return Err(SessionError::SignedOut);
        }
        if self.lock.is_locked() {
            return Err(SessionError::MatchInProgress);
        }
        Ok(())
    }

    /// Add a freshly pulled card to the collection.
    pub fn receive_pull(&mut self, card: CardInstance) -> Result<()> {
        self.ensure_editable()?;
        self.collection.add(card.clone());
        self.last_pull = Some(card);
        Ok(())
    }

    /// Add an unused copy of `key` to the deck.
    pub fn add_to_deck(&mut self, key: &str) -> Result<InstanceId> {
        self.ensure_editable()?;
        Ok(self.deck.add_by_key(key, &self.collection)?)
    }

    /// Add a specific card to the deck.
    pub fn add_card_to_deck(&mut self, id: InstanceId) -> Result<()> {
        self.ensure_editable()?;
        Ok(self.deck.add(id, &self.collection)?)
    }

    /// Remove a card from the deck. Returns false if it was not there.
    pub fn remove_from_deck(&mut self, id: InstanceId) -> Result<bool> {
        self.ensure_editable()?;
        Ok(self.deck.remove(id))
    }

    /// The deck's cards, in deck order.
    #[must_use]
    pub fn deck_cards(&self) -> Vec<CardInstance> {
        self.deck.resolve(&self.collection)
    }
}
