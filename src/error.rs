//! Error types for gacha-duel.
//!
//! Every rejected operation leaves its target unchanged. Callers that only
//! care about "did anything happen" can ignore the error.

use thiserror::Error;

use crate::core::InstanceId;

/// Errors building a card catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("card key {0:?} is already in the catalog")]
    DuplicateKey(String),

    #[error("card {0:?} must cost at least 1")]
    ZeroCost(String),
}

/// Errors building a gacha engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GachaError {
    #[error("gacha pool has no card with a positive weight")]
    EmptyPool,
}

/// Errors editing a deck.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck already holds {0} cards")]
    DeckFull(usize),

    #[error("card {0} is already in the deck")]
    DuplicateCard(InstanceId),

    #[error("card {0} is not in the collection")]
    NotInCollection(InstanceId),

    #[error("no copy of {0:?} left outside the deck")]
    NoAvailableCopy(String),
}

/// Battle actions that were refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("deck has {size} cards, {required} needed to queue")]
    InsufficientDeck { size: usize, required: usize },

    #[error("already queued or in a match")]
    AlreadyActive,

    #[error("no match in progress")]
    MatchNotActive,

    #[error("match is over")]
    MatchFinished,

    #[error("turn order has already been decided")]
    AlreadyDecided,

    #[error("roll for turn order first")]
    TurnUndecided,

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("card {0} is not in your hand")]
    CardNotInHand(InstanceId),

    #[error("a play is still resolving")]
    PlayInFlight,
}

/// Errors from the session and arena layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("sign in first")]
    SignedOut,

    #[error("nickname must not be blank")]
    EmptyName,

    #[error("collection and deck are locked during a match")]
    MatchInProgress,

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Battle(#[from] BattleError),
}

pub type Result<T, E = SessionError> = std::result::Result<T, E>;
