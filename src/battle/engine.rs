//! The battle state machine.
//!
//! A match moves Idle → Queuing → Matched → Finished, and `reset` returns to
//! Idle from anywhere. Timed steps (matchmaking, resolving the player's hit,
//! the opponent's turn) go through the [`Scheduler`] and only happen when
//! the owner advances virtual time.
//!
//! Every command either succeeds or returns a [`BattleError`] without
//! touching the match.

use std::time::Duration;

use tracing::{debug, info, trace};

use super::ai::{FrontOfHand, OpponentPolicy};
use super::listener::MatchListener;
use super::log::{CombatLog, LogKind};
use super::scheduler::{Fired, Generation, Scheduler, TimerEvent};
use super::state::{Match, MatchPhase, MatchSnapshot, PendingPlay, Turn};
use crate::cards::CardInstance;
use crate::core::{Dice, GameRng, InstanceId, MatchConfig, Side};
use crate::error::BattleError;
use crate::rules;
use crate::zones::{SideZones, Zone};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Idle,
    Queuing,
    Matched,
}

/// Runs one match at a time against the scripted opponent.
///
/// ## Usage
///
/// ```
/// use std::time::Duration;
/// use gacha_duel::battle::{BattleEngine, MatchPhase, Turn};
/// use gacha_duel::cards::{CardCatalog, CardInstance};
/// use gacha_duel::core::{GameRng, InstanceId, MatchConfig, ScriptedDice};
///
/// let catalog = CardCatalog::standard();
/// let golem = catalog.get("Stone Golem").unwrap();
/// let deck: Vec<_> = (1..=10)
///     .map(|i| CardInstance::new(InstanceId(i), golem.clone()))
///     .collect();
///
/// let mut battle = BattleEngine::new(MatchConfig::default(), GameRng::new(7))
///     .with_dice(ScriptedDice::new([5, 2]));
///
/// battle.start_queue(deck).unwrap();
/// battle.advance(Duration::from_millis(900));
/// battle.roll_for_turn().unwrap();
///
/// assert_eq!(battle.phase(), MatchPhase::Matched(Turn::Player));
/// ```
pub struct BattleEngine {
    config: MatchConfig,
    stage: Stage,
    state: Match,
    deck: Vec<CardInstance>,
    generation: Generation,
    scheduler: Scheduler,
    rng: GameRng,
    dice: Box<dyn Dice + Send>,
    policy: Box<dyn OpponentPolicy>,
    listener: Option<Box<dyn MatchListener>>,
}

impl BattleEngine {
    /// Create an idle engine. Shuffles and dice both draw from `rng`.
    #[must_use]
    pub fn new(config: MatchConfig, rng: GameRng) -> Self {
        let dice = rng.for_context("dice");
        let rng = rng.for_context("shuffle");
        Self {
            state: Match::new(config.starting_hp),
            config,
            stage: Stage::Idle,
            deck: Vec::new(),
            generation: Generation::default(),
            scheduler: Scheduler::new(),
            rng,
            dice: Box::new(dice),
            policy: Box::new(FrontOfHand),
            listener: None,
        }
    }

    /// Replace the dice used for turn order and attack rolls.
    #[must_use]
    pub fn with_dice(mut self, dice: impl Dice + Send + 'static) -> Self {
        self.dice = Box::new(dice);
        self
    }

    /// Replace how the opponent chooses its card.
    #[must_use]
    pub fn with_policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Observe lifecycle events.
    #[must_use]
    pub fn with_listener(mut self, listener: impl MatchListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn set_listener(&mut self, listener: impl MatchListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Queue for a match with `deck`.
    ///
    /// Matchmaking finishes after the configured delay; both sides then get
    /// a shuffled copy of the deck and draw their opening hand.
    pub fn start_queue(&mut self, deck: Vec<CardInstance>) -> Result<(), BattleError> {
        if self.stage != Stage::Idle {
            return Err(BattleError::AlreadyActive);
        }
        if deck.len() < self.config.min_deck_size {
            return Err(BattleError::InsufficientDeck {
                size: deck.len(),
                required: self.config.min_deck_size,
            });
        }

        self.generation = self.generation.next();
        self.deck = deck;
        self.stage = Stage::Queuing;
        self.state = Match::new(self.config.starting_hp);
        self.scheduler
            .schedule(self.config.matchmaking_delay(), self.generation, TimerEvent::MatchFound);

        info!(generation = self.generation.0, deck = self.deck.len(), "queued for match");
        Ok(())
    }

    /// Roll one die per side to decide who goes first. The player wins ties.
    pub fn roll_for_turn(&mut self) -> Result<Side, BattleError> {
        self.ensure_in_match()?;
        if self.state.turn != Turn::Undecided {
            return Err(BattleError::AlreadyDecided);
        }

        let player = self.dice.roll_d6();
        let opponent = self.dice.roll_d6();
        self.state.last_roll = Some(player);
        self.state.log.push(
            LogKind::System,
            format!("You rolled {player}, opponent rolled {opponent}"),
        );

        let first = rules::first_turn(player, opponent);
        info!(player, opponent, first = %first, "turn order decided");
        self.begin_turn(first);
        Ok(first)
    }

    /// Play a card from the player's hand.
    ///
    /// The attack roll happens now; the hit lands when the resolution timer
    /// fires. The card stays in hand until then and no second play is
    /// accepted.
    pub fn play_card(&mut self, card: InstanceId) -> Result<u8, BattleError> {
        self.ensure_in_match()?;
        match self.state.turn {
            Turn::Undecided => return Err(BattleError::TurnUndecided),
            Turn::Opponent => return Err(BattleError::NotYourTurn),
            Turn::Player => {}
        }
        if self.state.pending_play.is_some() {
            return Err(BattleError::PlayInFlight);
        }
        if self.state.zones[Side::Player].hand_card(card).is_none() {
            return Err(BattleError::CardNotInHand(card));
        }

        let roll = self.dice.roll_d6();
        self.state.last_roll = Some(roll);
        self.state.pending_play = Some(PendingPlay { card, roll });
        self.scheduler
            .schedule(self.config.resolution_delay(), self.generation, TimerEvent::ResolvePlay);

        debug!(card = %card, roll, "play started");
        Ok(roll)
    }

    /// Abandon whatever is in progress and return to idle.
    ///
    /// Pending timers from the old match are dropped and will never fire.
    pub fn reset(&mut self) {
        let dropped = self.scheduler.cancel(self.generation);
        self.generation = self.generation.next();
        self.stage = Stage::Idle;
        self.deck.clear();
        self.state = Match::new(self.config.starting_hp);

        info!(generation = self.generation.0, dropped_timers = dropped, "match reset");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_match_reset();
        }
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Advance virtual time by `elapsed`, firing every timer that comes due.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now() + elapsed;
        while let Some(fired) = self.scheduler.pop_due(until) {
            self.fire(fired);
        }
        self.scheduler.advance_to(until);
    }

    /// Run timers until none are pending. Returns how many fired.
    pub fn settle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.scheduler.next_due() {
            if let Some(timer) = self.scheduler.pop_due(due) {
                self.fire(timer);
                fired += 1;
            }
        }
        fired
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    fn fire(&mut self, fired: Fired) {
        if fired.generation != self.generation {
            trace!(event = ?fired.event, stale = fired.generation.0, "dropping stale timer");
            return;
        }
        trace!(event = ?fired.event, at = ?fired.at, "timer fired");
        match fired.event {
            TimerEvent::MatchFound => self.on_match_found(),
            TimerEvent::ResolvePlay => self.on_resolve_play(),
            TimerEvent::OpponentTurn => self.on_opponent_turn(),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn on_match_found(&mut self) {
        if self.stage != Stage::Queuing {
            return;
        }

        let hand_size = self.config.starting_hand_size;
        for side in Side::ALL {
            let mut zones = SideZones::shuffled(&self.deck, &mut self.rng);
            zones.draw_many(hand_size);
            self.state.zones[side] = zones;
        }
        self.stage = Stage::Matched;
        self.state
            .log
            .push(LogKind::System, "Matched! Roll the die to decide who starts.");

        info!(generation = self.generation.0, "match found");
    }

    fn on_resolve_play(&mut self) {
        let Some(play) = self.state.pending_play.take() else {
            return;
        };
        if self.stage != Stage::Matched || self.state.winner.is_some() {
            return;
        }

        self.strike(Side::Player, play.card, play.roll);
        if self.state.winner.is_none() {
            self.begin_turn(Side::Opponent);
        }
    }

    fn on_opponent_turn(&mut self) {
        if self.stage != Stage::Matched
            || self.state.winner.is_some()
            || self.state.turn != Turn::Opponent
        {
            return;
        }

        let hand = self.state.zones[Side::Opponent].hand();
        match self.policy.choose_card(hand, &mut self.rng) {
            Some(card) => {
                let roll = self.dice.roll_d6();
                self.state.last_roll = Some(roll);
                self.strike(Side::Opponent, card, roll);
            }
            None => debug!("opponent has no card to play, passing"),
        }

        if self.state.winner.is_none() {
            self.begin_turn(Side::Player);
        }
    }

    /// Hand the turn to `side`.
    ///
    /// The player draws one card if the hand has room; the opponent's turn
    /// is scheduled after its think delay.
    fn begin_turn(&mut self, side: Side) {
        self.state.turn = side.into();
        match side {
            Side::Player => {
                let zones = &mut self.state.zones[Side::Player];
                if zones.size(Zone::Hand) < self.config.max_hand_size {
                    if let Some(card) = zones.draw() {
                        debug!(card = %card.id, "player draws");
                    }
                }
            }
            Side::Opponent => {
                self.scheduler
                    .schedule(self.config.opponent_delay(), self.generation, TimerEvent::OpponentTurn);
            }
        }
    }

    /// `attacker` plays `card` from hand with `roll`, damaging the other side.
    fn strike(&mut self, attacker: Side, card: InstanceId, roll: u8) {
        let Some(card) = self.state.zones[attacker].discard_from_hand(card).cloned() else {
            return;
        };

        let target = attacker.other();
        let dealt = rules::damage(card.power(), roll);
        self.state.hp[target] = rules::apply_damage(self.state.hp[target], dealt);

        let message = match attacker {
            Side::Player => format!(
                "You play {} (Power {}) with roll {roll} → deal {dealt}",
                card.key(),
                card.power()
            ),
            Side::Opponent => format!(
                "Opponent plays {} (Power {}) with roll {roll} → deals {dealt}",
                card.key(),
                card.power()
            ),
        };
        self.state.log.push(attacker.into(), message);
        debug!(attacker = %attacker, card = card.key(), roll, dealt, hp = self.state.hp[target], "hit");

        if let Some(winner) = rules::winner(&self.state.hp) {
            self.state.winner = Some(winner);
            let message = match winner {
                Side::Player => "You win!",
                Side::Opponent => "Defeat...",
            };
            self.state.log.push(LogKind::System, message);
            info!(winner = %winner, "match finished");
        }
    }

    fn ensure_in_match(&self) -> Result<(), BattleError> {
        match self.stage {
            Stage::Idle | Stage::Queuing => Err(BattleError::MatchNotActive),
            Stage::Matched if self.state.winner.is_some() => Err(BattleError::MatchFinished),
            Stage::Matched => Ok(()),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        match self.stage {
            Stage::Idle => MatchPhase::Idle,
            Stage::Queuing => MatchPhase::Queuing,
            Stage::Matched => match self.state.winner {
                Some(winner) => MatchPhase::Finished(winner),
                None => MatchPhase::Matched(self.state.turn),
            },
        }
    }

    #[must_use]
    pub fn hp(&self, side: Side) -> u32 {
        self.state.hp[side]
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardInstance] {
        self.state.zones[side].hand()
    }

    #[must_use]
    pub fn zones(&self, side: Side) -> &SideZones {
        &self.state.zones[side]
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.state.last_roll
    }

    /// Whether a player play is waiting to resolve.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.state.pending_play.is_some()
    }

    #[must_use]
    pub fn log(&self) -> &CombatLog {
        &self.state.log
    }

    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(self.phase(), &self.state)
    }
}

impl std::fmt::Debug for BattleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleEngine")
            .field("phase", &self.phase())
            .field("generation", &self.generation)
            .field("hp", &self.state.hp)
            .field("pending_timers", &self.scheduler.len())
            .finish_non_exhaustive()
    }
}
