//! Battle engine tests.
//!
//! These tests drive whole matches through the public API:
//! - Matchmaking deals from a shuffled copy of the deck
//! - Forced dice give exact damage and turn order
//! - Lethal hits end the match with the right log line
//! - Reset cancels every pending transition

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;

use gacha_duel::battle::{BattleEngine, MatchPhase, Turn, UniformCard};
use gacha_duel::cards::{CardCatalog, CardDefinition, CardInstance, Rarity};
use gacha_duel::core::{GameRng, InstanceId, MatchConfig, ScriptedDice, Side};
use gacha_duel::error::BattleError;
use gacha_duel::zones::Zone;

fn ones() -> Vec<CardInstance> {
    let def = Arc::new(CardDefinition::new("Stone Golem", Rarity::N, 1, 1));
    (1..=10).map(|i| CardInstance::new(InstanceId(i), Arc::clone(&def))).collect()
}

fn mixed() -> Vec<CardInstance> {
    let defs: Vec<_> = CardCatalog::standard().iter().cloned().collect();
    (0..10)
        .map(|i| CardInstance::new(InstanceId(i as u64 + 1), Arc::clone(&defs[i % defs.len()])))
        .collect()
}

fn scripted(config: MatchConfig, rolls: impl IntoIterator<Item = u8>) -> BattleEngine {
    BattleEngine::new(config, GameRng::new(99)).with_dice(ScriptedDice::new(rolls))
}

fn sorted_ids<'a>(cards: impl Iterator<Item = &'a CardInstance>) -> Vec<u64> {
    let mut ids: Vec<_> = cards.map(|c| c.id.raw()).collect();
    ids.sort_unstable();
    ids
}

fn front(battle: &BattleEngine) -> InstanceId {
    battle.hand(Side::Player)[0].id
}

/// Test the opening deal: three in hand, seven in the pile, nothing lost.
#[test]
fn test_matchmaking_deals_each_side() {
    let deck = mixed();
    let mut battle = BattleEngine::new(MatchConfig::default(), GameRng::new(1));

    battle.start_queue(deck.clone()).unwrap();
    assert_eq!(battle.phase(), MatchPhase::Queuing);
    battle.settle();

    assert_eq!(battle.phase(), MatchPhase::Matched(Turn::Undecided));
    let expected = sorted_ids(deck.iter());
    for side in Side::ALL {
        let zones = battle.zones(side);
        assert_eq!(zones.size(Zone::Hand), 3);
        assert_eq!(zones.size(Zone::DrawPile), 7);
        assert_eq!(sorted_ids(zones.hand().iter().chain(zones.draw_pile())), expected);
    }
    assert_eq!(battle.hp(Side::Player), 20);
    assert_eq!(battle.hp(Side::Opponent), 20);
}

/// Test the reference exchange: power 1 with a roll of 6 deals 7.
#[test]
fn test_forced_player_hit() {
    let mut battle = scripted(MatchConfig::default(), [4, 4, 6]);
    battle.start_queue(ones()).unwrap();
    battle.advance(Duration::from_millis(900));

    assert_eq!(battle.roll_for_turn(), Ok(Side::Player));
    battle.play_card(front(&battle)).unwrap();
    battle.advance(Duration::from_millis(500));

    assert_eq!(battle.hp(Side::Opponent), 13);
    assert_eq!(battle.phase(), MatchPhase::Matched(Turn::Opponent));
    assert_eq!(battle.last_roll(), Some(6));
}

/// Test a whole exchange: player hits, opponent answers, player draws.
#[test]
fn test_full_round() {
    let mut battle = scripted(MatchConfig::default(), [6, 2, 3, 5]);
    battle.start_queue(ones()).unwrap();
    battle.settle();
    battle.roll_for_turn().unwrap();
    assert_eq!(battle.hand(Side::Player).len(), 4);

    battle.play_card(front(&battle)).unwrap();
    battle.settle();

    assert_eq!(battle.hp(Side::Opponent), 16);
    assert_eq!(battle.hp(Side::Player), 14);
    assert_eq!(battle.phase(), MatchPhase::Matched(Turn::Player));
    // Played one, drew one at the start of each of the player's turns
    assert_eq!(battle.hand(Side::Player).len(), 4);
    assert_eq!(battle.hand(Side::Opponent).len(), 2);

    let log: Vec<_> = battle.log().iter().rev().map(|e| e.message.as_str()).collect();
    assert_eq!(
        log,
        vec![
            "Matched! Roll the die to decide who starts.",
            "You rolled 6, opponent rolled 2",
            "You play Stone Golem (Power 1) with roll 3 → deal 4",
            "Opponent plays Stone Golem (Power 1) with roll 5 → deals 6",
        ]
    );
}

/// Test that a lethal hit ends the match in the player's favour.
#[test]
fn test_lethal_hit() {
    let config = MatchConfig::default().with_starting_hp(1);
    let mut battle = scripted(config, [6, 1, 1]);
    battle.start_queue(ones()).unwrap();
    battle.settle();
    battle.roll_for_turn().unwrap();

    battle.play_card(front(&battle)).unwrap();
    battle.settle();

    assert_eq!(battle.phase(), MatchPhase::Finished(Side::Player));
    assert_eq!(battle.log().head().unwrap().message, "You win!");
    assert_eq!(battle.hp(Side::Opponent), 0);
    assert_eq!(battle.hp(Side::Player), 1);
}

/// Test that the opponent can win on its first turn.
#[test]
fn test_opponent_wins() {
    let config = MatchConfig::default().with_starting_hp(3);
    let mut battle = scripted(config, [1, 2, 6]);
    battle.start_queue(ones()).unwrap();
    battle.settle();

    assert_eq!(battle.roll_for_turn(), Ok(Side::Opponent));
    battle.settle();

    assert_eq!(battle.phase(), MatchPhase::Finished(Side::Opponent));
    assert_eq!(battle.log().head().unwrap().message, "Defeat...");
    assert_eq!(battle.roll_for_turn(), Err(BattleError::MatchFinished));
}

/// Test that a reset mid-resolution means the hit never lands.
#[test]
fn test_reset_cancels_resolution() {
    let mut battle = scripted(MatchConfig::default(), [6, 1, 6]);
    battle.start_queue(ones()).unwrap();
    battle.settle();
    battle.roll_for_turn().unwrap();
    battle.play_card(front(&battle)).unwrap();

    battle.reset();
    battle.advance(Duration::from_secs(5));

    assert_eq!(battle.phase(), MatchPhase::Idle);
    assert_eq!(battle.hp(Side::Opponent), 20);
    assert_eq!(battle.pending_timers(), 0);
    assert!(battle.log().is_empty());
}

/// Test reset from every phase.
#[test]
fn test_reset_from_any_phase() {
    let mut battle = scripted(MatchConfig::default().with_starting_hp(1), [6, 1, 6]);
    battle.reset();
    assert_eq!(battle.phase(), MatchPhase::Idle);

    battle.start_queue(ones()).unwrap();
    battle.reset();
    assert_eq!(battle.phase(), MatchPhase::Idle);

    battle.start_queue(ones()).unwrap();
    battle.settle();
    battle.reset();
    assert_eq!(battle.phase(), MatchPhase::Idle);

    battle.start_queue(ones()).unwrap();
    battle.settle();
    battle.roll_for_turn().unwrap();
    battle.play_card(front(&battle)).unwrap();
    battle.settle();
    assert!(battle.phase().is_finished());
    battle.reset();
    assert_eq!(battle.phase(), MatchPhase::Idle);
    assert_eq!(battle.hp(Side::Opponent), 1);
}

/// Test that the snapshot mirrors the engine and survives JSON.
#[test]
fn test_snapshot() {
    let mut battle = scripted(MatchConfig::default(), [6, 1, 2]);
    battle.start_queue(ones()).unwrap();
    battle.settle();
    battle.roll_for_turn().unwrap();
    battle.play_card(front(&battle)).unwrap();

    let snapshot = battle.snapshot();
    assert!(snapshot.resolving);
    assert_eq!(snapshot.turn(), Some(Turn::Player));
    assert_eq!(snapshot.hands[Side::Player].len(), 4);
    assert_eq!(snapshot.draw_pile_sizes[Side::Player], 6);
    assert_eq!(snapshot.last_roll, Some(2));
    assert_eq!(snapshot.log.len(), 2);

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: gacha_duel::battle::MatchSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

fn auto_play(battle: &mut BattleEngine) {
    battle.settle();
    battle.roll_for_turn().unwrap();
    for _ in 0..100 {
        match battle.phase() {
            MatchPhase::Matched(Turn::Player) => match battle.hand(Side::Player).first() {
                Some(card) => {
                    let id = card.id;
                    battle.play_card(id).unwrap();
                    battle.settle();
                }
                None => return,
            },
            MatchPhase::Matched(_) => {
                battle.settle();
            }
            _ => return,
        }
    }
}

proptest! {
    /// Random matches keep every card and end cleanly.
    #[test]
    fn prop_random_matches_conserve_cards(seed in any::<u64>(), uniform in any::<bool>()) {
        let mut battle = BattleEngine::new(MatchConfig::default(), GameRng::new(seed));
        if uniform {
            battle = battle.with_policy(UniformCard);
        }
        battle.start_queue(mixed()).unwrap();
        auto_play(&mut battle);

        for side in Side::ALL {
            prop_assert_eq!(battle.zones(side).total_cards(), 10);
            prop_assert!(battle.hp(side) <= 20);
        }
        prop_assert_eq!(battle.pending_timers(), 0);
        match battle.phase() {
            MatchPhase::Finished(winner) => {
                prop_assert_eq!(battle.hp(winner.other()), 0);
            }
            MatchPhase::Matched(Turn::Player) => {
                prop_assert!(battle.hand(Side::Player).is_empty());
            }
            other => prop_assert!(false, "unexpected phase {:?}", other),
        }
    }
}
