//! Duel rules: turn order, damage, and the win check.
//!
//! These are pure functions over numbers so that the battle engine's state
//! machine and the tests agree on the arithmetic.

use crate::core::{Side, SideMap};

/// Who takes the first turn given both turn-order rolls.
///
/// The player wins ties.
#[must_use]
pub const fn first_turn(player_roll: u8, opponent_roll: u8) -> Side {
    if player_roll >= opponent_roll {
        Side::Player
    } else {
        Side::Opponent
    }
}

/// Damage dealt by a card of `power` played with a die roll of `roll`.
#[must_use]
pub const fn damage(power: u32, roll: u8) -> u32 {
    power.saturating_add(roll as u32)
}

/// HP left after taking `damage`, floored at 0.
#[must_use]
pub const fn apply_damage(hp: u32, damage: u32) -> u32 {
    hp.saturating_sub(damage)
}

/// The winning side, if the match is over.
///
/// The opponent's HP is checked first, so if both sides are at 0 the player
/// wins.
#[must_use]
pub fn winner(hp: &SideMap<u32>) -> Option<Side> {
    if hp[Side::Opponent] == 0 {
        Some(Side::Player)
    } else if hp[Side::Player] == 0 {
        Some(Side::Opponent)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_turn() {
        assert_eq!(first_turn(4, 3), Side::Player);
        assert_eq!(first_turn(3, 3), Side::Player);
        assert_eq!(first_turn(1, 6), Side::Opponent);
    }

    #[test]
    fn test_damage_and_floor() {
        assert_eq!(damage(1, 6), 7);
        assert_eq!(apply_damage(20, 7), 13);
        assert_eq!(apply_damage(3, 7), 0);
        assert_eq!(damage(u32::MAX, 6), u32::MAX);
    }

    #[test]
    fn test_winner() {
        let mut hp = SideMap::with_value(20u32);
        assert_eq!(winner(&hp), None);

        hp[Side::Player] = 0;
        assert_eq!(winner(&hp), Some(Side::Opponent));

        hp[Side::Opponent] = 0;
        assert_eq!(winner(&hp), Some(Side::Player));
    }
}
