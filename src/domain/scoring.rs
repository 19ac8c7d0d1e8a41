//! Capture-pile points and end-of-deal settlement.

use super::cards_logic::point_value;
use super::cards_types::Card;

/// Match points awarded outright for the bonus combination.
pub const JACKPOT_POINTS: i32 = 4;

/// Captured-card total below which the losing team concedes the full award.
pub const LOSER_CUTOFF: u32 = 30;

/// Point mass of a capture pile.
pub fn pile_points(cards: &[Card]) -> u32 {
    cards.iter().map(|&c| u32::from(point_value(c))).sum()
}

/// Settlement for a finished deal: the winning team's award depends only on
/// how far the loser got. Raw captured totals are not carried into the
/// match score.
pub fn settlement_points(loser_points: u32) -> i32 {
    if loser_points < LOSER_CUTOFF {
        4
    } else {
        2
    }
}
