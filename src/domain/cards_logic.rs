//! Card strength: point values, permanent trumps, and the `beats` order.

use super::cards_types::{Card, Rank, Suit, Trump};

pub const SIX_OF_CLUBS: Card = Card {
    suit: Suit::Clubs,
    rank: Rank::Six,
};

pub const QUEEN_OF_CLUBS: Card = Card {
    suit: Suit::Clubs,
    rank: Rank::Queen,
};

/// Fixed point value of a card, independent of trump status.
pub fn point_value(card: Card) -> u8 {
    match card.rank {
        Rank::Ace => 11,
        Rank::Ten => 10,
        Rank::King => 4,
        Rank::Queen => 3,
        Rank::Jack => 2,
        _ => 0,
    }
}

/// Permanent trumps stay trump whatever suit is chosen: every queen, every
/// jack, and the six of clubs.
pub fn is_permanent_trump(card: Card) -> bool {
    card == SIX_OF_CLUBS || card.rank == Rank::Queen || card.rank == Rank::Jack
}

pub fn is_trump(card: Card, trump: Trump) -> bool {
    is_permanent_trump(card) || Trump::from(card.suit) == trump
}

/// Strict "a wins over b" under the chosen trump.
///
/// Trump beats non-trump; within equal trump status the higher rank wins,
/// with the six of clubs on top of every trump and suit order breaking rank
/// ties. This makes `beats` a strict total order on distinct cards.
pub fn beats(a: Card, b: Card, trump: Trump) -> bool {
    if a == b {
        return false;
    }
    let a_trump = is_trump(a, trump);
    let b_trump = is_trump(b, trump);
    if a_trump != b_trump {
        return a_trump;
    }
    if a_trump {
        if a == SIX_OF_CLUBS {
            return true;
        }
        if b == SIX_OF_CLUBS {
            return false;
        }
    }
    (a.rank, a.suit) > (b.rank, b.suit)
}
