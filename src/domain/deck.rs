//! The 32-card deck: a shuffled, double-ended draw source.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::{Card, Rank, Suit};

pub const DECK_SIZE: usize = 32;

// Sevens are recognized by the parser but never dealt.
const DEALT_RANKS: [Rank; 8] = [
    Rank::Six,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

const SUITS: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

/// Two independent cursors allow drawing from the front and the back at the
/// same time, which the pants deals rely on. Cursor wrap-around is a safety
/// net only; correct play never draws past the other cursor.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    front: usize,
    back: usize,
}

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in SUITS {
            for rank in DEALT_RANKS {
                cards.push(Card { suit, rank });
            }
        }
        Self {
            cards,
            front: 0,
            back: DECK_SIZE - 1,
        }
    }

    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Returns the card at the front cursor and advances it.
    pub fn draw_front(&mut self) -> Card {
        if self.front == DECK_SIZE {
            self.front = 0;
        }
        let card = self.cards[self.front];
        self.front += 1;
        card
    }

    /// Returns the card at the back cursor and regresses it.
    pub fn draw_back(&mut self) -> Card {
        if self.back == 0 {
            self.back = DECK_SIZE - 1;
        }
        let card = self.cards[self.back];
        self.back -= 1;
        card
    }

    /// Cards not yet drawn from either end.
    pub fn rest_count(&self) -> usize {
        (self.back as isize - self.front as isize + 1).max(0) as usize
    }

    #[cfg(test)]
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        assert_eq!(cards.len(), DECK_SIZE, "a stacked deck must hold 32 cards");
        Self {
            cards,
            front: 0,
            back: DECK_SIZE - 1,
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
