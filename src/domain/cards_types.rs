//! Core card-related types: Card, Rank, Suit, Trump

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
}

/// A chosen trump. `NoTrump` means the deal is played with permanent trumps
/// only; it is never the suit of a card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
    NoTrump,
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Diamonds => Trump::Diamonds,
            Suit::Hearts => Trump::Hearts,
            Suit::Spades => Trump::Spades,
            Suit::Clubs => Trump::Clubs,
        }
    }
}

impl TryFrom<Trump> for Suit {
    type Error = DomainError;

    fn try_from(trump: Trump) -> Result<Self, Self::Error> {
        match trump {
            Trump::Diamonds => Ok(Suit::Diamonds),
            Trump::Hearts => Ok(Suit::Hearts),
            Trump::Spades => Ok(Suit::Spades),
            Trump::Clubs => Ok(Suit::Clubs),
            Trump::NoTrump => Err(DomainError::validation(
                ValidationKind::InvalidTrumpConversion,
                "Cannot convert NoTrump to Suit",
            )),
        }
    }
}

/// Card ranks, low to high. `Seven` parses from text but is never placed in
/// the deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

// Note: Ord/Eq on Card is only for stable sorting: suit order D<H<S<C then
// rank order. Do not use for trick resolution; that is `beats` in
// cards_logic, which layers trump status on top.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
