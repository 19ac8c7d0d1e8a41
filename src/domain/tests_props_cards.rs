//! Property tests for the ranking algebra (pure domain).
//!
//! Properties tested:
//! - `beats` is a strict total order on distinct cards under any trump
//! - The six of clubs is trump everywhere and tops every other trump
//! - The glyph codec round-trips every parseable card

use proptest::prelude::*;

use crate::domain::cards_logic::{beats, is_trump, SIX_OF_CLUBS};
use crate::domain::cards_types::{Card, Rank, Suit, Trump};

/// All 36 parseable cards: the 32 deck cards plus the four sevens.
fn all_cards() -> Vec<Card> {
    let mut cards = Vec::new();
    for suit in [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs] {
        for rank in [
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ] {
            cards.push(Card { suit, rank });
        }
    }
    cards
}

fn any_card() -> impl Strategy<Value = Card> {
    prop::sample::select(all_cards())
}

fn any_trump() -> impl Strategy<Value = Trump> {
    prop::sample::select(vec![
        Trump::Diamonds,
        Trump::Hearts,
        Trump::Spades,
        Trump::Clubs,
        Trump::NoTrump,
    ])
}

proptest! {
    /// Exactly one direction wins for distinct cards; none for equal ones.
    #[test]
    fn prop_beats_is_total_and_antisymmetric(
        a in any_card(),
        b in any_card(),
        trump in any_trump(),
    ) {
        if a == b {
            prop_assert!(!beats(a, b, trump));
            prop_assert!(!beats(b, a, trump));
        } else {
            prop_assert_eq!(beats(a, b, trump), !beats(b, a, trump));
        }
    }

    /// The order has no cycles of three.
    #[test]
    fn prop_beats_is_transitive(
        a in any_card(),
        b in any_card(),
        c in any_card(),
        trump in any_trump(),
    ) {
        if beats(a, b, trump) && beats(b, c, trump) {
            prop_assert!(beats(a, c, trump));
        }
    }

    /// The six of clubs is trump under every choice and beats every other
    /// trump card.
    #[test]
    fn prop_six_of_clubs_rules_the_trumps(
        other in any_card(),
        trump in any_trump(),
    ) {
        prop_assert!(is_trump(SIX_OF_CLUBS, trump));
        if other != SIX_OF_CLUBS && is_trump(other, trump) {
            prop_assert!(beats(SIX_OF_CLUBS, other, trump));
            prop_assert!(!beats(other, SIX_OF_CLUBS, trump));
        }
    }

    /// A trump card always beats a non-trump card.
    #[test]
    fn prop_trump_beats_plain(
        a in any_card(),
        b in any_card(),
        trump in any_trump(),
    ) {
        if is_trump(a, trump) && !is_trump(b, trump) {
            prop_assert!(beats(a, b, trump));
        }
    }

    /// parse(format(card)) == card for every parseable card.
    #[test]
    fn prop_glyph_codec_round_trips(card in any_card()) {
        let token = card.to_string();
        prop_assert_eq!(token.parse::<Card>().unwrap(), card);
    }
}
