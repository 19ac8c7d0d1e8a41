use std::collections::HashSet;

use crate::domain::deal::Deal;
use crate::domain::deck::Deck;
use crate::domain::pants::{can_exchange, options_for, PantsKind};
use crate::domain::state::DealPhase;
use crate::domain::test_helpers::{card, cards, Recorder};
use crate::domain::variants::DealKind;
use crate::domain::{Card, Rank, Suit, Trump};
use crate::errors::domain::{DomainError, ValidationKind};

fn ordered_cards() -> Vec<Card> {
    let mut all = Vec::new();
    for suit in [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs] {
        for rank in [
            Rank::Six,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ] {
            all.push(Card { suit, rank });
        }
    }
    all
}

fn picked(indices: &[usize]) -> Vec<Card> {
    let all = ordered_cards();
    indices.iter().map(|&i| all[i]).collect()
}

#[test]
fn single_pants_dealing_swaps_back_through_the_deck() {
    let recorder = Recorder::default();
    let mut deal = Deal::new(
        DealKind::SinglePants,
        0,
        Deck::from_cards(ordered_cards()),
        Box::new(recorder.clone()),
    );
    deal.process_deal();

    // The owner drains the deck first, swapping its oldest cards to its
    // teammate twice before the teammate fills up; then the other seats.
    assert_eq!(deal.hand(0), picked(&[5, 26, 6, 25, 7, 24, 8, 23]));
    assert_eq!(deal.hand(1), picked(&[10, 21, 11, 20, 12, 19, 13, 18]));
    assert_eq!(deal.hand(2), picked(&[2, 29, 0, 31, 4, 27, 14, 17]));
    assert_eq!(deal.hand(3), picked(&[3, 28, 1, 30, 9, 22, 15, 16]));
    assert_eq!(deal.deck_rest(), 0);

    let dealt: HashSet<Card> = (0..4u8).flat_map(|s| deal.hand(s).to_vec()).collect();
    assert_eq!(dealt.len(), 32);

    assert_eq!(deal.phase(), DealPhase::TrumpSelect);
    assert_eq!(
        recorder.take(),
        vec!["hand_dealt(0)".to_string(), "trump_requested(0)".to_string()]
    );
}

#[test]
fn double_pants_dealing_falls_back_to_fewest_card_distribution() {
    let recorder = Recorder::default();
    let mut deal = Deal::new(
        DealKind::DoublePants,
        0,
        Deck::from_cards(ordered_cards()),
        Box::new(recorder.clone()),
    );
    deal.process_deal();

    // Every seat starts at the swap threshold with a teammate unable to
    // accept, so the remainder goes round one card at a time.
    assert_eq!(deal.hand(0), picked(&[0, 1, 31, 30, 8, 12, 16, 20]));
    assert_eq!(deal.hand(1), picked(&[2, 3, 29, 28, 9, 13, 17, 21]));
    assert_eq!(deal.hand(2), picked(&[4, 5, 27, 26, 10, 14, 18, 22]));
    assert_eq!(deal.hand(3), picked(&[6, 7, 25, 24, 11, 15, 19, 23]));
    assert_eq!(deal.deck_rest(), 0);
}

#[test]
fn pants_trump_selection_opens_the_exchange() {
    let recorder = Recorder::default();
    let mut deal = Deal::new(
        DealKind::SinglePants,
        2,
        Deck::from_cards(ordered_cards()),
        Box::new(recorder.clone()),
    );
    deal.process_deal();
    recorder.take();
    deal.set_trump(Trump::Spades).unwrap();
    assert_eq!(deal.phase(), DealPhase::PantsExchange);
    assert_eq!(deal.turn(), 2);
    assert_eq!(recorder.take(), vec!["pants_step_requested(2)".to_string()]);
}

fn single_exchange_deal(hands: [Vec<Card>; 4]) -> (Deal, Recorder) {
    let recorder = Recorder::default();
    let deal = Deal::with_state(
        DealKind::SinglePants,
        0,
        0,
        DealPhase::PantsExchange,
        Trump::Diamonds,
        hands,
        Box::new(recorder.clone()),
    );
    (deal, recorder)
}

#[test]
fn single_exchange_walks_the_table_and_hands_the_pile_to_the_top_card() {
    let (mut deal, recorder) = single_exchange_deal([
        cards(&["9♥", "6♥"]),
        cards(&["10♥", "8♥"]),
        cards(&["8♠", "9♠"]),
        cards(&["К♠", "6♠"]),
    ]);
    deal.play_pants(0, card("9♥"), None).unwrap();
    assert_eq!(deal.turn(), 1);
    // The first contribution stays hidden from the running pile view.
    assert!(recorder.contains("current_pants_shown(0 units)"));
    deal.play_pants(1, card("10♥"), None).unwrap();
    assert!(recorder.contains("current_pants_shown(1 units)"));
    deal.play_pants(2, card("8♠"), None).unwrap();
    recorder.take();
    deal.play_pants(3, card("К♠"), None).unwrap();

    // The king tops the pile; its team is not the owner's, so it leads.
    assert_eq!(deal.phase(), DealPhase::Trick);
    assert_eq!(deal.turn(), 3);
    assert_eq!(deal.captured(1), cards(&["9♥", "10♥", "8♠", "К♠"]));
    assert!(deal.captured(0).is_empty());
    assert_eq!(deal.hand(3), cards(&["6♠"]));
    assert_eq!(
        recorder.take(),
        vec![
            "pants_shown(left К♠ by 3, right none, next 3)".to_string(),
            "step_requested(3)".to_string(),
        ]
    );
}

#[test]
fn single_exchange_keeps_the_lead_with_the_owning_team() {
    let (mut deal, _) = single_exchange_deal([
        cards(&["9♥", "6♥"]),
        cards(&["10♥", "8♥"]),
        cards(&["К♠", "9♠"]),
        cards(&["8♠", "6♠"]),
    ]);
    deal.play_pants(0, card("9♥"), None).unwrap();
    deal.play_pants(1, card("10♥"), None).unwrap();
    deal.play_pants(2, card("К♠"), None).unwrap();
    deal.play_pants(3, card("8♠"), None).unwrap();
    // Seat 2 took the pile but shares a team with the owner: the owner leads.
    assert_eq!(deal.turn(), 0);
    assert_eq!(deal.captured(0).len(), 4);
}

#[test]
fn exchange_rejects_trump_cards_and_wrong_arity() {
    let (mut deal, _) = single_exchange_deal([
        cards(&["Д♥", "9♦", "9♥"]),
        cards(&["10♥", "8♥"]),
        cards(&["К♠", "9♠"]),
        cards(&["8♠", "6♠"]),
    ]);
    // A permanent trump is never eligible.
    let err = deal.play_pants(0, card("Д♥"), None).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CardNotEligible, _)
    ));
    // Neither is a card of the chosen suit.
    let err = deal.play_pants(0, card("9♦"), None).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CardNotEligible, _)
    ));
    // The single variant takes exactly one card.
    let err = deal.play_pants(0, card("9♥"), Some(card("9♦"))).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PantsArity, _)
    ));
    // Rejections left the exchange untouched.
    assert_eq!(deal.turn(), 0);
    assert_eq!(deal.hand(0).len(), 3);

    let err = deal.play_pants(1, card("10♥"), None).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::OutOfTurn, _)
    ));
}

#[test]
fn double_exchange_resolves_both_sides_independently() {
    let recorder = Recorder::default();
    let mut deal = Deal::with_state(
        DealKind::DoublePants,
        0,
        0,
        DealPhase::PantsExchange,
        Trump::Diamonds,
        [
            cards(&["9♥", "8♥", "6♥"]),
            cards(&["Т♥", "9♠", "6♠"]),
            cards(&["10♥", "8♠", "9♣"]),
            cards(&["К♥", "Т♠", "8♣"]),
        ],
        Box::new(recorder.clone()),
    );
    deal.play_pants(0, card("9♥"), Some(card("8♥"))).unwrap();
    deal.play_pants(1, card("Т♥"), Some(card("9♠"))).unwrap();
    deal.play_pants(2, card("10♥"), Some(card("8♠"))).unwrap();
    recorder.take();
    deal.play_pants(3, card("К♥"), Some(card("Т♠"))).unwrap();

    // Left goes to the ace of hearts (seat 1), right to the ace of spades
    // (seat 3); both winners sit on the non-owning team, so the seat after
    // the owner leads.
    assert_eq!(deal.turn(), 1);
    assert_eq!(deal.phase(), DealPhase::Trick);
    assert_eq!(deal.captured(1).len(), 8);
    assert!(deal.captured(0).is_empty());
    assert_eq!(
        recorder.take(),
        vec![
            "pants_shown(left Т♥ by 1, right Т♠ by 3, next 1)".to_string(),
            "step_requested(1)".to_string(),
        ]
    );
}

#[test]
fn double_exchange_requires_a_pair() {
    let recorder = Recorder::default();
    let mut deal = Deal::with_state(
        DealKind::DoublePants,
        0,
        0,
        DealPhase::PantsExchange,
        Trump::Diamonds,
        [
            cards(&["9♥", "8♥"]),
            cards(&["Т♥", "9♠"]),
            cards(&["10♥", "8♠"]),
            cards(&["К♥", "Т♠"]),
        ],
        Box::new(recorder.clone()),
    );
    let err = deal.play_pants(0, card("9♥"), None).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PantsArity, _)
    ));
}

#[test]
fn exchange_readiness_ignores_trumps_and_aces() {
    assert!(can_exchange(&cards(&["9♥", "10♥"]), Trump::Diamonds));
    // An ace does not count towards the two spare cards.
    assert!(!can_exchange(&cards(&["9♥", "Т♥"]), Trump::Diamonds));
    // Neither do permanent trumps or cards of the chosen suit.
    assert!(!can_exchange(&cards(&["Д♥", "В♠", "6♣", "9♦"]), Trump::Diamonds));
    assert!(can_exchange(
        &cards(&["Д♥", "В♠", "9♥", "8♠"]),
        Trump::Diamonds
    ));
}

#[test]
fn exchange_readiness_is_queryable_per_seat_and_for_the_table() {
    let (deal, _) = single_exchange_deal([
        cards(&["9♥", "10♥"]),
        cards(&["8♥", "8♠"]),
        cards(&["9♠", "10♠"]),
        cards(&["Д♣", "Т♥"]),
    ]);
    assert!(deal.can_exchange(0));
    // Seat 3 holds only a permanent trump and an ace.
    assert!(!deal.can_exchange(3));
    assert!(!deal.exchange_ready());
}

#[test]
fn pants_options_list_eligible_units() {
    let hand = cards(&["9♥", "10♥", "Д♠", "6♦"]);
    // Two eligible cards under diamonds: the queen is permanent trump and
    // the six of diamonds follows the chosen suit.
    let single = options_for(PantsKind::Single, &hand, Trump::Diamonds);
    assert_eq!(single.len(), 2);
    assert!(single.iter().all(|u| u.right.is_none()));

    // The double variant offers ordered pairs.
    let double = options_for(PantsKind::Double, &hand, Trump::Diamonds);
    assert_eq!(double.len(), 2);
    assert!(double.iter().all(|u| u.right.is_some()));

    let three = cards(&["9♥", "10♥", "8♠"]);
    assert_eq!(options_for(PantsKind::Double, &three, Trump::Clubs).len(), 6);
}
