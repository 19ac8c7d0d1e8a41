use std::sync::{Arc, Mutex};

use crate::domain::deal::Deal;
use crate::domain::pants::PantsUnit;
use crate::domain::state::DealPhase;
use crate::domain::test_helpers::{card, cards};
use crate::domain::variants::DealKind;
use crate::domain::{Card, Trump};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::services::events::{MatchEvents, PantsSideResult, PlayerId};
use crate::services::game_flow::GoatGame;

/// Transport double: records every notification as a compact string.
#[derive(Default)]
struct MatchRecorder(Mutex<Vec<String>>);

impl MatchRecorder {
    fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    fn take(&self) -> Vec<String> {
        self.0.lock().unwrap().drain(..).collect()
    }

    fn contains(&self, entry: &str) -> bool {
        self.0.lock().unwrap().iter().any(|e| e == entry)
    }
}

impl MatchEvents for MatchRecorder {
    fn trump_requested(&self, player: PlayerId) {
        self.push(format!("trump_requested({player})"));
    }

    fn hand_dealt(&self, player: PlayerId) {
        self.push(format!("hand_dealt({player})"));
    }

    fn step_requested(&self, player: PlayerId) {
        self.push(format!("step_requested({player})"));
    }

    fn trick_shown(&self, cards: &[Card], top_card: Option<Card>, top_player: Option<PlayerId>) {
        let top = match (top_card, top_player) {
            (Some(card), Some(player)) => format!("{card} by {player}"),
            _ => "none".to_string(),
        };
        self.push(format!("trick_shown({} cards, {top})", cards.len()));
    }

    fn deal_choice_requested(&self, player: PlayerId) {
        self.push(format!("deal_choice_requested({player})"));
    }

    fn pants_step_requested(&self, player: PlayerId) {
        self.push(format!("pants_step_requested({player})"));
    }

    fn pants_shown(
        &self,
        left: &PantsSideResult,
        right: Option<&PantsSideResult>,
        next_player: PlayerId,
    ) {
        let right = match right {
            Some(side) => format!("{} by {}", side.top_card, side.top_player),
            None => "none".to_string(),
        };
        self.push(format!(
            "pants_shown(left {} by {}, right {right}, next {next_player})",
            left.top_card, left.top_player,
        ));
    }

    fn current_pants_shown(&self, units: &[PantsUnit]) {
        self.push(format!("current_pants_shown({} units)", units.len()));
    }

    fn bonus_shown(&self, winner: PlayerId, loser: PlayerId) {
        self.push(format!("bonus_shown({winner}, {loser})"));
    }

    fn total_score_shown(&self, team_a: i32, team_b: i32) {
        self.push(format!("total_score_shown({team_a}, {team_b})"));
    }
}

// Identities: seat 0 = 10, seat 1 = 11, seat 2 = 12, seat 3 = 13.
fn full_table() -> (GoatGame, Arc<MatchRecorder>) {
    let recorder = Arc::new(MatchRecorder::default());
    let mut game = GoatGame::new(10, Arc::clone(&recorder) as Arc<dyn MatchEvents>);
    for id in [11, 12, 13] {
        game.add_player(id).unwrap();
    }
    (game, recorder)
}

fn install_trick_deal(game: &mut GoatGame, hands: [Vec<Card>; 4]) {
    game.install_deal(|events| {
        Deal::with_state(
            DealKind::AllCards,
            0,
            0,
            DealPhase::Trick,
            Trump::NoTrump,
            hands,
            events,
        )
    })
    .unwrap();
}

#[test]
fn seats_fill_in_join_order() {
    let recorder = Arc::new(MatchRecorder::default());
    let mut game = GoatGame::new(10, Arc::clone(&recorder) as Arc<dyn MatchEvents>);
    assert_eq!(game.need_player_count(), 3);
    game.add_player(11).unwrap();
    game.add_player(12).unwrap();
    assert_eq!(game.need_player_count(), 1);

    let err = game.add_player(11).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::SeatTaken, _)
    ));

    game.add_player(13).unwrap();
    assert_eq!(game.need_player_count(), 0);
    assert_eq!(game.seat_of(10), Some(0));
    assert_eq!(game.seat_of(13), Some(3));

    let err = game.add_player(14).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::TableFull, _)
    ));
}

#[test]
fn dealing_waits_for_a_full_table() {
    let recorder = Arc::new(MatchRecorder::default());
    let mut game = GoatGame::new(10, Arc::clone(&recorder) as Arc<dyn MatchEvents>);
    game.add_player(11).unwrap();
    let err = game.first_deal().unwrap_err();
    assert!(matches!(err, DomainError::Validation(_, _)));
    assert!(!game.is_waiting_for_trump());
}

#[test]
fn first_deal_asks_the_ace_holder_for_the_trump() {
    let (mut game, recorder) = full_table();
    game.first_deal().unwrap();
    assert!(game.is_waiting_for_trump());
    let owner = game.current_owner().unwrap();
    assert!([10, 11, 12, 13].contains(&owner));
    assert!(recorder.contains(&format!("trump_requested({owner})")));
    assert_eq!(game.hand(owner).unwrap().len(), 8);

    let outsider = [10, 11, 12, 13]
        .into_iter()
        .find(|&id| id != owner)
        .unwrap();
    let err = game.select_trump(outsider, Trump::Hearts).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::OutOfTurn, _)
    ));

    game.select_trump(owner, Trump::Hearts).unwrap();
    assert!(!game.is_waiting_for_trump());
    // The full deal hands the lead to the owner.
    assert!(game.is_waiting_for_card(owner));
}

#[test]
fn unknown_players_are_rejected() {
    let (mut game, _) = full_table();
    game.first_deal().unwrap();
    let err = game.play_card(99, card("Т♦")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::Player, _)
    ));
    assert!(game.hand(99).is_err());
    assert!(!game.is_waiting_for_card(99));
}

#[test]
fn completed_deal_settles_two_points_when_the_loser_crosses_30() {
    let (mut game, recorder) = full_table();
    install_trick_deal(
        &mut game,
        [
            cards(&["Т♦", "10♥"]),
            cards(&["Т♥", "10♠"]),
            cards(&["Т♠", "10♣"]),
            cards(&["10♦", "Т♣"]),
        ],
    );
    recorder.take();
    // First trick: three aces and a ten, taken by seat 2 (43 points).
    game.play_card(10, card("Т♦")).unwrap();
    game.play_card(11, card("Т♥")).unwrap();
    game.play_card(12, card("Т♠")).unwrap();
    game.play_card(13, card("10♦")).unwrap();
    assert!(game.is_waiting_for_card(12));
    let last = game.last_trick_view().unwrap();
    assert_eq!(last.top_card, Some(card("Т♠")));
    assert!(game.table_view().unwrap().cards.is_empty());
    // Second trick: the club ace takes the rest for seat 3 (41 points).
    game.play_card(12, card("10♣")).unwrap();
    game.play_card(13, card("Т♣")).unwrap();
    game.play_card(10, card("10♥")).unwrap();
    game.play_card(11, card("10♠")).unwrap();

    // 43 vs 41: the winners get 2 because the losers crossed 30.
    assert_eq!(game.scores(), (2, 0));
    assert!(recorder.contains("total_score_shown(2, 0)"));
    // The seat after the owner picks the next deal.
    assert!(recorder.contains("deal_choice_requested(11)"));
    assert!(game.is_waiting_for_deal_choice(11));
    assert!(!game.is_waiting_for_deal_choice(12));
}

#[test]
fn completed_deal_settles_four_points_below_30() {
    let (mut game, _) = full_table();
    install_trick_deal(
        &mut game,
        [
            cards(&["Т♦"]),
            cards(&["9♦"]),
            cards(&["8♦"]),
            cards(&["6♦"]),
        ],
    );
    game.play_card(10, card("Т♦")).unwrap();
    game.play_card(11, card("9♦")).unwrap();
    game.play_card(12, card("8♦")).unwrap();
    game.play_card(13, card("6♦")).unwrap();
    assert_eq!(game.scores(), (4, 0));
}

#[test]
fn jackpot_pays_the_team_of_the_six_of_clubs() {
    let (mut game, recorder) = full_table();
    install_trick_deal(
        &mut game,
        [
            cards(&["9♦"]),
            cards(&["Д♣"]),
            cards(&["8♠"]),
            cards(&["6♣"]),
        ],
    );
    recorder.take();
    game.play_card(10, card("9♦")).unwrap();
    game.play_card(11, card("Д♣")).unwrap();
    game.play_card(12, card("8♠")).unwrap();
    game.play_card(13, card("6♣")).unwrap();

    assert_eq!(game.scores(), (0, 4));
    assert!(recorder.contains("bonus_shown(13, 11)"));
    assert!(recorder.contains("total_score_shown(0, 4)"));
    assert!(recorder.contains("deal_choice_requested(11)"));
}

#[test]
fn next_deal_choice_is_gated_and_label_checked() {
    let (mut game, recorder) = full_table();
    install_trick_deal(
        &mut game,
        [
            cards(&["Т♦"]),
            cards(&["9♦"]),
            cards(&["8♦"]),
            cards(&["6♦"]),
        ],
    );
    // Too early: the deal is still running.
    let err = game.choose_next_deal(11, "По 2").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::OutOfTurn, _)
    ));

    for (id, token) in [(10, "Т♦"), (11, "9♦"), (12, "8♦"), (13, "6♦")] {
        game.play_card(id, card(token)).unwrap();
    }

    // Only the seat after the owner may call, and only a known label.
    let err = game.choose_next_deal(12, "По 2").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::OutOfTurn, _)
    ));
    let err = game.choose_next_deal(11, "По 7").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnknownDealLabel, _)
    ));

    recorder.take();
    game.choose_next_deal(11, "по 2").unwrap();
    // The chooser owns the staged deal and is asked for the trump.
    assert_eq!(game.current_owner(), Some(11));
    assert!(game.is_waiting_for_trump());
    assert!(recorder.contains("trump_requested(11)"));
    assert_eq!(game.hand(11).unwrap().len(), 2);
}

#[test]
fn pants_queries_only_apply_to_pants_deals() {
    let (mut game, _) = full_table();
    install_trick_deal(
        &mut game,
        [
            cards(&["Т♦"]),
            cards(&["9♦"]),
            cards(&["8♦"]),
            cards(&["6♦"]),
        ],
    );
    assert_eq!(game.available_pants_options(10), None);
    let err = game
        .play_pants_cards(10, card("Т♦"), None)
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
}

#[test]
fn pants_exchange_runs_through_the_match_layer() {
    let (mut game, recorder) = full_table();
    game.install_deal(|events| {
        Deal::with_state(
            DealKind::SinglePants,
            0,
            0,
            DealPhase::PantsExchange,
            Trump::Diamonds,
            [
                cards(&["9♥", "6♥"]),
                cards(&["10♥", "8♥"]),
                cards(&["8♠", "9♠"]),
                cards(&["К♠", "6♠"]),
            ],
            events,
        )
    })
    .unwrap();
    let options = game.available_pants_options(10).unwrap();
    assert_eq!(options.len(), 2);
    assert!(game.is_waiting_for_pants_cards(10));
    assert!(!game.is_waiting_for_pants_cards(11));

    recorder.take();
    game.play_pants_cards(10, card("9♥"), None).unwrap();
    assert!(recorder.contains("pants_step_requested(11)"));
    game.play_pants_cards(11, card("10♥"), None).unwrap();
    game.play_pants_cards(12, card("8♠"), None).unwrap();
    game.play_pants_cards(13, card("К♠"), None).unwrap();
    assert!(recorder.contains("pants_shown(left К♠ by 13, right none, next 13)"));
    assert!(game.is_waiting_for_card(13));
}

#[test]
fn deal_labels_expose_the_registry() {
    assert_eq!(
        GoatGame::deal_labels(),
        [
            "По всем",
            "По 2",
            "По 3",
            "По 4",
            "Одинарные штаны",
            "Двойные штаны",
        ]
    );
}
