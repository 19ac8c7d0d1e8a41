//! Shared constructors and notification doubles for domain tests.

use std::sync::{Arc, Mutex};

use super::cards_types::Card;
use super::events::DealEvents;
use super::pants::{PantsSideView, PantsUnit};
use super::state::Seat;
use super::table::TrickView;

pub fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| card(t)).collect()
}

/// Records every notification as a compact string. Clones share the log, so
/// a test keeps one copy and hands the other to the deal under test.
#[derive(Clone, Default)]
pub struct Recorder(pub Arc<Mutex<Vec<String>>>);

impl Recorder {
    pub fn take(&self) -> Vec<String> {
        self.0.lock().unwrap().drain(..).collect()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.0.lock().unwrap().iter().any(|e| e == entry)
    }

    fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }
}

impl DealEvents for Recorder {
    fn trump_requested(&self, seat: Seat) {
        self.push(format!("trump_requested({seat})"));
    }

    fn hand_dealt(&self, seat: Seat) {
        self.push(format!("hand_dealt({seat})"));
    }

    fn step_requested(&self, seat: Seat) {
        self.push(format!("step_requested({seat})"));
    }

    fn trick_shown(&self, trick: &TrickView) {
        let top = match (trick.top_card, trick.top_seat) {
            (Some(card), Some(seat)) => format!("{card} by {seat}"),
            _ => "none".to_string(),
        };
        self.push(format!("trick_shown({} cards, {top})", trick.cards.len()));
    }

    fn pants_step_requested(&self, seat: Seat) {
        self.push(format!("pants_step_requested({seat})"));
    }

    fn pants_shown(&self, left: &PantsSideView, right: Option<&PantsSideView>, next_seat: Seat) {
        let right = match right {
            Some(view) => format!("{} by {}", view.top_card, view.top_seat),
            None => "none".to_string(),
        };
        self.push(format!(
            "pants_shown(left {} by {}, right {right}, next {next_seat})",
            left.top_card, left.top_seat,
        ));
    }

    fn current_pants_shown(&self, units: &[PantsUnit]) {
        self.push(format!("current_pants_shown({} units)", units.len()));
    }

    fn bonus_shown(&self, winner: Seat, loser: Seat) {
        self.push(format!("bonus_shown({winner}, {loser})"));
    }
}
