//! Read-only views of the live table and archived tricks.

use serde::{Deserialize, Serialize};

use super::cards_logic::beats;
use super::cards_types::{Card, Trump};
use super::state::{Seat, TrickPlay};

/// A trick as shown to the table: the plays in order plus the card no other
/// play dominates, and the seat that put it there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrickView {
    pub cards: Vec<Card>,
    pub top_card: Option<Card>,
    pub top_seat: Option<Seat>,
}

/// Recompute the view by a max scan under `beats`.
pub fn trick_view(plays: &[TrickPlay], trump: Trump) -> TrickView {
    let mut top: Option<TrickPlay> = None;
    for play in plays {
        let replace = match top {
            None => true,
            Some(best) => beats(play.card, best.card, trump),
        };
        if replace {
            top = Some(*play);
        }
    }
    TrickView {
        cards: plays.iter().map(|p| p.card).collect(),
        top_card: top.map(|p| p.card),
        top_seat: top.map(|p| p.seat),
    }
}
