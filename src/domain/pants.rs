//! The "pants" deals: double-ended staged dealing plus the one-shot card
//! exchange played before normal tricks resume.

use serde::{Deserialize, Serialize};

use super::cards_logic::{beats, is_trump};
use super::cards_types::{Card, Rank, Trump};
use super::deck::Deck;
use super::state::{nth_from, teammate_of, Seat, TrickPlay, SEATS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PantsKind {
    Single,
    Double,
}

impl PantsKind {
    /// Front/back pairs dealt to each seat before the draw cycle.
    fn start_pairs(self) -> usize {
        match self {
            PantsKind::Single => 1,
            PantsKind::Double => 2,
        }
    }

    /// Hand size at which a seat must swap its two oldest cards back.
    fn swap_threshold(self) -> usize {
        match self {
            PantsKind::Single => 8,
            PantsKind::Double => 4,
        }
    }

    /// Largest hand a teammate may hold and still accept a swap-back.
    fn accept_max(self) -> usize {
        match self {
            PantsKind::Single => 4,
            PantsKind::Double => 2,
        }
    }

    /// Cards per exchange contribution.
    pub fn unit_len(self) -> usize {
        match self {
            PantsKind::Single => 1,
            PantsKind::Double => 2,
        }
    }
}

/// Distribute the whole deck pants-style: start cards for every seat from
/// the owner onwards, then each seat draws front+back pairs (swapping back
/// to its teammate at the threshold) until it blocks, and whatever remains
/// goes one card at a time to the seat currently holding the fewest.
pub fn deal_out(kind: PantsKind, deck: &mut Deck, hands: &mut [Vec<Card>; SEATS], owner: Seat) {
    for i in 0..SEATS as u8 {
        let seat = nth_from(owner, i) as usize;
        for _ in 0..kind.start_pairs() {
            hands[seat].push(deck.draw_front());
        }
        for _ in 0..kind.start_pairs() {
            hands[seat].push(deck.draw_back());
        }
    }
    for i in 0..SEATS as u8 {
        let seat = nth_from(owner, i);
        while deck.rest_count() >= 2 && draw_step(kind, deck, hands, seat) {}
    }
    while deck.rest_count() > 0 {
        let seat = fewest_cards_seat(hands, owner) as usize;
        hands[seat].push(deck.draw_front());
    }
}

/// One draw for `seat`. A hand at the swap threshold hands its two oldest
/// cards to the teammate first; returns false when the teammate cannot
/// accept them and the seat is blocked.
fn draw_step(kind: PantsKind, deck: &mut Deck, hands: &mut [Vec<Card>; SEATS], seat: Seat) -> bool {
    if hands[seat as usize].len() >= kind.swap_threshold() {
        let mate = teammate_of(seat) as usize;
        if hands[mate].len() > kind.accept_max() {
            return false;
        }
        let oldest: Vec<Card> = hands[seat as usize].drain(..2).collect();
        hands[mate].extend(oldest);
    }
    hands[seat as usize].push(deck.draw_front());
    hands[seat as usize].push(deck.draw_back());
    true
}

fn fewest_cards_seat(hands: &[Vec<Card>; SEATS], owner: Seat) -> Seat {
    let mut best = owner;
    for i in 1..SEATS as u8 {
        let seat = nth_from(owner, i);
        if hands[seat as usize].len() < hands[best as usize].len() {
            best = seat;
        }
    }
    best
}

/// A seat is ready for the exchange once it can spare two cards that are
/// neither trump nor aces.
pub fn can_exchange(hand: &[Card], trump: Trump) -> bool {
    hand.iter()
        .filter(|&&c| !is_trump(c, trump) && c.rank != Rank::Ace)
        .count()
        >= 2
}

/// Exchange candidates for a hand: the non-trump cards, as single units or
/// as ordered left/right pairs for the double variant.
pub fn options_for(kind: PantsKind, hand: &[Card], trump: Trump) -> Vec<PantsUnit> {
    let eligible: Vec<Card> = hand.iter().copied().filter(|&c| !is_trump(c, trump)).collect();
    match kind {
        PantsKind::Single => eligible
            .into_iter()
            .map(|c| PantsUnit {
                left: c,
                right: None,
            })
            .collect(),
        PantsKind::Double => {
            let mut units = Vec::new();
            for (i, &left) in eligible.iter().enumerate() {
                for (j, &right) in eligible.iter().enumerate() {
                    if i != j {
                        units.push(PantsUnit {
                            left,
                            right: Some(right),
                        });
                    }
                }
            }
            units
        }
    }
}

/// One exchange contribution as shown to the table: a single card, or a
/// left/right pair for the double variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PantsUnit {
    pub left: Card,
    pub right: Option<Card>,
}

/// A resolved exchange side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantsSideView {
    pub cards: Vec<Card>,
    pub top_card: Card,
    pub top_seat: Seat,
}

/// Highest card wins a side. Trump never participates: trump cards are not
/// eligible for the exchange, so the no-trump order is the plain rank order.
pub fn side_view(plays: &[TrickPlay]) -> Option<PantsSideView> {
    let mut top = *plays.first()?;
    for play in &plays[1..] {
        if beats(play.card, top.card, Trump::NoTrump) {
            top = *play;
        }
    }
    Some(PantsSideView {
        cards: plays.iter().map(|p| p.card).collect(),
        top_card: top.card,
        top_seat: top.seat,
    })
}

/// Exchange piles for one pants deal.
#[derive(Debug, Clone)]
pub struct PantsRound {
    kind: PantsKind,
    left: Vec<TrickPlay>,
    right: Vec<TrickPlay>,
}

impl PantsRound {
    pub fn new(kind: PantsKind) -> Self {
        Self {
            kind,
            left: Vec::with_capacity(SEATS),
            right: Vec::with_capacity(SEATS),
        }
    }

    pub fn kind(&self) -> PantsKind {
        self.kind
    }

    pub fn push(&mut self, seat: Seat, left: Card, right: Option<Card>) {
        self.left.push(TrickPlay { seat, card: left });
        if let Some(card) = right {
            self.right.push(TrickPlay { seat, card });
        }
    }

    pub fn is_complete(&self) -> bool {
        self.left.len() == SEATS
    }

    pub fn left_plays(&self) -> &[TrickPlay] {
        &self.left
    }

    pub fn right_plays(&self) -> &[TrickPlay] {
        &self.right
    }

    /// Contributions so far, the first one hidden.
    pub fn unit_views(&self) -> Vec<PantsUnit> {
        if self.left.len() < 2 {
            return Vec::new();
        }
        (1..self.left.len())
            .map(|i| PantsUnit {
                left: self.left[i].card,
                right: self.right.get(i).map(|p| p.card),
            })
            .collect()
    }
}
