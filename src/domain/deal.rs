//! One round of the match: dealing, trump selection, trick play, and the
//! bonus interrupt, driven entirely by externally-arriving player actions.

use crate::errors::domain::{DomainError, ValidationKind};

use super::cards_logic::{is_trump, QUEEN_OF_CLUBS, SIX_OF_CLUBS};
use super::cards_types::{Card, Rank, Suit, Trump};
use super::deck::Deck;
use super::events::DealEvents;
use super::pants::{self, PantsRound, PantsUnit};
use super::scoring::pile_points;
use super::state::{
    next_seat, nth_from, team_of, DealPhase, Seat, TeamIndex, TrickPlay, SEATS, TEAMS,
};
use super::table::{trick_view, TrickView};
use super::variants::DealKind;

// The ace of diamonds claims ownership of a full deal.
const OWNER_CARD: Card = Card {
    suit: Suit::Diamonds,
    rank: Rank::Ace,
};

/// What a single play did to the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Card accepted; the deal continues.
    Played,
    /// The bonus combination fired and ended the deal early.
    Jackpot,
    /// The final trick resolved; the deal is complete.
    Completed,
}

pub struct Deal {
    kind: DealKind,
    deck: Deck,
    owner: Seat,
    turn: Seat,
    phase: DealPhase,
    trump: Option<Trump>,
    started: bool,
    hands: [Vec<Card>; SEATS],
    taken: [Vec<Card>; TEAMS],
    table: Vec<TrickPlay>,
    history: Vec<Vec<TrickPlay>>,
    pants: Option<PantsRound>,
    events: Box<dyn DealEvents>,
}

impl Deal {
    /// A fresh deal over a shuffled deck. The notifier is fixed for the
    /// deal's lifetime.
    pub fn new(kind: DealKind, owner: Seat, deck: Deck, events: Box<dyn DealEvents>) -> Self {
        Self {
            kind,
            deck,
            owner,
            turn: owner,
            phase: DealPhase::Dealing,
            trump: None,
            started: false,
            hands: Default::default(),
            taken: Default::default(),
            table: Vec::with_capacity(SEATS),
            history: Vec::new(),
            pants: kind.pants_kind().map(PantsRound::new),
            events,
        }
    }

    pub fn kind(&self) -> DealKind {
        self.kind
    }

    pub fn owner(&self) -> Seat {
        self.owner
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn phase(&self) -> DealPhase {
        self.phase
    }

    /// `None` until the owner has chosen; `Some(NoTrump)` is a valid choice.
    pub fn trump(&self) -> Option<Trump> {
        self.trump
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat as usize]
    }

    pub fn captured(&self, team: TeamIndex) -> &[Card] {
        &self.taken[team]
    }

    pub fn trick_history(&self) -> &[Vec<TrickPlay>] {
        &self.history
    }

    pub fn is_completed(&self) -> bool {
        self.started && self.hands.iter().all(|hand| hand.is_empty())
    }

    /// Whether the deal has reached a terminal state, by playing out or by
    /// the bonus interrupt. The match moves on to the next deal on either.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, DealPhase::JackpotEnded | DealPhase::Complete)
    }

    pub fn team_score(&self, team: TeamIndex) -> u32 {
        pile_points(&self.taken[team])
    }

    fn current_trump(&self) -> Trump {
        self.trump.unwrap_or(Trump::NoTrump)
    }

    /// Distribute cards per the deal kind, then hand the owner its cards and
    /// ask it for the trump.
    pub fn process_deal(&mut self) {
        match self.kind {
            DealKind::AllCards => self.deal_all_cards(),
            DealKind::Staged(per_seat) => self.deal_staged_batch(per_seat),
            DealKind::SinglePants | DealKind::DoublePants => {
                if let Some(kind) = self.kind.pants_kind() {
                    pants::deal_out(kind, &mut self.deck, &mut self.hands, self.owner);
                }
            }
        }
        self.phase = DealPhase::TrumpSelect;
        self.events.hand_dealt(self.owner);
        self.events.trump_requested(self.owner);
    }

    fn deal_all_cards(&mut self) {
        for _ in 0..8 {
            for seat in 0..SEATS {
                self.hands[seat].push(self.deck.draw_front());
            }
        }
        for seat in 0..SEATS as Seat {
            if self.hands[seat as usize].iter().any(|&c| c == OWNER_CARD) {
                self.owner = seat;
                break;
            }
        }
        self.turn = self.owner;
    }

    fn deal_staged_batch(&mut self, per_seat: u8) {
        for i in 0..SEATS as u8 {
            let seat = nth_from(self.owner, i) as usize;
            for _ in 0..per_seat {
                if self.deck.rest_count() == 0 {
                    return;
                }
                self.hands[seat].push(self.deck.draw_front());
            }
        }
    }

    /// Whether a further dealing pass could run. Reserved for mid-round
    /// re-dealing; nothing invokes it once trick play has begun.
    pub fn can_deal_next_step(&self) -> bool {
        match self.kind {
            DealKind::Staged(_) => self.deck.rest_count() > 0,
            _ => false,
        }
    }

    /// Run one more dealing pass where the kind supports it. The trump is
    /// never re-requested.
    pub fn deal_step(&mut self) {
        if let DealKind::Staged(per_seat) = self.kind {
            if self.deck.rest_count() == 0 {
                return;
            }
            self.deal_staged_batch(per_seat);
            self.events.hand_dealt(self.owner);
        }
    }

    /// Fix the trump for the deal. Legal exactly once, while the deal is
    /// awaiting it.
    pub fn set_trump(&mut self, trump: Trump) -> Result<(), DomainError> {
        if self.trump.is_some() {
            return Err(DomainError::validation(
                ValidationKind::TrumpAlreadySet,
                "Trump is already fixed for this deal",
            ));
        }
        if self.phase != DealPhase::TrumpSelect {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Deal is not awaiting a trump",
            ));
        }
        self.trump = Some(trump);
        self.started = true;
        self.turn = self.owner;
        match self.kind {
            DealKind::SinglePants | DealKind::DoublePants => {
                self.phase = DealPhase::PantsExchange;
                self.events.pants_step_requested(self.owner);
            }
            _ => {
                self.phase = DealPhase::Trick;
                for seat in 0..SEATS as Seat {
                    if seat != self.owner {
                        self.events.hand_dealt(seat);
                    }
                }
                self.events.step_requested(self.owner);
            }
        }
        Ok(())
    }

    /// Play one card into the current trick.
    ///
    /// The caller is trusted to offer a card the seat actually holds; a
    /// missing card is a programming error, not a runtime one. The bonus
    /// combination is checked after every single card, even mid-trick.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<StepOutcome, DomainError> {
        if self.phase != DealPhase::Trick {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Deal is not in trick play",
            ));
        }
        if seat != self.turn {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "Out of turn",
            ));
        }
        self.remove_from_hand(seat, card);
        self.table.push(TrickPlay { seat, card });

        if let Some((winner, loser)) = self.jackpot_seats() {
            self.events.bonus_shown(winner, loser);
            self.history.push(std::mem::take(&mut self.table));
            self.phase = DealPhase::JackpotEnded;
            return Ok(StepOutcome::Jackpot);
        }

        self.turn = next_seat(self.turn);
        if self.table.len() == SEATS {
            let view = trick_view(&self.table, self.current_trump());
            if let Some(winner) = view.top_seat {
                self.taken[team_of(winner)].extend(self.table.iter().map(|p| p.card));
                self.turn = self.kind.next_leader(self.owner, winner);
            }
            self.history.push(std::mem::take(&mut self.table));
            self.events.trick_shown(&view);
            if self.is_completed() {
                self.phase = DealPhase::Complete;
                return Ok(StepOutcome::Completed);
            }
        }
        self.events.step_requested(self.turn);
        Ok(StepOutcome::Played)
    }

    /// Contribute the seat's exchange card(s) during a pants deal.
    pub fn play_pants(
        &mut self,
        seat: Seat,
        first: Card,
        second: Option<Card>,
    ) -> Result<(), DomainError> {
        if self.phase != DealPhase::PantsExchange {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "No pants exchange in progress",
            ));
        }
        if seat != self.turn {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "Out of turn",
            ));
        }
        let Some(unit_len) = self.pants.as_ref().map(|p| p.kind().unit_len()) else {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Not a pants deal",
            ));
        };
        let offered = 1 + usize::from(second.is_some());
        if offered != unit_len {
            return Err(DomainError::validation(
                ValidationKind::PantsArity,
                format!("The exchange takes exactly {unit_len} card(s) here"),
            ));
        }
        let trump = self.current_trump();
        for card in std::iter::once(first).chain(second) {
            if is_trump(card, trump) {
                return Err(DomainError::validation(
                    ValidationKind::CardNotEligible,
                    format!("{card} is trump and cannot be exchanged"),
                ));
            }
        }
        self.remove_from_hand(seat, first);
        if let Some(card) = second {
            self.remove_from_hand(seat, card);
        }
        if let Some(pants) = self.pants.as_mut() {
            pants.push(seat, first, second);
        }
        if self.pants.as_ref().is_some_and(|p| p.is_complete()) {
            self.resolve_exchange();
        } else {
            self.turn = next_seat(self.turn);
            let units = self
                .pants
                .as_ref()
                .map(|p| p.unit_views())
                .unwrap_or_default();
            self.events.current_pants_shown(&units);
            self.events.pants_step_requested(self.turn);
        }
        Ok(())
    }

    fn resolve_exchange(&mut self) {
        let Some(pants) = self.pants.as_ref() else {
            return;
        };
        let left = pants.left_plays().to_vec();
        let right = pants.right_plays().to_vec();
        let Some(left_view) = pants::side_view(&left) else {
            return;
        };
        let right_view = pants::side_view(&right);

        self.taken[team_of(left_view.top_seat)].extend(left.iter().map(|p| p.card));
        if let Some(view) = &right_view {
            self.taken[team_of(view.top_seat)].extend(right.iter().map(|p| p.card));
        }
        self.turn = self.kind.exchange_leader(
            self.owner,
            left_view.top_seat,
            right_view.as_ref().map(|v| v.top_seat),
        );
        self.phase = DealPhase::Trick;
        self.events
            .pants_shown(&left_view, right_view.as_ref(), self.turn);
        self.events.step_requested(self.turn);
    }

    /// Whether the seat could take part in the exchange right now.
    pub fn can_exchange(&self, seat: Seat) -> bool {
        pants::can_exchange(&self.hands[seat as usize], self.current_trump())
    }

    /// Whether every seat is ready for the exchange.
    pub fn exchange_ready(&self) -> bool {
        (0..SEATS as Seat).all(|seat| self.can_exchange(seat))
    }

    /// Exchange candidates for the seat, `None` outside pants deals.
    pub fn pants_options(&self, seat: Seat) -> Option<Vec<PantsUnit>> {
        let pants = self.pants.as_ref()?;
        Some(pants::options_for(
            pants.kind(),
            &self.hands[seat as usize],
            self.current_trump(),
        ))
    }

    /// The live trick as seen from the table.
    pub fn table_view(&self) -> TrickView {
        trick_view(&self.table, self.current_trump())
    }

    /// The most recently resolved trick, if any.
    pub fn last_trick_view(&self) -> Option<TrickView> {
        self.history
            .last()
            .map(|plays| trick_view(plays, self.current_trump()))
    }

    /// Team that won the bonus: the holder of the six of clubs in the most
    /// recently archived trick.
    pub fn jackpot_winner_team(&self) -> Option<TeamIndex> {
        let last = self.history.last()?;
        last.iter()
            .find(|p| p.card == SIX_OF_CLUBS)
            .map(|p| team_of(p.seat))
    }

    fn jackpot_seats(&self) -> Option<(Seat, Seat)> {
        let six = self.table.iter().find(|p| p.card == SIX_OF_CLUBS)?;
        let queen = self.table.iter().find(|p| p.card == QUEEN_OF_CLUBS)?;
        Some((six.seat, queen.seat))
    }

    fn remove_from_hand(&mut self, seat: Seat, card: Card) {
        let hand = &mut self.hands[seat as usize];
        let pos = hand.iter().position(|&c| c == card);
        debug_assert!(pos.is_some(), "played card must come from the seat's hand");
        if let Some(pos) = pos {
            hand.remove(pos);
        }
    }

    #[cfg(test)]
    pub(crate) fn deck_rest(&self) -> usize {
        self.deck.rest_count()
    }

    /// Build a deal dropped straight into a chosen mid-round state.
    #[cfg(test)]
    pub(crate) fn with_state(
        kind: DealKind,
        owner: Seat,
        turn: Seat,
        phase: DealPhase,
        trump: Trump,
        hands: [Vec<Card>; SEATS],
        events: Box<dyn DealEvents>,
    ) -> Self {
        Self {
            kind,
            deck: Deck::new(),
            owner,
            turn,
            phase,
            trump: Some(trump),
            started: true,
            hands,
            taken: Default::default(),
            table: Vec::with_capacity(SEATS),
            history: Vec::new(),
            pants: kind.pants_kind().map(PantsRound::new),
            events,
        }
    }
}
