//! Match orchestration: seats four players, owns the active deal and the
//! running score, and translates between seats and player identities.

use std::sync::Arc;

use tracing::debug;

use crate::domain::deal::{Deal, StepOutcome};
use crate::domain::deck::Deck;
use crate::domain::events::DealEvents;
use crate::domain::pants::{PantsSideView, PantsUnit};
use crate::domain::scoring::{settlement_points, JACKPOT_POINTS};
use crate::domain::state::{next_seat, DealPhase, Seat, SEATS};
use crate::domain::table::TrickView;
use crate::domain::variants::DealKind;
use crate::domain::{Card, Trump};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

use super::events::{MatchEvents, PantsSideResult, PlayerId};

/// Seat-addressed notifier for one deal. Built fresh at every deal boundary;
/// closes over the seat bindings and forwards to the transport notifier.
struct SeatEvents {
    events: Arc<dyn MatchEvents>,
    seats: [PlayerId; SEATS],
}

impl SeatEvents {
    fn player(&self, seat: Seat) -> PlayerId {
        self.seats[seat as usize]
    }

    fn side_result(&self, view: &PantsSideView) -> PantsSideResult {
        PantsSideResult {
            cards: view.cards.clone(),
            top_card: view.top_card,
            top_player: self.player(view.top_seat),
        }
    }
}

impl DealEvents for SeatEvents {
    fn trump_requested(&self, seat: Seat) {
        self.events.trump_requested(self.player(seat));
    }

    fn hand_dealt(&self, seat: Seat) {
        self.events.hand_dealt(self.player(seat));
    }

    fn step_requested(&self, seat: Seat) {
        self.events.step_requested(self.player(seat));
    }

    fn trick_shown(&self, trick: &TrickView) {
        self.events.trick_shown(
            &trick.cards,
            trick.top_card,
            trick.top_seat.map(|s| self.player(s)),
        );
    }

    fn pants_step_requested(&self, seat: Seat) {
        self.events.pants_step_requested(self.player(seat));
    }

    fn pants_shown(&self, left: &PantsSideView, right: Option<&PantsSideView>, next_seat: Seat) {
        let left = self.side_result(left);
        let right = right.map(|v| self.side_result(v));
        self.events
            .pants_shown(&left, right.as_ref(), self.player(next_seat));
    }

    fn current_pants_shown(&self, units: &[PantsUnit]) {
        self.events.current_pants_shown(units);
    }

    fn bonus_shown(&self, winner: Seat, loser: Seat) {
        self.events
            .bonus_shown(self.player(winner), self.player(loser));
    }
}

/// One running match: four seats, the active deal, and the cumulative team
/// settlement scores. Owned by whatever registry maps sessions to matches;
/// there is no ambient global state.
pub struct GoatGame {
    events: Arc<dyn MatchEvents>,
    seats: [Option<PlayerId>; SEATS],
    deal: Option<Deal>,
    total_score: [i32; 2],
}

impl GoatGame {
    /// A fresh match; the initiating player takes seat 0 and owns the first
    /// deal.
    pub fn new(owner: PlayerId, events: Arc<dyn MatchEvents>) -> Self {
        debug!(owner, "new match");
        Self {
            events,
            seats: [Some(owner), None, None, None],
            deal: None,
            total_score: [0; 2],
        }
    }

    /// Seat the player at the next free position, in join order.
    pub fn add_player(&mut self, player: PlayerId) -> Result<(), DomainError> {
        debug!(player, "add_player");
        if self.seats.contains(&Some(player)) {
            return Err(DomainError::conflict(
                ConflictKind::SeatTaken,
                "Player is already seated",
            ));
        }
        match self.seats.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(player);
                Ok(())
            }
            None => Err(DomainError::conflict(
                ConflictKind::TableFull,
                "All four seats are taken",
            )),
        }
    }

    /// Players still missing before dealing can start.
    pub fn need_player_count(&self) -> u8 {
        self.seats.iter().filter(|slot| slot.is_none()).count() as u8
    }

    /// Kick the match off with the full deal, owned by seat 0.
    pub fn first_deal(&mut self) -> Result<(), DomainError> {
        self.start_deal(DealKind::AllCards, 0)
    }

    fn start_deal(&mut self, kind: DealKind, owner: Seat) -> Result<(), DomainError> {
        let seats = self.bound_seats()?;
        debug!(?kind, owner, "starting deal");
        let notifier = SeatEvents {
            events: Arc::clone(&self.events),
            seats,
        };
        let mut deal = Deal::new(
            kind,
            owner,
            Deck::shuffled(&mut rand::rng()),
            Box::new(notifier),
        );
        deal.process_deal();
        self.deal = Some(deal);
        Ok(())
    }

    /// The owner picks the trump for the current deal.
    pub fn select_trump(&mut self, player: PlayerId, trump: Trump) -> Result<(), DomainError> {
        debug!(player, ?trump, "select_trump");
        let seat = self.require_seat(player)?;
        let deal = self.require_deal_mut()?;
        if seat != deal.owner() {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "Only the deal owner picks the trump",
            ));
        }
        deal.set_trump(trump)
    }

    /// Play one card for the player, settling the deal when it ends.
    pub fn play_card(&mut self, player: PlayerId, card: Card) -> Result<(), DomainError> {
        debug!(player, card = %card, "play_card");
        let seat = self.require_seat(player)?;
        let deal = self.require_deal_mut()?;
        match deal.play_card(seat, card)? {
            StepOutcome::Played => {}
            StepOutcome::Jackpot => {
                self.settle_jackpot();
                self.finish_deal();
            }
            StepOutcome::Completed => {
                self.settle_completed_deal();
                self.finish_deal();
            }
        }
        Ok(())
    }

    /// Contribute the player's pants exchange card(s).
    pub fn play_pants_cards(
        &mut self,
        player: PlayerId,
        first: Card,
        second: Option<Card>,
    ) -> Result<(), DomainError> {
        debug!(player, first = %first, "play_pants_cards");
        let seat = self.require_seat(player)?;
        let deal = self.require_deal_mut()?;
        deal.play_pants(seat, first, second)
    }

    /// The seat after the finished deal's owner names the next deal type.
    pub fn choose_next_deal(&mut self, player: PlayerId, label: &str) -> Result<(), DomainError> {
        debug!(player, label, "choose_next_deal");
        let seat = self.require_seat(player)?;
        let deal = self.require_deal()?;
        if !deal.is_over() || seat != next_seat(deal.owner()) {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "Not this player's deal to call",
            ));
        }
        let kind = DealKind::from_label(label).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownDealLabel,
                format!("Unknown deal type: {label}"),
            )
        })?;
        self.start_deal(kind, seat)
    }

    fn settle_jackpot(&mut self) {
        if let Some(team) = self.deal.as_ref().and_then(|d| d.jackpot_winner_team()) {
            self.total_score[team] += JACKPOT_POINTS;
        }
    }

    fn settle_completed_deal(&mut self) {
        let Some(deal) = self.deal.as_ref() else {
            return;
        };
        let team_a = deal.team_score(0);
        let team_b = deal.team_score(1);
        debug!(team_a, team_b, "deal complete");
        if team_a > team_b {
            self.total_score[0] += settlement_points(team_b);
        } else {
            self.total_score[1] += settlement_points(team_a);
        }
    }

    fn finish_deal(&mut self) {
        self.events
            .total_score_shown(self.total_score[0], self.total_score[1]);
        if let Some(deal) = self.deal.as_ref() {
            let next = next_seat(deal.owner());
            if let Some(player) = self.seats[next as usize] {
                self.events.deal_choice_requested(player);
            }
        }
    }

    /// Identity of the active deal's owner.
    pub fn current_owner(&self) -> Option<PlayerId> {
        let deal = self.deal.as_ref()?;
        self.identity_of(deal.owner())
    }

    pub fn is_waiting_for_trump(&self) -> bool {
        self.deal
            .as_ref()
            .is_some_and(|d| d.phase() == DealPhase::TrumpSelect)
    }

    pub fn is_waiting_for_card(&self, player: PlayerId) -> bool {
        match (self.seat_of(player), self.deal.as_ref()) {
            (Some(seat), Some(deal)) => deal.phase() == DealPhase::Trick && deal.turn() == seat,
            _ => false,
        }
    }

    pub fn is_waiting_for_pants_cards(&self, player: PlayerId) -> bool {
        match (self.seat_of(player), self.deal.as_ref()) {
            (Some(seat), Some(deal)) => {
                deal.phase() == DealPhase::PantsExchange && deal.turn() == seat
            }
            _ => false,
        }
    }

    pub fn is_waiting_for_deal_choice(&self, player: PlayerId) -> bool {
        match (self.seat_of(player), self.deal.as_ref()) {
            (Some(seat), Some(deal)) => deal.is_over() && seat == next_seat(deal.owner()),
            _ => false,
        }
    }

    pub fn hand(&self, player: PlayerId) -> Result<&[Card], DomainError> {
        let seat = self.require_seat(player)?;
        let deal = self.require_deal()?;
        Ok(deal.hand(seat))
    }

    /// Exchange candidates for the player; `None` outside pants deals.
    pub fn available_pants_options(&self, player: PlayerId) -> Option<Vec<PantsUnit>> {
        let seat = self.seat_of(player)?;
        self.deal.as_ref()?.pants_options(seat)
    }

    pub fn deal_labels() -> [&'static str; 6] {
        DealKind::labels()
    }

    /// Cumulative settlement scores, team A then team B.
    pub fn scores(&self) -> (i32, i32) {
        (self.total_score[0], self.total_score[1])
    }

    /// The live trick of the active deal, seat-addressed.
    pub fn table_view(&self) -> Option<TrickView> {
        self.deal.as_ref().map(|d| d.table_view())
    }

    /// The most recently resolved trick of the active deal.
    pub fn last_trick_view(&self) -> Option<TrickView> {
        self.deal.as_ref().and_then(|d| d.last_trick_view())
    }

    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        self.seats
            .iter()
            .position(|&slot| slot == Some(player))
            .map(|i| i as Seat)
    }

    pub fn identity_of(&self, seat: Seat) -> Option<PlayerId> {
        self.seats[seat as usize]
    }

    fn require_seat(&self, player: PlayerId) -> Result<Seat, DomainError> {
        self.seat_of(player).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, "Player is not in this match")
        })
    }

    fn require_deal(&self) -> Result<&Deal, DomainError> {
        self.deal
            .as_ref()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Deal, "No active deal"))
    }

    fn require_deal_mut(&mut self) -> Result<&mut Deal, DomainError> {
        self.deal
            .as_mut()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Deal, "No active deal"))
    }

    fn bound_seats(&self) -> Result<[PlayerId; SEATS], DomainError> {
        let mut bound = [0; SEATS];
        for (i, slot) in self.seats.iter().enumerate() {
            bound[i] = slot
                .ok_or_else(|| DomainError::validation_other("Waiting for players to join"))?;
        }
        Ok(bound)
    }

    /// Drop a pre-built deal into the match, wired to the match notifier.
    #[cfg(test)]
    pub(crate) fn install_deal(
        &mut self,
        build: impl FnOnce(Box<dyn DealEvents>) -> Deal,
    ) -> Result<(), DomainError> {
        let seats = self.bound_seats()?;
        let notifier = SeatEvents {
            events: Arc::clone(&self.events),
            seats,
        };
        self.deal = Some(build(Box::new(notifier)));
        Ok(())
    }
}
