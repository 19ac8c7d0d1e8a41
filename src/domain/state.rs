//! Seats, phases, and per-play records shared across the deal machinery.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;

pub type Seat = u8; // 0..=3
pub type TeamIndex = usize; // 0 = seats 0/2, 1 = seats 1/3

pub const SEATS: usize = 4;
pub const TEAMS: usize = 2;

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Partnerships are structural: seats 0 and 2 sit together, as do 1 and 3.
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % 4
}

#[inline]
pub fn teammate_of(seat: Seat) -> Seat {
    (seat + 2) % 4
}

#[inline]
pub fn team_of(seat: Seat) -> TeamIndex {
    (seat % 2) as TeamIndex
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    (start + (n % 4)) % 4
}

/// Deal progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DealPhase {
    /// Constructed but cards not yet distributed.
    Dealing,
    /// Waiting for the owner to choose the trump.
    TrumpSelect,
    /// Pants deals only: waiting for exchange contributions.
    PantsExchange,
    /// Trick play; `Deal::turn` holds the seat expected to act.
    Trick,
    /// Ended early by the bonus combination.
    JackpotEnded,
    /// All hands played out.
    Complete,
}

/// One card placed on the table, with the seat that played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickPlay {
    pub seat: Seat,
    pub card: Card,
}
