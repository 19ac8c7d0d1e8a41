//! Outbound notifications from a running deal, addressed by seat.

use super::pants::{PantsSideView, PantsUnit};
use super::state::Seat;
use super::table::TrickView;

/// Notification sink a deal drives while it runs.
///
/// The match orchestrator hands one implementation to each deal at
/// construction and never swaps it afterwards; it translates seats to
/// player identities and forwards to the transport. Calls are
/// fire-and-forget: nothing flows back, delivery failures stay outside
/// the engine.
pub trait DealEvents: Send + Sync {
    /// The seat must choose the trump for this deal.
    fn trump_requested(&self, seat: Seat);
    /// The seat's hand changed and should be (re)shown to the player.
    fn hand_dealt(&self, seat: Seat);
    /// The seat must play a card into the current trick.
    fn step_requested(&self, seat: Seat);
    /// A trick was resolved (also fired for the final trick of the deal).
    fn trick_shown(&self, trick: &TrickView);
    /// The seat must contribute its exchange card(s).
    fn pants_step_requested(&self, seat: Seat);
    /// The exchange resolved; `right` is present for the double variant.
    fn pants_shown(&self, left: &PantsSideView, right: Option<&PantsSideView>, next_seat: Seat);
    /// Exchange contributions so far (first contribution stays hidden).
    fn current_pants_shown(&self, units: &[PantsUnit]);
    /// The bonus combination fired and ended the deal.
    fn bonus_shown(&self, winner: Seat, loser: Seat);
}
