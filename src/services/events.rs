//! Transport-facing notifications, addressed by player identity.

use serde::{Deserialize, Serialize};

use crate::domain::pants::PantsUnit;
use crate::domain::Card;

/// Player identity as bound to a seat at match setup. Distinct from `Seat`:
/// the engine speaks seats internally and identities at this boundary.
pub type PlayerId = i64;

/// A resolved exchange side with its winner translated to an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantsSideResult {
    pub cards: Vec<Card>,
    pub top_card: Card,
    pub top_player: PlayerId,
}

/// Everything the engine tells the outside world, one call per occurrence.
///
/// Implementations live in the transport layer (chat bot, test harness).
/// Calls are fire-and-forget: no batching, no delivery feedback, and a
/// failed delivery never reaches the engine.
pub trait MatchEvents: Send + Sync {
    fn trump_requested(&self, player: PlayerId);
    fn hand_dealt(&self, player: PlayerId);
    fn step_requested(&self, player: PlayerId);
    fn trick_shown(&self, cards: &[Card], top_card: Option<Card>, top_player: Option<PlayerId>);
    fn deal_choice_requested(&self, player: PlayerId);
    fn pants_step_requested(&self, player: PlayerId);
    fn pants_shown(
        &self,
        left: &PantsSideResult,
        right: Option<&PantsSideResult>,
        next_player: PlayerId,
    );
    fn current_pants_shown(&self, units: &[PantsUnit]);
    fn bonus_shown(&self, winner: PlayerId, loser: PlayerId);
    fn total_score_shown(&self, team_a: i32, team_b: i32);
}
