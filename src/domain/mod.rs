//! Domain layer: pure game rules, no transport concerns.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deal;
pub mod deck;
pub mod events;
pub mod pants;
pub mod scoring;
pub mod state;
pub mod table;
pub mod variants;

#[cfg(test)]
pub(crate) mod test_helpers;
#[cfg(test)]
mod tests_pants;
#[cfg(test)]
mod tests_props_cards;

// Re-exports for ergonomics
pub use cards_logic::{
    beats, is_permanent_trump, is_trump, point_value, QUEEN_OF_CLUBS, SIX_OF_CLUBS,
};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit, Trump};
pub use deal::{Deal, StepOutcome};
pub use deck::{Deck, DECK_SIZE};
pub use events::DealEvents;
pub use state::{next_seat, nth_from, team_of, teammate_of, DealPhase, Seat, TeamIndex, TrickPlay};
pub use table::TrickView;
pub use variants::DealKind;
