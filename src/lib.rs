#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rule engine for a four-player, two-partnership "Kozel"-style card game:
//! the 32-card deck, the trump-aware ranking algebra, the per-round deal
//! state machine with its six deal variants, and the match orchestration
//! that wires deals to a transport through notification traits.
//!
//! The engine renders nothing and persists nothing; a transport layer (a
//! chat bot in the original deployment) drives it through [`GoatGame`] and
//! observes it through [`MatchEvents`].

pub mod domain;
pub mod errors;
pub mod services;


// Re-exports for public API
pub use domain::deal::{Deal, StepOutcome};
pub use domain::deck::Deck;
pub use domain::events::DealEvents;
pub use domain::variants::DealKind;
pub use domain::{
    beats, is_permanent_trump, is_trump, point_value, Card, DealPhase, Rank, Seat, Suit, TrickView,
    Trump,
};
pub use errors::domain::DomainError;
pub use services::events::{MatchEvents, PlayerId};
pub use services::game_flow::GoatGame;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
