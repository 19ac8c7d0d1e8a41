//! Error handling for the Kozel rule engine.

pub mod domain;

pub use domain::DomainError;
