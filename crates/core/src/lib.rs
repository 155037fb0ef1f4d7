//! `restock-core` — shared building blocks for the replenishment engine.
//!
//! This crate contains **pure domain** primitives (no IO, no transport concerns).

pub mod error;
pub mod location;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use location::LocationName;
pub use value_object::ValueObject;
