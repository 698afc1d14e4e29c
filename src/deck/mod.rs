//! Deck generation.
//!
//! ## Key Types
//!
//! - `Card`: `n + 1` symbol IDs
//! - `Deck`: the generated cards, with rule checks
//! - `DeckGenerator`: projective-plane construction

pub mod card;
pub mod generator;

pub use card::{Card, Deck};
pub use generator::{generate, DeckGenerator};
