//! Card layout: overlap-free placement of a card's symbols.
//!
//! ## Key Types
//!
//! - `Placement`: top-left position and size of one symbol
//! - `CardLayoutEngine`: budgeted rejection sampling over the canvas
//! - `CardLayout`: placements for one card of a deck

pub mod engine;
pub mod placement;

pub use engine::{layout, CardLayout, CardLayoutEngine};
pub use placement::Placement;
