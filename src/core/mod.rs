//! Shared building blocks: configuration and the injected RNG.

pub mod config;
pub mod rng;

pub use config::{
    checked_plane_size, plane_size, DeckConfig, LayoutConfig, RetryPolicy, SizeBounds,
    DEFAULT_CANVAS_SIZE, DEFAULT_CLEARANCE, DEFAULT_DECK_SIZE, DEFAULT_MARGIN, DEFAULT_MAX_SIZE,
    DEFAULT_MIN_SIZE, DEFAULT_ORDER,
};
pub use rng::{LayoutRng, LayoutRngState};
