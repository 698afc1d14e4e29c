//! # dobble-deck
//!
//! Spot-it style deck generation and overlap-free card layout.
//!
//! ## Design Principles
//!
//! 1. **Correct by Construction**: Cards are the lines of a finite projective
//!    plane, so any two cards share exactly one symbol without searching.
//!
//! 2. **Bounded Randomness**: Layout is rejection sampling with an explicit
//!    retry budget. An impossible canvas fails with `LayoutInfeasible`
//!    instead of spinning forever.
//!
//! 3. **Injected State**: The symbol set is owned by the caller and the RNG
//!    is passed in. The core holds nothing between calls.
//!
//! ## Pipeline
//!
//! ```
//! use dobble_deck::{generate, CardLayoutEngine, ExportManifest, LayoutRng, SymbolSet};
//!
//! let symbols = SymbolSet::default();
//! let deck = generate(&symbols, 7).unwrap();
//! assert_eq!(deck.len(), 55);
//!
//! let engine = CardLayoutEngine::default();
//! let layouts = engine
//!     .layout_deck(&deck, &LayoutRng::new(42))
//!     .into_iter()
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let manifest = ExportManifest::build(&symbols, &layouts, engine.config().canvas_size).unwrap();
//! assert_eq!(manifest.cards[0].path, "dobble_cards/card_1.png");
//! ```
//!
//! ## Modules
//!
//! - `core`: Configuration and the seedable layout RNG
//! - `symbols`: Symbol variants and the persisted symbol set
//! - `deck`: Cards, decks and the projective-plane generator
//! - `layout`: Placement geometry and the layout engine
//! - `export`: Render manifests and archive naming

pub mod core;
pub mod deck;
pub mod error;
pub mod export;
pub mod layout;
pub mod symbols;

// Re-export commonly used types
pub use crate::core::{
    DeckConfig, LayoutConfig, LayoutRng, LayoutRngState, RetryPolicy, SizeBounds,
};

pub use crate::error::{DobbleError, Result};

pub use crate::symbols::{ImageSource, Symbol, SymbolId, SymbolSet};

pub use crate::deck::{generate, Card, Deck, DeckGenerator};

pub use crate::layout::{layout, CardLayout, CardLayoutEngine, Placement};

pub use crate::export::{ExportManifest, RenderedCard, RenderedSymbol};
