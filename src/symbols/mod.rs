//! Symbol model: tagged symbols and the caller-owned symbol set.
//!
//! ## Key Types
//!
//! - `Symbol`: text glyph or image, decided once at parse time
//! - `SymbolId`: positional identity within a set
//! - `SymbolSet`: ordered symbols plus JSON persistence

pub mod set;
pub mod symbol;

pub use set::{SymbolSet, DEFAULT_EMOJIS, STORAGE_KEY};
pub use symbol::{ImageSource, Symbol, SymbolId};
