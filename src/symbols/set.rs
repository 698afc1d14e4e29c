//! Ordered, caller-owned symbol sets.
//!
//! The `SymbolSet` is the only input to deck generation. It is owned by
//! whoever edits it (a settings screen, a CLI, a test) and passed by
//! reference into the generator; the core keeps no copy between calls.
//!
//! Persistence is a JSON array of raw symbol strings stored under
//! [`STORAGE_KEY`]. Loading tolerates corrupt data by falling back to the
//! default emoji set.

use serde::{Deserialize, Serialize};

use super::symbol::{Symbol, SymbolId};
use crate::error::{DobbleError, Result};

/// Key under which the symbol list is persisted in a key-value store.
pub const STORAGE_KEY: &str = "symbol_list";

/// The 57 emoji used when no custom set has been saved.
pub const DEFAULT_EMOJIS: [&str; 57] = [
    "🍓", "🍕", "🍔", "🌵", "🐱", "🐟", "🎸", "🎨", "📱", "🚗",
    "🍦", "🥑", "🦄", "🌙", "🔥", "🎶", "💻", "🐻", "🍩", "🏀",
    "🌈", "🍿", "🥂", "🍹", "🎁", "🏞️", "🚀", "🎧", "👑", "⚽",
    "📚", "🎂", "🍪", "🌻", "🎀", "🐶", "🍇", "🌎", "🍉", "🎤",
    "🎯", "🍋", "🎹", "🐾", "🪐", "🛴", "🦋", "🍫", "🐨", "🍒",
    "🌴", "🚲", "🎮", "⚡", "⭐", "🌟", "☕",
];

/// Ordered sequence of symbols. A symbol's identity is its index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::new(DEFAULT_EMOJIS.iter().copied().map(Symbol::parse).collect())
    }
}

impl SymbolSet {
    #[must_use]
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Build a set from raw persisted strings.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(raw.into_iter().map(Symbol::parse).collect())
    }

    /// Decode a persisted JSON array of raw strings.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a persisted set, or fall back to the default emoji set when
    /// nothing was stored or the stored value is unreadable.
    #[must_use]
    pub fn load_or_default(stored: Option<&str>) -> Self {
        match stored {
            None => Self::default(),
            Some(json) => Self::from_json(json).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stored symbol list unreadable, using defaults");
                Self::default()
            }),
        }
    }

    /// Encode as a JSON array of raw strings.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (SymbolId::new(i as u32), s))
    }

    /// Replace the symbol at `id`, e.g. after an image upload.
    ///
    /// Returns the previous symbol.
    pub fn replace(&mut self, id: SymbolId, symbol: Symbol) -> Result<Symbol> {
        let len = self.symbols.len();
        let slot = self
            .symbols
            .get_mut(id.index())
            .ok_or(DobbleError::SymbolIndexOutOfRange {
                index: id.index(),
                len,
            })?;
        Ok(std::mem::replace(slot, symbol))
    }

    /// Append a symbol, returning its ID.
    pub fn push(&mut self, symbol: Symbol) -> SymbolId {
        self.symbols.push(symbol);
        SymbolId::new((self.symbols.len() - 1) as u32)
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
