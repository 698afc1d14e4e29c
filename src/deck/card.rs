//! Cards and decks.
//!
//! A `Card` stores symbol IDs rather than symbols; resolve it against the
//! `SymbolSet` it was generated from to get the actual pictures.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::symbols::{Symbol, SymbolId, SymbolSet};

/// One card: `n + 1` distinct symbols in generation order.
///
/// SmallVec keeps the canonical 8 symbols inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    symbols: SmallVec<[SymbolId; 8]>,
}

impl Card {
    #[must_use]
    pub fn new(symbols: impl IntoIterator<Item = SymbolId>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
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
    pub fn contains(&self, id: SymbolId) -> bool {
        self.symbols.contains(&id)
    }

    /// True if no symbol appears twice on this card.
    #[must_use]
    pub fn has_distinct_symbols(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.symbols.iter().all(|id| seen.insert(*id))
    }

    /// Symbols present on both cards.
    #[must_use]
    pub fn shared_with(&self, other: &Card) -> SmallVec<[SymbolId; 1]> {
        self.symbols
            .iter()
            .copied()
            .filter(|id| other.contains(*id))
            .collect()
    }

    /// The symbol shared with `other`, if there is exactly one.
    ///
    /// This is the answer a player calls out when the two cards meet.
    #[must_use]
    pub fn common_symbol(&self, other: &Card) -> Option<SymbolId> {
        match self.shared_with(other).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Look up every symbol in `set`, in card order.
    ///
    /// Yields `None` for IDs outside the set.
    pub fn resolve<'a>(&'a self, set: &'a SymbolSet) -> impl Iterator<Item = Option<&'a Symbol>> + 'a {
        self.symbols.iter().map(move |id| set.get(*id))
    }
}

/// A generated deck, in construction order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    order: usize,
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new(order: usize, cards: Vec<Card>) -> Self {
        Self { order, cards }
    }

    /// Projective-plane order the deck was built from.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Symbol shared by the cards at `a` and `b`.
    #[must_use]
    pub fn common_symbol(&self, a: usize, b: usize) -> Option<SymbolId> {
        self.card(a)?.common_symbol(self.card(b)?)
    }

    /// Find the first pair of cards breaking the game's rules.
    ///
    /// A deck is playable when every card has `order + 1` distinct symbols
    /// and every two cards share exactly one symbol. Returns the offending
    /// card indices (equal when a single card is malformed).
    #[must_use]
    pub fn find_violation(&self) -> Option<(usize, usize)> {
        let expected = self.order.saturating_add(1);
        if let Some(i) = self
            .cards
            .iter()
            .position(|c| c.len() != expected || !c.has_distinct_symbols())
        {
            return Some((i, i));
        }
        for (i, a) in self.cards.iter().enumerate() {
            for (j, b) in self.cards.iter().enumerate().skip(i + 1) {
                if a.shared_with(b).len() != 1 {
                    return Some((i, j));
                }
            }
        }
        None
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.find_violation().is_none()
    }

    /// How many cards each symbol appears on, sorted by symbol.
    #[must_use]
    pub fn symbol_frequencies(&self) -> Vec<(SymbolId, usize)> {
        let mut counts: FxHashMap<SymbolId, usize> = FxHashMap::default();
        for id in self.cards.iter().flat_map(|c| c.symbols().iter().copied()) {
            *counts.entry(id).or_insert(0) += 1;
        }
        let mut sorted: Vec<_> = counts.into_iter().collect();
        sorted.sort_unstable_by_key(|(id, _)| *id);
        sorted
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
