//! Deck construction from the lines of a finite projective plane.
//!
//! For order `n` the plane has `n² + n + 1` points (symbols) and as many
//! lines (cards); every line holds `n + 1` points and any two lines meet in
//! exactly one point. The construction below is the standard affine-plane
//! extension:
//!
//! - `n + 1` lines through point 0, each taking a run of `n` consecutive
//!   points from `1..=n²+n`;
//! - `n²` lines through points `1..=n`, each picking one point from every
//!   block of the `n × n` grid at `1 + n + k*n + ((i*k + j) mod n)`.
//!
//! The intersection property holds for prime `n`; the canonical deck uses
//! `n = 7` and keeps the first 55 of the 57 lines.

use super::card::{Card, Deck};
use crate::core::{checked_plane_size, DeckConfig};
use crate::error::{DobbleError, Result};
use crate::symbols::{SymbolId, SymbolSet};

/// Deterministic deck builder.
#[derive(Clone, Debug, Default)]
pub struct DeckGenerator {
    config: DeckConfig,
}

impl DeckGenerator {
    #[must_use]
    pub fn new(config: DeckConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Build the deck for `symbols`.
    ///
    /// Only the first `n² + n + 1` symbols are used. Fails without
    /// producing any cards if the set is shorter than that, or if the order
    /// is zero or too large for symbol IDs.
    pub fn generate(&self, symbols: &SymbolSet) -> Result<Deck> {
        let n = self.config.order;
        let required = checked_plane_size(n)
            .filter(|&total| n > 0 && u32::try_from(total).is_ok())
            .ok_or(DobbleError::InvalidOrder(n))?;
        if symbols.len() < required {
            return Err(DobbleError::InsufficientSymbols {
                required,
                available: symbols.len(),
            });
        }

        let keep = self.config.deck_size.min(required);
        let cards: Vec<Card> = plane_lines(n).take(keep).collect();

        tracing::debug!(
            order = n,
            cards = cards.len(),
            ignored_symbols = symbols.len() - required,
            "generated deck"
        );
        Ok(Deck::new(n, cards))
    }
}

/// Build the canonical deck of order `n`.
///
/// Keeps 55 cards for the canonical order 7 and every line otherwise.
pub fn generate(symbols: &SymbolSet, order: usize) -> Result<Deck> {
    let config = if order == DeckConfig::default().order {
        DeckConfig::default()
    } else {
        DeckConfig::full_plane(order)
    };
    DeckGenerator::new(config).generate(symbols)
}

/// All `n² + n + 1` lines of the plane, in construction order.
fn plane_lines(n: usize) -> impl Iterator<Item = Card> {
    let id = |i: usize| SymbolId::new(i as u32);

    let through_origin = (0..=n).map(move |i| {
        Card::new(std::iter::once(id(0)).chain((0..n).map(move |j| id(1 + i * n + j))))
    });

    let grid = (0..n).flat_map(move |i| {
        (0..n).map(move |j| {
            Card::new(
                std::iter::once(id(1 + i))
                    .chain((0..n).map(move |k| id(1 + n + k * n + (i * k + j) % n))),
            )
        })
    });

    through_origin.chain(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<SymbolId> {
        raw.iter().copied().map(SymbolId::new).collect()
    }

    #[test]
    fn test_plane_line_count() {
        assert_eq!(plane_lines(7).count(), 57);
        assert_eq!(plane_lines(2).count(), 7);
        assert!(plane_lines(7).all(|c| c.len() == 8));
    }

    #[test]
    fn test_full_plane_is_valid_for_primes() {
        for n in [2, 3, 5, 7] {
            let deck = Deck::new(n, plane_lines(n).collect());
            assert!(deck.is_valid(), "order {n} plane should be valid");
        }
    }

    #[test]
    fn test_order_two_lines() {
        let lines: Vec<_> = plane_lines(2).map(|c| c.symbols().to_vec()).collect();
        assert_eq!(lines[0], ids(&[0, 1, 2]));
        assert_eq!(lines[2], ids(&[0, 5, 6]));
        assert_eq!(lines[3], ids(&[1, 3, 5]));
        assert_eq!(lines[6], ids(&[2, 4, 5]));
    }

    #[test]
    fn test_generate_default() {
        let deck = DeckGenerator::default()
            .generate(&SymbolSet::default())
            .unwrap();
        assert_eq!(deck.len(), 55);
        assert_eq!(deck.order(), 7);
    }

    #[test]
    fn test_zero_order_rejected() {
        let generator = DeckGenerator::new(DeckConfig::default().with_order(0));
        assert_eq!(
            generator.generate(&SymbolSet::default()),
            Err(DobbleError::InvalidOrder(0))
        );
    }

    #[test]
    fn test_overflowing_order_rejected() {
        assert_eq!(
            generate(&SymbolSet::default(), usize::MAX),
            Err(DobbleError::InvalidOrder(usize::MAX))
        );

        // n² + n + 1 fits in usize but not in a u32 symbol ID
        let big = 1 << 16;
        assert_eq!(
            generate(&SymbolSet::default(), big),
            Err(DobbleError::InvalidOrder(big))
        );
    }

    #[test]
    fn test_insufficient_symbols() {
        let set = SymbolSet::from_raw(["a", "b", "c", "d", "e", "f"]);
        assert_eq!(
            generate(&set, 2),
            Err(DobbleError::InsufficientSymbols {
                required: 7,
                available: 6
            })
        );
    }

    #[test]
    fn test_generate_free_fn_keeps_all_lines_off_canonical_order() {
        let set = SymbolSet::from_raw((0..13).map(|i| i.to_string()));
        let deck = generate(&set, 3).unwrap();
        assert_eq!(deck.len(), 13);
        assert!(deck.is_valid());
    }
}
