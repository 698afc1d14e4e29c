//! Overlap-free random symbol layout.
//!
//! Each symbol of a card is placed by rejection sampling: draw a size and
//! a position that keeps the box inside the margins, and accept the draw if
//! it clears every symbol already placed. There is no closed-form bound on
//! how many draws that takes, so the search is budgeted:
//!
//! 1. each symbol gets `max_attempts` draws, split into shrink rounds whose
//!    size ceiling steps from `max` down to `min`
//!    ([`RetryPolicy::ShrinkTowardMin`]);
//! 2. a symbol that exhausts its budget restarts the whole card, since the
//!    earlier symbols are what boxed it in;
//! 3. after `max_restarts` restarts the card fails with
//!    [`DobbleError::LayoutInfeasible`].
//!
//! All randomness comes from the injected [`LayoutRng`].

use serde::{Deserialize, Serialize};

use super::placement::Placement;
use crate::core::{LayoutConfig, LayoutRng, RetryPolicy, SizeBounds};
use crate::deck::{Card, Deck};
use crate::error::{DobbleError, Result};
use crate::symbols::SymbolId;

/// Placements for one card of a deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    /// Position of the card in its deck.
    pub card_index: usize,
    /// One placement per symbol, in card order.
    pub placements: Vec<Placement>,
}

/// Lays out cards on a square canvas.
#[derive(Clone, Debug, Default)]
pub struct CardLayoutEngine {
    config: LayoutConfig,
}

impl CardLayoutEngine {
    /// Create an engine, rejecting configurations where no symbol can fit.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Place every symbol of `card`, in card order.
    pub fn layout(&self, card: &Card, rng: &mut LayoutRng) -> Result<Vec<Placement>> {
        let mut attempts = 0;
        let mut failed_at = 0;

        for restart in 0..=self.config.max_restarts {
            match self.try_layout(card, rng, &mut attempts) {
                Ok(placements) => {
                    tracing::trace!(symbols = placements.len(), attempts, restart, "card laid out");
                    return Ok(placements);
                }
                Err(symbol_index) => {
                    tracing::debug!(symbol_index, attempts, restart, "layout stuck, restarting card");
                    failed_at = symbol_index;
                }
            }
        }

        tracing::warn!(
            symbol_index = failed_at,
            attempts,
            canvas_size = self.config.canvas_size,
            max_size = self.config.bounds.max,
            "card layout infeasible"
        );
        Err(DobbleError::LayoutInfeasible {
            symbol_index: failed_at,
            attempts,
        })
    }

    /// Lay out every card of `deck`.
    ///
    /// Card `i` draws from `rng.for_card(i)`, so the result for a card does
    /// not depend on the other cards, and one infeasible card leaves the
    /// rest untouched.
    pub fn layout_deck(&self, deck: &Deck, rng: &LayoutRng) -> Vec<Result<CardLayout>> {
        deck.iter()
            .enumerate()
            .map(|(card_index, card)| {
                let mut card_rng = rng.for_card(card_index);
                self.layout(card, &mut card_rng).map(|placements| CardLayout {
                    card_index,
                    placements,
                })
            })
            .collect()
    }

    /// One pass over the card. Returns the index of the symbol that ran out
    /// of draws.
    fn try_layout(
        &self,
        card: &Card,
        rng: &mut LayoutRng,
        attempts: &mut usize,
    ) -> std::result::Result<Vec<Placement>, usize> {
        let mut placed: Vec<Placement> = Vec::with_capacity(card.len());
        for (index, &symbol) in card.symbols().iter().enumerate() {
            let placement = self
                .place_symbol(symbol, &placed, rng, attempts)
                .ok_or(index)?;
            placed.push(placement);
        }
        Ok(placed)
    }

    fn place_symbol(
        &self,
        symbol: SymbolId,
        placed: &[Placement],
        rng: &mut LayoutRng,
        attempts: &mut usize,
    ) -> Option<Placement> {
        let config = &self.config;
        let per_round = config.attempts_per_round();

        for attempt in 0..config.max_attempts.max(1) {
            *attempts += 1;
            let ceiling = config.size_ceiling(attempt / per_round);
            let candidate = self.draw(symbol, config.bounds.min, ceiling, rng);
            if placed.iter().all(|p| candidate.clears(p, config.clearance)) {
                if attempt > 0 {
                    tracing::trace!(%symbol, rejected = attempt, "placed after rejections");
                }
                return Some(candidate);
            }
        }
        None
    }

    fn draw(&self, symbol: SymbolId, min: f64, ceiling: f64, rng: &mut LayoutRng) -> Placement {
        let LayoutConfig {
            canvas_size,
            margin,
            ..
        } = self.config;
        let size = rng.gen_f64_in(min, ceiling);
        let span = canvas_size - 2.0 * margin - size;
        let x = margin + rng.gen_f64_in(0.0, span);
        let y = margin + rng.gen_f64_in(0.0, span);
        Placement::new(symbol, x, y, size)
    }
}

/// Lay out one card with the canonical clearance and retry budget.
pub fn layout(
    card: &Card,
    bounds: SizeBounds,
    canvas_size: f64,
    margin: f64,
    rng: &mut LayoutRng,
) -> Result<Vec<Placement>> {
    let config = LayoutConfig::default()
        .with_bounds(bounds)
        .with_canvas(canvas_size, margin)
        .with_retry_policy(RetryPolicy::ShrinkTowardMin);
    CardLayoutEngine::new(config)?.layout(card, rng)
}
