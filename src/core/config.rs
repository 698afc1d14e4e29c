//! Generation and layout configuration.
//!
//! - `DeckConfig`: projective-plane order and deck truncation
//! - `SizeBounds`: min/max symbol size, clamped the way the settings UI does
//! - `LayoutConfig`: canvas geometry plus the rejection-sampling budget
//!
//! All configs carry the canonical defaults (order 7, 55 cards, 250-unit
//! canvas, 20-unit margin, sizes 30..=70, clearance 10).

use serde::{Deserialize, Serialize};

use crate::error::{DobbleError, Result};

/// Canonical projective-plane order.
pub const DEFAULT_ORDER: usize = 7;
/// Canonical number of cards kept out of the 57 constructible lines.
pub const DEFAULT_DECK_SIZE: usize = 55;
/// Edge length of the square card canvas.
pub const DEFAULT_CANVAS_SIZE: f64 = 250.0;
/// Inset kept free on every side of the canvas.
pub const DEFAULT_MARGIN: f64 = 20.0;
pub const DEFAULT_MIN_SIZE: f64 = 30.0;
pub const DEFAULT_MAX_SIZE: f64 = 70.0;
/// Minimum gap between the bounding circles of two symbols.
pub const DEFAULT_CLEARANCE: f64 = 10.0;

/// Number of symbols (and of lines) in the projective plane of order `n`.
///
/// Saturates at `usize::MAX` for orders too large to construct.
#[must_use]
pub const fn plane_size(order: usize) -> usize {
    order.saturating_mul(order).saturating_add(order).saturating_add(1)
}

/// Like [`plane_size`], but `None` when `n² + n + 1` overflows.
#[must_use]
pub fn checked_plane_size(order: usize) -> Option<usize> {
    order.checked_mul(order)?.checked_add(order)?.checked_add(1)
}

/// Deck generation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Projective-plane order `n`. Cards hold `n + 1` symbols.
    pub order: usize,

    /// Cards kept from the `n² + n + 1` constructed lines, in construction
    /// order. Clamped to the number of lines.
    pub deck_size: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            deck_size: DEFAULT_DECK_SIZE,
        }
    }
}

impl DeckConfig {
    /// Config for a given order keeping every constructed line.
    #[must_use]
    pub fn full_plane(order: usize) -> Self {
        Self {
            order,
            deck_size: plane_size(order),
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Symbols needed for this order.
    #[must_use]
    pub fn required_symbols(&self) -> usize {
        plane_size(self.order)
    }

    /// Cards actually produced.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck_size.min(plane_size(self.order))
    }
}

/// Inclusive symbol size range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SIZE,
            max: DEFAULT_MAX_SIZE,
        }
    }
}

impl SizeBounds {
    /// Create validated bounds (`0 < min <= max`, both finite).
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Build bounds from raw user input, raising `max` to `min` when the two
    /// sliders cross.
    #[must_use]
    pub fn clamped(min: f64, max: f64) -> Self {
        Self {
            min,
            max: if min > max { min } else { max },
        }
    }

    pub fn validate(&self) -> Result<()> {
        let valid = self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.min <= self.max;
        if valid {
            Ok(())
        } else {
            Err(DobbleError::InvalidSizeBounds {
                min: self.min,
                max: self.max,
            })
        }
    }

    #[must_use]
    pub fn contains(&self, size: f64) -> bool {
        size >= self.min && size <= self.max
    }
}

/// What the layout engine does with the size range while retrying a symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// Always draw from the full `[min, max]` range.
    Fixed,
    /// Lower the upper bound of the draw toward `min` over successive rounds.
    #[default]
    ShrinkTowardMin,
}

/// Layout parameters for one card canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Symbol size range.
    pub bounds: SizeBounds,

    /// Edge length of the square canvas.
    pub canvas_size: f64,

    /// Free inset on every side of the canvas.
    pub margin: f64,

    /// Extra gap required between two symbols' bounding circles.
    pub clearance: f64,

    /// Draws allowed per symbol before the card is restarted.
    pub max_attempts: usize,

    /// Rounds the per-symbol budget is split into under `ShrinkTowardMin`.
    pub shrink_rounds: usize,

    /// Times a whole card is restarted before giving up.
    pub max_restarts: usize,

    pub retry_policy: RetryPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bounds: SizeBounds::default(),
            canvas_size: DEFAULT_CANVAS_SIZE,
            margin: DEFAULT_MARGIN,
            clearance: DEFAULT_CLEARANCE,
            max_attempts: 500,
            shrink_rounds: 5,
            max_restarts: 8,
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn with_bounds(mut self, bounds: SizeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_sizes(self, min: f64, max: f64) -> Self {
        self.with_bounds(SizeBounds { min, max })
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas_size: f64, margin: f64) -> Self {
        self.canvas_size = canvas_size;
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_clearance(mut self, clearance: f64) -> Self {
        self.clearance = clearance;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_max_restarts(mut self, max_restarts: usize) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Check that at least one symbol of `max` size fits inside the margins.
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if !(self.canvas_size > 2.0 * self.margin + self.bounds.max) || self.margin < 0.0 {
            return Err(DobbleError::CanvasTooSmall {
                canvas_size: self.canvas_size,
                margin: self.margin,
                max_size: self.bounds.max,
            });
        }
        Ok(())
    }

    /// Upper size bound for a draw in the given zero-based retry round.
    #[must_use]
    pub fn size_ceiling(&self, round: usize) -> f64 {
        match self.retry_policy {
            RetryPolicy::Fixed => self.bounds.max,
            RetryPolicy::ShrinkTowardMin => {
                let rounds = self.shrink_rounds.max(1);
                if rounds == 1 {
                    return self.bounds.max;
                }
                let t = round.min(rounds - 1) as f64 / (rounds - 1) as f64;
                self.bounds.max - (self.bounds.max - self.bounds.min) * t
            }
        }
    }

    /// Draws per shrink round.
    #[must_use]
    pub fn attempts_per_round(&self) -> usize {
        match self.retry_policy {
            RetryPolicy::Fixed => self.max_attempts.max(1),
            RetryPolicy::ShrinkTowardMin => (self.max_attempts / self.shrink_rounds.max(1)).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_size() {
        assert_eq!(plane_size(7), 57);
        assert_eq!(plane_size(2), 7);
        assert_eq!(plane_size(1), 3);
        assert_eq!(plane_size(usize::MAX), usize::MAX);
        assert_eq!(checked_plane_size(7), Some(57));
        assert_eq!(checked_plane_size(usize::MAX), None);
        assert_eq!(checked_plane_size(1 << (usize::BITS / 2)), None);
    }

    #[test]
    fn test_deck_config_defaults() {
        let config = DeckConfig::default();
        assert_eq!(config.order, 7);
        assert_eq!(config.required_symbols(), 57);
        assert_eq!(config.card_count(), 55);
    }

    #[test]
    fn test_deck_config_card_count_clamped() {
        let config = DeckConfig::default().with_order(2).with_deck_size(100);
        assert_eq!(config.card_count(), 7);
        assert_eq!(DeckConfig::full_plane(3).card_count(), 13);
    }

    #[test]
    fn test_size_bounds_validation() {
        assert!(SizeBounds::new(30.0, 70.0).is_ok());
        assert!(SizeBounds::new(70.0, 70.0).is_ok());
        assert_eq!(
            SizeBounds::new(80.0, 70.0),
            Err(DobbleError::InvalidSizeBounds { min: 80.0, max: 70.0 })
        );
        assert!(SizeBounds::new(0.0, 70.0).is_err());
        assert!(SizeBounds::new(f64::NAN, 70.0).is_err());
    }

    #[test]
    fn test_size_bounds_clamped() {
        let bounds = SizeBounds::clamped(80.0, 50.0);
        assert_eq!(bounds, SizeBounds { min: 80.0, max: 80.0 });

        let untouched = SizeBounds::clamped(30.0, 70.0);
        assert_eq!(untouched, SizeBounds::default());
    }

    #[test]
    fn test_layout_config_validate() {
        assert!(LayoutConfig::default().validate().is_ok());

        let tight = LayoutConfig::default().with_canvas(110.0, 20.0);
        assert!(matches!(
            tight.validate(),
            Err(DobbleError::CanvasTooSmall { .. })
        ));

        let crossed = LayoutConfig::default().with_sizes(70.0, 30.0);
        assert!(matches!(
            crossed.validate(),
            Err(DobbleError::InvalidSizeBounds { .. })
        ));
    }

    #[test]
    fn test_size_ceiling_shrinks() {
        let config = LayoutConfig::default();
        assert_eq!(config.size_ceiling(0), 70.0);
        assert_eq!(config.size_ceiling(4), 30.0);
        assert_eq!(config.size_ceiling(99), 30.0);
        assert!(config.size_ceiling(2) < 70.0 && config.size_ceiling(2) > 30.0);
        assert_eq!(config.attempts_per_round(), 100);
    }

    #[test]
    fn test_size_ceiling_fixed() {
        let config = LayoutConfig::default().with_retry_policy(RetryPolicy::Fixed);
        assert_eq!(config.size_ceiling(0), 70.0);
        assert_eq!(config.size_ceiling(4), 70.0);
        assert_eq!(config.attempts_per_round(), 500);
    }

    #[test]
    fn test_layout_config_serde() {
        let config = LayoutConfig::default().with_sizes(40.0, 60.0);
        let json = serde_json::to_string(&config).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
