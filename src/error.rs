//! Error type shared by deck generation, layout and persistence.

/// Errors produced by this crate.
///
/// Every failure is local to the call that produced it. Neither the
/// generator nor the layout engine keeps state between calls, so a failed
/// call never affects a later one.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DobbleError {
    /// The symbol set is smaller than `n² + n + 1` for the requested order.
    #[error("not enough symbols: {required} required, {available} available")]
    InsufficientSymbols {
        /// Symbols needed for the order.
        required: usize,
        /// Symbols supplied.
        available: usize,
    },
    /// Order must be at least 1 and small enough for `n² + n + 1` to fit.
    #[error("invalid order {0}")]
    InvalidOrder(usize),
    /// Size bounds must satisfy `0 < min <= max`.
    #[error("invalid size bounds: min {min}, max {max}")]
    InvalidSizeBounds { min: f64, max: f64 },
    /// The canvas cannot hold even one symbol of `max_size` inside the margins.
    #[error("canvas {canvas_size} too small for margin {margin} and max size {max_size}")]
    CanvasTooSmall {
        canvas_size: f64,
        margin: f64,
        max_size: f64,
    },
    /// The bounded search could not place every symbol without overlap.
    #[error("could not place symbol {symbol_index} without overlap after {attempts} attempts")]
    LayoutInfeasible {
        /// Position within the card of the symbol that could not be placed.
        symbol_index: usize,
        /// Total draws spent on the card before giving up.
        attempts: usize,
    },
    /// A symbol index was outside the symbol set.
    #[error("symbol index {index} out of range (len {len})")]
    SymbolIndexOutOfRange { index: usize, len: usize },
    /// An export was requested with no laid-out cards.
    #[error("no cards to export")]
    NothingToExport,
    /// JSON encoding or decoding failed.
    ///
    /// Holds the message rather than the `serde_json::Error` so the enum
    /// stays `Clone + PartialEq`.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DobbleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DobbleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_insufficient() {
        let err = DobbleError::InsufficientSymbols {
            required: 57,
            available: 56,
        };
        assert_eq!(
            err.to_string(),
            "not enough symbols: 57 required, 56 available"
        );
    }

    #[test]
    fn test_display_infeasible() {
        let err = DobbleError::LayoutInfeasible {
            symbol_index: 5,
            attempts: 4000,
        };
        assert!(err.to_string().contains("symbol 5"));
        assert!(err.to_string().contains("4000"));
    }

    #[test]
    fn test_display_invalid_order() {
        assert_eq!(DobbleError::InvalidOrder(0).to_string(), "invalid order 0");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DobbleError::NothingToExport);
        assert_eq!(err.to_string(), "no cards to export");
    }

    #[test]
    fn test_from_serde_json() {
        let parse: std::result::Result<Vec<String>, _> = serde_json::from_str("not json");
        let err: DobbleError = parse.unwrap_err().into();
        assert!(matches!(err, DobbleError::Serialization(_)));
    }
}
