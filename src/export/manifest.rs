//! Render manifests for the rasterize-and-zip step.
//!
//! The crate does not draw pixels or write archives. It hands a rasterizer
//! everything needed to draw each card faithfully (resolved symbols and
//! their placements) together with the fixed archive layout:
//!
//! ```text
//! dobble_cards.zip
//! └── dobble_cards/
//!     ├── card_1.png
//!     ├── card_2.png
//!     └── ...
//! ```

use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::error::{DobbleError, Result};
use crate::layout::CardLayout;
use crate::symbols::{Symbol, SymbolSet};

/// Folder holding the card images inside the archive.
pub const EXPORT_FOLDER: &str = "dobble_cards";
/// File name of the downloadable archive.
pub const ARCHIVE_NAME: &str = "dobble_cards.zip";

/// Image file name for the card at zero-based `card_index`.
#[must_use]
pub fn entry_name(card_index: usize) -> String {
    format!("card_{}.png", card_index + 1)
}

/// Path of the card image inside the archive.
#[must_use]
pub fn entry_path(card_index: usize) -> String {
    format!("{EXPORT_FOLDER}/{}", entry_name(card_index))
}

/// One symbol ready to draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedSymbol {
    pub symbol: Symbol,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// One card ready to rasterize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedCard {
    pub card_index: usize,
    /// Path inside the archive, e.g. `dobble_cards/card_1.png`.
    pub path: String,
    pub symbols: Vec<RenderedSymbol>,
}

/// Everything the export step needs, in card order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    pub archive_name: String,
    pub canvas_size: f64,
    pub cards: Vec<RenderedCard>,
}

impl ExportManifest {
    /// Resolve `layouts` against the symbol set.
    pub fn build(set: &SymbolSet, layouts: &[CardLayout], canvas_size: f64) -> Result<Self> {
        if layouts.is_empty() {
            return Err(DobbleError::NothingToExport);
        }

        let cards = layouts
            .iter()
            .map(|layout| render_card(set, layout))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(cards = cards.len(), archive = ARCHIVE_NAME, "built export manifest");
        Ok(Self {
            archive_name: ARCHIVE_NAME.to_string(),
            canvas_size,
            cards,
        })
    }

    /// Check that the manifest covers every card of `deck` exactly once, in
    /// order.
    #[must_use]
    pub fn covers(&self, deck: &Deck) -> bool {
        self.cards.len() == deck.len()
            && self
                .cards
                .iter()
                .zip(deck.iter())
                .enumerate()
                .all(|(i, (rendered, card))| {
                    rendered.card_index == i && rendered.symbols.len() == card.len()
                })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn render_card(set: &SymbolSet, layout: &CardLayout) -> Result<RenderedCard> {
    let symbols = layout
        .placements
        .iter()
        .map(|p| -> Result<RenderedSymbol> {
            let symbol = set
                .get(p.symbol)
                .ok_or(DobbleError::SymbolIndexOutOfRange {
                    index: p.symbol.index(),
                    len: set.len(),
                })?;
            Ok(RenderedSymbol {
                symbol: symbol.clone(),
                x: p.x,
                y: p.y,
                size: p.size,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RenderedCard {
        card_index: layout.card_index,
        path: entry_path(layout.card_index),
        symbols,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Placement;
    use crate::symbols::SymbolId;

    #[test]
    fn test_entry_names_are_one_based() {
        assert_eq!(entry_name(0), "card_1.png");
        assert_eq!(entry_name(54), "card_55.png");
        assert_eq!(entry_path(2), "dobble_cards/card_3.png");
    }

    #[test]
    fn test_build_resolves_symbols() {
        let set = SymbolSet::from_raw(["a", "data:image/png;base64,AA"]);
        let layouts = vec![CardLayout {
            card_index: 0,
            placements: vec![
                Placement::new(SymbolId::new(1), 20.0, 20.0, 50.0),
                Placement::new(SymbolId::new(0), 120.0, 120.0, 30.0),
            ],
        }];

        let manifest = ExportManifest::build(&set, &layouts, 250.0).unwrap();
        assert_eq!(manifest.archive_name, "dobble_cards.zip");
        assert_eq!(manifest.cards[0].path, "dobble_cards/card_1.png");
        assert!(manifest.cards[0].symbols[0].symbol.is_image());
        assert_eq!(manifest.cards[0].symbols[1].symbol, Symbol::glyph("a"));
        assert_eq!(manifest.cards[0].symbols[1].size, 30.0);
    }

    #[test]
    fn test_build_rejects_empty() {
        let set = SymbolSet::default();
        assert_eq!(
            ExportManifest::build(&set, &[], 250.0),
            Err(DobbleError::NothingToExport)
        );
    }

    #[test]
    fn test_build_rejects_unknown_symbol() {
        let set = SymbolSet::from_raw(["a"]);
        let layouts = vec![CardLayout {
            card_index: 0,
            placements: vec![Placement::new(SymbolId::new(4), 20.0, 20.0, 30.0)],
        }];

        assert_eq!(
            ExportManifest::build(&set, &layouts, 250.0),
            Err(DobbleError::SymbolIndexOutOfRange { index: 4, len: 1 })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let set = SymbolSet::from_raw(["🔥"]);
        let layouts = vec![CardLayout {
            card_index: 3,
            placements: vec![Placement::new(SymbolId::new(0), 25.5, 40.25, 42.0)],
        }];
        let manifest = ExportManifest::build(&set, &layouts, 250.0).unwrap();

        let json = manifest.to_json().unwrap();
        assert!(json.contains("dobble_cards/card_4.png"));
        assert_eq!(ExportManifest::from_json(&json).unwrap(), manifest);
    }
}
