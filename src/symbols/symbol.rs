//! Symbols - the pictures printed on cards.
//!
//! A symbol is either a short text glyph (usually an emoji) or an image.
//! The raw string form used for persistence decides the variant once, at
//! parse time; nothing downstream looks at the raw content again.

use serde::{Deserialize, Serialize};

/// Prefix marking an inline image payload in the raw string form.
pub const DATA_IMAGE_PREFIX: &str = "data:image";

/// Positional identity of a symbol: its index in the `SymbolSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the owning `SymbolSet`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Where an image symbol's pixels come from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// Inline `data:image/...;base64,...` payload, as produced by an upload.
    DataUri(String),
    /// External reference (file path or URL).
    Uri(String),
}

impl ImageSource {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DataUri(s) | Self::Uri(s) => s,
        }
    }

    /// MIME type of an inline payload, e.g. `image/png`.
    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Self::DataUri(s) => {
                let rest = s.strip_prefix("data:")?;
                let end = rest.find([';', ','])?;
                Some(&rest[..end])
            }
            Self::Uri(_) => None,
        }
    }
}

/// A single card symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Symbol {
    /// Text rendered at `size` as its font size.
    Glyph(String),
    /// Image rendered as a `size` × `size` square.
    Image(ImageSource),
}

impl Symbol {
    /// Parse the raw persisted form.
    ///
    /// Strings starting with `data:image` become inline images; everything
    /// else, URLs included, is a text glyph. Use [`Symbol::image_uri`] to
    /// reference an external image.
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with(DATA_IMAGE_PREFIX) {
            Self::Image(ImageSource::DataUri(raw))
        } else {
            Self::Glyph(raw)
        }
    }

    #[must_use]
    pub fn glyph(text: impl Into<String>) -> Self {
        Self::Glyph(text.into())
    }

    #[must_use]
    pub fn image_uri(uri: impl Into<String>) -> Self {
        Self::Image(ImageSource::Uri(uri.into()))
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }

    /// The raw persisted form.
    #[must_use]
    pub fn as_raw(&self) -> &str {
        match self {
            Self::Glyph(text) => text,
            Self::Image(source) => source.as_str(),
        }
    }
}

impl From<String> for Symbol {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<&str> for Symbol {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Glyph(text) => text,
            Symbol::Image(ImageSource::DataUri(s) | ImageSource::Uri(s)) => s,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Glyph(text) => f.write_str(text),
            Self::Image(ImageSource::DataUri(_)) => f.write_str("<inline image>"),
            Self::Image(ImageSource::Uri(uri)) => write!(f, "<image {uri}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn test_parse_glyph() {
        let symbol = Symbol::parse("🍓");
        assert_eq!(symbol, Symbol::Glyph("🍓".to_string()));
        assert!(!symbol.is_image());
    }

    #[test]
    fn test_parse_data_uri() {
        let symbol = Symbol::parse(PNG);
        assert!(symbol.is_image());
        assert_eq!(symbol.as_raw(), PNG);
        match symbol {
            Symbol::Image(source) => assert_eq!(source.mime_type(), Some("image/png")),
            Symbol::Glyph(_) => panic!("expected image"),
        }
    }

    #[test]
    fn test_parse_url_is_glyph() {
        for raw in ["https://example.com/cat.png", "http://x", "file:///tmp/cat.png"] {
            assert_eq!(Symbol::parse(raw), Symbol::glyph(raw));
        }
    }

    #[test]
    fn test_image_uri_is_explicit() {
        let symbol = Symbol::image_uri("https://example.com/cat.png");
        assert!(symbol.is_image());
        assert_eq!(symbol.as_raw(), "https://example.com/cat.png");
        assert_eq!(ImageSource::Uri("x".into()).mime_type(), None);
    }

    #[test]
    fn test_serde_uses_raw_string() {
        let symbols = vec![Symbol::glyph("🔥"), Symbol::parse(PNG)];
        let json = serde_json::to_string(&symbols).unwrap();
        assert_eq!(json, format!("[\"🔥\",\"{PNG}\"]"));

        let back: Vec<Symbol> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, symbols);

        // an external reference is written out raw and reads back as text
        let uri = serde_json::to_string(&Symbol::image_uri("file:///tmp/cat.png")).unwrap();
        assert_eq!(uri, "\"file:///tmp/cat.png\"");
        let back: Symbol = serde_json::from_str(&uri).unwrap();
        assert_eq!(back, Symbol::glyph("file:///tmp/cat.png"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::glyph("⭐").to_string(), "⭐");
        assert_eq!(Symbol::parse(PNG).to_string(), "<inline image>");
        assert_eq!(SymbolId::new(12).to_string(), "S12");
    }
}
