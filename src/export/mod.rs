//! Export support: archive naming and per-card render manifests.

pub mod manifest;

pub use manifest::{
    entry_name, entry_path, ExportManifest, RenderedCard, RenderedSymbol, ARCHIVE_NAME,
    EXPORT_FOLDER,
};
