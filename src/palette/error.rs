//! Error types for palette remapping.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while generating colour variants.
///
/// `AssetLoad` and `PaletteBuffer` abort the whole generation step.
/// `BufferAccess` and `MissingFrame` only fail the asset they name.
#[derive(Debug, Error)]
pub enum RemapError {
    #[error("failed to load '{key}' from {path}: {source}")]
    AssetLoad {
        key: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(
        "palette {width}x{height} cannot be sampled as a {rows}x{columns} swatch grid"
    )]
    PaletteBuffer {
        width: u32,
        height: u32,
        rows: u32,
        columns: u32,
    },
    #[error("could not rebuild the pixel buffer for '{asset}'")]
    BufferAccess { asset: String },
    #[error("animation frame '{frame}' is missing from '{asset}'")]
    MissingFrame { asset: String, frame: String },
}

impl RemapError {
    /// Whether this error ends the whole generation step.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RemapError::AssetLoad { .. } | RemapError::PaletteBuffer { .. }
        )
    }
}
