//! Error types for the output surface and image export.

/// Errors raised while creating the canvas or exporting it.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// The requested surface has a zero dimension.
    #[error("cannot create a {width}x{height} canvas")]
    InvalidSize {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(String),

    /// Writing the exported file failed.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}
