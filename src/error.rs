//! Error types for the export pipeline.

use thiserror::Error;

/// Everything that can go wrong between a rendered scene and a saved PNG.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The serialized SVG markup could not be decoded into a bitmap.
    #[error("SVG decode failed: {0}")]
    Decode(String),

    /// A pixel surface of the requested size could not be allocated.
    #[error("could not allocate a {width}x{height} pixel surface")]
    Surface { width: u32, height: u32 },

    /// The composed surface could not be encoded as PNG.
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// An object URL was revoked (or never existed) when it was needed.
    #[error("object URL is not resolvable: {0}")]
    Dangling(String),

    /// A background decode or encode task was cancelled or panicked.
    #[error("export task failed: {0}")]
    Task(String),

    /// The download could not be written to disk.
    #[error("failed to save the download: {0}")]
    Io(#[from] std::io::Error),
}
