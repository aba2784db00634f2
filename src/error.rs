//! Error types for the conversion pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Error produced by a [`Trace`](crate::tracer::Trace) implementation.
///
/// The tracing algorithm lives outside this crate, so its failures are
/// carried as an opaque boxed error.
pub type TraceError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while converting images to SVG
#[derive(Error, Debug)]
pub enum Error {
    /// The image file could not be read or decoded
    #[error("failed to decode image '{}': {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The contour tracer reported a failure for this bitmap
    #[error("contour tracing failed: {source}")]
    Trace {
        #[source]
        source: TraceError,
    },

    /// A traced curve violated the closure contract
    #[error("malformed curve: {reason}")]
    MalformedCurve { reason: String },

    /// The destination file could not be created or written
    #[error("failed to write '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input directory could not be enumerated
    #[error("failed to read directory '{}': {}", .path.display(), .source)]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input path is neither a file nor a directory
    #[error("invalid input path '{}': not a file or directory", .path.display())]
    InvalidInput { path: PathBuf },

    /// A configuration preset failed to load
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedCurve {
            reason: reason.into(),
        }
    }
}
