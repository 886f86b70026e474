//! Error types for the extractor.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the gmd-extract library.
///
/// Each variant corresponds to one stage of the extraction pipeline, so
/// the rendered message always names the stage that failed.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Failed to read the input document.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// No key marker with the requested text, or the marker is the last
    /// element and has no value sibling.
    #[error("Key '{key}' not found in document (or it has no value element)")]
    KeyNotFound { key: String },

    /// The value element following the key marker has no text content.
    #[error("Value for key '{key}' is empty")]
    EmptyPayload { key: String },

    /// The payload is not valid URL-safe base64.
    #[error("Base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not a valid gzip stream.
    #[error("Gzip decompression failed: {source}")]
    Decompress {
        #[source]
        source: std::io::Error,
    },

    /// The decompressed bytes are not valid UTF-8 text.
    #[error("Decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Failed to write the output file.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
