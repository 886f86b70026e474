//! gmd-extract - Decode the compressed level string stored in .gmd files.
//!
//! A .gmd file is a plist-style XML document holding a flat key/value
//! dictionary. The level data lives under key `k4` as gzip-compressed,
//! URL-safe-base64-encoded text. This crate locates that value, decodes
//! it, and writes (or summarizes) the plain level string.
//!
//! # Example
//!
//! ```
//! use gmd_extract::payload;
//!
//! let encoded = payload::encode("kA2,1;1,1,2,15,3,15;");
//! assert_eq!(payload::decode(&encoded).unwrap(), "kA2,1;1,1,2,15,3,15;");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Key tag and default lookup key constants
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML navigation helpers
//! - [`plist`]: Key/value dictionary lookup
//! - [`payload`]: base64url + gzip codec
//! - [`level`]: Structured view of a decoded level string
//! - [`extractor`]: Pipeline orchestration and file output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod level;
pub mod payload;
pub mod plist;
pub mod xml;

// Re-export main functions
pub use extractor::{extract_to_file, extract_to_string};

// Re-export commonly used items
pub use config::{KEY_TAG, LEVEL_STRING_KEY};
pub use error::{ExtractError, Result};
pub use level::{Level, LevelObject};
