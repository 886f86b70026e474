//! Encoding and decoding of the level-string payload.
//!
//! The payload stored in a .gmd file is plain text that has been gzip
//! compressed and then encoded with the URL-safe base64 alphabet
//! (`-`/`_` in place of `+`/`/`, standard padding).

use std::io::{Read, Write};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{ExtractError, Result};

/// Decode a base64url(gzip(text)) payload into plain text.
///
/// Whitespace in the encoded text is stripped before decoding, since XML
/// pretty-printers may wrap long text content across lines. The gzip
/// stream is fully validated, including the CRC32 trailer. The
/// decompressed bytes are interpreted as UTF-8.
///
/// # Arguments
/// * `encoded` - URL-safe base64 text as stored in the value element
///
/// # Returns
/// * `Ok(text)` with the decoded level string
/// * `Err(ExtractError::Base64)` on malformed base64
/// * `Err(ExtractError::Decompress)` if the bytes are not a valid gzip stream
/// * `Err(ExtractError::InvalidUtf8)` if the decompressed bytes are not UTF-8
pub fn decode(encoded: &str) -> Result<String> {
    let compact: String = encoded.split_whitespace().collect();
    let compressed = URL_SAFE.decode(compact.as_bytes())?;

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|source| ExtractError::Decompress { source })?;

    Ok(String::from_utf8(decompressed)?)
}

/// Encode plain text into a base64url(gzip(text)) payload.
///
/// Inverse of [`decode`]: `decode(&encode(text))` returns `text` for any
/// UTF-8 input.
#[allow(clippy::expect_used)] // Writing to an in-memory Vec cannot fail
pub fn encode(text: &str) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(text.as_bytes())
        .expect("write to Vec is infallible");
    let compressed = encoder.finish().expect("finish on Vec is infallible");

    URL_SAFE.encode(compressed)
}
