//! Main extraction pipeline that ties all components together.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use roxmltree::Document;
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::payload;
use crate::plist;

/// Read a .gmd document and decode the level string stored under `key`.
///
/// Runs every pipeline stage except the file write: read, parse, key
/// lookup, base64 decode, gzip decompress, UTF-8 decode.
///
/// # Arguments
/// * `input` - Path to the .gmd XML document
/// * `key` - Dictionary key holding the encoded payload (e.g., "k4")
pub fn extract_to_string(input: &Path, key: &str) -> Result<String> {
    let xml = fs::read_to_string(input).map_err(|source| ExtractError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let doc = Document::parse(&xml)?;

    let encoded = plist::find_value(&doc, key)?;
    debug!(key, encoded_len = encoded.len(), "located encoded payload");

    let text = payload::decode(&encoded)?;
    debug!(decoded_len = text.len(), "decoded payload");

    Ok(text)
}

/// Run the full pipeline and write the decoded text to `output`.
///
/// The decoded text is buffered in full before the output file is
/// touched, so a failure in any earlier stage leaves no file behind.
/// The write goes through a sibling temp file that is renamed over
/// `output` on success, with the handle scoped so it is released on
/// every exit path.
///
/// # Arguments
/// * `input` - Path to the .gmd XML document
/// * `output` - Path to write the decoded text to (overwritten if present)
/// * `key` - Dictionary key holding the encoded payload
///
/// # Returns
/// The output path on success.
pub fn extract_to_file(input: &Path, output: &Path, key: &str) -> Result<PathBuf> {
    let text = extract_to_string(input, key)?;

    write_output(&text, output).map_err(|source| ExtractError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(output.to_path_buf())
}

/// Write `text` to `output` via a sibling temp file and atomic rename.
fn write_output(text: &str, output: &Path) -> std::io::Result<()> {
    let temp = temp_path(output);

    {
        let mut file = File::create(&temp)?;
        file.write_all(text.as_bytes())?;
        file.sync_all()?; // Ensure data is flushed to disk
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output.exists() {
        fs::remove_file(output)?;
    }

    fs::rename(&temp, output)
}

/// Sibling temp path for `output` (e.g., `out.txt` -> `.out.txt.tmp`).
fn temp_path(output: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(output.file_name().unwrap_or_default());
    name.push(".tmp");
    output.with_file_name(name)
}
