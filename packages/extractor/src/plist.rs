//! Key/value lookup in plist-style .gmd dictionaries.
//!
//! A .gmd document stores its data as a flat list of sibling elements
//! under the root: a `<k>` marker element followed by the value element
//! it names, repeated. Only the root's direct element children are
//! scanned; nested dictionaries are not searched.

use roxmltree::Document;

use crate::config::KEY_TAG;
use crate::error::{ExtractError, Result};
use crate::xml::{element_children, get_tag_name, get_text};

/// Find the value text stored under `key` in the document.
///
/// Scans the root element's element children in document order for the
/// first `<k>` element whose text equals `key`, then returns the text of
/// the element immediately following it.
///
/// # Arguments
/// * `doc` - Parsed XML document
/// * `key` - Dictionary key to look up (e.g., "k4")
///
/// # Returns
/// * `Ok(text)` with the value element's trimmed text
/// * `Err(ExtractError::KeyNotFound)` if no marker matches, or the marker
///   is the last element child
/// * `Err(ExtractError::EmptyPayload)` if the value element has no text
pub fn find_value(doc: &Document<'_>, key: &str) -> Result<String> {
    let mut children = element_children(doc.root_element());

    while let Some(child) = children.next() {
        if get_tag_name(child) != KEY_TAG || get_text(child) != key {
            continue;
        }

        let value = children.next().ok_or_else(|| ExtractError::KeyNotFound {
            key: key.to_string(),
        })?;
        let text = get_text(value);
        if text.is_empty() {
            return Err(ExtractError::EmptyPayload {
                key: key.to_string(),
            });
        }
        return Ok(text);
    }

    Err(ExtractError::KeyNotFound {
        key: key.to_string(),
    })
}
