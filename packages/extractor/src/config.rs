//! Configuration constants for the extractor.

/// Tag name of key marker elements in a .gmd key/value dictionary.
///
/// The dictionary is a flat list of alternating elements: a `<k>` marker
/// followed by the value element it names.
pub const KEY_TAG: &str = "k";

/// Dictionary key whose value holds the encoded level string.
///
/// The default lookup key; the CLI accepts `--key` to override it for
/// files that store the payload under a different key.
pub const LEVEL_STRING_KEY: &str = "k4";
