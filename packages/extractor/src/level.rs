//! Structured view of a decoded level string.
//!
//! A decoded level string is a `;`-separated list of segments. The first
//! segment is the level header, every following segment one object
//! record. Both are flat `k,v,k,v,…` lists; object records use numeric
//! keys, of which `1` (object id), `2` (x position) and `3` (y position)
//! are interpreted here. Unknown keys are ignored.

/// A decoded level: header entries plus placed objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Header key/value pairs in document order.
    pub header: Vec<(String, String)>,
    /// Object records that carried an object id.
    pub objects: Vec<LevelObject>,
}

/// A single placed object from the level string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelObject {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl Level {
    /// Parse a decoded level string.
    ///
    /// The parse is tolerant by design: unknown keys, malformed numeric
    /// values and empty trailing segments are skipped rather than
    /// rejected, and records without an object id are dropped.
    pub fn parse(source: &str) -> Self {
        let mut segments = source.split(';');
        let header = segments.next().map(parse_pairs).unwrap_or_default();
        let objects = segments
            .filter(|segment| !segment.is_empty())
            .filter_map(parse_object)
            .collect();

        Self { header, objects }
    }

    /// Look up a header value by key.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.header
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Split a `k,v,k,v,…` segment into key/value pairs.
fn parse_pairs(segment: &str) -> Vec<(String, String)> {
    let keys = segment.split(',').step_by(2);
    let values = segment.split(',').skip(1).step_by(2);
    keys.zip(values)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Parse one object record, or `None` if it carries no object id.
fn parse_object(record: &str) -> Option<LevelObject> {
    let keys = record.split(',').step_by(2);
    let values = record.split(',').skip(1).step_by(2);

    let mut object = LevelObject::default();
    let mut has_id = false;
    for (key, value) in keys.zip(values) {
        match key {
            "1" => {
                if let Ok(id) = value.parse() {
                    object.id = id;
                    has_id = true;
                }
            }
            "2" => {
                if let Ok(x) = value.parse() {
                    object.x = x;
                }
            }
            "3" => {
                if let Ok(y) = value.parse() {
                    object.y = y;
                }
            }
            _ => {}
        }
    }

    has_id.then_some(object)
}
