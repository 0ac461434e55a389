// Metadata tree returned by the extraction engine

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Number, Value};

/// Leaf value in a metadata tree
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(Number),
    String(String),
}

/// Nested, loosely-typed metadata describing one video or a playlist of videos.
///
/// yt-dlp emits a single video as a mapping with a `title`, and a playlist
/// (or channel, or feed) as a mapping whose `entries` hold further nodes.
/// Entries may themselves be playlists.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum MetadataNode {
    /// JSON `null`, or a field that was never set
    #[default]
    Absent,
    Scalar(Scalar),
    Sequence(Vec<MetadataNode>),
    Mapping(BTreeMap<String, MetadataNode>),
}

impl MetadataNode {
    /// Look up a field of a mapping. Any other variant has no fields.
    pub fn get(&self, key: &str) -> Option<&MetadataNode> {
        match self {
            Self::Mapping(fields) => fields.get(key),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// String content of a scalar string node
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Entries of a container mapping: present and not null.
    pub fn entries(&self) -> Option<&MetadataNode> {
        self.get("entries").filter(|entries| !entries.is_absent())
    }

    /// Number of direct entries (playlists) or 1 (single item), for logging
    pub fn entry_count(&self) -> usize {
        match self.entries() {
            Some(Self::Sequence(items)) => items.len(),
            Some(_) => 0,
            None => match self {
                Self::Sequence(items) => items.len(),
                Self::Absent => 0,
                _ => 1,
            },
        }
    }
}

impl From<Value> for MetadataNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(fields) => Self::Mapping(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}
