//! # Title flattening
//!
//! Walks a [`MetadataNode`] depth-first, left to right, and collects every
//! non-empty `title`. A mapping with non-null `entries` is a container: only
//! its entries contribute, never its own title. The collected titles are then
//! deduplicated, keeping the first occurrence of each.

use std::collections::HashSet;

use serde::Serialize;

use crate::extractor::MetadataNode;

/// Ordered list of distinct titles, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TitleList(Vec<String>);

impl TitleList {
    /// Build from titles in traversal order, dropping repeats.
    ///
    /// Titles compare as exact strings: case and whitespace matter.
    pub fn from_ordered<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique = Vec::new();

        for title in titles {
            let title = title.as_ref();
            if seen.insert(title.to_string()) {
                unique.push(title.to_string());
            }
        }

        Self(unique)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Distinct titles of every leaf under `node`
pub fn flatten(node: &MetadataNode) -> TitleList {
    let mut titles = Vec::new();
    collect_titles(node, &mut titles);
    TitleList::from_ordered(titles)
}

fn collect_titles<'a>(node: &'a MetadataNode, out: &mut Vec<&'a str>) {
    match node {
        MetadataNode::Mapping(_) => match node.entries() {
            Some(MetadataNode::Sequence(entries)) => {
                for entry in entries {
                    collect_titles(entry, out);
                }
            }
            // entries present but not a list: a container with nothing usable
            Some(_) => {}
            None => {
                if let Some(title) = node.get("title").and_then(MetadataNode::as_str) {
                    if !title.is_empty() {
                        out.push(title);
                    }
                }
            }
        },
        MetadataNode::Sequence(items) => {
            for item in items {
                collect_titles(item, out);
            }
        }
        MetadataNode::Scalar(_) | MetadataNode::Absent => {}
    }
}
