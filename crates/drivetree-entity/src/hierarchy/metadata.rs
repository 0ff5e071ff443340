//! Metadata encoded in an item's description field.
//!
//! Authors annotate items with `title:...|tags:a,b|description:...`. Keys
//! are matched case-insensitively; values keep their original case.

/// Separator between `key:value` segments.
const SEGMENT_SEPARATOR: char = '|';
/// Separator between a key and its value.
const KEY_SEPARATOR: char = ':';
/// Separator between tags.
const TAG_SEPARATOR: char = ',';

/// Values parsed out of a description field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMetadata {
    /// Overrides the item name as display title.
    pub title: Option<String>,
    /// Tags in order of first appearance, without duplicates.
    pub tags: Vec<String>,
    /// Overrides the raw description.
    pub description: Option<String>,
}

impl ItemMetadata {
    /// Parse a description field.
    ///
    /// A field without any `|` carries no metadata. Segments without a
    /// `:` are ignored, and for repeated keys the first one wins.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut metadata = Self::default();
        let Some(raw) = raw else {
            return metadata;
        };

        let segments: Vec<&str> = raw.split(SEGMENT_SEPARATOR).collect();
        if segments.len() < 2 {
            return metadata;
        }

        let mut tags_seen = false;
        for segment in segments {
            let Some((key, value)) = segment.split_once(KEY_SEPARATOR) else {
                continue;
            };
            let value = value.trim();

            match key.trim().to_lowercase().as_str() {
                "title" if metadata.title.is_none() => metadata.title = non_empty(value),
                "description" if metadata.description.is_none() => {
                    metadata.description = non_empty(value)
                }
                "tags" if !tags_seen => {
                    tags_seen = true;
                    metadata.tags = split_tags(value);
                }
                _ => {}
            }
        }

        metadata
    }

    /// Whether nothing was recognized.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.tags.is_empty() && self.description.is_none()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn split_tags(value: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in value.split(TAG_SEPARATOR).map(str::trim) {
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
