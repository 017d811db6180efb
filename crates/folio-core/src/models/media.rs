use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metadata for a single uploaded file, keyed by its stored filename.
/// Created on upload, removed on delete, never otherwise mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaEntry {
    /// User-supplied tags, in submission order.
    pub tags: Vec<String>,
    /// Optional external link attached to the upload.
    #[serde(default)]
    pub link: Option<String>,
}

/// The full metadata document: stored filename -> entry.
///
/// Every key corresponds to a file in the media directory. A crash between
/// the file write and the document write can violate this transiently.
pub type MetadataDocument = BTreeMap<String, MediaEntry>;

/// Parse a comma-separated tag string into a tag list.
/// Whitespace around each tag is trimmed; empty segments are dropped, so
/// empty input yields an empty list.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags_trims_and_drops_empty_segments() {
        assert_eq!(
            parse_tags("art, photography ,  web"),
            vec!["art", "photography", "web"]
        );
        assert_eq!(parse_tags("a,,b,"), vec!["a", "b"]);
    }

    #[test]
    fn parse_tags_empty_input_yields_empty_list() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("   ").is_empty());
    }

    #[test]
    fn entry_round_trips_through_json() {
        let mut doc = MetadataDocument::new();
        doc.insert(
            "abc-photo.jpg".to_string(),
            MediaEntry {
                tags: vec!["art".to_string()],
                link: Some("https://example.com".to_string()),
            },
        );
        doc.insert("def-empty.png".to_string(), MediaEntry::default());

        let bytes = serde_json::to_vec_pretty(&doc).unwrap();
        let loaded: MetadataDocument = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc, loaded);
    }

    #[test]
    fn missing_link_deserializes_as_none() {
        let entry: MediaEntry = serde_json::from_str(r#"{"tags":["a"]}"#).unwrap();
        assert_eq!(entry.link, None);
    }
}
