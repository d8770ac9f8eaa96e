//! The persisted data document

use serde::{Deserialize, Serialize};

use crate::{Blog, Cafe};

/// Top-level shape of the data file: `{ "cafes": [...], "blogs": [...] }`.
///
/// A missing collection reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataDocument {
    #[serde(default)]
    pub cafes: Vec<Cafe>,
    #[serde(default)]
    pub blogs: Vec<Blog>,
}

/// Borrowed view of the document, used when writing without cloning records
#[derive(Debug, Serialize)]
pub struct DataDocumentRef<'a> {
    pub cafes: &'a [Cafe],
    pub blogs: &'a [Blog],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_collections_default_to_empty() {
        let doc: DataDocument = serde_json::from_str(r#"{ "cafes": [] }"#).unwrap();
        assert!(doc.cafes.is_empty());
        assert!(doc.blogs.is_empty());

        let doc: DataDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, DataDocument::default());
    }

    #[test]
    fn test_ref_serializes_like_owned() {
        let raw = r#"{"cafes":[{"id":1,"name":"A","location":"","rating":"","image":"","opening Hours":"","contact":"","website":"","google-map":"","review":"","city":"paris"}],"blogs":[{"id":1,"title":"T"}]}"#;
        let doc: DataDocument = serde_json::from_str(raw).unwrap();
        let borrowed = DataDocumentRef {
            cafes: &doc.cafes,
            blogs: &doc.blogs,
        };
        assert_eq!(serde_json::to_string(&borrowed).unwrap(), raw);
        assert_eq!(serde_json::to_string(&doc).unwrap(), raw);
    }

    #[test]
    fn test_hand_edited_entries_still_load() {
        let raw = r#"{"cafes":[{"id":1,"name":"A","rating":null,"city":null},{"name":"no id"},{"id":"x"}],"blogs":[{"title":"T","image":null}]}"#;
        let doc: DataDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.cafes.len(), 3);
        assert_eq!(doc.blogs.len(), 1);

        let written = serde_json::to_string(&doc).unwrap();
        assert!(written.contains(r#""rating":null"#));
        assert!(written.contains(r#""id":"x""#));
        let reread: DataDocument = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, doc);
    }
}
