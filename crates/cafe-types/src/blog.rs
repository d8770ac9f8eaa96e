//! Blog post types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::RecordId;

/// A blog post.
///
/// Only `id` has a fixed meaning; everything else is free-form content kept
/// exactly as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default, skip_serializing_if = "RecordId::is_missing")]
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Blog {
    /// Read a string field, ignoring non-string values
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> &str {
        self.text("title").unwrap_or("Untitled")
    }

    /// Post body, accepting either `content` or `body`
    pub fn content(&self) -> &str {
        self.text("content")
            .or_else(|| self.text("body"))
            .unwrap_or_default()
    }

    pub fn image(&self) -> Option<&str> {
        self.text("image").filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_free_form_fields() {
        let blog: Blog = serde_json::from_value(json!({
            "id": 4,
            "title": "Flat whites of Tokyo",
            "body": "A short tour.",
            "tags": ["tokyo"]
        }))
        .unwrap();

        assert_eq!(blog.title(), "Flat whites of Tokyo");
        assert_eq!(blog.content(), "A short tour.");
        assert_eq!(blog.image(), None);
        assert_eq!(blog.fields.get("tags"), Some(&json!(["tokyo"])));
    }

    #[test]
    fn test_key_order_preserved() {
        let raw = r#"{"id":1,"title":"T","author":"A","content":"C"}"#;
        let blog: Blog = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&blog).unwrap(), raw);
    }

    #[test]
    fn test_missing_title() {
        let blog: Blog = serde_json::from_value(json!({ "id": 9 })).unwrap();
        assert_eq!(blog.title(), "Untitled");
        assert_eq!(blog.content(), "");
    }
}
