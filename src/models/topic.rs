use serde::{Deserialize, Serialize};

use super::{deserialize_id, null_as_default};

/// A forum thread as returned by the topics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    /// Free-text label; see [`Category`](super::Category) for the ones the UI offers
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Maintained by the backend, never recomputed here
    #[serde(default, deserialize_with = "null_as_default")]
    pub replies: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: i64,
    /// Pre-formatted activity label ("Только что", "2 часа назад")
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_post: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_pinned: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Topic {
    /// First letter of the author's name, upper-cased, for the avatar badge.
    pub fn author_initial(&self) -> String {
        self.author
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Body of a topic create request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTopic {
    pub title: String,
    pub author: String,
    pub category: String,
}

impl NewTopic {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category: category.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(self.title.trim(), self.author.trim(), self.category.trim())
    }
}

/// `GET` topics envelope.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TopicsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<Topic>,
}

/// Acknowledgement returned by create endpoints.
///
/// Parsed leniently: success is decided by status alone.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreatedResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_deserialize_camel_case() {
        let json = r#"{
            "id": 3,
            "title": "Поход в горы",
            "author": "Аня",
            "category": "Фэнтези",
            "replies": 4,
            "views": 120,
            "lastPost": "2 часа назад",
            "isPinned": true,
            "createdAt": "2025-10-28T12:00:00"
        }"#;
        let topic: Topic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.id, 3);
        assert_eq!(topic.last_post, "2 часа назад");
        assert!(topic.is_pinned);
        assert_eq!(topic.created_at.as_deref(), Some("2025-10-28T12:00:00"));
    }

    #[test]
    fn test_topic_missing_pinned_defaults_false() {
        let json = r#"{"id":"8","title":"t","author":"a","category":"c","replies":0,"views":0,"lastPost":"x"}"#;
        let topic: Topic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.id, 8);
        assert!(!topic.is_pinned);
        assert_eq!(topic.created_at, None);
    }

    #[test]
    fn test_topic_null_counters() {
        let json = r#"{"id":1,"title":"t","author":"a","category":"c","replies":null,"views":null,"lastPost":null,"isPinned":null}"#;
        let topic: Topic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.replies, 0);
        assert_eq!(topic.views, 0);
        assert_eq!(topic.last_post, "");
    }

    #[test]
    fn test_topics_response_missing_array() {
        let response: TopicsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.topics.is_empty());
        let response: TopicsResponse = serde_json::from_str(r#"{"topics":null}"#).unwrap();
        assert!(response.topics.is_empty());
    }

    #[test]
    fn test_new_topic_serializes_plain_fields() {
        let body = serde_json::to_value(NewTopic::new("Тест", "Аня", "Фэнтези")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"title": "Тест", "author": "Аня", "category": "Фэнтези"})
        );
    }

    #[test]
    fn test_created_response_lenient() {
        let created: CreatedResponse =
            serde_json::from_str(r#"{"id":5,"message":"Тема создана"}"#).unwrap();
        assert_eq!(created.id, Some(5));
        let empty: CreatedResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CreatedResponse::default());
    }

    #[test]
    fn test_author_initial() {
        let mut topic: Topic =
            serde_json::from_str(r#"{"id":1,"author":"аня"}"#).unwrap();
        assert_eq!(topic.author_initial(), "А");
        topic.author = "  ".to_string();
        assert_eq!(topic.author_initial(), "?");
    }
}
