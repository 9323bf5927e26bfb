use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, null_as_default};

const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// A reply scoped to one topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub topic_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl Comment {
    /// Creation time as `dd.mm.yyyy, HH:MM:SS` in local time.
    ///
    /// Timestamps without an offset are taken as local. Anything that does
    /// not parse is returned verbatim.
    pub fn created_at_display(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

pub(crate) fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));
    match naive {
        Ok(naive) => match Local.from_local_datetime(&naive).earliest() {
            Some(local) => local.format(DISPLAY_FORMAT).to_string(),
            None => naive.format(DISPLAY_FORMAT).to_string(),
        },
        Err(_) => raw.to_string(),
    }
}

/// Body of a comment create request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub topic_id: i64,
    pub author: String,
    pub content: String,
}

impl NewComment {
    pub fn new(topic_id: i64, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            topic_id,
            author: author.into(),
            content: content.into(),
        }
    }
}

/// `GET` comments envelope.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CommentsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_deserialize() {
        let json = r#"{"id":10,"topicId":3,"author":"Аня","content":"Привет","createdAt":"2025-10-28T09:05:07.123456"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.topic_id, 3);
        assert_eq!(comment.content, "Привет");
    }

    #[test]
    fn test_new_comment_uses_camel_case() {
        let body = serde_json::to_value(NewComment::new(3, "Аня", "Привет")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"topicId": 3, "author": "Аня", "content": "Привет"})
        );
    }

    #[test]
    fn test_naive_timestamp_formats_as_local() {
        assert_eq!(
            format_timestamp("2025-10-28T09:05:07.123456"),
            "28.10.2025, 09:05:07"
        );
        assert_eq!(format_timestamp("2025-01-02 03:04:05"), "02.01.2025, 03:04:05");
    }

    #[test]
    fn test_rfc3339_timestamp_converts_to_local() {
        let raw = "2025-10-28T09:05:07+00:00";
        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string();
        assert_eq!(format_timestamp(raw), expected);
    }

    #[test]
    fn test_unparseable_timestamp_verbatim() {
        assert_eq!(format_timestamp("вчера"), "вчера");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_comments_response_missing_array() {
        let response: CommentsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.comments.is_empty());
    }
}
