//! In-memory forum backend.
//!
//! Serves the topics and comments endpoints with the same status codes,
//! envelopes and side effects as the hosted API: ids are assigned on
//! create, topics list pinned-first then newest-first, comments list oldest
//! first, and comment mutations move the parent topic's reply counter.

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, NaiveDate, NaiveDateTime};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{Comment, Topic, DEFAULT_CATEGORY};
use crate::traits::{Headers, HttpClient, HttpError, Response};

const JUST_NOW: &str = "Только что";

#[derive(Debug)]
struct StoredTopic {
    topic: Topic,
    seq: u64,
}

#[derive(Debug, Default)]
struct ForumState {
    topics: Vec<StoredTopic>,
    comments: Vec<(Comment, u64)>,
    next_topic_id: i64,
    next_comment_id: i64,
    seq: u64,
    offline: bool,
    injected: VecDeque<u16>,
    log: Vec<(String, String)>,
}

impl ForumState {
    fn tick(&mut self) -> (u64, String) {
        self.seq += 1;
        (self.seq, timestamp(self.seq))
    }

    fn topic_mut(&mut self, id: i64) -> Option<&mut Topic> {
        self.topics
            .iter_mut()
            .find(|t| t.topic.id == id)
            .map(|t| &mut t.topic)
    }

    fn sorted_topics(&self) -> Vec<Topic> {
        let mut stored: Vec<&StoredTopic> = self.topics.iter().collect();
        stored.sort_by(|a, b| {
            b.topic
                .is_pinned
                .cmp(&a.topic.is_pinned)
                .then(b.seq.cmp(&a.seq))
        });
        stored.into_iter().map(|s| s.topic.clone()).collect()
    }

    fn add_topic(&mut self, title: &str, author: &str, category: &str, pinned: bool) -> i64 {
        self.next_topic_id += 1;
        let id = self.next_topic_id;
        let (seq, created_at) = self.tick();
        self.topics.push(StoredTopic {
            topic: Topic {
                id,
                title: title.to_string(),
                author: author.to_string(),
                category: category.to_string(),
                replies: 0,
                views: 0,
                last_post: JUST_NOW.to_string(),
                is_pinned: pinned,
                created_at: Some(created_at),
            },
            seq,
        });
        id
    }

    fn add_comment(&mut self, topic_id: i64, author: &str, content: &str) -> Option<i64> {
        self.topic_mut(topic_id)?;
        self.next_comment_id += 1;
        let id = self.next_comment_id;
        let (seq, created_at) = self.tick();
        self.comments.push((
            Comment {
                id,
                topic_id,
                author: author.to_string(),
                content: content.to_string(),
                created_at,
            },
            seq,
        ));
        if let Some(topic) = self.topic_mut(topic_id) {
            topic.replies += 1;
            topic.last_post = JUST_NOW.to_string();
        }
        Some(id)
    }

    fn remove_comment(&mut self, id: i64) {
        if let Some(pos) = self.comments.iter().position(|(c, _)| c.id == id) {
            let (comment, _) = self.comments.remove(pos);
            if let Some(topic) = self.topic_mut(comment.topic_id) {
                topic.replies = (topic.replies - 1).max(0);
            }
        }
    }

    fn remove_topic(&mut self, id: i64) {
        self.topics.retain(|t| t.topic.id != id);
        self.comments.retain(|(c, _)| c.topic_id != id);
    }
}

fn timestamp(seq: u64) -> String {
    let base: NaiveDateTime = NaiveDate::from_ymd_opt(2025, 10, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap_or_default();
    (base + ChronoDuration::minutes(seq as i64))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

fn split_query(url: &str) -> (&str, HashMap<&str, &str>) {
    match url.split_once('?') {
        Some((base, query)) => (
            base,
            query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .collect(),
        ),
        None => (url, HashMap::new()),
    }
}

fn reply(status: u16, body: Value) -> Result<Response, HttpError> {
    Ok(Response::json_body(status, &body))
}

fn bad_request(message: &str) -> Result<Response, HttpError> {
    reply(400, json!({ "error": message }))
}

fn required<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Forum backend held in memory, usable wherever an [`HttpClient`] is.
///
/// Clones share state, so a test can keep a handle for seeding and
/// inspection while the client under test owns another.
#[derive(Debug, Clone)]
pub struct InMemoryForum {
    topics_url: String,
    comments_url: String,
    state: Arc<Mutex<ForumState>>,
}

impl InMemoryForum {
    pub fn new(topics_url: impl Into<String>, comments_url: impl Into<String>) -> Self {
        Self {
            topics_url: topics_url.into(),
            comments_url: comments_url.into(),
            state: Arc::new(Mutex::new(ForumState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, ForumState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a topic directly. Returns its id.
    pub fn seed_topic(&self, title: &str, author: &str, category: &str, pinned: bool) -> i64 {
        self.state().add_topic(title, author, category, pinned)
    }

    /// Insert a comment directly, bumping the topic's replies.
    pub fn seed_comment(&self, topic_id: i64, author: &str, content: &str) -> Option<i64> {
        self.state().add_comment(topic_id, author, content)
    }

    /// Topics in listing order.
    pub fn topics(&self) -> Vec<Topic> {
        self.state().sorted_topics()
    }

    /// Comments of one topic in listing order.
    pub fn comments(&self, topic_id: i64) -> Vec<Comment> {
        let state = self.state();
        let mut comments: Vec<&(Comment, u64)> = state
            .comments
            .iter()
            .filter(|(c, _)| c.topic_id == topic_id)
            .collect();
        comments.sort_by_key(|(_, seq)| *seq);
        comments.into_iter().map(|(c, _)| c.clone()).collect()
    }

    /// While offline every request fails with a connection error.
    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    /// Answer the next request with `status` instead of handling it.
    pub fn fail_next(&self, status: u16) {
        self.state().injected.push_back(status);
    }

    /// `(method, url)` of every request received.
    pub fn request_log(&self) -> Vec<(String, String)> {
        self.state().log.clone()
    }

    fn handle(&self, method: &str, url: &str, body: Option<&str>) -> Result<Response, HttpError> {
        let mut state = self.state();
        state.log.push((method.to_string(), url.to_string()));

        if state.offline {
            return Err(HttpError::ConnectionFailed(format!(
                "connection refused: {}",
                url
            )));
        }
        if let Some(status) = state.injected.pop_front() {
            return reply(status, json!({ "error": "injected failure" }));
        }

        let (base, params) = split_query(url);
        let body: Value = match body {
            Some(raw) => match serde_json::from_str(raw) {
                Ok(value) => value,
                Err(_) => return bad_request("invalid JSON"),
            },
            None => Value::Null,
        };
        let id_param = |name: &str| params.get(name).and_then(|v| v.parse::<i64>().ok());

        if base == self.topics_url {
            match method {
                "GET" => reply(200, json!({ "topics": state.sorted_topics() })),
                "POST" => {
                    let (Some(title), Some(author)) =
                        (required(&body, "title"), required(&body, "author"))
                    else {
                        return bad_request("title and author are required");
                    };
                    let category = required(&body, "category").unwrap_or(DEFAULT_CATEGORY);
                    let id = state.add_topic(title, author, category, false);
                    reply(201, json!({ "id": id, "message": "Тема создана" }))
                }
                "DELETE" => match id_param("id") {
                    Some(id) => {
                        state.remove_topic(id);
                        reply(200, json!({ "message": "Тема удалена" }))
                    }
                    None => bad_request("id is required"),
                },
                _ => reply(405, json!({ "error": "Method not allowed" })),
            }
        } else if base == self.comments_url {
            match method {
                "GET" => match id_param("topicId") {
                    Some(topic_id) => {
                        drop(state);
                        reply(200, json!({ "comments": self.comments(topic_id) }))
                    }
                    None => bad_request("topicId is required"),
                },
                "POST" => {
                    let topic_id = body.get("topicId").and_then(Value::as_i64);
                    let (Some(topic_id), Some(author), Some(content)) = (
                        topic_id,
                        required(&body, "author"),
                        required(&body, "content"),
                    ) else {
                        return bad_request("topicId, author and content are required");
                    };
                    match state.add_comment(topic_id, author, content) {
                        Some(id) => {
                            reply(201, json!({ "id": id, "message": "Комментарий добавлен" }))
                        }
                        None => reply(404, json!({ "error": "topic not found" })),
                    }
                }
                "DELETE" => match id_param("id") {
                    Some(id) => {
                        state.remove_comment(id);
                        reply(200, json!({ "message": "Комментарий удален" }))
                    }
                    None => bad_request("id is required"),
                },
                _ => reply(405, json!({ "error": "Method not allowed" })),
            }
        } else {
            reply(404, json!({ "error": "not found" }))
        }
    }
}

#[async_trait]
impl HttpClient for InMemoryForum {
    async fn get(&self, url: &str, _headers: &Headers) -> Result<Response, HttpError> {
        self.handle("GET", url, None)
    }

    async fn post(&self, url: &str, body: &str, _headers: &Headers) -> Result<Response, HttpError> {
        self.handle("POST", url, Some(body))
    }

    async fn delete(&self, url: &str, _headers: &Headers) -> Result<Response, HttpError> {
        self.handle("DELETE", url, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommentsResponse, TopicsResponse};

    const TOPICS: &str = "http://forum.test/topics";
    const COMMENTS: &str = "http://forum.test/comments";

    fn forum() -> InMemoryForum {
        InMemoryForum::new(TOPICS, COMMENTS)
    }

    #[tokio::test]
    async fn test_listing_order_pinned_then_newest() {
        let forum = forum();
        let old = forum.seed_topic("old", "a", "Фэнтези", false);
        let pinned = forum.seed_topic("pinned", "a", "Фэнтези", true);
        let new = forum.seed_topic("new", "a", "Фэнтези", false);

        let response = forum.get(TOPICS, &Headers::new()).await.unwrap();
        let listed: TopicsResponse = response.json().unwrap();
        let ids: Vec<i64> = listed.topics.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![pinned, new, old]);
    }

    #[tokio::test]
    async fn test_create_topic_defaults() {
        let forum = forum();
        let response = forum
            .post(TOPICS, r#"{"title":"Тест","author":"Аня"}"#, &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 201);

        let topic = &forum.topics()[0];
        assert_eq!(topic.category, DEFAULT_CATEGORY);
        assert_eq!(topic.replies, 0);
        assert_eq!(topic.views, 0);
        assert_eq!(topic.last_post, JUST_NOW);
    }

    #[tokio::test]
    async fn test_create_topic_requires_title() {
        let forum = forum();
        let response = forum
            .post(TOPICS, r#"{"author":"Аня"}"#, &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 400);
        assert!(forum.topics().is_empty());
    }

    #[tokio::test]
    async fn test_comment_mutations_move_replies() {
        let forum = forum();
        let topic = forum.seed_topic("t", "a", "Фэнтези", false);

        let body = format!(r#"{{"topicId":{},"author":"Аня","content":"Привет"}}"#, topic);
        assert_eq!(forum.post(COMMENTS, &body, &Headers::new()).await.unwrap().status, 201);
        assert_eq!(forum.topics()[0].replies, 1);

        let url = format!("{}?topicId={}", COMMENTS, topic);
        let listed: CommentsResponse = forum.get(&url, &Headers::new()).await.unwrap().json().unwrap();
        assert_eq!(listed.comments.len(), 1);

        let url = format!("{}?id={}", COMMENTS, listed.comments[0].id);
        assert_eq!(forum.delete(&url, &Headers::new()).await.unwrap().status, 200);
        assert_eq!(forum.topics()[0].replies, 0);

        // Deleting again is still a 200 and never goes negative.
        assert_eq!(forum.delete(&url, &Headers::new()).await.unwrap().status, 200);
        assert_eq!(forum.topics()[0].replies, 0);
    }

    #[tokio::test]
    async fn test_offline_and_injected_failures() {
        let forum = forum();
        forum.fail_next(503);
        assert_eq!(forum.get(TOPICS, &Headers::new()).await.unwrap().status, 503);
        assert_eq!(forum.get(TOPICS, &Headers::new()).await.unwrap().status, 200);

        forum.set_offline(true);
        assert!(matches!(
            forum.get(TOPICS, &Headers::new()).await,
            Err(HttpError::ConnectionFailed(_))
        ));
        assert_eq!(forum.request_log().len(), 3);
    }

    #[test]
    fn test_split_query() {
        let (base, params) = split_query("http://x/c?topicId=4&foo=bar");
        assert_eq!(base, "http://x/c");
        assert_eq!(params.get("topicId"), Some(&"4"));
        assert_eq!(params.get("foo"), Some(&"bar"));
    }
}
