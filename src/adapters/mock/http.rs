//! Mock HTTP client for testing.
//!
//! Responses are scripted per method and URL. Several responses queued for
//! the same route are served in order, the last one repeating.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST or DELETE)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response
    Success(Response),
    /// Return a transport error
    Error(HttpError),
    /// Sleep, then behave like the wrapped response
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    /// JSON response with the given status.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }

    /// Bare status with an empty body.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, ""))
    }
}

type Route = (String, String);

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use rpg_forum::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.on("GET", "http://forum.test/topics", MockResponse::json(200, json!({"topics": []})));
///
/// let response = client.get("http://forum.test/topics", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.requests_for("GET").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Scripted responses keyed by (method, URL prefix)
    responses: Arc<Mutex<HashMap<Route, VecDeque<MockResponse>>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method` on URLs starting with `url`.
    pub fn on(&self, method: &str, url: &str, response: MockResponse) {
        lock(&self.responses)
            .entry((method.to_uppercase(), url.to_string()))
            .or_default()
            .push_back(response);
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Recorded requests with the given method.
    pub fn requests_for(&self, method: &str) -> Vec<RecordedRequest> {
        lock(&self.requests)
            .iter()
            .filter(|r| r.method.eq_ignore_ascii_case(method))
            .cloned()
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        lock(&self.requests).push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    /// Pick the response for a request: exact URL first, then the longest
    /// matching prefix.
    fn next_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        let mut responses = lock(&self.responses);
        let exact = (method.to_string(), url.to_string());
        let key = if responses.contains_key(&exact) {
            Some(exact)
        } else {
            responses
                .keys()
                .filter(|(m, prefix)| m == method && url.starts_with(prefix.as_str()))
                .max_by_key(|(_, prefix)| prefix.len())
                .cloned()
        }?;

        let queue = responses.get_mut(&key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }

    async fn respond(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        let mut scripted = self.next_response(method, url);
        loop {
            match scripted {
                Some(MockResponse::Success(response)) => return Ok(response),
                Some(MockResponse::Error(err)) => return Err(err),
                Some(MockResponse::Delayed(delay, inner)) => {
                    tokio::time::sleep(delay).await;
                    scripted = Some(*inner);
                }
                None => {
                    return Err(HttpError::Other(format!(
                        "No mock response for {} {}",
                        method, url
                    )))
                }
            }
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond("GET", url).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond("POST", url).await
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("DELETE", url, headers, None);
        self.respond("DELETE", url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_routes_by_method() {
        let client = MockHttpClient::new();
        client.on("GET", "http://forum.test/topics", MockResponse::json(200, json!({"topics": []})));
        client.on("DELETE", "http://forum.test/topics", MockResponse::status(500));

        let get = client.get("http://forum.test/topics", &Headers::new()).await.unwrap();
        assert_eq!(get.status, 200);
        let delete = client
            .delete("http://forum.test/topics?id=3", &Headers::new())
            .await
            .unwrap();
        assert_eq!(delete.status, 500);

        let posted = client.post("http://forum.test/topics", "{}", &Headers::new()).await;
        assert!(matches!(posted, Err(HttpError::Other(_))));
        assert_eq!(client.requests().len(), 3);
        assert_eq!(client.requests_for("post")[0].body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_queued_responses_then_sticky_last() {
        let client = MockHttpClient::new();
        let url = "http://forum.test/topics";
        client.on("GET", url, MockResponse::Error(HttpError::ConnectionFailed("down".into())));
        client.on("GET", url, MockResponse::status(200));

        assert!(client.get(url, &Headers::new()).await.is_err());
        assert_eq!(client.get(url, &Headers::new()).await.unwrap().status, 200);
        assert_eq!(client.get(url, &Headers::new()).await.unwrap().status, 200);
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.on("GET", "http://forum.test/", MockResponse::status(404));
        client.on("GET", "http://forum.test/comments", MockResponse::status(200));

        let response = client
            .get("http://forum.test/comments?topicId=1", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }
}
