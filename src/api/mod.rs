//! Forum API client.
//!
//! One client covers both remote stores: the topics endpoint and the
//! comments endpoint. Every request is bounded by the configured timeout
//! and gets at most one retry, see [`retry`].

pub mod retry;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::adapters::ReqwestHttpClient;
use crate::config::ForumConfig;
use crate::error::{ForumResult, NetworkError};
use crate::models::{
    Comment, CommentsResponse, CreatedResponse, NewComment, NewTopic, Topic, TopicsResponse,
};
use crate::traits::{Headers, HttpClient, HttpError, Response};

pub use retry::{Method, RetryPolicy};

/// Append `key=value` to `url`, starting or extending the query string.
pub fn with_query(url: &str, key: &str, value: impl std::fmt::Display) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, sep, key, value)
}

/// Client for the topics and comments endpoints.
#[derive(Clone)]
pub struct ForumClient {
    http: Arc<dyn HttpClient>,
    topics_url: String,
    comments_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl std::fmt::Debug for ForumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForumClient")
            .field("topics_url", &self.topics_url)
            .field("comments_url", &self.comments_url)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .finish()
    }
}

impl ForumClient {
    /// Client talking HTTP through reqwest.
    pub fn new(config: &ForumConfig) -> Self {
        Self::with_http(config, Arc::new(ReqwestHttpClient::new()))
    }

    /// Client over any transport.
    pub fn with_http(config: &ForumConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            topics_url: config.topics_url.clone(),
            comments_url: config.comments_url.clone(),
            timeout: config.timeout,
            retry: RetryPolicy::new(config.max_retries),
        }
    }

    /// Replace the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the full topic collection in server order.
    pub async fn list_topics(&self) -> ForumResult<Vec<Topic>> {
        let response = self.execute(Method::Get, &self.topics_url, None).await?;
        let listed: TopicsResponse = response.json().map_err(NetworkError::from)?;
        debug!(count = listed.topics.len(), "topics listed");
        Ok(listed.topics)
    }

    /// Fetch the collection and pick one topic out of it.
    ///
    /// There is no single-topic endpoint.
    pub async fn find_topic(&self, id: i64) -> ForumResult<Option<Topic>> {
        let topics = self.list_topics().await?;
        Ok(topics.into_iter().find(|t| t.id == id))
    }

    pub async fn create_topic(&self, topic: &NewTopic) -> ForumResult<CreatedResponse> {
        let response = self.post_json(&self.topics_url, topic).await?;
        Ok(Self::created(&response))
    }

    pub async fn delete_topic(&self, id: i64) -> ForumResult<()> {
        let url = with_query(&self.topics_url, "id", id);
        self.execute(Method::Delete, &url, None).await?;
        Ok(())
    }

    /// Comments of one topic, oldest first as the server returns them.
    pub async fn list_comments(&self, topic_id: i64) -> ForumResult<Vec<Comment>> {
        let url = with_query(&self.comments_url, "topicId", topic_id);
        let response = self.execute(Method::Get, &url, None).await?;
        let listed: CommentsResponse = response.json().map_err(NetworkError::from)?;
        debug!(topic_id, count = listed.comments.len(), "comments listed");
        Ok(listed.comments)
    }

    pub async fn create_comment(&self, comment: &NewComment) -> ForumResult<CreatedResponse> {
        let response = self.post_json(&self.comments_url, comment).await?;
        Ok(Self::created(&response))
    }

    pub async fn delete_comment(&self, id: i64) -> ForumResult<()> {
        let url = with_query(&self.comments_url, "id", id);
        self.execute(Method::Delete, &url, None).await?;
        Ok(())
    }

    /// The acknowledgement body is informational; a body that does not
    /// parse still counts as success.
    fn created(response: &Response) -> CreatedResponse {
        response.json().unwrap_or_default()
    }

    async fn post_json<T: Serialize>(&self, url: &str, body: &T) -> ForumResult<Response> {
        let body = serde_json::to_string(body).map_err(NetworkError::from)?;
        self.execute(Method::Post, url, Some(&body)).await
    }

    async fn attempt(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let request = async {
            match method {
                Method::Get => self.http.get(url, headers).await,
                Method::Post => self.http.post(url, body.unwrap_or_default(), headers).await,
                Method::Delete => self.http.delete(url, headers).await,
            }
        };
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(HttpError::Timeout(format!(
                "no response within {:?}",
                self.timeout
            ))),
        }
    }

    async fn execute(&self, method: Method, url: &str, body: Option<&str>) -> ForumResult<Response> {
        let mut headers = Headers::new();
        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let mut attempt = 0;
        let response = loop {
            debug!(%method, url, attempt, "request");
            match self.attempt(method, url, body, &headers).await {
                Ok(response) => break response,
                Err(err) if self.retry.should_retry(method, &err, attempt) => {
                    warn!(%method, url, error = %err, "request failed, retrying");
                    tokio::time::sleep(self.retry.backoff()).await;
                    attempt += 1;
                }
                Err(err) => {
                    warn!(%method, url, error = %err, "request failed");
                    return Err(NetworkError::from_http(err, url, self.timeout).into());
                }
            }
        };

        debug!(%method, url, status = response.status, "response");
        if response.is_success() {
            Ok(response)
        } else {
            Err(NetworkError::HttpStatus {
                status: response.status,
                message: Self::error_message(&response),
            }
            .into())
        }
    }

    /// Best-effort description of a failed response.
    fn error_message(response: &Response) -> String {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: String,
        }
        if let Ok(body) = response.json::<ErrorBody>() {
            return body.error;
        }
        let text = response.text().unwrap_or_default();
        text.chars().take(200).collect()
    }
}
