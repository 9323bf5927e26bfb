//! Network sequences behind each view-model operation.
//!
//! A mutation is followed by a resync before its result is reported, so the
//! screen never shows a state the server has not confirmed.

use tracing::info;

use crate::api::ForumClient;
use crate::error::{ForumError, ForumResult, ResultExt};
use crate::models::{Comment, NewComment, NewTopic, Topic};

/// Result of a mutation and the resync that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<T> {
    /// The mutation itself failed; no resync was attempted.
    Failed(ForumError),
    /// The server accepted the mutation; `resync` is what was fetched after.
    Applied { resync: T },
}

/// Topic and comments of one detail screen, fetched together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSnapshot {
    pub topic: ForumResult<Option<Topic>>,
    pub comments: ForumResult<Vec<Comment>>,
}

pub async fn load_topics(client: &ForumClient) -> ForumResult<Vec<Topic>> {
    client.list_topics().await.log_failure("load topics")
}

pub async fn fetch_detail(client: &ForumClient, topic_id: i64) -> DetailSnapshot {
    let (topic, comments) = tokio::join!(
        client.find_topic(topic_id),
        client.list_comments(topic_id)
    );
    DetailSnapshot {
        topic: topic.log_failure("load topic"),
        comments: comments.log_failure("load comments"),
    }
}

pub async fn create_topic(
    client: &ForumClient,
    topic: &NewTopic,
) -> Mutation<ForumResult<Vec<Topic>>> {
    match client.create_topic(topic).await.log_failure("create topic") {
        Ok(created) => {
            info!(id = ?created.id, title = %topic.title, "topic created");
            Mutation::Applied {
                resync: load_topics(client).await,
            }
        }
        Err(err) => Mutation::Failed(err),
    }
}

pub async fn delete_topic(client: &ForumClient, id: i64) -> Mutation<ForumResult<Vec<Topic>>> {
    match client.delete_topic(id).await.log_failure("delete topic") {
        Ok(()) => {
            info!(id, "topic deleted");
            Mutation::Applied {
                resync: load_topics(client).await,
            }
        }
        Err(err) => Mutation::Failed(err),
    }
}

pub async fn add_comment(client: &ForumClient, comment: &NewComment) -> Mutation<DetailSnapshot> {
    match client.create_comment(comment).await.log_failure("add comment") {
        Ok(created) => {
            info!(id = ?created.id, topic_id = comment.topic_id, "comment added");
            Mutation::Applied {
                resync: fetch_detail(client, comment.topic_id).await,
            }
        }
        Err(err) => Mutation::Failed(err),
    }
}

pub async fn delete_comment(
    client: &ForumClient,
    topic_id: i64,
    id: i64,
) -> Mutation<DetailSnapshot> {
    match client.delete_comment(id).await.log_failure("delete comment") {
        Ok(()) => {
            info!(id, topic_id, "comment deleted");
            Mutation::Applied {
                resync: fetch_detail(client, topic_id).await,
            }
        }
        Err(err) => Mutation::Failed(err),
    }
}
