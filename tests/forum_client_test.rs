//! HTTP contract of the forum client, exercised through reqwest against a
//! wiremock server.

use std::time::Duration;

use rpg_forum::api::{ForumClient, RetryPolicy};
use rpg_forum::config::ForumConfig;
use rpg_forum::error::{ForumError, NetworkError};
use rpg_forum::models::{NewComment, NewTopic};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, timeout: Duration) -> ForumClient {
    let config = ForumConfig::new()
        .with_topics_url(format!("{}/topics", server.uri()))
        .with_comments_url(format!("{}/comments", server.uri()))
        .with_timeout(timeout);
    ForumClient::new(&config)
        .with_retry_policy(RetryPolicy::new(1).with_backoff(Duration::from_millis(1)))
}

#[tokio::test]
async fn test_list_topics_contract() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "topics": [
                {
                    "id": 3, "title": "Правила набора", "author": "Модератор",
                    "category": "Фэнтези", "replies": 4, "views": 120,
                    "lastPost": "2 часа назад", "isPinned": true
                },
                {
                    "id": "7", "title": "Станция Орион", "author": "Рипли",
                    "category": "Научная фантастика", "replies": null, "views": 0,
                    "lastPost": "Только что"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let topics = client(&server, Duration::from_secs(2)).list_topics().await.unwrap();

    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].id, 3);
    assert!(topics[0].is_pinned);
    assert_eq!(topics[0].last_post, "2 часа назад");
    // Server order is kept; numeric strings and nulls are tolerated.
    assert_eq!(topics[1].id, 7);
    assert_eq!(topics[1].replies, 0);
    assert!(!topics[1].is_pinned);
}

#[tokio::test]
async fn test_create_topic_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/topics"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "title": "Тест",
            "author": "Аня",
            "category": "Фэнтези"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 11, "message": "Тема создана"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server, Duration::from_secs(2))
        .create_topic(&NewTopic::new("Тест", "Аня", "Фэнтези"))
        .await
        .unwrap();
    assert_eq!(created.id, Some(11));
}

#[tokio::test]
async fn test_create_accepts_unparseable_ack() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let created = client(&server, Duration::from_secs(2))
        .create_comment(&NewComment::new(4, "Арвен", "Привет"))
        .await
        .unwrap();
    assert_eq!(created.id, None);
}

#[tokio::test]
async fn test_comments_are_scoped_by_topic_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comments"))
        .and(query_param("topicId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comments": [
                {"id": 1, "topicId": 7, "author": "Гимли", "content": "Эля мне!",
                 "createdAt": "2025-10-01T12:00:00"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let comments = client(&server, Duration::from_secs(2))
        .list_comments(7)
        .await
        .unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].topic_id, 7);
    assert_eq!(comments[0].author, "Гимли");
}

#[tokio::test]
async fn test_deletes_use_id_query() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/topics"))
        .and(query_param("id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Тема удалена"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/comments"))
        .and(query_param("id", "9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Duration::from_secs(2));
    client.delete_topic(5).await.unwrap();
    client.delete_comment(9).await.unwrap();
}

#[tokio::test]
async fn test_error_status_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, Duration::from_secs(2))
        .list_topics()
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(matches!(
        err,
        ForumError::Network(NetworkError::HttpStatus { ref message, .. }) if message == "db down"
    ));
}

#[tokio::test]
async fn test_slow_get_times_out_after_one_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"topics": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let started = std::time::Instant::now();
    let err = client(&server, Duration::from_millis(200))
        .list_topics()
        .await
        .unwrap_err();

    assert!(matches!(err, ForumError::Network(NetworkError::Timeout { .. })));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_slow_post_is_not_repeated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/topics"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(3)))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, Duration::from_millis(200))
        .create_topic(&NewTopic::new("Тест", "Аня", "Фэнтези"))
        .await
        .unwrap_err();
    assert!(matches!(err, ForumError::Network(NetworkError::Timeout { .. })));
}

#[tokio::test]
async fn test_unreachable_server_is_connection_failure() {
    // Bind then drop a listener so the port is closed.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let config = ForumConfig::new()
        .with_topics_url(format!("{}/topics", uri))
        .with_comments_url(format!("{}/comments", uri))
        .with_timeout(Duration::from_secs(2));
    let client = ForumClient::new(&config)
        .with_retry_policy(RetryPolicy::new(1).with_backoff(Duration::from_millis(1)));

    let err = client.list_topics().await.unwrap_err();
    assert!(err.is_retryable());
}
