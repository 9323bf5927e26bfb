//! Topic detail view-model against the in-memory forum backend.

mod common;

use rpg_forum::view_model::{DetailPhase, PendingAction, SubmitError, TopicDetailViewModel};

fn tavern_id(forum: &rpg_forum::adapters::InMemoryForum) -> i64 {
    forum
        .topics()
        .into_iter()
        .find(|t| t.title == "Таверна у дороги")
        .map(|t| t.id)
        .expect("seeded topic")
}

#[tokio::test]
async fn test_load_shows_topic_and_comments_oldest_first() {
    let forum = common::seeded_forum();
    let client = common::client_for(&forum);
    let id = tavern_id(&forum);
    let mut vm = TopicDetailViewModel::new();

    assert!(vm.load(&client, id).await.is_success());

    assert_eq!(vm.phase(), &DetailPhase::Ready);
    assert_eq!(vm.topic().map(|t| t.id), Some(id));
    let authors: Vec<_> = vm.comments().iter().map(|c| c.author.as_str()).collect();
    assert_eq!(authors, ["Арвен", "Гимли"]);
    assert_eq!(vm.comment_heading(), "Комментарии (2)");
    assert!(vm.drain_toasts().is_empty());
}

#[tokio::test]
async fn test_topic_without_comments_has_zero_heading() {
    let forum = common::seeded_forum();
    let client = common::client_for(&forum);
    let id = forum.seed_topic("Пустая тема", "Аня", "Киберпанк", false);
    let mut vm = TopicDetailViewModel::new();

    vm.load(&client, id).await;

    assert_eq!(vm.phase(), &DetailPhase::Ready);
    assert!(vm.comments().is_empty());
    assert_eq!(vm.comment_heading(), "Комментарии (0)");
}

#[tokio::test]
async fn test_unknown_id_is_not_found_without_toast() {
    let forum = common::seeded_forum();
    let client = common::client_for(&forum);
    let mut vm = TopicDetailViewModel::new();

    vm.load(&client, 9999).await;

    assert_eq!(vm.phase(), &DetailPhase::NotFound);
    assert!(vm.topic().is_none());
    assert!(vm.drain_toasts().is_empty());
    assert_eq!(
        vm.add_comment(&client, "Аня", "Привет").await.unwrap_err(),
        SubmitError::NotReady
    );
}

#[tokio::test]
async fn test_offline_first_load_is_error_state() {
    let forum = common::seeded_forum();
    let client = common::client_for(&forum);
    let id = tavern_id(&forum);
    forum.set_offline(true);
    let mut vm = TopicDetailViewModel::new();

    let outcome = vm.load(&client, id).await;

    assert!(!outcome.is_success());
    assert!(matches!(vm.phase(), DetailPhase::Error(_)));
    assert!(vm.drain_toasts().iter().all(|t| t.is_error()));
}

#[tokio::test]
async fn test_add_comment_resyncs_replies_from_server() {
    let forum = common::seeded_forum();
    let client = common::client_for(&forum);
    let id = tavern_id(&forum);
    let mut vm = TopicDetailViewModel::new();
    vm.load(&client, id).await;

    let outcome = vm
        .add_comment(&client, "  Леголас ", "Смотрю в окно.")
        .await
        .unwrap();

    assert!(outcome.is_success());
    assert_eq!(vm.comments().len(), 3);
    let last = &vm.comments()[2];
    assert_eq!(last.author, "Леголас");
    assert_eq!(last.content, "Смотрю в окно.");
    assert_eq!(vm.topic().map(|t| t.replies), Some(3));
    assert!(!vm.is_pending(PendingAction::AddComment));

    let toasts = vm.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].description, "Комментарий добавлен!");
}

#[tokio::test]
async fn test_blank_comment_is_rejected_locally() {
    let forum = common::seeded_forum();
    let client = common::client_for(&forum);
    let id = tavern_id(&forum);
    let mut vm = TopicDetailViewModel::new();
    vm.load(&client, id).await;
    let requests = forum.request_log().len();

    let err = vm.add_comment(&client, "Аня", "   ").await.unwrap_err();

    match err {
        SubmitError::Invalid(invalid) => assert_eq!(invalid.field(), "content"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(forum.request_log().len(), requests);
}

#[tokio::test]
async fn test_delete_comment_removes_it() {
    let forum = common::seeded_forum();
    let client = common::client_for(&forum);
    let id = tavern_id(&forum);
    let mut vm = TopicDetailViewModel::new();
    vm.load(&client, id).await;
    let first = vm.comments()[0].id;

    let outcome = vm.delete_comment(&client, first).await.unwrap();

    assert!(outcome.is_success());
    assert!(vm.comments().iter().all(|c| c.id != first));
    assert_eq!(vm.topic().map(|t| t.replies), Some(1));
    assert_eq!(forum.comments(id).len(), 1);
}

#[tokio::test]
async fn test_failed_delete_keeps_comments() {
    let forum = common::seeded_forum();
    let client = common::client_for(&forum);
    let id = tavern_id(&forum);
    let mut vm = TopicDetailViewModel::new();
    vm.load(&client, id).await;
    vm.drain_toasts();
    let first = vm.comments()[0].id;

    forum.fail_next(500);
    let outcome = vm.delete_comment(&client, first).await.unwrap();

    assert!(!outcome.is_success());
    assert_eq!(vm.comments().len(), 2);
    assert!(!vm.is_pending(PendingAction::DeleteComment(first)));
    let toasts = vm.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].description, "Не удалось удалить комментарий");
}

#[tokio::test]
async fn test_result_for_previous_topic_is_dropped() {
    let forum = common::seeded_forum();
    let client = common::client_for(&forum);
    let tavern = tavern_id(&forum);
    let other = forum.seed_topic("Другая тема", "Аня", "Фэнтези", false);
    let mut vm = TopicDetailViewModel::new();

    let old_ticket = vm.mount(tavern);
    let old = rpg_forum::view_model::sync::fetch_detail(&client, tavern).await;
    vm.load(&client, other).await;

    assert_eq!(
        vm.apply_snapshot(old_ticket, old),
        rpg_forum::view_model::ApplyOutcome::Stale
    );
    assert_eq!(vm.topic().map(|t| t.id), Some(other));
    assert!(vm.comments().is_empty());
}
