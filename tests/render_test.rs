//! Full-frame rendering through `TestBackend`.

mod common;

use crossterm::event::KeyCode;
use rpg_forum::app::Screen;

use common::{press, render_to_string, settle, started_app};

#[tokio::test]
async fn test_home_lists_topics_and_stats() {
    let forum = common::seeded_forum();
    let app = started_app(&forum).await;

    let screen = render_to_string(&app, 120, 40);

    assert!(screen.contains("RPG Форум"));
    assert!(screen.contains("Активные темы"));
    assert!(screen.contains("Таверна у дороги"));
    assert!(screen.contains("Станция Орион"));
    assert!(screen.contains("Статистика портала"));
    assert!(screen.contains("3 Активных тем"));
    assert!(screen.contains("support@rpgforum.com"));
}

#[tokio::test]
async fn test_active_topic_counter_ignores_filter() {
    let forum = common::seeded_forum();
    let mut app = started_app(&forum).await;
    app.topic_list.filter_by_category(Some("Научная фантастика"));

    let screen = render_to_string(&app, 120, 40);

    assert!(screen.contains("Станция Орион"));
    assert!(!screen.contains("Таверна у дороги"));
    assert!(screen.contains("Сбросить фильтр"));
    assert!(screen.contains("3 Активных тем"));
}

#[tokio::test]
async fn test_empty_forum_invites_first_topic() {
    let forum = common::forum();
    let app = started_app(&forum).await;

    let screen = render_to_string(&app, 120, 40);

    assert!(screen.contains("Тем пока нет"));
}

#[tokio::test]
async fn test_topic_without_comments_shows_empty_state() {
    let forum = common::seeded_forum();
    let id = forum.seed_topic("Пустая тема", "Аня", "Фэнтези", false);
    let mut app = started_app(&forum).await;

    app.navigate(Screen::Topic(id));
    assert!(render_to_string(&app, 120, 40).contains("Загрузка..."));
    settle(&mut app).await;

    let screen = render_to_string(&app, 120, 40);
    assert!(screen.contains("Пустая тема"));
    assert!(screen.contains("Комментарии (0)"));
    assert!(screen.contains("Пока нет комментариев. Будьте первым!"));
    assert!(screen.contains("Добавить комментарий"));
    assert!(screen.contains("Введите ваше имя"));
}

#[tokio::test]
async fn test_topic_lists_comments() {
    let forum = common::seeded_forum();
    let id = forum
        .topics()
        .into_iter()
        .find(|t| t.title == "Таверна у дороги")
        .map(|t| t.id)
        .unwrap();
    let mut app = started_app(&forum).await;

    app.navigate(Screen::Topic(id));
    settle(&mut app).await;

    let screen = render_to_string(&app, 120, 40);
    assert!(screen.contains("Комментарии (2)"));
    assert!(screen.contains("Арвен"));
    assert!(screen.contains("Эля мне!"));
    assert!(screen.contains("2 ответов"));
}

#[tokio::test]
async fn test_unknown_topic_offers_way_back() {
    let forum = common::seeded_forum();
    let mut app = started_app(&forum).await;

    app.navigate(Screen::Topic(9999));
    settle(&mut app).await;

    let screen = render_to_string(&app, 120, 40);
    assert!(screen.contains("Тема не найдена"));
    assert!(screen.contains("Вернуться на главную"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Home);
}

#[tokio::test]
async fn test_dialogs_render_over_the_screen() {
    let forum = common::seeded_forum();
    let mut app = started_app(&forum).await;

    press(&mut app, KeyCode::Char('n'));
    let screen = render_to_string(&app, 120, 40);
    assert!(screen.contains("Новая тема"));
    assert!(screen.contains("Категория"));
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('l'));
    let screen = render_to_string(&app, 120, 40);
    assert!(screen.contains("Вход в портал"));
    assert!(screen.contains("Введите логин"));
}

#[tokio::test]
async fn test_toast_is_drawn_after_create() {
    let forum = common::seeded_forum();
    let mut app = started_app(&forum).await;

    press(&mut app, KeyCode::Char('n'));
    common::type_text(&mut app, "Тест");
    press(&mut app, KeyCode::Tab);
    common::type_text(&mut app, "Аня");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    let screen = render_to_string(&app, 120, 40);
    assert!(screen.contains("Тема создана!"));
    assert!(screen.contains("Тест"));
}

#[tokio::test]
async fn test_static_pages_render() {
    let forum = common::seeded_forum();
    let mut app = started_app(&forum).await;

    press(&mut app, KeyCode::Char('2'));
    assert!(render_to_string(&app, 120, 40).contains("Нарушения и наказания"));

    press(&mut app, KeyCode::Char('3'));
    assert!(render_to_string(&app, 120, 40).contains("Часто задаваемые вопросы"));

    press(&mut app, KeyCode::Char('4'));
    assert!(render_to_string(&app, 120, 40).contains("Подписка на новости"));
}

#[tokio::test]
async fn test_small_terminals_do_not_panic() {
    let forum = common::seeded_forum();
    let mut app = started_app(&forum).await;

    for (w, h) in [(70, 20), (40, 12), (20, 6), (1, 1)] {
        render_to_string(&app, w, h);
    }
    press(&mut app, KeyCode::Char('r'));
    for (w, h) in [(70, 20), (30, 8)] {
        render_to_string(&app, w, h);
    }
}
