mod common;

use common::{app_with, loaded_app, MockBackend};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use todoboard::constants::{DELETE_CONFIRMATION_PROMPT, ERROR_FETCH_FAILED, NO_TASKS_FOUND};
use todoboard::ui::core::{Action, Component};
use todoboard::ui::AppComponent;

fn draw(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn test_empty_app_renders_placeholder_and_inputs() {
    let mut app = app_with(Arc::new(MockBackend::new()));
    let screen = draw(&mut app);

    assert!(screen.contains(NO_TASKS_FOUND));
    assert!(screen.contains("New task"));
    assert!(screen.contains("Search"));
    assert!(screen.contains("0 todos"));
}

#[tokio::test]
async fn test_loading_indicator_while_fetching() {
    let mut app = app_with(Arc::new(MockBackend::new()));
    app.handle_app_action(Action::InitialLoad);

    assert!(draw(&mut app).contains("Loading..."));

    app.run_until_idle().await;
    assert!(!draw(&mut app).contains("Loading..."));
}

#[tokio::test]
async fn test_loaded_rows_and_page_title() {
    let (mut app, _backend) = loaded_app(12).await;
    let screen = draw(&mut app);

    assert!(screen.contains("Todo 1 "));
    assert!(screen.contains("Todo 10"));
    assert!(!screen.contains("Todo 11"));
    assert!(screen.contains("page 1 of 2 (12 matching)"));
    assert!(screen.contains("2024-01-01"));
}

#[tokio::test]
async fn test_error_banner_is_drawn() {
    let mut app = app_with(Arc::new(MockBackend::new().fail_fetch()));
    app.handle_app_action(Action::InitialLoad);
    app.run_until_idle().await;

    assert!(draw(&mut app).contains(ERROR_FETCH_FAILED));
}

#[tokio::test]
async fn test_confirmation_dialog_shows_target() {
    let (mut app, _backend) = loaded_app(3).await;
    app.handle_app_action(Action::RequestDelete(2));

    let screen = draw(&mut app);
    assert!(screen.contains(DELETE_CONFIRMATION_PROMPT));
    assert!(screen.contains("\"Todo 2\""));
}
