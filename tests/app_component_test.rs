//! Controller-level tests driving the app component through key events,
//! with a scripted API standing in for the remote service.

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use getitdone::api::{ApiError, Todo, TodoApi};
use getitdone::config::Config;
use getitdone::constants::ERROR_EMPTY_TEXT;
use getitdone::logger::Logger;
use getitdone::ui::core::{actions::Action, event_handler::EventType, EditMode, InputFocus};
use getitdone::ui::{AppComponent, AppState};
use std::sync::Arc;
use std::time::Duration;

/// Always succeeds; created todos get id "1".
struct StaticApi;

#[async_trait]
impl TodoApi for StaticApi {
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        Ok(Vec::new())
    }

    async fn create_todo(&self, text: &str) -> Result<Todo, ApiError> {
        Ok(Todo {
            id: "1".to_string(),
            text: text.to_string(),
        })
    }

    async fn update_todo(&self, _id: &str, _text: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_todo(&self, _id: &str) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Always fails with a network error.
struct FailingApi;

#[async_trait]
impl TodoApi for FailingApi {
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        Err(ApiError::Network("connection refused".to_string()))
    }

    async fn create_todo(&self, _text: &str) -> Result<Todo, ApiError> {
        Err(ApiError::Network("connection refused".to_string()))
    }

    async fn update_todo(&self, _id: &str, _text: &str) -> Result<(), ApiError> {
        Err(ApiError::Network("connection refused".to_string()))
    }

    async fn delete_todo(&self, _id: &str) -> Result<(), ApiError> {
        Err(ApiError::Network("connection refused".to_string()))
    }
}

fn app_with(api: Arc<dyn TodoApi>, config: Config) -> AppComponent {
    AppComponent::new(api, &config, Logger::new())
}

fn key(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn key_code(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(c));
    }
}

fn seed(app: &mut AppComponent, todos: Vec<Todo>) {
    app.apply_action(Action::TodosLoaded(todos));
}

fn todo(id: &str, text: &str) -> Todo {
    Todo {
        id: id.to_string(),
        text: text.to_string(),
    }
}

/// Drain background results until the condition holds or time runs out.
async fn drain_until<F>(app: &mut AppComponent, mut done: F)
where
    F: FnMut(&AppState) -> bool,
{
    for _ in 0..100 {
        for action in app.process_background_actions() {
            app.apply_action(action);
        }
        if done(app.state()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("background result did not arrive in time");
}

#[tokio::test]
async fn test_add_flow_appends_todo_and_clears_input() {
    let mut app = app_with(Arc::new(StaticApi), Config::default());
    seed(&mut app, Vec::new());

    app.handle_event(key('a'));
    assert_eq!(app.state().focus, InputFocus::Entry);

    type_text(&mut app, "Buy milk");
    app.handle_event(key_code(KeyCode::Enter));

    // Input is kept until the create call confirms
    assert_eq!(app.state().input, "Buy milk");

    drain_until(&mut app, |state| !state.todos.is_empty()).await;

    let state = app.state();
    assert_eq!(state.todos, vec![todo("1", "Buy milk")]);
    assert!(state.input.is_empty());
    assert_eq!(state.edit_mode, EditMode::Idle);
}

#[tokio::test]
async fn test_edit_flow_replaces_text_and_returns_to_idle() {
    let mut app = app_with(Arc::new(StaticApi), Config::default());
    seed(&mut app, vec![todo("1", "Buy milk")]);

    // 'e' on the selected row enters edit mode seeded with its text
    app.handle_event(key('e'));
    assert_eq!(app.state().edit_mode, EditMode::Editing { id: "1".to_string() });
    assert_eq!(app.state().input, "Buy milk");

    for _ in 0.."milk".len() {
        app.handle_event(key_code(KeyCode::Backspace));
    }
    type_text(&mut app, "oat milk");
    app.handle_event(key_code(KeyCode::Enter));

    drain_until(&mut app, |state| state.edit_mode == EditMode::Idle).await;

    let state = app.state();
    assert_eq!(state.todos, vec![todo("1", "Buy oat milk")]);
    assert!(state.input.is_empty());
    assert_eq!(state.focus, InputFocus::List);
}

#[tokio::test]
async fn test_delete_removes_exactly_the_selected_todo() {
    let mut app = app_with(Arc::new(StaticApi), Config::default());
    seed(&mut app, vec![todo("1", "Buy milk"), todo("2", "Walk the dog")]);

    app.handle_event(key('d'));

    drain_until(&mut app, |state| state.todos.len() == 1).await;
    assert_eq!(app.state().todos, vec![todo("2", "Walk the dog")]);
}

#[tokio::test]
async fn test_empty_submit_is_rejected_without_an_api_call() {
    let mut app = app_with(Arc::new(FailingApi), Config::default());
    seed(&mut app, Vec::new());

    app.handle_event(key('a'));
    app.handle_event(key_code(KeyCode::Enter));

    // Rejected client-side: the failing API was never hit
    let state = app.state();
    assert_eq!(state.error_message.as_deref(), Some(ERROR_EMPTY_TEXT));
    assert!(state.todos.is_empty());
    assert_eq!(app.active_task_count(), 0);
}

#[tokio::test]
async fn test_empty_submit_goes_through_when_allowed() {
    let mut config = Config::default();
    config.input.allow_empty = true;

    let mut app = app_with(Arc::new(StaticApi), config);
    seed(&mut app, Vec::new());

    app.handle_event(key('a'));
    app.handle_event(key_code(KeyCode::Enter));

    drain_until(&mut app, |state| !state.todos.is_empty()).await;
    assert_eq!(app.state().todos, vec![todo("1", "")]);
}

#[tokio::test]
async fn test_failed_operation_leaves_local_state_unchanged() {
    let mut app = app_with(Arc::new(FailingApi), Config::default());
    seed(&mut app, vec![todo("1", "Buy milk")]);

    app.handle_event(key('d'));

    drain_until(&mut app, |state| state.error_message.is_some()).await;

    let state = app.state();
    assert_eq!(state.todos, vec![todo("1", "Buy milk")]);
    assert!(state.error_message.as_deref().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_failed_reload_clears_loading_flag() {
    let mut app = app_with(Arc::new(FailingApi), Config::default());
    seed(&mut app, Vec::new());

    app.handle_event(key('r'));
    assert!(app.state().loading);

    drain_until(&mut app, |state| !state.loading).await;
    assert!(app.state().error_message.is_some());
}

#[tokio::test]
async fn test_search_narrows_the_visible_rows() {
    let mut app = app_with(Arc::new(StaticApi), Config::default());
    seed(
        &mut app,
        vec![todo("1", "Buy milk"), todo("2", "Walk the dog"), todo("3", "MILK the cow")],
    );

    app.handle_event(key('/'));
    assert_eq!(app.state().focus, InputFocus::Search);
    type_text(&mut app, "milk");

    let visible: Vec<&str> = app.state().filtered_todos().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(visible, vec!["1", "3"]);

    // Esc returns to the list but keeps the query applied
    app.handle_event(key_code(KeyCode::Esc));
    assert_eq!(app.state().focus, InputFocus::List);
    assert_eq!(app.state().search, "milk");
}

#[tokio::test]
async fn test_theme_toggle_key_is_an_involution() {
    let mut app = app_with(Arc::new(StaticApi), Config::default());
    seed(&mut app, Vec::new());
    let original = app.state().theme;

    app.handle_event(key('T'));
    assert_ne!(app.state().theme, original);

    app.handle_event(key('T'));
    assert_eq!(app.state().theme, original);
}

#[tokio::test]
async fn test_escape_cancels_an_in_progress_edit() {
    let mut app = app_with(Arc::new(StaticApi), Config::default());
    seed(&mut app, vec![todo("1", "Buy milk")]);

    app.handle_event(key('e'));
    app.handle_event(key_code(KeyCode::Esc));

    let state = app.state();
    assert_eq!(state.edit_mode, EditMode::Idle);
    assert!(state.input.is_empty());
    assert_eq!(state.focus, InputFocus::List);
    // The todo itself is untouched
    assert_eq!(state.todos, vec![todo("1", "Buy milk")]);
}
