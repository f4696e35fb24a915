use crate::api::{Todo, TodoApi};
use crate::config::Config;
use crate::constants::{
    ERROR_EMPTY_TEXT, SUCCESS_TODO_CREATED, SUCCESS_TODO_DELETED, SUCCESS_TODO_UPDATED,
};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::theme::Theme;
use crate::ui::components::{EntryForm, Header, StatusBar, TodoListComponent};
use crate::ui::core::{
    actions::Action,
    event_handler::EventType,
    task_manager::TaskManager,
    Component, EditMode, InputFocus,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns.
///
/// The todo list is a cache of backend state: every mutation is applied
/// only after the corresponding remote call confirms.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub todos: Vec<Todo>,
    pub input: String,
    pub search: String,
    pub edit_mode: EditMode,
    pub focus: InputFocus,
    pub theme: Theme,
    pub loading: bool,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

impl AppState {
    /// The rows currently visible: case-insensitive substring match of the
    /// search text, re-derived on every call. An empty search yields the
    /// full list in order.
    pub fn filtered_todos(&self) -> Vec<&Todo> {
        let needle = self.search.to_lowercase();
        self.todos
            .iter()
            .filter(|todo| todo.text.to_lowercase().contains(&needle))
            .collect()
    }

    /// Enter edit mode for a todo, seeding the input with its text.
    ///
    /// Any in-progress edit is silently discarded: the input is overwritten
    /// and the previous target forgotten.
    pub fn begin_edit(&mut self, id: String, text: String) {
        self.edit_mode = EditMode::Editing { id };
        self.input = text;
        self.focus = InputFocus::Entry;
    }

    /// Abandon the in-progress add or edit.
    pub fn cancel_edit(&mut self) {
        self.edit_mode = EditMode::Idle;
        self.input.clear();
        self.focus = InputFocus::List;
    }

    pub fn apply_loaded(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.loading = false;
    }

    pub fn apply_created(&mut self, todo: Todo) {
        self.todos.push(todo);
        self.input.clear();
    }

    pub fn apply_updated(&mut self, id: &str, text: String) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.text = text;
        }
        self.input.clear();
        self.edit_mode = EditMode::Idle;
        self.focus = InputFocus::List;
    }

    pub fn apply_deleted(&mut self, id: &str) {
        self.todos.retain(|t| t.id != id);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

pub struct AppComponent {
    // Component composition
    todo_list: TodoListComponent,

    // Application state
    state: AppState,

    // Services
    api: Arc<dyn TodoApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,

    // Validation rule for submissions, from `[input] allow_empty`
    allow_empty: bool,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn TodoApi>, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let state = AppState {
            theme: config.ui.theme,
            loading: true,
            ..Default::default()
        };

        Self {
            todo_list: TodoListComponent::new(),
            state,
            api,
            task_manager,
            background_action_rx,
            logger,
            icons: IconService::new(config.ui.icons),
            allow_empty: config.input.allow_empty,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Kick off the first fetch on startup.
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("Starting initial load".to_string());
        self.task_manager.spawn_fetch(self.api.clone());
    }

    /// Update the list component with the current filtered view.
    fn sync_component_data(&mut self) {
        let filtered: Vec<Todo> = self.state.filtered_todos().into_iter().cloned().collect();
        let editing_id = self.state.edit_mode.target().map(str::to_string);

        self.todo_list.update_data(
            filtered,
            editing_id,
            self.state.todos.len(),
            self.state.theme,
            self.icons,
        );
    }

    /// Route a key event to the focused widget, falling back to global keys.
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.state.focus {
            InputFocus::Entry => self.handle_entry_key(key),
            InputFocus::Search => self.handle_search_key(key),
            InputFocus::List => {
                let list_action = self.todo_list.handle_key_events(key);
                if matches!(list_action, Action::None) {
                    self.handle_global_key(key)
                } else {
                    list_action
                }
            }
        }
    }

    fn handle_entry_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Submit,
            KeyCode::Esc => Action::CancelEdit,
            KeyCode::Backspace => {
                self.state.input.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.state.input.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // The query stays applied after leaving the field
            KeyCode::Esc | KeyCode::Enter => Action::FocusList,
            KeyCode::Backspace => {
                self.state.search.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.state.search.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.logger.log("Global key: quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('a') | KeyCode::Char('i') => Action::FocusEntry,
            KeyCode::Char('/') | KeyCode::Char('s') => Action::FocusSearch,
            KeyCode::Char('T') => Action::ToggleTheme,
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - reloading todos".to_string());
                Action::Reload
            }
            _ => Action::None,
        }
    }

    /// Validate and dispatch a submission on the edit state machine.
    fn submit(&mut self) {
        let text = self.state.input.clone();

        if !self.allow_empty && text.trim().is_empty() {
            self.logger.log("Submit rejected: empty todo text".to_string());
            self.state.error_message = Some(ERROR_EMPTY_TEXT.to_string());
            return;
        }

        match self.state.edit_mode.clone() {
            EditMode::Idle => {
                self.logger.log(format!("Todo: creating '{}'", text));
                self.task_manager.spawn_create(self.api.clone(), text);
            }
            EditMode::Editing { id } => {
                self.logger.log(format!("Todo: updating {} to '{}'", id, text));
                self.task_manager.spawn_update(self.api.clone(), id, text);
            }
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::FocusEntry => {
                self.state.focus = InputFocus::Entry;
                Action::None
            }
            Action::FocusSearch => {
                self.state.focus = InputFocus::Search;
                Action::None
            }
            Action::FocusList => {
                self.state.focus = InputFocus::List;
                Action::None
            }
            Action::ToggleTheme => {
                self.state.toggle_theme();
                self.logger.log(format!("Theme: switched to {:?}", self.state.theme));
                Action::None
            }
            Action::Reload => {
                self.state.loading = true;
                self.task_manager.spawn_fetch(self.api.clone());
                Action::None
            }
            Action::BeginEdit { id, text } => {
                self.logger.log(format!("Todo: editing {} '{}'", id, text));
                self.state.begin_edit(id, text);
                Action::None
            }
            Action::CancelEdit => {
                self.state.cancel_edit();
                Action::None
            }
            Action::Submit => {
                self.submit();
                Action::None
            }
            Action::DeleteTodo(id) => {
                self.logger.log(format!("Todo: deleting {}", id));
                self.task_manager.spawn_delete(self.api.clone(), id);
                Action::None
            }
            Action::TodosLoaded(todos) => {
                self.logger.log(format!("Data: loaded {} todos", todos.len()));
                self.state.apply_loaded(todos);
                Action::None
            }
            Action::TodoCreated(todo) => {
                self.logger.log(format!("Todo: created {} '{}'", todo.id, todo.text));
                self.state.apply_created(todo);
                self.state.info_message = Some(SUCCESS_TODO_CREATED.to_string());
                Action::None
            }
            Action::TodoUpdated { id, text } => {
                self.logger.log(format!("Todo: updated {}", id));
                self.state.apply_updated(&id, text);
                self.state.info_message = Some(SUCCESS_TODO_UPDATED.to_string());
                Action::None
            }
            Action::TodoDeleted(id) => {
                self.logger.log(format!("Todo: deleted {}", id));
                self.state.apply_deleted(&id);
                self.state.info_message = Some(SUCCESS_TODO_DELETED.to_string());
                Action::None
            }
            Action::OperationFailed(message) => {
                self.logger.log(format!("Operation failed: {}", message));
                self.state.loading = false;
                self.state.error_message = Some(message);
                Action::None
            }
            // Navigation actions are resolved by the list component
            other => other,
        }
    }

    /// Run an action through the component hierarchy, then the app level.
    pub fn apply_action(&mut self, action: Action) {
        let action = self.todo_list.update(action);
        let _ = self.handle_app_action(action);
        self.sync_component_data();
    }

    /// Process an event from the terminal.
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                self.state.clear_messages();
                self.route_key(key)
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.apply_action(action);
    }

    /// Drain results delivered by background tasks.
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        self.task_manager.cleanup_finished_tasks();

        actions
    }

    /// Render a centered loading indicator over the list.
    fn render_loading_overlay(&self, f: &mut Frame, rect: Rect) {
        use ratatui::{
            layout::Alignment,
            text::{Line, Span},
            widgets::{Block, Borders, Clear, Paragraph},
        };

        let popup_area = {
            let popup_layout =
                Layout::vertical([Constraint::Percentage(40), Constraint::Min(3), Constraint::Percentage(40)])
                    .split(rect);

            Layout::horizontal([Constraint::Percentage(30), Constraint::Min(30), Constraint::Percentage(30)])
                .split(popup_layout[1])[1]
        };

        let content = Paragraph::new(Line::from(Span::styled(
            format!("{} {}", self.icons.loading(), crate::constants::LOADING_MESSAGE),
            self.state.theme.accent(),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(self.state.theme.accent()));

        f.render_widget(Clear, popup_area);
        f.render_widget(content, popup_area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        // Paint the whole frame so the theme applies document-wide
        f.render_widget(ratatui::widgets::Block::default().style(self.state.theme.base()), rect);

        let chunks = Layout::vertical([
            Constraint::Length(3), // header: title + search
            Constraint::Length(3), // entry form
            Constraint::Min(0),    // todo list
            Constraint::Length(1), // status bar
        ])
        .split(rect);

        Header::render(f, chunks[0], &self.state.search, self.state.focus, self.state.theme);
        EntryForm::render(
            f,
            chunks[1],
            &self.state.input,
            &self.state.edit_mode,
            self.state.focus,
            self.state.theme,
            &self.icons,
        );
        self.todo_list.render(f, chunks[2]);
        StatusBar::render(f, chunks[3], &self.state, &self.icons);

        if self.state.loading {
            self.render_loading_overlay(f, rect);
        }
    }
}
