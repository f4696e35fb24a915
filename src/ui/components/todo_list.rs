use crate::api::Todo;
use crate::constants::{EMPTY_FILTER_MESSAGE, EMPTY_LIST_MESSAGE};
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// The filtered todo list with keyboard selection.
///
/// Holds the rows currently visible (already filtered by the controller),
/// which todo is being edited, and the selection cursor.
pub struct TodoListComponent {
    pub todos: Vec<Todo>,
    pub selected_index: usize,
    pub list_state: ListState,
    editing_id: Option<String>,
    unfiltered_len: usize,
    theme: Theme,
    icons: IconService,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListComponent {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            editing_id: None,
            unfiltered_len: 0,
            theme: Theme::default(),
            icons: IconService::default(),
        }
    }

    pub fn update_data(
        &mut self,
        todos: Vec<Todo>,
        editing_id: Option<String>,
        unfiltered_len: usize,
        theme: Theme,
        icons: IconService,
    ) {
        self.todos = todos;
        self.editing_id = editing_id;
        self.unfiltered_len = unfiltered_len;
        self.theme = theme;
        self.icons = icons;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.todos.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.todos.len() {
                self.selected_index = self.todos.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.todos.get(self.selected_index)
    }

    fn create_todo_item(&self, todo: &Todo) -> ListItem<'_> {
        let is_editing = self.editing_id.as_deref() == Some(todo.id.as_str());

        let (marker, style) = if is_editing {
            (self.icons.editing(), self.theme.editing())
        } else {
            (self.icons.bullet(), self.theme.base())
        };

        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(todo.text.clone(), style),
        ]))
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTodo,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTodo,
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(todo) = self.selected_todo() {
                    Action::BeginEdit {
                        id: todo.id.clone(),
                        text: todo.text.clone(),
                    }
                } else {
                    Action::None
                }
            }
            KeyCode::Char('d') => {
                if let Some(todo) = self.selected_todo() {
                    Action::DeleteTodo(todo.id.clone())
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTodo => {
                if !self.todos.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.todos.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTodo => {
                if !self.todos.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.todos.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Todos ")
            .border_style(self.theme.border());

        if self.todos.is_empty() {
            let message = if self.unfiltered_len > 0 {
                EMPTY_FILTER_MESSAGE
            } else {
                EMPTY_LIST_MESSAGE
            };

            let empty_list =
                List::new(vec![ListItem::new(Span::styled(message, self.theme.muted()))]).block(block);
            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
        } else {
            let items: Vec<ListItem> = self.todos.iter().map(|todo| self.create_todo_item(todo)).collect();
            let mut list_state = self.list_state.clone();

            let todos_list = List::new(items).block(block).highlight_style(self.theme.highlight());

            f.render_stateful_widget(todos_list, rect, &mut list_state);
            self.list_state = list_state;
        }
    }
}
