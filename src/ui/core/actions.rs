use crate::api::Todo;

/// Which part of the screen receives plain keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    List,
    Entry,
    Search,
}

/// Controller-level editing state machine.
///
/// At most one todo is being edited at a time. Entering edit mode while
/// already editing another todo silently discards the in-progress edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing {
        id: String,
    },
}

impl EditMode {
    /// Id of the todo being edited, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Editing { id } => Some(id),
            Self::Idle => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextTodo,
    PreviousTodo,
    FocusEntry,
    FocusSearch,
    FocusList,

    // Todo operations
    BeginEdit { id: String, text: String },
    CancelEdit,
    Submit,
    DeleteTodo(String),

    // View operations
    ToggleTheme,
    Reload,

    // Background call results, applied on the UI loop
    TodosLoaded(Vec<Todo>),
    TodoCreated(Todo),
    TodoUpdated { id: String, text: String },
    TodoDeleted(String),
    OperationFailed(String),

    // App control
    Quit,
    None,
}
