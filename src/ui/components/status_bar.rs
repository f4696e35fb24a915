//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::{HINTS_ENTRY, HINTS_LIST, HINTS_SEARCH, LOADING_MESSAGE};
use crate::icons::IconService;
use crate::ui::app_component::AppState;
use crate::ui::core::InputFocus;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, icons: &IconService) {
        let theme = state.theme;

        let (status_text, status_style) = if let Some(error) = &state.error_message {
            (format!("{} {}", icons.error(), error), theme.error())
        } else if let Some(info) = &state.info_message {
            (format!("{} {}", icons.success(), info), theme.info())
        } else if state.loading {
            (format!("{} {}", icons.loading(), LOADING_MESSAGE), theme.accent())
        } else {
            let hints = match state.focus {
                InputFocus::List => HINTS_LIST,
                InputFocus::Entry => HINTS_ENTRY,
                InputFocus::Search => HINTS_SEARCH,
            };
            (hints.to_string(), theme.muted())
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(status_style);

        f.render_widget(status_bar, area);
    }
}
