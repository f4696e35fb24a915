//! Entry form: theme indicator, the todo text field, and the submit label.
//!
//! The submit label is dispatched on the edit state machine: `Idle` shows
//! the add wording, `Editing` the edit wording.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::constants::{LABEL_ADD, LABEL_EDIT, PLACEHOLDER_ENTRY};
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::core::{EditMode, InputFocus};

const THEME_GLYPH_WIDTH: u16 = 7;
const SUBMIT_LABEL_WIDTH: u16 = 18;

pub struct EntryForm;

impl EntryForm {
    pub fn render(
        f: &mut Frame,
        area: Rect,
        input: &str,
        edit_mode: &EditMode,
        focus: InputFocus,
        theme: Theme,
        icons: &IconService,
    ) {
        let chunks = Layout::horizontal([
            Constraint::Length(THEME_GLYPH_WIDTH),
            Constraint::Min(10),
            Constraint::Length(SUBMIT_LABEL_WIDTH),
        ])
        .split(area);

        // Theme indicator, toggled with 'T'
        let glyph = Paragraph::new(Line::from(Span::styled(icons.display_theme(theme), theme.accent())))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border()),
            );
        f.render_widget(glyph, chunks[0]);

        let focused = focus == InputFocus::Entry;
        let border_style = if focused { theme.border_focused() } else { theme.border() };

        let content = if focused {
            Line::from(Span::raw(format!("{}█", input)))
        } else if input.is_empty() {
            Line::from(Span::styled(PLACEHOLDER_ENTRY, theme.muted()))
        } else {
            Line::from(Span::raw(input.to_string()))
        };

        let input_field = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Todo ")
                .border_style(border_style),
        );
        f.render_widget(input_field, chunks[1]);

        let (label, label_style) = match edit_mode {
            EditMode::Idle => (LABEL_ADD, theme.accent()),
            EditMode::Editing { .. } => (LABEL_EDIT, theme.editing()),
        };

        let submit = Paragraph::new(Line::from(Span::styled(label, label_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border()),
            );
        f.render_widget(submit, chunks[2]);
    }
}
