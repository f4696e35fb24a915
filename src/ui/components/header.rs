//! Header: application title and the search field.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::constants::{APP_TITLE, PLACEHOLDER_SEARCH};
use crate::theme::Theme;
use crate::ui::core::InputFocus;

/// Width reserved for the search box on the right.
const SEARCH_WIDTH: u16 = 30;

pub struct Header;

impl Header {
    pub fn render(f: &mut Frame, area: Rect, search: &str, focus: InputFocus, theme: Theme) {
        let chunks = Layout::horizontal([Constraint::Min(10), Constraint::Length(SEARCH_WIDTH)]).split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            theme.accent().add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, chunks[0]);

        let focused = focus == InputFocus::Search;
        let border_style = if focused { theme.border_focused() } else { theme.border() };

        // The filter applies as the query is typed, so the box always shows
        // the live search text.
        let content = if focused {
            Line::from(Span::raw(format!("{}█", search)))
        } else if search.is_empty() {
            Line::from(Span::styled(PLACEHOLDER_SEARCH, theme.muted()))
        } else {
            Line::from(Span::raw(search.to_string()))
        };

        let search_box = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Search ")
                .border_style(border_style),
        );
        f.render_widget(search_box, chunks[1]);
    }
}
