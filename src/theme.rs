//! Light/dark theme handling for the TUI
//!
//! The active [`Theme`] is plain application state owned by the app
//! component and passed down to every widget at render time. The root
//! render paints the whole frame with [`Theme::base`], so flipping the
//! theme restyles the entire screen at once.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// The two supported display themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

impl Theme {
    /// Flip to the other theme. Applying this twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Base style for the whole frame.
    pub fn base(&self) -> Style {
        match self {
            Self::Dark => Style::default().fg(Color::White).bg(Color::Black),
            Self::Light => Style::default().fg(Color::Black).bg(Color::White),
        }
    }

    /// Accent color for the title and active borders.
    pub fn accent(&self) -> Style {
        let color = match self {
            Self::Dark => Color::Cyan,
            Self::Light => Color::Blue,
        };
        Style::default().fg(color)
    }

    /// Border style for unfocused widgets.
    pub fn border(&self) -> Style {
        self.muted()
    }

    /// Border style for the focused widget.
    pub fn border_focused(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    /// De-emphasized text (hints, placeholders, separators).
    pub fn muted(&self) -> Style {
        let color = match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::Gray,
        };
        Style::default().fg(color)
    }

    /// Highlight style for the selected list row.
    pub fn highlight(&self) -> Style {
        let bg = match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::LightBlue,
        };
        Style::default().bg(bg).add_modifier(Modifier::BOLD)
    }

    /// Style for the row currently being edited.
    pub fn editing(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(Color::Green)
    }
}
