//! Icon service for the small set of glyphs used in the TUI
//!
//! Defaults to ASCII for maximum terminal compatibility, with a Unicode
//! variant for terminals that render symbols well.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Icon service providing glyphs for the current icon theme
#[derive(Debug, Clone, Copy, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Glyph shown next to the entry form for the active display theme.
    pub fn display_theme(&self, theme: Theme) -> &'static str {
        match (self.current_theme, theme) {
            (IconTheme::Unicode, Theme::Dark) => "☾",
            (IconTheme::Unicode, Theme::Light) => "☀",
            (IconTheme::Ascii, Theme::Dark) => "[D]",
            (IconTheme::Ascii, Theme::Light) => "[L]",
        }
    }

    /// Spinner glyph for the loading indicator.
    pub fn loading(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Unicode => "⟳",
            IconTheme::Ascii => "~",
        }
    }

    /// Bullet in front of each todo row.
    pub fn bullet(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Unicode => "•",
            IconTheme::Ascii => "-",
        }
    }

    /// Marker for the row currently being edited.
    pub fn editing(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Unicode => "✎",
            IconTheme::Ascii => "*",
        }
    }

    pub fn error(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Unicode => "✗",
            IconTheme::Ascii => "!",
        }
    }

    pub fn success(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Unicode => "✓",
            IconTheme::Ascii => "+",
        }
    }
}
