//! Visual theme for consistent styling across the roster screen.

use crate::config::{parse_color, ThemeConfig};
use anyhow::Result;
use ratatui::style::{Color, Modifier, Style};

/// Centralized colors and styles used by the widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    accent_color: Color,
    add_color: Color,
    edit_color: Color,
    delete_color: Color,
    muted_color: Color,
    text_color: Color,
    header_subtitle_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_color: Color::Rgb(0x25, 0x63, 0xeb),
            add_color: Color::Rgb(0x10, 0xb9, 0x81),
            edit_color: Color::Rgb(0xf5, 0x9e, 0x0b),
            delete_color: Color::Rgb(0xef, 0x44, 0x44),
            muted_color: Color::Rgb(0x6b, 0x72, 0x80),
            text_color: Color::White,
            header_subtitle_color: Color::Rgb(0xbf, 0xdb, 0xfe),
        }
    }
}

impl Theme {
    /// Builds a theme from the `[theme]` config section
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        Ok(Self {
            accent_color: parse_color(&config.accent)?,
            add_color: parse_color(&config.add)?,
            edit_color: parse_color(&config.edit)?,
            delete_color: parse_color(&config.delete)?,
            muted_color: parse_color(&config.muted)?,
            ..Self::default()
        })
    }

    /// Header bar background with bold title text
    pub fn header_title_style(&self) -> Style {
        Style::default()
            .fg(self.text_color)
            .bg(self.accent_color)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_subtitle_style(&self) -> Style {
        Style::default().fg(self.header_subtitle_color).bg(self.accent_color)
    }

    pub fn section_title_style(&self) -> Style {
        Style::default().fg(self.text_color).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_color)
    }

    /// Ages, placeholders and hints
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted_color)
    }

    /// Border of an input or panel, highlighted while focused
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent_color)
        } else {
            Style::default().fg(self.muted_color)
        }
    }

    /// Filled button; reversed while focused so the focus is visible on any terminal
    pub fn button_style(&self, color: Color, focused: bool) -> Style {
        let style = Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    pub fn add_button_style(&self, focused: bool) -> Style {
        self.button_style(self.add_color, focused)
    }

    pub fn save_button_style(&self, focused: bool) -> Style {
        self.button_style(self.accent_color, focused)
    }

    pub fn delete_button_style(&self, focused: bool) -> Style {
        self.button_style(self.delete_color, focused)
    }

    pub fn cancel_button_style(&self, focused: bool) -> Style {
        self.button_style(Color::DarkGray, focused)
    }

    pub fn edit_action_style(&self) -> Style {
        Style::default().fg(self.edit_color)
    }

    pub fn delete_action_style(&self) -> Style {
        Style::default().fg(self.delete_color)
    }

    /// Selected list row
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent_color)
            .add_modifier(Modifier::BOLD)
    }

    /// Border and title of the error notice
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.delete_color).add_modifier(Modifier::BOLD)
    }
}
