//! Color and style palette for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

/// Consistent styling rules for all widgets.
pub struct Theme;

impl Theme {
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn column_header(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn active_column(&self) -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_row(&self) -> Style {
        Style::default().bg(Color::DarkGray)
    }

    pub fn loading(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::LightRed)
    }

    pub fn disabled(&self) -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::White)
    }
}
