//! Keyboard-to-command mapping.
//!
//! This module owns the key bindings so the rest of the application stays
//! agnostic about `crossterm` event specifics. Decoding depends on the UI
//! context: while a filter is being edited most keys become text input, and
//! while the profile screen is open only dismissal is meaningful.

use crossterm::event::{KeyCode, KeyEvent};

use maester_core::Category;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Exit the application.
    Quit,
    /// Activate a category tab.
    SelectCategory(Category),
    /// Request the next remote page.
    NextPage,
    /// Request the previous remote page (no-op at page 0).
    PrevPage,
    RowUp,
    RowDown,
    /// Cycle the active column.
    NextColumn,
    /// Advance the active column's sort cycle.
    ToggleSort,
    /// Start editing the active column's filter.
    BeginFilter,
    FilterChar(char),
    FilterBackspace,
    /// Stop editing the filter.
    EndFilter,
    /// Open the selected row's lord profile.
    OpenProfile,
    /// Dismiss the profile screen.
    CloseProfile,
    /// No meaningful command was produced.
    None,
}

/// UI context the key decoder depends on.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputContext {
    pub editing_filter: bool,
    pub in_profile: bool,
}

/// Converts a raw key event into a higher-level command.
pub fn map_key(key: KeyEvent, ctx: InputContext) -> Command {
    if ctx.in_profile {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Command::CloseProfile,
            _ => Command::None,
        };
    }

    if ctx.editing_filter {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Command::EndFilter,
            KeyCode::Backspace => Command::FilterBackspace,
            KeyCode::Char(ch) => Command::FilterChar(ch),
            _ => Command::None,
        };
    }

    match key.code {
        KeyCode::Char(ch) => map_char(ch),
        KeyCode::Left => Command::PrevPage,
        KeyCode::Right => Command::NextPage,
        KeyCode::Up => Command::RowUp,
        KeyCode::Down => Command::RowDown,
        KeyCode::Tab => Command::NextColumn,
        KeyCode::Enter => Command::OpenProfile,
        _ => Command::None,
    }
}

fn map_char(raw: char) -> Command {
    match raw.to_ascii_lowercase() {
        'q' => Command::Quit,
        '1' | 'h' => Command::SelectCategory(Category::Houses),
        '2' | 'c' => Command::SelectCategory(Category::Characters),
        '3' | 'b' => Command::SelectCategory(Category::Books),
        'p' => Command::PrevPage,
        'n' => Command::NextPage,
        'k' => Command::RowUp,
        'j' => Command::RowDown,
        's' => Command::ToggleSort,
        '/' => Command::BeginFilter,
        _ => Command::None,
    }
}
