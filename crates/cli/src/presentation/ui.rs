//! Render entry point composing the widgets.
//!
//! Rendering is routed by app mode: the profile screen replaces the table
//! view entirely while open; otherwise the standard header / table / footer
//! layout is drawn.

use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use maester_core::{ResolverCache, ResourceStore};

use crate::presentation::{terminal::Tui, theme::Theme, widgets};
use crate::state::{AppMode, AppState};

/// Borrowed state needed to draw one frame.
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub store: &'a ResourceStore,
    pub lords: &'a ResolverCache,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = Theme;

    terminal.draw(|frame| {
        if let AppMode::Profile(profile) = &ctx.state.mode {
            let area = centered_rect(60, 60, frame.area());
            widgets::profile::render(frame, area, profile, &theme);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header: category tabs + fetch status
                Constraint::Min(0),    // Data table
                Constraint::Length(4), // Footer: paging + key hints
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx, &theme);
        widgets::table::render(frame, chunks[1], ctx, &theme);
        widgets::footer::render(frame, chunks[2], ctx, &theme);
    })?;

    Ok(())
}

/// Create a centered rectangle for the profile card.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
