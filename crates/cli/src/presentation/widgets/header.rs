//! Header widget displaying category tabs and the active fetch status.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use maester_core::{Category, FetchStatus};

use crate::presentation::{theme::Theme, ui::RenderContext};

/// Render the category tabs with the active collection's fetch status.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &Theme) {
    let mut spans = Vec::new();
    for (index, category) in Category::ALL.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *category == ctx.state.category {
            theme.tab_active()
        } else {
            theme.tab_inactive()
        };
        spans.push(Span::styled(
            format!("[{}] {:?}", index + 1, category),
            style,
        ));
    }

    match ctx.store.status(ctx.state.category) {
        FetchStatus::Loading => {
            spans.push(Span::styled("   fetching...", theme.loading()));
        }
        FetchStatus::Failed => {
            let error = ctx.store.error(ctx.state.category).unwrap_or("fetch failed");
            spans.push(Span::styled(format!("   error: {error}"), theme.error()));
        }
        FetchStatus::Idle | FetchStatus::Succeeded => {}
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" maester "));

    frame.render_widget(paragraph, area);
}
