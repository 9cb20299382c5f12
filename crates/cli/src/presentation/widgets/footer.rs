//! Footer widget with pagination controls and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{theme::Theme, ui::RenderContext};

/// Render the pagination bar. Previous is dimmed at the page floor; Next is
/// always available since overrunning the data yields an empty page.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &Theme) {
    let page = ctx.state.page;

    let previous_style = if page.at_floor() {
        theme.disabled()
    } else {
        theme.label()
    };

    let paging = Line::from(vec![
        Span::styled("← Previous", previous_style),
        Span::raw("   "),
        Span::styled(format!("Page {}", page.wire_page()), theme.tab_active()),
        Span::raw("   "),
        Span::styled("Next →", theme.label()),
    ]);

    let hints = Line::from(Span::styled(
        "1/2/3 category · ↑/↓ row · tab column · s sort · / filter · enter lord · q quit",
        theme.hint(),
    ));

    let paragraph =
        Paragraph::new(vec![paging, hints]).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
