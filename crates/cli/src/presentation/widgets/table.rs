//! The sortable, filterable data table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use maester_core::{SortOrder, collection_rows, columns};

use crate::presentation::{theme::Theme, ui::RenderContext};

/// Render the active collection through the view's filter and sort state.
///
/// The header carries two lines per column: the label with a sort indicator,
/// and the column's filter text (with a cursor while it is being edited).
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &Theme) {
    let schema = columns(ctx.state.category);
    let rows = collection_rows(ctx.state.category, ctx.store, ctx.lords);
    let visible = ctx.state.view.visible_rows(&rows, schema);

    let header_cells = schema.iter().enumerate().map(|(index, column)| {
        let mut label = column.header.to_string();
        match ctx.state.view.sort() {
            Some((sorted, SortOrder::Ascending)) if sorted == index => label.push_str(" ▲"),
            Some((sorted, SortOrder::Descending)) if sorted == index => label.push_str(" ▼"),
            _ => {}
        }

        let filter = ctx.state.view.filter(index);
        let filter_line = if ctx.state.editing_filter && index == ctx.state.active_column {
            format!("/{filter}_")
        } else if !filter.is_empty() {
            format!("/{filter}")
        } else {
            String::new()
        };

        let label_style = if index == ctx.state.active_column {
            theme.active_column()
        } else {
            theme.column_header()
        };

        Cell::from(Text::from(vec![
            Line::styled(label, label_style),
            Line::styled(filter_line, theme.hint()),
        ]))
    });
    let header = Row::new(header_cells).height(2);

    let body = visible
        .iter()
        .map(|&record| Row::new(rows[record].iter().cloned().map(Cell::from)));

    let widths = [
        Constraint::Percentage(34),
        Constraint::Percentage(33),
        Constraint::Percentage(33),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .row_highlight_style(theme.selected_row())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {:?} ", ctx.state.category)),
        );

    let mut table_state = TableState::default();
    if !visible.is_empty() {
        table_state.select(Some(ctx.state.selected_row.min(visible.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut table_state);
}
