//! Full-screen character profile card.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::theme::Theme;
use crate::state::ProfileState;

/// Render the drill-down view for the selected lord.
pub fn render(frame: &mut Frame, area: Rect, profile: &ProfileState, theme: &Theme) {
    let mut lines = Vec::new();

    match (&profile.character, &profile.error) {
        (Some(character), _) => {
            lines.push(field(theme, "Name", &character.name));
            lines.push(field(theme, "Gender", &character.gender));
            if !character.born.is_empty() {
                lines.push(field(theme, "Born", &character.born));
            }
            if !character.died.is_empty() {
                lines.push(field(theme, "Died", &character.died));
            }
            if !character.titles.is_empty() {
                lines.push(field(theme, "Titles", &character.titles.join(", ")));
            }
            if !character.aliases.is_empty() {
                lines.push(field(theme, "Aliases", &character.aliases.join(", ")));
            }
        }
        (None, Some(error)) => {
            lines.push(Line::from(Span::styled(
                format!("Could not load profile: {error}"),
                theme.error(),
            )));
        }
        (None, None) => {
            lines.push(Line::from(Span::styled("Fetching...", theme.loading())));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("esc to return", theme.hint())));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Character Profile "),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn field(theme: &Theme, label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme.column_header()),
        Span::styled(value.to_string(), theme.label()),
    ])
}
