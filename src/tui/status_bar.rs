//! Status bar widget for mode, request state, and key help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status line and the contextual key help.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let mut lines: Vec<Line> = Vec::new();

        // First line: failure, waiting indicator, or last status message
        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled(
                    "ERROR: ",
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(error.as_str()),
            ]));
        } else if state.task.is_waiting() {
            lines.push(Line::from(Span::styled(
                "Estimating…",
                Style::default().fg(theme.warning),
            )));
        } else if !state.status_message.is_empty() {
            lines.push(Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.success),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("Mode: {}", state.display.mode().display_name()),
                Style::default().fg(theme.text),
            )));
        }

        // Second line: key help for the focused panel
        let help = match state.focus {
            Focus::Board => {
                "↑↓←→ move · space bury/unbury · e estimate · m mode · r reset · tab items · q quit"
            }
            Focus::Inventory => {
                "↑↓ slot · +/- count · s size · t transpose · e estimate · tab board · q quit"
            }
        };
        lines.push(Line::from(Span::styled(
            help,
            Style::default().fg(theme.text_muted),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(paragraph, area);
    }
}
