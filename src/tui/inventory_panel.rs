//! Inventory panel widget: the four item slots and their counts.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus};

/// Inventory panel widget.
pub struct InventoryPanel;

impl InventoryPanel {
    /// Render one line per slot, highlighting the selected one.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let lines: Vec<Line> = state
            .inventory
            .settings()
            .iter()
            .enumerate()
            .map(|(index, setting)| {
                let selected = state.focus == Focus::Inventory && index == state.selected_slot;
                let marker = if selected { "▸" } else { " " };
                let label_style = if selected {
                    Style::default().fg(theme.accent)
                } else {
                    Style::default().fg(theme.text)
                };
                let count_style = if setting.count == 0 {
                    Style::default().fg(theme.text_muted)
                } else {
                    Style::default().fg(theme.primary)
                };
                Line::from(vec![
                    Span::styled(format!("{marker} Slot {}: ", index + 1), label_style),
                    Span::styled(format!("{:<7}", setting.size.label()), label_style),
                    Span::styled(format!("count {}", setting.count), count_style),
                ])
            })
            .collect();

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(" Items ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if state.focus == Focus::Inventory {
                    theme.accent
                } else {
                    theme.primary
                })),
        );

        f.render_widget(panel, area);
    }
}
