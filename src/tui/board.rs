//! Board widget rendering the heat map and the mask.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::services::cell_view;

use super::{AppState, Focus};

/// Width of one board cell in characters, sized for a two-decimal label.
const CELL_WIDTH: u16 = 6;

/// Marker shown in buried cells.
const BURIED_MARKER: &str = " ░░░░ ";

/// Board widget renders the mask and heat-map grid.
pub struct BoardWidget;

impl BoardWidget {
    /// Render the board widget.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let rows = state.board.rows();
        let cols = state.board.cols();

        let mut table_rows = Vec::with_capacity(rows);
        for y in 0..rows {
            let cells: Vec<Cell> = (0..cols)
                .map(|x| {
                    let view =
                        cell_view::cell_view(state.result.as_ref(), state.display.mode(), y, x);
                    let buried = state.board.is_buried(x, y);
                    let under_cursor = state.focus == Focus::Board
                        && state.cursor.x() == x
                        && state.cursor.y() == y;

                    let text = if buried {
                        BURIED_MARKER.to_string()
                    } else if view.label.is_empty() {
                        " ".repeat(CELL_WIDTH as usize)
                    } else {
                        format!(" {} ", view.label)
                    };

                    let mut style = if buried {
                        Style::default().fg(theme.text_muted).bg(theme.surface)
                    } else if let Some(color) = view.background {
                        Style::default()
                            .fg(view.text.to_ratatui_color())
                            .bg(color.to_ratatui_color())
                    } else {
                        Style::default().fg(theme.text)
                    };
                    if under_cursor {
                        style = Style::default().fg(theme.background).bg(theme.accent);
                    }

                    Cell::from(text).style(style)
                })
                .collect();
            table_rows.push(Row::new(cells));
        }

        let constraints = vec![Constraint::Length(CELL_WIDTH); cols];
        let title = format!(" Board {rows}×{cols} - {} ", state.display.mode().display_name());
        let table = Table::new(table_rows, constraints)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if state.focus == Focus::Board {
                        theme.accent
                    } else {
                        theme.primary
                    })),
            )
            .column_spacing(0);

        f.render_widget(table, area);
    }
}
