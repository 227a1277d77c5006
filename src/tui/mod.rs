//! Terminal user interface: application state, event loop, and widgets.
//!
//! `AppState` owns one instance of every store plus the estimation task and
//! the displayed result. All mutations happen here, on discrete key or
//! completion events; the stores have no other writer.

pub mod board;
pub mod inventory_panel;
pub mod status_bar;
pub mod theme;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::info;

use crate::config::Config;
use crate::constants::item_size_presets;
use crate::models::{InferenceResult, Position};
use crate::services::{EstimateBackend, EstimateTask};
use crate::state::{DisplayState, ItemInventory, MaskBoard};

pub use board::BoardWidget;
pub use inventory_panel::InventoryPanel;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// How long the event loop waits for input before polling the task.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The mask/heat-map board.
    Board,
    /// The item inventory slots.
    Inventory,
}

/// All mutable application state.
pub struct AppState {
    /// Resolved color theme.
    pub theme: Theme,
    /// Mask store.
    pub board: MaskBoard,
    /// Inventory store.
    pub inventory: ItemInventory,
    /// Display mode store.
    pub display: DisplayState,
    /// Estimation request orchestrator.
    pub task: EstimateTask,
    /// The displayed result; replaced on success, cleared on full reveal.
    pub result: Option<InferenceResult>,
    /// Failure message from the last request, if any.
    pub error_message: Option<String>,
    /// Transient success/status message.
    pub status_message: String,
    /// Board cursor position.
    pub cursor: Position,
    /// Selected inventory slot.
    pub selected_slot: usize,
    /// Focused panel.
    pub focus: Focus,
    /// Set when the user asks to quit.
    pub should_quit: bool,
}

impl AppState {
    /// Creates the application state for a fresh board.
    #[must_use]
    pub fn new(
        config: &Config,
        rows: usize,
        cols: usize,
        backend: Arc<dyn EstimateBackend>,
    ) -> Self {
        Self {
            theme: Theme::from_mode(config.ui.theme),
            board: MaskBoard::new(rows, cols),
            inventory: ItemInventory::default(),
            display: DisplayState::default(),
            task: EstimateTask::new(backend),
            result: None,
            error_message: None,
            status_message: String::new(),
            cursor: Position::new(0, 0),
            selected_slot: 0,
            focus: Focus::Board,
            should_quit: false,
        }
    }

    /// Moves the board cursor, clamped to the board.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let x = self.cursor.x().saturating_add_signed(dx);
        let y = self.cursor.y().saturating_add_signed(dy);
        self.cursor = Position::new(
            x.min(self.board.cols().saturating_sub(1)),
            y.min(self.board.rows().saturating_sub(1)),
        );
    }

    /// Toggles the buried state under the cursor.
    pub fn flip_at_cursor(&mut self) {
        self.board.flip(self.cursor.x(), self.cursor.y());
        self.handle_mask_change();
    }

    /// Reopens the whole board.
    pub fn reset_board(&mut self) {
        self.board.reset();
        self.handle_mask_change();
    }

    /// The one cross-store reaction: once the board is fully revealed, a
    /// previously received result describes a finished puzzle and is
    /// discarded. Runs after every mask mutation; a completion observed
    /// later wins over the clear (last write to `result` is authoritative).
    pub fn handle_mask_change(&mut self) {
        if self.board.is_fully_revealed() && self.result.take().is_some() {
            info!("board fully revealed, discarding stale result");
            self.status_message.clear();
        }
    }

    /// Starts an estimation request unless one is already outstanding.
    pub fn trigger_estimate(&mut self) {
        self.error_message = None;
        self.status_message.clear();
        self.task.trigger(&self.board, &self.inventory);
    }

    /// Flips between entropy and probability display.
    pub fn toggle_mode(&mut self) {
        self.display.toggle();
    }

    /// Applies a finished request: a success replaces the displayed result,
    /// a failure is surfaced and leaves the previous result untouched.
    pub fn apply_completion(&mut self, outcome: Result<InferenceResult>) {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error_message = None;
                self.status_message = "Estimate updated".to_string();
            }
            Err(e) => {
                self.error_message = Some(format!("{e:#}"));
            }
        }
    }

    /// Polls the estimation task once; called every event-loop tick.
    pub fn tick(&mut self) {
        if let Some(outcome) = self.task.poll() {
            self.apply_completion(outcome);
        }
    }

    /// Moves the inventory slot selection by `delta`.
    pub fn select_slot(&mut self, delta: isize) {
        let slots = self.inventory.slots();
        if slots == 0 {
            return;
        }
        self.selected_slot = self
            .selected_slot
            .saturating_add_signed(delta)
            .min(slots - 1);
    }

    /// Adjusts the selected slot's count, clamping at zero.
    pub fn bump_count(&mut self, delta: isize) {
        let count = self.inventory.count(self.selected_slot);
        self.inventory
            .set_count(self.selected_slot, count.saturating_add_signed(delta));
    }

    /// Advances the selected slot's size through the preset list.
    pub fn cycle_slot_size(&mut self) {
        let presets = item_size_presets();
        let current = self.inventory.size(self.selected_slot);
        let next = presets
            .iter()
            .position(|size| *size == current)
            .map_or(0, |i| (i + 1) % presets.len());
        self.inventory.set_size(self.selected_slot, presets[next]);
    }

    /// Swaps the selected slot's size orientation.
    pub fn transpose_slot(&mut self) {
        let flipped = self.inventory.size(self.selected_slot).transposed();
        self.inventory.set_size(self.selected_slot, flipped);
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Inventory,
                    Focus::Inventory => Focus::Board,
                };
            }
            KeyCode::Char('e') => self.trigger_estimate(),
            KeyCode::Char('m') => self.toggle_mode(),
            KeyCode::Char('r') => self.reset_board(),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Inventory => self.handle_inventory_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Char(' ') | KeyCode::Enter => self.flip_at_cursor(),
            _ => {}
        }
    }

    fn handle_inventory_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_slot(-1),
            KeyCode::Down | KeyCode::Char('j') => self.select_slot(1),
            KeyCode::Char('+') | KeyCode::Char('=') => self.bump_count(1),
            KeyCode::Char('-') => self.bump_count(-1),
            KeyCode::Char('s') => self.cycle_slot_size(),
            KeyCode::Char('t') => self.transpose_slot(),
            _ => {}
        }
    }
}

/// Puts the terminal into raw mode on the alternate screen.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

/// Restores the terminal to its normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the main event loop until the user quits.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    while !state.should_quit {
        terminal.draw(|f| draw(f, state))?;

        if event::poll(TICK_RATE).context("Failed to poll terminal events")? {
            if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
                if key.kind == KeyEventKind::Press {
                    state.handle_key(key);
                }
            }
        }

        state.tick();
    }
    Ok(())
}

/// Draws the three panels: board, inventory, status bar.
fn draw(f: &mut Frame, state: &AppState) {
    let slots = u16::try_from(state.inventory.slots()).unwrap_or(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(u16::try_from(state.board.rows()).unwrap_or(5) + 2),
            Constraint::Length(slots + 2),
            Constraint::Length(4),
        ])
        .split(f.area());

    BoardWidget::render(f, chunks[0], state);
    InventoryPanel::render(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state);
}
