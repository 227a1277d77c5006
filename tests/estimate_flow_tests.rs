//! End-to-end flows through the stores, orchestrator, and mapper, using a
//! mock estimation backend instead of a live service.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use unearth::client::EstimateRequest;
use unearth::config::Config;
use unearth::models::{Grid, InferenceResult, ItemSize, Rectangle, Rgb, TextColor};
use unearth::services::cell_view::cell_view;
use unearth::services::{EstimateBackend, EstimateTask, TaskState};
use unearth::state::{DisplayMode, ItemInventory, MaskBoard};
use unearth::tui::AppState;

/// Mock backend with a scripted outcome, recording every request it sees.
struct ScriptedBackend {
    /// Dimensions of the grids to answer with; `None` fails the request.
    response_dims: Option<(usize, usize)>,
    seen: Mutex<Vec<EstimateRequest>>,
}

impl ScriptedBackend {
    fn answering(rows: usize, cols: usize) -> Arc<Self> {
        Arc::new(Self {
            response_dims: Some((rows, cols)),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            response_dims: None,
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl EstimateBackend for ScriptedBackend {
    fn estimate(&self, request: &EstimateRequest) -> Result<InferenceResult> {
        self.seen.lock().unwrap().push(request.clone());
        let Some((rows, cols)) = self.response_dims else {
            anyhow::bail!("connection refused");
        };
        Ok(InferenceResult {
            probabilities: Grid::new(rows, cols, (0.5, Rgb::new(68, 1, 84))),
            entropy: Grid::new(rows, cols, (1.0, Rgb::new(252, 253, 191))),
        })
    }
}

/// Ticks the app state until the in-flight request completes.
fn settle(state: &mut AppState) {
    for _ in 0..500 {
        state.tick();
        if !state.task.is_waiting() {
            return;
        }
        thread::sleep(Duration::from_millis(2));
    }
    panic!("estimation did not complete in time");
}

fn app_with(backend: Arc<ScriptedBackend>, rows: usize, cols: usize) -> AppState {
    AppState::new(&Config::default(), rows, cols, backend)
}

#[test]
fn fully_buried_board_round_trip() {
    let backend = ScriptedBackend::answering(5, 9);
    let mut state = app_with(Arc::clone(&backend), 5, 9);

    // Bury every cell; the board is no longer fully revealed
    for x in 0..9 {
        for y in 0..5 {
            state.board.flip(x, y);
        }
    }
    state.handle_mask_change();
    assert!(!state.board.is_fully_revealed());

    state.trigger_estimate();
    settle(&mut state);
    assert!(state.result.is_some());
    assert!(state.error_message.is_none());

    // Reopening everything discards the now-stale result
    state.reset_board();
    assert!(state.board.is_fully_revealed());
    assert!(state.result.is_none());
}

#[test]
fn request_carries_mask_and_rectangles() {
    let backend = ScriptedBackend::answering(5, 9);
    let mut state = app_with(Arc::clone(&backend), 5, 9);

    state.board.flip(4, 1);
    state.inventory.set_size(0, ItemSize::new(1, 2).unwrap());
    state.inventory.set_count(0, 2);

    state.trigger_estimate();
    settle(&mut state);

    let seen = backend.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.mask.rows(), 5);
    assert_eq!(request.mask.cols(), 9);
    assert_eq!(request.mask.get(1, 4), Some(&true));
    assert_eq!(
        request.rectangles,
        vec![Rectangle::new(2, 1), Rectangle::new(2, 1)]
    );
}

#[test]
fn accepted_result_renders_cells() {
    let backend = ScriptedBackend::answering(5, 9);
    let mut state = app_with(backend, 5, 9);
    state.board.flip(0, 0);

    state.trigger_estimate();
    settle(&mut state);

    // Default mode is entropy: bright Magma yellow, black text
    let view = cell_view(state.result.as_ref(), state.display.mode(), 0, 0);
    assert_eq!(view.label, "1.00");
    assert_eq!(view.background, Some(Rgb::new(252, 253, 191)));
    assert_eq!(view.text, TextColor::Black);

    // Switching modes swaps in the probability field without a new request
    state.toggle_mode();
    assert_eq!(state.display.mode(), DisplayMode::Probability);
    let view = cell_view(state.result.as_ref(), state.display.mode(), 0, 0);
    assert_eq!(view.label, "0.50");
    assert_eq!(view.background, Some(Rgb::new(68, 1, 84)));
    assert_eq!(view.text, TextColor::White);
}

#[test]
fn mismatched_response_is_rejected_and_previous_result_kept() {
    // First answer with the right shape to get a displayed result
    let good = ScriptedBackend::answering(5, 9);
    let mut state = app_with(good, 5, 9);
    state.board.flip(0, 0);
    state.trigger_estimate();
    settle(&mut state);
    let first = state.result.clone();
    assert!(first.is_some());

    // Now swap in a backend that answers with the wrong dimensions
    let bad = ScriptedBackend::answering(3, 3);
    state.task = EstimateTask::new(bad);
    state.trigger_estimate();
    settle(&mut state);

    let error = state.error_message.as_deref().expect("failure surfaced");
    assert!(error.contains("Malformed response"));
    assert_eq!(state.result, first);
}

#[test]
fn failure_clears_waiting_and_keeps_result() {
    let good = ScriptedBackend::answering(5, 9);
    let mut state = app_with(good, 5, 9);
    state.board.flip(2, 2);
    state.trigger_estimate();
    settle(&mut state);
    let first = state.result.clone();

    state.task = EstimateTask::new(ScriptedBackend::failing());
    state.trigger_estimate();
    settle(&mut state);

    assert_eq!(state.task.state(), TaskState::Idle);
    assert!(state.error_message.as_deref().unwrap().contains("connection refused"));
    assert_eq!(state.result, first);
}

#[test]
fn empty_inventory_sends_empty_rectangle_list() {
    let backend = ScriptedBackend::answering(2, 2);
    let board = MaskBoard::new(2, 2);
    let inventory = ItemInventory::default();
    let mut task = EstimateTask::new(Arc::clone(&backend) as Arc<dyn EstimateBackend>);

    assert!(task.trigger(&board, &inventory));
    for _ in 0..500 {
        if task.poll().is_some() {
            break;
        }
        thread::sleep(Duration::from_millis(2));
    }
    let seen = backend.seen.lock().unwrap();
    assert_eq!(seen[0].rectangles, Vec::<Rectangle>::new());
}
