//! Estimation request orchestration.
//!
//! [`EstimateTask`] is a two-state machine (Idle/Waiting) that owns the
//! single in-flight request to the estimation service. The request runs on a
//! worker thread and reports through an mpsc channel; the TUI event loop
//! polls for completion, so store mutations stay live while a request is
//! out. Triggering while Waiting is ignored, which keeps at most one request
//! in flight per user action.
//!
//! The backend is behind a trait so tests can inject a mock instead of a
//! live HTTP service.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use tracing::{info, warn};

use crate::client::EstimateRequest;
use crate::models::InferenceResult;
use crate::state::{ItemInventory, MaskBoard};

/// Backend that answers estimation requests, allowing mock injection for
/// tests.
pub trait EstimateBackend: Send + Sync {
    /// Performs one estimation request.
    ///
    /// Blocking; always called from a worker thread, never from the event
    /// loop.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success status codes, and undecodable
    /// bodies.
    fn estimate(&self, request: &EstimateRequest) -> Result<InferenceResult>;
}

/// Orchestrator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// No request outstanding.
    Idle,
    /// Exactly one request outstanding.
    Waiting,
}

/// Owns the lifecycle of estimation requests.
pub struct EstimateTask {
    backend: Arc<dyn EstimateBackend>,
    state: TaskState,
    completion: Option<Receiver<Result<InferenceResult>>>,
}

impl EstimateTask {
    /// Creates an idle task over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn EstimateBackend>) -> Self {
        Self {
            backend,
            state: TaskState::Idle,
            completion: None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns `true` while a request is outstanding.
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        matches!(self.state, TaskState::Waiting)
    }

    /// Starts an estimation request from the current store contents.
    ///
    /// Assembles the mask and the flattened rectangle list, moves to
    /// Waiting, and dispatches the request on a worker thread. Returns
    /// `false` without side effects when a request is already outstanding;
    /// re-entrant triggers are ignored rather than queued or cancelled.
    pub fn trigger(&mut self, board: &MaskBoard, inventory: &ItemInventory) -> bool {
        if self.is_waiting() {
            info!("estimation already in flight, ignoring trigger");
            return false;
        }

        let request = EstimateRequest {
            mask: board.mask().clone(),
            rectangles: inventory.to_rectangles(),
        };
        let (rows, cols) = (board.rows(), board.cols());
        info!(
            rows,
            cols,
            rectangles = request.rectangles.len(),
            "dispatching estimation request"
        );

        let (tx, rx) = mpsc::channel();
        let backend = Arc::clone(&self.backend);
        thread::spawn(move || {
            let outcome = backend.estimate(&request).and_then(|result| {
                // Reject a shape-violating response before anything reads it
                result.ensure_dimensions(rows, cols)?;
                Ok(result)
            });
            // The receiver is gone if the app quit mid-request
            let _ = tx.send(outcome);
        });

        self.completion = Some(rx);
        self.state = TaskState::Waiting;
        true
    }

    /// Polls for a finished request.
    ///
    /// Returns `None` while Idle or still Waiting. On completion the task
    /// returns to Idle and yields the outcome exactly once; the caller
    /// decides what to do with it (replace the displayed result on success,
    /// surface the failure and keep the previous result otherwise).
    pub fn poll(&mut self) -> Option<Result<InferenceResult>> {
        let receiver = self.completion.as_ref()?;
        match receiver.try_recv() {
            Ok(outcome) => {
                self.state = TaskState::Idle;
                self.completion = None;
                match &outcome {
                    Ok(_) => info!("estimation request completed"),
                    Err(e) => warn!("estimation request failed: {e:#}"),
                }
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.state = TaskState::Idle;
                self.completion = None;
                warn!("estimation worker exited without reporting");
                Some(Err(anyhow::anyhow!(
                    "estimation worker exited without reporting a result"
                )))
            }
        }
    }
}
