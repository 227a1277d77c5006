//! Application services: the result-to-display mapper and the request
//! orchestrator.

pub mod cell_view;
pub mod estimate;

pub use cell_view::CellView;
pub use estimate::{EstimateBackend, EstimateTask, TaskState};
