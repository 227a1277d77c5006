//! Mutable application stores.
//!
//! Each store owns one piece of user-editable state behind a minimal
//! mutation API. There are no ambient globals; the TUI owns one instance of
//! each and is the only writer.

pub mod display;
pub mod inventory;
pub mod mask;

pub use display::{DisplayMode, DisplayState};
pub use inventory::ItemInventory;
pub use mask::MaskBoard;
