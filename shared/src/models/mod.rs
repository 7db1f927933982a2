//! Data models
//!
//! Shared between the seating engine and its host (via intents and views).
//! All IDs are `i64`.

pub mod dining_table;
pub mod guest;
pub mod seating_plan;
pub mod ui_state;
pub mod venue;

// Re-exports
pub use dining_table::*;
pub use guest::*;
pub use seating_plan::*;
pub use ui_state::*;
pub use venue::*;
