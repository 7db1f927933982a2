//! Seating Engine - table layout and guest seating for a wedding planner
//!
//! # Module layout
//!
//! ```text
//! seating-engine/src/
//! ├── core/          # configuration, errors
//! ├── utils/         # logger, sanitizers and validators
//! ├── geometry.rs    # footprints, scale, bounds clamping
//! ├── registry/      # tables and their guest assignments
//! ├── assignment.rs  # unassigned guests and occupancy totals
//! ├── controller/    # move protocol, selection, zoom, add-table form
//! ├── render.rs      # screen projection
//! ├── session/       # roster + controller + intent dispatch
//! └── plan.rs        # JSON plan files
//! ```
//!
//! Everything except [`plan`] is synchronous and free of I/O.

pub mod assignment;
pub mod controller;
pub mod core;
pub mod geometry;
pub mod plan;
pub mod registry;
pub mod render;
pub mod session;
pub mod utils;

pub use controller::{InteractionController, MoveOutcome};
pub use core::{Config, SeatingError, SeatingResult};
pub use registry::TableRegistry;
pub use session::{SeatingSession, SeatingView};

// Re-export unified error types from shared
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_for, init_logger_with_file};
