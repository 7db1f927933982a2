//! Shared types for the seating workspace
//!
//! Plain data records (venue, tables, guests, UI state), the intent
//! vocabulary, and the unified error types handed to the hosting application.

pub mod error;
pub mod intent;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Intent re-exports (for SeatingIntent dispatch)
pub use intent::{CrudAction, IntentResult, SeatingIntent};
