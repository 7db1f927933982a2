//! Utility module - logging and input validation
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - sanitizers and dimension validators

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
