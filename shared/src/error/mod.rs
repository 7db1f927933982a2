//! Unified error system for the seating workspace
//!
//! This module provides the error vocabulary the engine hands to its host:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Venue errors
//! - 2xxx: Table errors
//! - 3xxx: Assignment errors
//! - 4xxx: Interaction errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::TableFull).with_detail("table_id", 12);
//! let response = ApiResponse::<()>::from(err);
//! assert_eq!(response.code, 2002);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
