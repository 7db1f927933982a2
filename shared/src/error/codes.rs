//! Unified error codes for the seating workspace
//!
//! This module defines all error codes surfaced by the seating engine to the
//! hosting application. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Venue errors
//! - 2xxx: Table errors
//! - 3xxx: Assignment errors
//! - 4xxx: Interaction errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Seating plan violates an invariant
    InvalidPlan = 9,

    // ==================== 1xxx: Venue ====================
    /// Venue width or height is not a positive number
    InvalidVenueDimension = 1001,
    /// Viewport width or height is not a positive number
    InvalidViewport = 1002,

    // ==================== 2xxx: Table ====================
    /// Table not found
    TableNotFound = 2001,
    /// Every seat at the table is taken
    TableFull = 2002,
    /// Requested seat count is below the number of seated guests
    CapacityBelowAssigned = 2003,

    // ==================== 3xxx: Assignment ====================
    /// Guest is not part of the roster
    GuestNotFound = 3001,
    /// Guest is already seated at the table
    GuestAlreadyAtTable = 3002,

    // ==================== 4xxx: Interaction ====================
    /// Drop received without a guest being picked up
    NoMoveInProgress = 4001,
    /// Submit received without an open add-table form
    NoTableFormOpen = 4002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidPlan => "Seating plan is inconsistent",

            // Venue
            ErrorCode::InvalidVenueDimension => "Venue dimensions must be positive",
            ErrorCode::InvalidViewport => "Viewport dimensions must be positive",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableFull => "Table is full",
            ErrorCode::CapacityBelowAssigned => {
                "Seat count is below the number of seated guests"
            }

            // Assignment
            ErrorCode::GuestNotFound => "Guest not found",
            ErrorCode::GuestAlreadyAtTable => "Guest is already seated at this table",

            // Interaction
            ErrorCode::NoMoveInProgress => "No guest is being moved",
            ErrorCode::NoTableFormOpen => "No table form is open",
        }
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            9 => Ok(ErrorCode::InvalidPlan),

            // Venue
            1001 => Ok(ErrorCode::InvalidVenueDimension),
            1002 => Ok(ErrorCode::InvalidViewport),

            // Table
            2001 => Ok(ErrorCode::TableNotFound),
            2002 => Ok(ErrorCode::TableFull),
            2003 => Ok(ErrorCode::CapacityBelowAssigned),

            // Assignment
            3001 => Ok(ErrorCode::GuestNotFound),
            3002 => Ok(ErrorCode::GuestAlreadyAtTable),

            // Interaction
            4001 => Ok(ErrorCode::NoMoveInProgress),
            4002 => Ok(ErrorCode::NoTableFormOpen),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
