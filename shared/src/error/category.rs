//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Venue errors
/// - 2xxx: Table errors
/// - 3xxx: Assignment errors
/// - 4xxx: Interaction errors
///
/// Codes outside these ranges fall back to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Venue errors (1xxx)
    Venue,
    /// Table errors (2xxx)
    Table,
    /// Assignment errors (3xxx)
    Assignment,
    /// Interaction errors (4xxx)
    Interaction,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            1000..2000 => Self::Venue,
            2000..3000 => Self::Table,
            3000..4000 => Self::Assignment,
            4000..5000 => Self::Interaction,
            _ => Self::General,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Venue => "venue",
            Self::Table => "table",
            Self::Assignment => "assignment",
            Self::Interaction => "interaction",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
