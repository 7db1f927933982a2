//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::TableNotFound | Self::GuestNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::TableFull | Self::CapacityBelowAssigned | Self::GuestAlreadyAtTable => {
                StatusCode::CONFLICT
            }

            // 422 Unprocessable Entity
            Self::InvalidPlan => StatusCode::UNPROCESSABLE_ENTITY,

            // 400 Bad Request
            Self::InvalidVenueDimension
            | Self::InvalidViewport
            | Self::NoMoveInProgress
            | Self::NoTableFormOpen => StatusCode::BAD_REQUEST,
        }
    }
}
