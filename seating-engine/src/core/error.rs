use shared::error::{AppError, ErrorCode};
use shared::types::{GuestId, TableId};
use thiserror::Error;

/// Seating engine errors
///
/// Every variant is local and recoverable; an operation that returns one of
/// these has left the registry untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeatingError {
    #[error("Invalid venue dimensions: {width} x {height}")]
    InvalidVenueDimension { width: f64, height: f64 },

    #[error("Invalid viewport: {max_width} x {max_height}")]
    InvalidViewport { max_width: f64, max_height: f64 },

    #[error("Table not found: {0}")]
    TableNotFound(TableId),

    #[error("Table {table_id} is full ({seat_count} seats)")]
    TableFull { table_id: TableId, seat_count: u32 },

    #[error("{assigned} guests are seated at table {table_id}, cannot reduce to {requested} seats")]
    CapacityBelowAssigned {
        table_id: TableId,
        assigned: usize,
        requested: u32,
    },

    #[error("Guest {guest_id} is already seated at table {table_id}")]
    GuestAlreadyAtTable { table_id: TableId, guest_id: GuestId },

    #[error("Guest not found: {0}")]
    GuestNotFound(GuestId),

    #[error("No guest is being moved")]
    NoMoveInProgress,

    #[error("No table form is open")]
    NoTableFormOpen,

    #[error("Invalid seating plan: {0}")]
    InvalidPlan(String),
}

impl SeatingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SeatingError::InvalidVenueDimension { .. } => ErrorCode::InvalidVenueDimension,
            SeatingError::InvalidViewport { .. } => ErrorCode::InvalidViewport,
            SeatingError::TableNotFound(_) => ErrorCode::TableNotFound,
            SeatingError::TableFull { .. } => ErrorCode::TableFull,
            SeatingError::CapacityBelowAssigned { .. } => ErrorCode::CapacityBelowAssigned,
            SeatingError::GuestAlreadyAtTable { .. } => ErrorCode::GuestAlreadyAtTable,
            SeatingError::GuestNotFound(_) => ErrorCode::GuestNotFound,
            SeatingError::NoMoveInProgress => ErrorCode::NoMoveInProgress,
            SeatingError::NoTableFormOpen => ErrorCode::NoTableFormOpen,
            SeatingError::InvalidPlan(_) => ErrorCode::InvalidPlan,
        }
    }
}

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        let code = err.code();
        let app = AppError::with_message(code, err.to_string());
        match err {
            SeatingError::InvalidVenueDimension { width, height } => app
                .with_detail("width", width)
                .with_detail("height", height),
            SeatingError::InvalidViewport {
                max_width,
                max_height,
            } => app
                .with_detail("max_width", max_width)
                .with_detail("max_height", max_height),
            SeatingError::TableNotFound(table_id) => app.with_detail("table_id", table_id),
            SeatingError::TableFull {
                table_id,
                seat_count,
            } => app
                .with_detail("table_id", table_id)
                .with_detail("seat_count", seat_count),
            SeatingError::CapacityBelowAssigned {
                table_id,
                assigned,
                requested,
            } => app
                .with_detail("table_id", table_id)
                .with_detail("assigned", assigned)
                .with_detail("requested", requested),
            SeatingError::GuestAlreadyAtTable { table_id, guest_id } => app
                .with_detail("table_id", table_id)
                .with_detail("guest_id", guest_id),
            SeatingError::GuestNotFound(guest_id) => app.with_detail("guest_id", guest_id),
            SeatingError::NoMoveInProgress
            | SeatingError::NoTableFormOpen
            | SeatingError::InvalidPlan(_) => app,
        }
    }
}

pub type SeatingResult<T> = Result<T, SeatingError>;
