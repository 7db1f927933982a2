//! Intent module - a single dispatch entry for seating gestures
//!
//! The hosting UI turns every planner gesture into a [`SeatingIntent`] and
//! hands it to the engine, which answers with an [`IntentResult`].

use serde::{Deserialize, Serialize};

use crate::models::{DiningTableCreate, DiningTableUpdate};
use crate::types::{GuestId, TableId};

/// Generic CRUD operation
///
/// Type parameters:
/// - `C`: create payload
/// - `U`: update payload (fields are usually `Option`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum CrudAction<C, U> {
    /// Create
    Create(C),
    /// Update (id plus partial data)
    Update { id: TableId, data: U },
    /// Delete (id only)
    Delete { id: TableId },
}

/// Seating intent - every planner gesture the engine understands
///
/// Uses `#[serde(tag = "intent", content = "data")]` so the JSON reads:
///
/// ```json
/// { "intent": "CompleteMove", "data": { "table_id": 42 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "intent", content = "data")]
pub enum SeatingIntent {
    // ===== Venue =====
    /// Venue dimensions changed (meters)
    SetVenue { width: f64, height: f64 },
    /// Hosting window resized (pixels)
    SetViewport { max_width: f64, max_height: f64 },

    // ===== Tables =====
    /// Table CRUD
    Table(CrudAction<DiningTableCreate, DiningTableUpdate>),

    // ===== Assignment =====
    /// Seat a guest at a table, moving it from its current table if needed
    AssignGuest { table_id: TableId, guest_id: GuestId },
    /// "Remove from table" action
    UnassignGuest { table_id: TableId, guest_id: GuestId },
    /// Guest row picked up
    BeginMove { guest_id: GuestId },
    /// Picked-up guest dropped on a table
    CompleteMove { table_id: TableId },
    /// Drag aborted
    CancelMove,

    // ===== View =====
    /// Table clicked (or selection cleared)
    SelectTable { table_id: Option<TableId> },
    SetZoom { zoom: f64 },
    ZoomIn,
    ZoomOut,
    ResetZoom,

    // ===== Add-table form =====
    OpenTableForm,
    EditTableForm(DiningTableUpdate),
    SubmitTableForm,
    CancelTableForm,
}

impl SeatingIntent {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetVenue { .. } => "set_venue",
            Self::SetViewport { .. } => "set_viewport",
            Self::Table(CrudAction::Create(_)) => "create_table",
            Self::Table(CrudAction::Update { .. }) => "update_table",
            Self::Table(CrudAction::Delete { .. }) => "delete_table",
            Self::AssignGuest { .. } => "assign_guest",
            Self::UnassignGuest { .. } => "unassign_guest",
            Self::BeginMove { .. } => "begin_move",
            Self::CompleteMove { .. } => "complete_move",
            Self::CancelMove => "cancel_move",
            Self::SelectTable { .. } => "select_table",
            Self::SetZoom { .. } => "set_zoom",
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
            Self::ResetZoom => "reset_zoom",
            Self::OpenTableForm => "open_table_form",
            Self::EditTableForm(_) => "edit_table_form",
            Self::SubmitTableForm => "submit_table_form",
            Self::CancelTableForm => "cancel_table_form",
        }
    }
}

/// Outcome of a dispatched intent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntentResult {
    /// Operation message
    pub message: String,
    /// Returned data (the created/updated record, the new UI state, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Affected table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TableId>,
}

impl IntentResult {
    /// Plain success
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            id: None,
        }
    }

    /// Success with data
    pub fn ok_with_data<T: Serialize>(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: serde_json::to_value(data).ok(),
            id: None,
        }
    }

    /// Success with the affected table id
    pub fn ok_with_id(message: impl Into<String>, id: TableId) -> Self {
        Self {
            message: message.into(),
            data: None,
            id: Some(id),
        }
    }
}
