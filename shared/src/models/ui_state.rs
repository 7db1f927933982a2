//! Seating UI State
//!
//! Transient view state kept apart from the table registry so the registry's
//! invariants can be checked without any rendering concern.

use serde::{Deserialize, Serialize};

use super::dining_table::DiningTableCreate;
use crate::types::{GuestId, TableId};

/// View state for the seating screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiState {
    /// Table highlighted by the last click
    pub selected_table_id: Option<TableId>,
    /// Multiplier applied on top of the fitted scale
    pub zoom: f64,
    /// Add-table form being filled in, if open
    pub table_form: Option<DiningTableCreate>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected_table_id: None,
            zoom: 1.0,
            table_form: None,
        }
    }
}

/// Guest picked up for a move, and where it was picked up from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingMove {
    pub guest_id: GuestId,
    pub source_table_id: Option<TableId>,
}
