//! Intent dispatch
//!
//! ```text
//! dispatch(intent)
//!     ├─ 1. Route to the session method
//!     ├─ 2. Rejection -> AppError (code + details)
//!     └─ 3. Success   -> IntentResult (message, data, table id)
//! ```

use shared::error::{AppError, AppResult};
use shared::{CrudAction, IntentResult, SeatingIntent};
use tracing::{debug, warn};

use super::SeatingSession;
use crate::core::SeatingResult;

impl SeatingSession {
    /// Apply one planner gesture
    pub fn dispatch(&mut self, intent: SeatingIntent) -> AppResult<IntentResult> {
        let name = intent.name();
        debug!(intent = name, "Dispatching intent");
        match self.apply(intent) {
            Ok(result) => Ok(result),
            Err(err) => {
                warn!(intent = name, code = %err.code(), error = %err, "Intent rejected");
                Err(AppError::from(err))
            }
        }
    }

    fn apply(&mut self, intent: SeatingIntent) -> SeatingResult<IntentResult> {
        let result = match intent {
            SeatingIntent::SetVenue { width, height } => {
                let moved = self.set_venue_dimensions(width, height)?;
                IntentResult::ok_with_data("Venue updated", serde_json::json!({ "moved": moved }))
            }
            SeatingIntent::SetViewport {
                max_width,
                max_height,
            } => {
                self.set_viewport(max_width, max_height)?;
                IntentResult::ok("Viewport updated")
            }

            SeatingIntent::Table(CrudAction::Create(data)) => {
                let table = self.create_table(data);
                IntentResult {
                    id: Some(table.id),
                    ..IntentResult::ok_with_data("Table created", &table)
                }
            }
            SeatingIntent::Table(CrudAction::Update { id, data }) => {
                let table = self.update_table(id, data)?;
                IntentResult {
                    id: Some(id),
                    ..IntentResult::ok_with_data("Table updated", &table)
                }
            }
            SeatingIntent::Table(CrudAction::Delete { id }) => {
                let removed = self.delete_table(id)?;
                IntentResult {
                    id: Some(id),
                    ..IntentResult::ok_with_data(
                        "Table deleted",
                        serde_json::json!({ "released": removed.assigned_guest_ids }),
                    )
                }
            }

            SeatingIntent::AssignGuest { table_id, guest_id } => {
                let outcome = self.assign_guest(table_id, guest_id)?;
                IntentResult {
                    id: Some(table_id),
                    ..IntentResult::ok_with_data("Guest seated", outcome)
                }
            }
            SeatingIntent::UnassignGuest { table_id, guest_id } => {
                let removed = self.unassign_guest(table_id, guest_id)?;
                let message = if removed {
                    "Guest removed from table"
                } else {
                    "Guest was not at this table"
                };
                IntentResult::ok_with_id(message, table_id)
            }
            SeatingIntent::BeginMove { guest_id } => {
                let pending = self.begin_move(guest_id)?;
                IntentResult::ok_with_data("Move started", pending)
            }
            SeatingIntent::CompleteMove { table_id } => {
                let outcome = self.complete_move(table_id)?;
                IntentResult {
                    id: Some(table_id),
                    ..IntentResult::ok_with_data("Move completed", outcome)
                }
            }
            SeatingIntent::CancelMove => match self.cancel_move() {
                Some(pending) => IntentResult::ok_with_data("Move cancelled", pending),
                None => IntentResult::ok("No move to cancel"),
            },

            SeatingIntent::SelectTable { table_id } => {
                self.select_table(table_id)?;
                match table_id {
                    Some(id) => IntentResult::ok_with_id("Table selected", id),
                    None => IntentResult::ok("Selection cleared"),
                }
            }
            SeatingIntent::SetZoom { zoom } => zoom_result(self.set_zoom(zoom)),
            SeatingIntent::ZoomIn => zoom_result(self.zoom_in()),
            SeatingIntent::ZoomOut => zoom_result(self.zoom_out()),
            SeatingIntent::ResetZoom => zoom_result(self.reset_zoom()),

            SeatingIntent::OpenTableForm => {
                IntentResult::ok_with_data("Table form opened", self.open_table_form())
            }
            SeatingIntent::EditTableForm(patch) => {
                IntentResult::ok_with_data("Table form updated", self.edit_table_form(patch)?)
            }
            SeatingIntent::SubmitTableForm => {
                let table = self.submit_table_form()?;
                IntentResult {
                    id: Some(table.id),
                    ..IntentResult::ok_with_data("Table created", &table)
                }
            }
            SeatingIntent::CancelTableForm => {
                if self.cancel_table_form() {
                    IntentResult::ok("Table form closed")
                } else {
                    IntentResult::ok("No table form open")
                }
            }
        };
        Ok(result)
    }
}

fn zoom_result(zoom: f64) -> IntentResult {
    IntentResult::ok_with_data("Zoom updated", serde_json::json!({ "zoom": zoom }))
}
