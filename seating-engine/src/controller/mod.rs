//! Interaction Controller
//!
//! Turns planner gestures into registry calls. A guest move is an explicit
//! two-call protocol:
//!
//! ```text
//! begin_move(guest_id)        -> remembers the guest (no registry change)
//! complete_move(table_id)     -> unassign from old table + assign to new one,
//!                                applied as one unit
//! ```
//!
//! Selection, zoom, and the add-table form live in [`UiState`], kept apart
//! from the registry.

mod table_form;

use serde::{Deserialize, Serialize};
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, PendingMove, UiState, Venue,
};
use shared::types::{GuestId, TableId};
use tracing::{debug, error, info, warn};

use crate::core::{Config, SeatingError, SeatingResult};
use crate::registry::TableRegistry;

/// What a completed move did
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Guest was unassigned and is now seated
    Seated { table_id: TableId },
    /// Guest changed tables
    Moved { from: TableId, to: TableId },
    /// Guest was already at the target table
    Unchanged { table_id: TableId },
}

pub struct InteractionController {
    registry: TableRegistry,
    ui: UiState,
    pending_move: Option<PendingMove>,
    config: Config,
}

impl InteractionController {
    pub fn new(registry: TableRegistry, config: Config) -> Self {
        Self {
            registry,
            ui: UiState::default(),
            pending_move: None,
            config,
        }
    }

    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn pending_move(&self) -> Option<&PendingMove> {
        self.pending_move.as_ref()
    }

    /// Swap in a rebuilt registry, dropping view state that referred to the old one
    pub fn replace_registry(&mut self, registry: TableRegistry) {
        self.registry = registry;
        self.ui.selected_table_id = None;
        self.pending_move = None;
    }

    /// Mutable registry access for roster-driven cleanups
    pub(crate) fn registry_mut(&mut self) -> &mut TableRegistry {
        &mut self.registry
    }

    // ========== Table CRUD ==========

    pub fn create_table(&mut self, data: DiningTableCreate) -> DiningTable {
        self.registry.create_table(data)
    }

    pub fn update_table(
        &mut self,
        id: TableId,
        data: DiningTableUpdate,
    ) -> SeatingResult<DiningTable> {
        self.registry.update_table(id, data)
    }

    /// Delete a table, clearing a selection that pointed at it
    ///
    /// A guest picked up from this table stays picked up, now as unassigned.
    pub fn delete_table(&mut self, id: TableId) -> SeatingResult<DiningTable> {
        let removed = self.registry.delete_table(id)?;
        if self.ui.selected_table_id == Some(id) {
            self.ui.selected_table_id = None;
        }
        if let Some(pending) = self.pending_move.as_mut() {
            if pending.source_table_id == Some(id) {
                pending.source_table_id = None;
            }
        }
        Ok(removed)
    }

    /// Re-clamp every table after the venue changed
    pub fn resize_venue(&mut self, width: f64, height: f64) -> SeatingResult<usize> {
        self.registry.resize_venue(Venue::new(width, height))
    }

    // ========== Guest moves ==========

    /// Pick up a guest; replaces any earlier pick-up
    pub fn begin_move(&mut self, guest_id: GuestId) -> PendingMove {
        let pending = PendingMove {
            guest_id,
            source_table_id: self.registry.find_table_of_guest(guest_id),
        };
        debug!(
            guest_id,
            source_table_id = ?pending.source_table_id,
            "Move started"
        );
        self.pending_move = Some(pending);
        pending
    }

    /// Drop the picked-up guest on a table
    ///
    /// The pick-up is consumed whether or not the drop succeeds; a rejected
    /// drop leaves the guest where it was.
    pub fn complete_move(&mut self, target_table_id: TableId) -> SeatingResult<MoveOutcome> {
        let pending = self
            .pending_move
            .take()
            .ok_or(SeatingError::NoMoveInProgress)?;
        self.move_guest(pending.guest_id, target_table_id)
    }

    /// Abort a drag
    pub fn cancel_move(&mut self) -> Option<PendingMove> {
        self.pending_move.take()
    }

    /// Seat a guest at `target_table_id`, leaving any other table first
    ///
    /// Either the guest ends up at the target, or the registry is exactly as
    /// it was before the call.
    pub fn move_guest(
        &mut self,
        guest_id: GuestId,
        target_table_id: TableId,
    ) -> SeatingResult<MoveOutcome> {
        let source = self.registry.find_table_of_guest(guest_id);
        if source == Some(target_table_id) {
            return Ok(MoveOutcome::Unchanged {
                table_id: target_table_id,
            });
        }

        let target = self
            .registry
            .get(target_table_id)
            .ok_or(SeatingError::TableNotFound(target_table_id))?;
        if target.is_full() {
            warn!(
                guest_id,
                target_table_id,
                source_table_id = ?source,
                "Move to full table rejected"
            );
            return Err(SeatingError::TableFull {
                table_id: target_table_id,
                seat_count: target.seat_count,
            });
        }

        // Remember the seat index so a rollback restores the exact order
        let vacated = match source {
            Some(from) => {
                let seat_index = self
                    .registry
                    .get(from)
                    .and_then(|t| t.assigned_guest_ids.iter().position(|&g| g == guest_id))
                    .unwrap_or(0);
                self.registry.unassign_guest(from, guest_id)?;
                Some((from, seat_index))
            }
            None => None,
        };

        if let Err(err) = self.registry.assign_guest(target_table_id, guest_id) {
            if let Some((from, seat_index)) = vacated {
                if let Err(rollback) = self.registry.reseat_guest(from, guest_id, seat_index) {
                    error!(
                        guest_id,
                        from,
                        error = %rollback,
                        "Failed to restore guest after rejected move"
                    );
                }
            }
            warn!(guest_id, target_table_id, error = %err, "Move rejected");
            return Err(err);
        }

        let outcome = match vacated {
            Some((from, _)) => MoveOutcome::Moved {
                from,
                to: target_table_id,
            },
            None => MoveOutcome::Seated {
                table_id: target_table_id,
            },
        };
        info!(guest_id, outcome = ?outcome, "Guest moved");
        Ok(outcome)
    }

    /// "Remove from table" action
    pub fn remove_from_table(&mut self, table_id: TableId, guest_id: GuestId) -> SeatingResult<bool> {
        self.registry.unassign_guest(table_id, guest_id)
    }

    // ========== Selection ==========

    /// Table click; `None` clears the selection
    pub fn select_table(&mut self, table_id: Option<TableId>) -> SeatingResult<()> {
        if let Some(id) = table_id {
            if self.registry.get(id).is_none() {
                return Err(SeatingError::TableNotFound(id));
            }
        }
        self.ui.selected_table_id = table_id;
        Ok(())
    }

    pub fn selected_table(&self) -> Option<&DiningTable> {
        self.ui
            .selected_table_id
            .and_then(|id| self.registry.get(id))
    }

    // ========== Zoom ==========

    /// Set the zoom, clamped into the configured range; returns the applied value
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        // Two decimals keeps repeated steps from drifting
        let rounded = (zoom * 100.0).round() / 100.0;
        self.ui.zoom = self.config.clamp_zoom(rounded);
        self.ui.zoom
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set_zoom(self.ui.zoom + self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set_zoom(self.ui.zoom - self.config.zoom_step)
    }

    pub fn reset_zoom(&mut self) -> f64 {
        self.set_zoom(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Position, TableShape};

    fn controller() -> InteractionController {
        let registry = TableRegistry::new(Venue::new(20.0, 15.0)).unwrap();
        InteractionController::new(registry, Config::defaults())
    }

    fn add(ctl: &mut InteractionController, seats: i64) -> TableId {
        ctl.create_table(DiningTableCreate {
            number: 1,
            shape: TableShape::Round,
            seat_count: seats,
            position: Position::new(2.0, 2.0),
        })
        .id
    }

    #[test]
    fn test_begin_move_does_not_touch_registry() {
        let mut ctl = controller();
        let table = add(&mut ctl, 4);
        ctl.move_guest(1, table).unwrap();
        let before = ctl.registry().tables().to_vec();

        let pending = ctl.begin_move(1);
        assert_eq!(pending.source_table_id, Some(table));
        assert_eq!(ctl.registry().tables(), before.as_slice());
    }

    #[test]
    fn test_complete_move_seats_unassigned_guest() {
        let mut ctl = controller();
        let table = add(&mut ctl, 4);
        ctl.begin_move(7);
        assert_eq!(
            ctl.complete_move(table),
            Ok(MoveOutcome::Seated { table_id: table })
        );
        assert_eq!(ctl.registry().find_table_of_guest(7), Some(table));
        assert!(ctl.pending_move().is_none());
    }

    #[test]
    fn test_complete_move_between_tables() {
        let mut ctl = controller();
        let a = add(&mut ctl, 4);
        let b = add(&mut ctl, 4);
        ctl.move_guest(7, a).unwrap();

        ctl.begin_move(7);
        assert_eq!(ctl.complete_move(b), Ok(MoveOutcome::Moved { from: a, to: b }));
        assert!(!ctl.registry().get(a).unwrap().has_guest(7));
        assert!(ctl.registry().get(b).unwrap().has_guest(7));
    }

    #[test]
    fn test_complete_move_without_begin() {
        let mut ctl = controller();
        let table = add(&mut ctl, 4);
        assert_eq!(ctl.complete_move(table), Err(SeatingError::NoMoveInProgress));
    }

    #[test]
    fn test_move_to_full_table_keeps_guest_in_place() {
        let mut ctl = controller();
        let a = add(&mut ctl, 4);
        let b = add(&mut ctl, 2);
        ctl.move_guest(1, a).unwrap();
        ctl.move_guest(2, a).unwrap();
        ctl.move_guest(3, a).unwrap();
        ctl.move_guest(10, b).unwrap();
        ctl.move_guest(11, b).unwrap();
        let before = ctl.registry().tables().to_vec();

        ctl.begin_move(2);
        assert!(matches!(
            ctl.complete_move(b),
            Err(SeatingError::TableFull { .. })
        ));
        assert_eq!(ctl.registry().tables(), before.as_slice());
        assert_eq!(ctl.registry().get(a).unwrap().assigned_guest_ids, vec![1, 2, 3]);
        assert!(ctl.pending_move().is_none());
    }

    #[test]
    fn test_move_to_unknown_table_keeps_guest_in_place() {
        let mut ctl = controller();
        let a = add(&mut ctl, 4);
        ctl.move_guest(1, a).unwrap();
        assert_eq!(ctl.move_guest(1, 999), Err(SeatingError::TableNotFound(999)));
        assert_eq!(ctl.registry().find_table_of_guest(1), Some(a));
    }

    #[test]
    fn test_move_to_same_full_table_is_unchanged() {
        let mut ctl = controller();
        let a = add(&mut ctl, 2);
        ctl.move_guest(1, a).unwrap();
        ctl.move_guest(2, a).unwrap();
        assert_eq!(ctl.move_guest(1, a), Ok(MoveOutcome::Unchanged { table_id: a }));
        assert_eq!(ctl.registry().get(a).unwrap().assigned_guest_ids, vec![1, 2]);
    }

    #[test]
    fn test_cancel_move() {
        let mut ctl = controller();
        ctl.begin_move(3);
        assert_eq!(ctl.cancel_move().map(|p| p.guest_id), Some(3));
        assert!(ctl.cancel_move().is_none());
    }

    #[test]
    fn test_remove_from_table() {
        let mut ctl = controller();
        let a = add(&mut ctl, 4);
        ctl.move_guest(5, a).unwrap();
        assert_eq!(ctl.remove_from_table(a, 5), Ok(true));
        assert_eq!(ctl.registry().find_table_of_guest(5), None);
    }

    #[test]
    fn test_select_table() {
        let mut ctl = controller();
        let a = add(&mut ctl, 4);
        ctl.select_table(Some(a)).unwrap();
        assert_eq!(ctl.ui().selected_table_id, Some(a));
        assert_eq!(ctl.selected_table().map(|t| t.id), Some(a));

        assert_eq!(ctl.select_table(Some(42)), Err(SeatingError::TableNotFound(42)));
        assert_eq!(ctl.ui().selected_table_id, Some(a));

        ctl.select_table(None).unwrap();
        assert!(ctl.selected_table().is_none());
    }

    #[test]
    fn test_delete_selected_table_clears_selection() {
        let mut ctl = controller();
        let a = add(&mut ctl, 4);
        ctl.move_guest(5, a).unwrap();
        ctl.select_table(Some(a)).unwrap();
        ctl.begin_move(5);

        ctl.delete_table(a).unwrap();
        assert_eq!(ctl.ui().selected_table_id, None);
        assert_eq!(ctl.pending_move().and_then(|p| p.source_table_id), None);
        assert_eq!(ctl.pending_move().map(|p| p.guest_id), Some(5));
    }

    #[test]
    fn test_zoom_clamps_and_steps() {
        let mut ctl = controller();
        assert_eq!(ctl.ui().zoom, 1.0);
        assert_eq!(ctl.zoom_in(), 1.1);
        assert_eq!(ctl.zoom_in(), 1.2);
        assert_eq!(ctl.set_zoom(9.0), 2.0);
        assert_eq!(ctl.zoom_in(), 2.0);
        assert_eq!(ctl.set_zoom(0.55), 0.55);
        assert_eq!(ctl.zoom_out(), 0.5);
        assert_eq!(ctl.zoom_out(), 0.5);
        assert_eq!(ctl.reset_zoom(), 1.0);
    }

    #[test]
    fn test_huge_zoom_pins_to_max() {
        let mut ctl = controller();
        assert_eq!(ctl.set_zoom(1e307), 2.0);
        assert_eq!(ctl.set_zoom(f64::MAX), 2.0);
        assert_eq!(ctl.set_zoom(-1e307), 0.5);
        assert_eq!(ctl.set_zoom(f64::NAN), 1.0);
    }

    #[test]
    fn test_resize_venue_through_controller() {
        let mut ctl = controller();
        let a = ctl
            .create_table(DiningTableCreate {
                number: 1,
                shape: TableShape::Round,
                seat_count: 8,
                position: Position::new(18.0, 5.0),
            })
            .id;
        assert_eq!(ctl.resize_venue(10.0, 15.0), Ok(1));
        assert_eq!(ctl.registry().get(a).unwrap().position.x, 8.0);
        assert!(matches!(
            ctl.resize_venue(0.0, 15.0),
            Err(SeatingError::InvalidVenueDimension { .. })
        ));
    }
}
