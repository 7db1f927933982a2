//! Add-table form
//!
//! The form is a draft [`DiningTableCreate`] held in [`UiState`]; nothing
//! reaches the registry until it is submitted.

use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate, Position, TableShape};
use tracing::debug;

use super::InteractionController;
use crate::core::{SeatingError, SeatingResult};

impl InteractionController {
    /// Open (or reopen) the form, prefilled with the next table number
    pub fn open_table_form(&mut self) -> &DiningTableCreate {
        let draft = DiningTableCreate {
            number: self.registry.next_table_number() as i64,
            shape: TableShape::Round,
            seat_count: self.config.default_seat_count as i64,
            position: Position::default(),
        };
        debug!(number = draft.number, "Table form opened");
        self.ui.table_form.insert(draft)
    }

    /// Change fields of the open draft
    pub fn edit_table_form(&mut self, patch: DiningTableUpdate) -> SeatingResult<&DiningTableCreate> {
        let draft = self
            .ui
            .table_form
            .as_mut()
            .ok_or(SeatingError::NoTableFormOpen)?;
        if let Some(number) = patch.number {
            draft.number = number;
        }
        if let Some(shape) = patch.shape {
            draft.shape = shape;
        }
        if let Some(seat_count) = patch.seat_count {
            draft.seat_count = seat_count;
        }
        if let Some(position) = patch.position {
            draft.position = position;
        }
        Ok(&*draft)
    }

    /// Create the drafted table and close the form
    pub fn submit_table_form(&mut self) -> SeatingResult<DiningTable> {
        let draft = self
            .ui
            .table_form
            .take()
            .ok_or(SeatingError::NoTableFormOpen)?;
        Ok(self.registry.create_table(draft))
    }

    /// Close the form without creating anything; returns whether one was open
    pub fn cancel_table_form(&mut self) -> bool {
        self.ui.table_form.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::registry::TableRegistry;
    use shared::models::Venue;

    fn controller() -> InteractionController {
        let registry = TableRegistry::new(Venue::new(20.0, 15.0)).unwrap();
        InteractionController::new(registry, Config::defaults())
    }

    #[test]
    fn test_open_form_prefills_next_number() {
        let mut ctl = controller();
        let draft = ctl.open_table_form().clone();
        assert_eq!(draft.number, 1);
        assert_eq!(draft.seat_count, 8);
        assert_eq!(draft.shape, TableShape::Round);

        ctl.submit_table_form().unwrap();
        assert_eq!(ctl.open_table_form().number, 2);
    }

    #[test]
    fn test_edit_and_submit() {
        let mut ctl = controller();
        ctl.open_table_form();
        ctl.edit_table_form(DiningTableUpdate {
            shape: Some(TableShape::Rectangular),
            seat_count: Some(30),
            position: Some(Position::new(3.0, 4.0)),
            ..Default::default()
        })
        .unwrap();

        let table = ctl.submit_table_form().unwrap();
        assert_eq!(table.shape, TableShape::Rectangular);
        assert_eq!(table.seat_count, 20);
        assert_eq!(table.position, Position::new(3.0, 4.0));
        assert!(ctl.ui().table_form.is_none());
        assert_eq!(ctl.registry().len(), 1);
    }

    #[test]
    fn test_cancel_leaves_registry_alone() {
        let mut ctl = controller();
        ctl.open_table_form();
        assert!(ctl.cancel_table_form());
        assert!(!ctl.cancel_table_form());
        assert!(ctl.registry().is_empty());
    }

    #[test]
    fn test_form_operations_require_open_form() {
        let mut ctl = controller();
        assert!(matches!(
            ctl.edit_table_form(DiningTableUpdate::default()),
            Err(SeatingError::NoTableFormOpen)
        ));
        assert!(matches!(
            ctl.submit_table_form(),
            Err(SeatingError::NoTableFormOpen)
        ));
    }
}
