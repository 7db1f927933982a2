//! Table Registry
//!
//! Owns the venue and every table placed in it. Each operation either applies
//! completely or returns an error with nothing changed:
//!
//! - capacity: a table never holds more guest ids than seats
//! - bounds: a table's footprint always lies inside the venue
//!
//! The registry does not stop a guest from sitting at two tables; moving
//! guests between tables is the controller's job (see
//! [`crate::controller::InteractionController::complete_move`]).

use std::collections::{HashMap, HashSet};

use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, Position, TableShape, Venue,
};
use shared::types::{GuestId, TableId};
use shared::util::snowflake_id;
use tracing::{debug, info, warn};

use crate::core::{SeatingError, SeatingResult};
use crate::geometry::{clamp_position, footprint};
use crate::utils::validation::{sanitize_seat_count, sanitize_table_number, validate_venue};

#[derive(Debug, Clone)]
pub struct TableRegistry {
    venue: Venue,
    tables: Vec<DiningTable>,
}

impl TableRegistry {
    /// Empty registry for a venue
    pub fn new(venue: Venue) -> SeatingResult<Self> {
        validate_venue(&venue)?;
        Ok(Self {
            venue,
            tables: Vec::new(),
        })
    }

    /// Rebuild a registry from records held by an external store
    ///
    /// Seat counts, numbers, and positions are sanitized the same way as on
    /// creation. Records that break an assignment invariant are rejected:
    /// duplicate table ids, a guest listed twice, or more guests than seats.
    pub fn from_parts(venue: Venue, tables: Vec<DiningTable>) -> SeatingResult<Self> {
        let mut registry = Self::new(venue)?;
        let mut table_ids = HashSet::new();
        let mut seated: HashMap<GuestId, TableId> = HashMap::new();

        for mut table in tables {
            if !table_ids.insert(table.id) {
                return Err(SeatingError::InvalidPlan(format!(
                    "table id {} appears more than once",
                    table.id
                )));
            }
            for &guest_id in &table.assigned_guest_ids {
                if let Some(other) = seated.insert(guest_id, table.id) {
                    return Err(SeatingError::InvalidPlan(format!(
                        "guest {} is seated at tables {} and {}",
                        guest_id, other, table.id
                    )));
                }
            }

            table.number = table.number.max(1);
            table.seat_count = sanitize_seat_count(table.seat_count as i64);
            if table.seated() > table.seat_count as usize {
                return Err(SeatingError::InvalidPlan(format!(
                    "table {} seats {} guests but has {} seats",
                    table.id,
                    table.seated(),
                    table.seat_count
                )));
            }
            table.position = clamp_position(
                table.position,
                footprint(table.shape, table.seat_count),
                &registry.venue,
            );
            registry.tables.push(table);
        }

        info!(
            tables = registry.tables.len(),
            seated = seated.len(),
            "Seating registry restored"
        );
        Ok(registry)
    }

    // ========== Queries ==========

    pub fn venue(&self) -> Venue {
        self.venue
    }

    /// Tables in creation order
    pub fn tables(&self) -> &[DiningTable] {
        &self.tables
    }

    pub fn get(&self, id: TableId) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table currently holding a guest
    pub fn find_table_of_guest(&self, guest_id: GuestId) -> Option<TableId> {
        self.tables
            .iter()
            .find(|t| t.has_guest(guest_id))
            .map(|t| t.id)
    }

    /// Label suggested for the next table: one past the highest in use
    pub fn next_table_number(&self) -> u32 {
        self.tables
            .iter()
            .map(|t| t.number)
            .max()
            .map_or(1, |n| n.saturating_add(1))
    }

    fn index_of(&self, id: TableId) -> SeatingResult<usize> {
        self.tables
            .iter()
            .position(|t| t.id == id)
            .ok_or(SeatingError::TableNotFound(id))
    }

    fn fresh_id(&self) -> TableId {
        loop {
            let id = snowflake_id();
            if self.get(id).is_none() {
                return id;
            }
        }
    }

    // ========== Venue ==========

    /// Change the venue and pull every table back inside it
    ///
    /// Returns how many tables moved.
    pub fn resize_venue(&mut self, venue: Venue) -> SeatingResult<usize> {
        validate_venue(&venue)?;
        self.venue = venue;

        let mut moved = 0;
        for table in &mut self.tables {
            let clamped = clamp_position(
                table.position,
                footprint(table.shape, table.seat_count),
                &venue,
            );
            if clamped != table.position {
                debug!(
                    table_id = table.id,
                    from_x = table.position.x,
                    from_y = table.position.y,
                    to_x = clamped.x,
                    to_y = clamped.y,
                    "Table re-clamped into venue"
                );
                table.position = clamped;
                moved += 1;
            }
        }

        info!(
            width = venue.width,
            height = venue.height,
            moved,
            "Venue resized"
        );
        Ok(moved)
    }

    // ========== Table CRUD ==========

    /// Place a new, empty table
    ///
    /// Never fails: the seat count and number are sanitized and the position
    /// is clamped into the venue.
    pub fn create_table(&mut self, data: DiningTableCreate) -> DiningTable {
        let seat_count = sanitize_seat_count(data.seat_count);
        let position = clamp_position(
            data.position,
            footprint(data.shape, seat_count),
            &self.venue,
        );
        let table = DiningTable {
            id: self.fresh_id(),
            number: sanitize_table_number(data.number),
            shape: data.shape,
            seat_count,
            position,
            assigned_guest_ids: Vec::new(),
        };

        info!(
            table_id = table.id,
            number = table.number,
            shape = ?table.shape,
            seat_count,
            "Table created"
        );
        self.tables.push(table.clone());
        table
    }

    /// Convenience wrapper over [`Self::create_table`]
    pub fn add_table(
        &mut self,
        number: i64,
        shape: TableShape,
        seat_count: i64,
        position: Position,
    ) -> DiningTable {
        self.create_table(DiningTableCreate {
            number,
            shape,
            seat_count,
            position,
        })
    }

    /// Apply a partial update
    ///
    /// The resulting position is re-clamped whenever shape, seat count, or
    /// position changed, so a resize can never push a table out of the venue.
    pub fn update_table(
        &mut self,
        id: TableId,
        data: DiningTableUpdate,
    ) -> SeatingResult<DiningTable> {
        let idx = self.index_of(id)?;
        let existing = &self.tables[idx];

        let seat_count = data
            .seat_count
            .map(sanitize_seat_count)
            .unwrap_or(existing.seat_count);
        if existing.seated() > seat_count as usize {
            warn!(
                table_id = id,
                assigned = existing.seated(),
                requested = seat_count,
                "Seat count below seated guests rejected"
            );
            return Err(SeatingError::CapacityBelowAssigned {
                table_id: id,
                assigned: existing.seated(),
                requested: seat_count,
            });
        }

        let shape = data.shape.unwrap_or(existing.shape);
        let number = data
            .number
            .map(sanitize_table_number)
            .unwrap_or(existing.number);
        let position = clamp_position(
            data.position.unwrap_or(existing.position),
            footprint(shape, seat_count),
            &self.venue,
        );

        let table = &mut self.tables[idx];
        table.number = number;
        table.shape = shape;
        table.seat_count = seat_count;
        table.position = position;

        info!(
            table_id = id,
            number,
            shape = ?shape,
            seat_count,
            "Table updated"
        );
        Ok(table.clone())
    }

    /// Remove a table; its guests simply stop being seated anywhere
    pub fn delete_table(&mut self, id: TableId) -> SeatingResult<DiningTable> {
        let idx = self.index_of(id)?;
        let removed = self.tables.remove(idx);
        info!(
            table_id = id,
            released = removed.seated(),
            "Table deleted"
        );
        Ok(removed)
    }

    // ========== Assignment ==========

    /// Seat a guest at a table
    ///
    /// A guest already at this table yields [`SeatingError::GuestAlreadyAtTable`],
    /// which is benign: nothing changed. A guest seated elsewhere is not
    /// removed from that other table.
    pub fn assign_guest(&mut self, table_id: TableId, guest_id: GuestId) -> SeatingResult<()> {
        let idx = self.index_of(table_id)?;
        let table = &mut self.tables[idx];

        if table.has_guest(guest_id) {
            return Err(SeatingError::GuestAlreadyAtTable { table_id, guest_id });
        }
        if table.is_full() {
            warn!(
                table_id,
                guest_id,
                seat_count = table.seat_count,
                "Assignment to full table rejected"
            );
            return Err(SeatingError::TableFull {
                table_id,
                seat_count: table.seat_count,
            });
        }

        table.assigned_guest_ids.push(guest_id);
        debug!(
            table_id,
            guest_id,
            seated = table.seated(),
            "Guest assigned"
        );
        Ok(())
    }

    /// Remove a guest from a table
    ///
    /// Returns whether the guest was there; an absent guest is a no-op.
    pub fn unassign_guest(&mut self, table_id: TableId, guest_id: GuestId) -> SeatingResult<bool> {
        let idx = self.index_of(table_id)?;
        let table = &mut self.tables[idx];
        let before = table.assigned_guest_ids.len();
        table.assigned_guest_ids.retain(|&g| g != guest_id);
        let removed = table.assigned_guest_ids.len() != before;
        if removed {
            debug!(table_id, guest_id, "Guest unassigned");
        }
        Ok(removed)
    }

    /// Put a guest back at a given seat index, undoing an unassign
    ///
    /// Bypasses the already-seated check but never the capacity check.
    pub(crate) fn reseat_guest(
        &mut self,
        table_id: TableId,
        guest_id: GuestId,
        seat_index: usize,
    ) -> SeatingResult<()> {
        let idx = self.index_of(table_id)?;
        let table = &mut self.tables[idx];
        if table.has_guest(guest_id) {
            return Ok(());
        }
        if table.is_full() {
            return Err(SeatingError::TableFull {
                table_id,
                seat_count: table.seat_count,
            });
        }
        let at = seat_index.min(table.assigned_guest_ids.len());
        table.assigned_guest_ids.insert(at, guest_id);
        Ok(())
    }

    /// Drop every assignment whose guest fails `keep`
    ///
    /// Returns the released guest ids.
    pub fn release_guests_where<F>(&mut self, mut keep: F) -> Vec<GuestId>
    where
        F: FnMut(GuestId) -> bool,
    {
        let mut released = Vec::new();
        for table in &mut self.tables {
            table.assigned_guest_ids.retain(|&g| {
                if keep(g) {
                    true
                } else {
                    released.push(g);
                    false
                }
            });
        }
        released
    }
}
