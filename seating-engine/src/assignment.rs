//! Assignment Index
//!
//! Views derived from the tables and the roster. Everything is recomputed on
//! each call so the result always matches the current tables exactly.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use shared::models::{DiningTable, Guest};
use shared::types::{GuestId, TableId};

/// Roster guests not listed at any table, in roster order
pub fn unassigned_guests<'a>(all_guests: &'a [Guest], tables: &[DiningTable]) -> Vec<&'a Guest> {
    let seated: HashSet<GuestId> = tables
        .iter()
        .flat_map(|t| t.assigned_guest_ids.iter().copied())
        .collect();
    all_guests
        .iter()
        .filter(|g| !seated.contains(&g.id))
        .collect()
}

/// Guest id to the table it sits at
pub fn guest_table_index(tables: &[DiningTable]) -> HashMap<GuestId, TableId> {
    tables
        .iter()
        .flat_map(|t| t.assigned_guest_ids.iter().map(move |&g| (g, t.id)))
        .collect()
}

/// Roster records for a table's guests, in seat order
///
/// Ids missing from the roster are skipped.
pub fn seated_guests<'a>(all_guests: &'a [Guest], table: &DiningTable) -> Vec<&'a Guest> {
    let by_id: HashMap<GuestId, &Guest> = all_guests.iter().map(|g| (g.id, g)).collect();
    table
        .assigned_guest_ids
        .iter()
        .filter_map(|id| by_id.get(id).copied())
        .collect()
}

/// Occupancy totals shown above the guest list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentSummary {
    pub total_guests: usize,
    pub seated_guests: usize,
    pub unassigned_guests: usize,
    pub total_seats: u32,
    pub open_seats: u32,
    pub full_tables: usize,
}

impl AssignmentSummary {
    pub fn compute(all_guests: &[Guest], tables: &[DiningTable]) -> Self {
        let unassigned = unassigned_guests(all_guests, tables).len();
        Self {
            total_guests: all_guests.len(),
            seated_guests: all_guests.len() - unassigned,
            unassigned_guests: unassigned,
            total_seats: tables.iter().map(|t| t.seat_count).sum(),
            open_seats: tables.iter().map(|t| t.open_seats()).sum(),
            full_tables: tables.iter().filter(|t| t.is_full()).count(),
        }
    }
}
