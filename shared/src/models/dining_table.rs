//! Dining Table Model

use serde::{Deserialize, Serialize};

use super::venue::Position;
use crate::types::{GuestId, TableId};

/// Fewest seats a table can have
pub const MIN_SEATS: u32 = 2;
/// Most seats a table can have
pub const MAX_SEATS: u32 = 20;

/// Table shape as drawn on the venue floor
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TableShape {
    #[default]
    Round,
    Square,
    Rectangular,
}

/// Occupancy classification used for color coding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FillTier {
    /// Nobody seated yet
    Empty,
    /// Some seats taken, some open
    Partial,
    /// Every seat taken
    Full,
}

impl FillTier {
    /// Classify an occupancy count against a seat count
    pub fn classify(seated: usize, seat_count: u32) -> Self {
        if seated == 0 {
            FillTier::Empty
        } else if seated >= seat_count as usize {
            FillTier::Full
        } else {
            FillTier::Partial
        }
    }
}

/// Dining table entity
///
/// `assigned_guest_ids` is kept in seating order and never holds more ids
/// than `seat_count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiningTable {
    pub id: TableId,
    /// Planner-facing label ("Table 4")
    pub number: u32,
    pub shape: TableShape,
    pub seat_count: u32,
    /// Top-left anchor, in meters
    pub position: Position,
    #[serde(default)]
    pub assigned_guest_ids: Vec<GuestId>,
}

impl DiningTable {
    pub fn seated(&self) -> usize {
        self.assigned_guest_ids.len()
    }

    pub fn open_seats(&self) -> u32 {
        self.seat_count.saturating_sub(self.seated() as u32)
    }

    pub fn is_full(&self) -> bool {
        self.seated() >= self.seat_count as usize
    }

    pub fn has_guest(&self, guest_id: GuestId) -> bool {
        self.assigned_guest_ids.contains(&guest_id)
    }

    pub fn fill_tier(&self) -> FillTier {
        FillTier::classify(self.seated(), self.seat_count)
    }
}

/// Create dining table payload
///
/// Raw planner input: `number` and `seat_count` are sanitized on creation
/// rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiningTableCreate {
    pub number: i64,
    #[serde(default)]
    pub shape: TableShape,
    pub seat_count: i64,
    #[serde(default)]
    pub position: Position,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiningTableUpdate {
    pub number: Option<i64>,
    pub shape: Option<TableShape>,
    pub seat_count: Option<i64>,
    pub position: Option<Position>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(seat_count: u32, guests: &[GuestId]) -> DiningTable {
        DiningTable {
            id: 1,
            number: 1,
            shape: TableShape::Round,
            seat_count,
            position: Position::default(),
            assigned_guest_ids: guests.to_vec(),
        }
    }

    #[test]
    fn test_fill_tier_transitions() {
        assert_eq!(table(4, &[]).fill_tier(), FillTier::Empty);
        assert_eq!(table(4, &[1, 2]).fill_tier(), FillTier::Partial);
        assert_eq!(table(4, &[1, 2, 3, 4]).fill_tier(), FillTier::Full);
    }

    #[test]
    fn test_open_seats() {
        let t = table(8, &[10, 11, 12]);
        assert_eq!(t.open_seats(), 5);
        assert!(!t.is_full());
        assert!(t.has_guest(11));
        assert!(!t.has_guest(99));
    }

    #[test]
    fn test_shape_serde() {
        let json = serde_json::to_string(&TableShape::Rectangular).unwrap();
        assert_eq!(json, "\"rectangular\"");
        let shape: TableShape = serde_json::from_str("\"square\"").unwrap();
        assert_eq!(shape, TableShape::Square);
    }

    #[test]
    fn test_create_payload_defaults() {
        let payload: DiningTableCreate =
            serde_json::from_str(r#"{"number": 3, "seat_count": 10}"#).unwrap();
        assert_eq!(payload.shape, TableShape::Round);
        assert_eq!(payload.position, Position::default());
    }
}
