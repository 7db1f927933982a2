//! Render Projection
//!
//! Read-only mapping from tables and a scale factor to screen rectangles,
//! and from unassigned guests to sidebar chips. Nothing is cached; project
//! again whenever the tables change.

use serde::{Deserialize, Serialize};
use shared::models::{DiningTable, FillTier, Guest, GuestSide, TableShape, Venue};
use shared::types::{GuestId, TableId};

use crate::geometry::table_footprint;

/// One table as the canvas draws it, in pixels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrawableTable {
    pub table_id: TableId,
    pub number: u32,
    pub shape: TableShape,
    pub screen_x: f64,
    pub screen_y: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    pub fill_tier: FillTier,
    pub fill_color: String,
    pub seated: usize,
    pub seat_count: u32,
    pub selected: bool,
}

/// Unassigned guest as the sidebar draws it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuestChip {
    pub id: GuestId,
    /// Name with the plus-one appended when there is one
    pub label: String,
    pub side: GuestSide,
    pub tint: String,
}

/// Venue outline in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VenueFrame {
    pub width: f64,
    pub height: f64,
}

pub fn project_tables(
    tables: &[DiningTable],
    scale: f64,
    selected: Option<TableId>,
) -> Vec<DrawableTable> {
    tables
        .iter()
        .map(|table| {
            let fp = table_footprint(table);
            let fill_tier = table.fill_tier();
            DrawableTable {
                table_id: table.id,
                number: table.number,
                shape: table.shape,
                screen_x: table.position.x * scale,
                screen_y: table.position.y * scale,
                screen_width: fp.width * scale,
                screen_height: fp.height * scale,
                fill_tier,
                fill_color: fill_color(fill_tier).to_string(),
                seated: table.seated(),
                seat_count: table.seat_count,
                selected: selected == Some(table.id),
            }
        })
        .collect()
}

pub fn project_guests<'a>(guests: impl IntoIterator<Item = &'a Guest>) -> Vec<GuestChip> {
    guests
        .into_iter()
        .map(|guest| GuestChip {
            id: guest.id,
            label: guest.display_name(),
            side: guest.side,
            tint: side_tint(guest.side).to_string(),
        })
        .collect()
}

pub fn project_venue(venue: &Venue, scale: f64) -> VenueFrame {
    VenueFrame {
        width: venue.width * scale,
        height: venue.height * scale,
    }
}

/// Fill color for a table's occupancy
pub fn fill_color(tier: FillTier) -> &'static str {
    match tier {
        FillTier::Empty => "#e5e7eb",
        FillTier::Partial => "#fde68a",
        FillTier::Full => "#86efac",
    }
}

/// Chip tint for a guest's side
pub fn side_tint(side: GuestSide) -> &'static str {
    match side {
        GuestSide::PartnerOne => "#bfdbfe",
        GuestSide::PartnerTwo => "#fbcfe8",
        GuestSide::Shared => "#ddd6fe",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Position;

    fn table(id: TableId, seats: u32, seated: usize, x: f64, y: f64) -> DiningTable {
        DiningTable {
            id,
            number: id as u32,
            shape: TableShape::Round,
            seat_count: seats,
            position: Position::new(x, y),
            assigned_guest_ids: (0..seated as i64).collect(),
        }
    }

    #[test]
    fn test_project_scales_position_and_size() {
        let drawn = project_tables(&[table(1, 8, 0, 5.0, 4.0)], 30.0, None);
        assert_eq!(drawn.len(), 1);
        let d = &drawn[0];
        assert_eq!(d.screen_x, 150.0);
        assert_eq!(d.screen_y, 120.0);
        assert_eq!(d.screen_width, 60.0);
        assert_eq!(d.screen_height, 60.0);
        assert!(!d.selected);
    }

    #[test]
    fn test_project_fill_tiers() {
        let tables = vec![
            table(1, 4, 0, 0.0, 0.0),
            table(2, 4, 2, 0.0, 0.0),
            table(3, 4, 4, 0.0, 0.0),
        ];
        let drawn = project_tables(&tables, 10.0, Some(2));
        let tiers: Vec<FillTier> = drawn.iter().map(|d| d.fill_tier).collect();
        assert_eq!(tiers, vec![FillTier::Empty, FillTier::Partial, FillTier::Full]);
        let colors: Vec<&str> = drawn.iter().map(|d| d.fill_color.as_str()).collect();
        assert_eq!(colors, vec!["#e5e7eb", "#fde68a", "#86efac"]);
    }

    #[test]
    fn test_project_marks_selection() {
        let tables = vec![table(1, 4, 0, 0.0, 0.0), table(2, 4, 0, 0.0, 0.0)];
        let selected: Vec<bool> = project_tables(&tables, 10.0, Some(2))
            .iter()
            .map(|d| d.selected)
            .collect();
        assert_eq!(selected, vec![false, true]);
    }

    #[test]
    fn test_project_venue() {
        let frame = project_venue(&Venue::new(20.0, 15.0), 30.0);
        assert_eq!(frame, VenueFrame { width: 600.0, height: 450.0 });
    }

    #[test]
    fn test_project_guests_tints_by_side() {
        let mut bride = Guest::new(1, "Ada", GuestSide::PartnerOne);
        bride.plus_one_name = Some("Ben".to_string());
        let guests = vec![bride, Guest::new(2, "Cy", GuestSide::PartnerTwo)];

        let chips = project_guests(&guests);
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[0].id, 1);
        assert_eq!(chips[0].label, guests[0].display_name());
        assert_eq!(chips[0].tint, side_tint(GuestSide::PartnerOne));
        assert_eq!(chips[1].side, GuestSide::PartnerTwo);
        assert_ne!(chips[0].tint, chips[1].tint);
    }
}
