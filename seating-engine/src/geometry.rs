//! Geometry Engine
//!
//! Pure functions: meters to pixels, table footprints, and clamping table
//! positions into the venue. Nothing here mutates state or logs.

use serde::{Deserialize, Serialize};
use shared::models::{DiningTable, MAX_SEATS, MIN_SEATS, Position, TableShape, Venue, Viewport};

use crate::core::{SeatingError, SeatingResult};
use crate::utils::validation::{validate_venue, validate_viewport};

/// Upper bound on pixels per meter, so tiny venues do not render huge
pub const DEFAULT_SCALE_CAP: f64 = 30.0;

/// Tolerance for bounds checks on clamped positions
const BOUNDS_EPSILON: f64 = 1e-9;

// Round and square tables grow evenly with their seat count.
const ROUND_BASE_M: f64 = 1.0;
const ROUND_PER_SEAT_M: f64 = 0.125;
// Rectangular tables grow mostly along their long side.
const RECT_BASE_WIDTH_M: f64 = 1.0;
const RECT_WIDTH_PER_SEAT_M: f64 = 0.2;
const RECT_BASE_HEIGHT_M: f64 = 0.8;
const RECT_HEIGHT_PER_SEAT_M: f64 = 0.05;

/// Area a table occupies on the venue floor, in meters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

/// Footprint for a shape and seat count
///
/// The seat count is clamped into the legal range first, so the result is
/// always a positive rectangle.
pub fn footprint(shape: TableShape, seat_count: u32) -> Footprint {
    let seats = seat_count.clamp(MIN_SEATS, MAX_SEATS) as f64;
    match shape {
        TableShape::Round | TableShape::Square => {
            let side = ROUND_BASE_M + ROUND_PER_SEAT_M * seats;
            Footprint {
                width: side,
                height: side,
            }
        }
        TableShape::Rectangular => Footprint {
            width: RECT_BASE_WIDTH_M + RECT_WIDTH_PER_SEAT_M * seats,
            height: RECT_BASE_HEIGHT_M + RECT_HEIGHT_PER_SEAT_M * seats,
        },
    }
}

pub fn table_footprint(table: &DiningTable) -> Footprint {
    footprint(table.shape, table.seat_count)
}

/// Pixels per meter with the default cap
///
/// `min(viewport.max_width / venue.width, viewport.max_height / venue.height, cap) × zoom`
pub fn compute_scale(venue: &Venue, viewport: &Viewport, zoom: f64) -> SeatingResult<f64> {
    compute_scale_with_cap(venue, viewport, zoom, DEFAULT_SCALE_CAP)
}

/// Pixels per meter with an explicit cap
///
/// A zoom that is not a positive finite number counts as 1.0, as does a
/// zoom whose product overflows or underflows. A non-positive cap falls back
/// to [`DEFAULT_SCALE_CAP`]. The result is always finite and positive; a
/// viewport too small to show the venue at any representable scale is
/// rejected as [`SeatingError::InvalidViewport`].
pub fn compute_scale_with_cap(
    venue: &Venue,
    viewport: &Viewport,
    zoom: f64,
    scale_cap: f64,
) -> SeatingResult<f64> {
    validate_venue(venue)?;
    validate_viewport(viewport)?;

    let zoom = if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 };
    let cap = if scale_cap.is_finite() && scale_cap > 0.0 {
        scale_cap
    } else {
        DEFAULT_SCALE_CAP
    };

    let fitted = (viewport.max_width / venue.width)
        .min(viewport.max_height / venue.height)
        .min(cap);
    if !is_usable_scale(fitted) {
        return Err(SeatingError::InvalidViewport {
            max_width: viewport.max_width,
            max_height: viewport.max_height,
        });
    }

    let zoomed = fitted * zoom;
    Ok(if is_usable_scale(zoomed) { zoomed } else { fitted })
}

fn is_usable_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}

fn clamp_axis(value: f64, extent: f64, limit: f64) -> f64 {
    let max = limit - extent;
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

/// Move a position so the whole footprint lies inside the venue
///
/// Axes are clamped independently. An axis where the footprint is larger than
/// the venue pins to 0.
pub fn clamp_position(position: Position, footprint: Footprint, venue: &Venue) -> Position {
    Position {
        x: clamp_axis(position.x, footprint.width, venue.width),
        y: clamp_axis(position.y, footprint.height, venue.height),
    }
}

/// Whether a footprint at `position` lies inside the venue
///
/// An axis the footprint cannot fit on only passes when pinned to 0.
pub fn fits_within(position: Position, footprint: Footprint, venue: &Venue) -> bool {
    let axis_ok = |value: f64, extent: f64, limit: f64| {
        if extent > limit {
            value == 0.0
        } else {
            value >= 0.0 && value + extent <= limit + BOUNDS_EPSILON
        }
    };
    axis_ok(position.x, footprint.width, venue.width)
        && axis_ok(position.y, footprint.height, venue.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue() -> Venue {
        Venue::new(20.0, 15.0)
    }

    #[test]
    fn test_compute_scale_basic_flow() {
        let scale = compute_scale(&venue(), &Viewport::new(800.0, 600.0), 1.0).unwrap();
        assert_eq!(scale, 30.0);
    }

    #[test]
    fn test_compute_scale_fits_viewport() {
        // 600 / 40 = 15 beats both 800 / 40 = 20 and the cap
        let scale =
            compute_scale(&Venue::new(40.0, 40.0), &Viewport::new(800.0, 600.0), 1.0).unwrap();
        assert_eq!(scale, 15.0);
    }

    #[test]
    fn test_compute_scale_cap_for_tiny_venue() {
        let scale =
            compute_scale(&Venue::new(2.0, 2.0), &Viewport::new(800.0, 600.0), 1.0).unwrap();
        assert_eq!(scale, DEFAULT_SCALE_CAP);

        let capped =
            compute_scale_with_cap(&Venue::new(2.0, 2.0), &Viewport::new(800.0, 600.0), 1.0, 50.0)
                .unwrap();
        assert_eq!(capped, 50.0);
    }

    #[test]
    fn test_compute_scale_applies_zoom() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(compute_scale(&venue(), &viewport, 2.0).unwrap(), 60.0);
        assert_eq!(compute_scale(&venue(), &viewport, 0.5).unwrap(), 15.0);
    }

    #[test]
    fn test_compute_scale_bad_zoom_counts_as_one() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(compute_scale(&venue(), &viewport, 0.0).unwrap(), 30.0);
        assert_eq!(compute_scale(&venue(), &viewport, -2.0).unwrap(), 30.0);
        assert_eq!(compute_scale(&venue(), &viewport, f64::NAN).unwrap(), 30.0);
        // Zoom products that overflow or underflow fall back to the fitted scale
        assert_eq!(compute_scale(&venue(), &viewport, 1e308).unwrap(), 30.0);
        let huge = Venue::new(1e300, 1e300);
        let tiny = Viewport::new(1e-10, 1e-10);
        let scale = compute_scale(&huge, &tiny, 1e-20).unwrap();
        assert!(scale.is_finite() && scale > 0.0);
    }

    #[test]
    fn test_compute_scale_rejects_unrepresentable_ratio() {
        let huge = Venue::new(1e300, 1e300);
        let tiny = Viewport::new(1e-300, 1e-300);
        assert!(matches!(
            compute_scale(&huge, &tiny, 1.0),
            Err(SeatingError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_compute_scale_rejects_bad_venue() {
        let viewport = Viewport::new(800.0, 600.0);
        for bad in [Venue::new(0.0, 10.0), Venue::new(10.0, -5.0), Venue::new(f64::NAN, 1.0)] {
            assert!(matches!(
                compute_scale(&bad, &viewport, 1.0),
                Err(crate::core::SeatingError::InvalidVenueDimension { .. })
            ));
        }
    }

    #[test]
    fn test_compute_scale_rejects_bad_viewport() {
        assert!(matches!(
            compute_scale(&venue(), &Viewport::new(0.0, 600.0), 1.0),
            Err(crate::core::SeatingError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_footprint_by_shape() {
        assert_eq!(
            footprint(TableShape::Round, 8),
            Footprint {
                width: 2.0,
                height: 2.0
            }
        );
        assert_eq!(footprint(TableShape::Square, 8), footprint(TableShape::Round, 8));

        let rect = footprint(TableShape::Rectangular, 8);
        assert!((rect.width - 2.6).abs() < 1e-9);
        assert!((rect.height - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_rectangular_grows_less_vertically() {
        let small = footprint(TableShape::Rectangular, 4);
        let large = footprint(TableShape::Rectangular, 16);
        assert!(large.width - small.width > large.height - small.height);
    }

    #[test]
    fn test_footprint_clamps_seat_count() {
        assert_eq!(footprint(TableShape::Round, 0), footprint(TableShape::Round, 2));
        assert_eq!(footprint(TableShape::Round, 50), footprint(TableShape::Round, 20));
    }

    #[test]
    fn test_clamp_position_inside_is_unchanged() {
        let fp = footprint(TableShape::Round, 8);
        let pos = clamp_position(Position::new(5.0, 5.0), fp, &venue());
        assert_eq!(pos, Position::new(5.0, 5.0));
    }

    #[test]
    fn test_clamp_position_per_axis() {
        let fp = footprint(TableShape::Round, 8);
        let pos = clamp_position(Position::new(19.5, -3.0), fp, &venue());
        assert_eq!(pos, Position::new(18.0, 0.0));
        assert!(fits_within(pos, fp, &venue()));
    }

    #[test]
    fn test_clamp_position_oversized_pins_to_origin() {
        let fp = footprint(TableShape::Rectangular, 20);
        let tiny = Venue::new(2.0, 10.0);
        let pos = clamp_position(Position::new(1.0, 4.0), fp, &tiny);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 4.0);
        assert!(fits_within(pos, fp, &tiny));
    }

    #[test]
    fn test_clamp_position_non_finite() {
        let fp = footprint(TableShape::Square, 4);
        let pos = clamp_position(Position::new(f64::NAN, f64::INFINITY), fp, &venue());
        assert_eq!(pos, Position::new(0.0, 0.0));
    }
}
