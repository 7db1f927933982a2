//! Input validation helpers
//!
//! Two policies live here. Creation inputs (seat count, table number) are
//! sanitized into range. Dimension inputs (venue, viewport) are rejected when
//! they are not positive finite numbers.

use shared::models::{MAX_SEATS, MIN_SEATS, Venue, Viewport};

use crate::core::{SeatingError, SeatingResult};

// ── Sanitizers (forgiving creation input) ───────────────────────────

/// Clamp a raw seat count into `[MIN_SEATS, MAX_SEATS]`.
pub fn sanitize_seat_count(raw: i64) -> u32 {
    raw.clamp(MIN_SEATS as i64, MAX_SEATS as i64) as u32
}

/// Table numbers are positive; anything below 1 becomes 1.
pub fn sanitize_table_number(raw: i64) -> u32 {
    raw.clamp(1, u32::MAX as i64) as u32
}

// ── Validators (hard invariants) ────────────────────────────────────

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Venue sides must be positive finite meters.
pub fn validate_venue(venue: &Venue) -> SeatingResult<()> {
    if !is_positive(venue.width) || !is_positive(venue.height) {
        return Err(SeatingError::InvalidVenueDimension {
            width: venue.width,
            height: venue.height,
        });
    }
    Ok(())
}

/// Viewport sides must be positive finite pixels.
pub fn validate_viewport(viewport: &Viewport) -> SeatingResult<()> {
    if !is_positive(viewport.max_width) || !is_positive(viewport.max_height) {
        return Err(SeatingError::InvalidViewport {
            max_width: viewport.max_width,
            max_height: viewport.max_height,
        });
    }
    Ok(())
}
