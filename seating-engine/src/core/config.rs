use shared::models::{Venue, Viewport};

use crate::geometry::DEFAULT_SCALE_CAP;

/// Engine configuration - every tunable of a seating session
///
/// # Environment variables
///
/// Every field can be overridden through the environment (a `.env` file is
/// honored by the binary):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SEATING_VENUE_WIDTH | 20 | Default venue width (m) |
/// | SEATING_VENUE_HEIGHT | 15 | Default venue height (m) |
/// | SEATING_VIEWPORT_WIDTH | 800 | Default viewport width (px) |
/// | SEATING_VIEWPORT_HEIGHT | 600 | Default viewport height (px) |
/// | SEATING_SCALE_CAP | 30 | Upper bound on pixels per meter |
/// | SEATING_ZOOM_MIN | 0.5 | Smallest zoom factor |
/// | SEATING_ZOOM_MAX | 2.0 | Largest zoom factor |
/// | SEATING_ZOOM_STEP | 0.1 | Zoom in/out increment |
/// | SEATING_DEFAULT_SEATS | 8 | Seat count prefilled in the add-table form |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | ENVIRONMENT | development | Runtime environment |
///
/// Values that fail to parse, or that are not positive, fall back to the
/// default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub venue_width: f64,
    pub venue_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub scale_cap: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_step: f64,
    pub default_seat_count: u32,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

fn positive_env(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset variables use the default values.
    pub fn from_env() -> Self {
        let defaults = Self::defaults();
        let zoom_min = positive_env("SEATING_ZOOM_MIN", defaults.zoom_min);
        let zoom_max = positive_env("SEATING_ZOOM_MAX", defaults.zoom_max);
        let (zoom_min, zoom_max) = if zoom_min <= zoom_max {
            (zoom_min, zoom_max)
        } else {
            (defaults.zoom_min, defaults.zoom_max)
        };

        Self {
            venue_width: positive_env("SEATING_VENUE_WIDTH", defaults.venue_width),
            venue_height: positive_env("SEATING_VENUE_HEIGHT", defaults.venue_height),
            viewport_width: positive_env("SEATING_VIEWPORT_WIDTH", defaults.viewport_width),
            viewport_height: positive_env("SEATING_VIEWPORT_HEIGHT", defaults.viewport_height),
            scale_cap: positive_env("SEATING_SCALE_CAP", defaults.scale_cap),
            zoom_min,
            zoom_max,
            zoom_step: positive_env("SEATING_ZOOM_STEP", defaults.zoom_step),
            default_seat_count: std::env::var("SEATING_DEFAULT_SEATS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.default_seat_count),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Built-in defaults, ignoring the environment
    ///
    /// Used by tests and embedders that configure sessions programmatically.
    pub fn defaults() -> Self {
        Self {
            venue_width: 20.0,
            venue_height: 15.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            scale_cap: DEFAULT_SCALE_CAP,
            zoom_min: 0.5,
            zoom_max: 2.0,
            zoom_step: 0.1,
            default_seat_count: 8,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }

    pub fn default_venue(&self) -> Venue {
        Venue::new(self.venue_width, self.venue_height)
    }

    pub fn default_viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Clamp a requested zoom into the configured range
    ///
    /// Infinities pin to the matching end of the range; NaN counts as 1.0.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            return 1.0_f64.clamp(self.zoom_min, self.zoom_max);
        }
        zoom.clamp(self.zoom_min, self.zoom_max)
    }

    /// Whether this is the production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
