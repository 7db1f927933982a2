//! Venue Model

use serde::{Deserialize, Serialize};

/// Rectangular venue floor, in meters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    pub width: f64,
    pub height: f64,
}

impl Venue {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Point on the venue floor, in meters from the top-left corner
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding viewport supplied by the hosting UI, in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub max_width: f64,
    pub max_height: f64,
}

impl Viewport {
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
        }
    }
}
