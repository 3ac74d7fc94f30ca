//! Configuration constants and settings for the estimation engine.

use serde::{Deserialize, Serialize};

use crate::model::Dimensions;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Conversion factor: millimeters per centimeter.
pub const CONV_CM_MM: f64 = 10.0;

/// Conversion factor: centimeters per inch.
pub const CONV_CM_INCH: f64 = 2.54;

/// Default press sheet width in centimeters (B3+ format press).
pub const DEFAULT_MAX_PIECE_WIDTH: f64 = 52.0;

/// Default press sheet height in centimeters (B3+ format press).
pub const DEFAULT_MAX_PIECE_HEIGHT: f64 = 72.0;

/// Unit of measurement for job dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "inch", alias = "in")]
    Inches,
}

impl Unit {
    /// Get the conversion factor to convert from this unit to centimeters.
    pub fn to_cm_factor(&self) -> f64 {
        match self {
            Unit::Centimeters => 1.0,
            Unit::Millimeters => 1.0 / CONV_CM_MM,
            Unit::Inches => CONV_CM_INCH,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Centimeters => write!(f, "cm"),
            Unit::Millimeters => write!(f, "mm"),
            Unit::Inches => write!(f, "inch"),
        }
    }
}

/// Press configuration: the largest sheet the machine can run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressConfig {
    /// Maximum press sheet width.
    pub max_piece_width: f64,
    /// Maximum press sheet height.
    pub max_piece_height: f64,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            max_piece_width: DEFAULT_MAX_PIECE_WIDTH,
            max_piece_height: DEFAULT_MAX_PIECE_HEIGHT,
        }
    }
}

impl PressConfig {
    /// Create a new press configuration.
    pub fn new(max_piece_width: f64, max_piece_height: f64) -> Self {
        Self {
            max_piece_width,
            max_piece_height,
        }
    }

    /// Maximum press sheet size as a dimension pair.
    pub fn max_piece(&self) -> Dimensions {
        Dimensions::new(self.max_piece_width, self.max_piece_height)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}
