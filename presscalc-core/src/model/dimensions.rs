//! Physical width/height extents for sheets, press pieces and items.

use serde::{Deserialize, Serialize};

/// A width x height extent in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along the sheet's width axis.
    pub width: f64,
    /// Extent along the sheet's height axis.
    pub height: f64,
}

impl Dimensions {
    /// The degenerate zero extent.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new extent.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Build an extent from optional fields; a missing side becomes zero
    /// and makes the extent invalid.
    pub fn from_options(width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            width: width.unwrap_or(0.0),
            height: height.unwrap_or(0.0),
        }
    }

    /// Whether both sides are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Surface area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The same extent rotated 90 degrees.
    pub fn swapped(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Scale both sides by a unit conversion factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
