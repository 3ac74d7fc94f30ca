//! Sheet layout results produced by the imposition fitter.

use serde::{Deserialize, Serialize};

use super::Dimensions;

/// Item orientation relative to the sheet axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// The item's declared width runs along the sheet's width axis.
    #[default]
    Normal,
    /// The item is rotated 90 degrees before placement.
    Rotated,
}

impl Orientation {
    /// Apply this orientation to an item extent.
    pub fn oriented(self, item: Dimensions) -> Dimensions {
        match self {
            Orientation::Normal => item,
            Orientation::Rotated => item.swapped(),
        }
    }

    /// Whether the item is rotated.
    pub fn is_rotated(self) -> bool {
        self == Orientation::Rotated
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Normal => write!(f, "normal"),
            Orientation::Rotated => write!(f, "rotated"),
        }
    }
}

/// Result of fitting one item size onto one sheet size.
///
/// The all-zero value (the `Default`) represents "nothing fits" or
/// "input dimensions missing"; it is a valid terminal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Sheet width available for placement (zero for a degenerate layout).
    pub usable_width: f64,
    /// Sheet height available for placement (zero for a degenerate layout).
    pub usable_height: f64,
    /// Whole items placed per sheet.
    pub items_per_sheet: u32,
    /// Items across the sheet width.
    pub items_per_row: u32,
    /// Items down the sheet height.
    pub items_per_column: u32,
    /// Share of the sheet area covered by items, in [0, 100].
    pub efficiency_percent: f64,
    /// Winning item orientation.
    pub orientation: Orientation,
}

impl SheetLayout {
    /// Whether this layout places no items.
    pub fn is_empty(&self) -> bool {
        self.items_per_sheet == 0
    }
}
