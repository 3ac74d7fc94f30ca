//! Grid fitting: how many whole items fit on a sheet, and in which orientation.

use crate::model::{Dimensions, Orientation, SheetLayout};

/// Count whole item spans along one sheet axis.
///
/// Returns 0 for any non-positive or non-finite input instead of letting a
/// division produce `NaN` or `Infinity`.
fn whole_fits(sheet_span: f64, item_span: f64) -> u32 {
    if !sheet_span.is_finite() || !item_span.is_finite() || sheet_span <= 0.0 || item_span <= 0.0 {
        return 0;
    }
    (sheet_span / item_span).floor() as u32
}

/// Count whole items fitting a sheet in one fixed orientation pairing.
///
/// The caller decides which physical dimension maps to "length" and which to
/// "width"; no rotation is attempted here. A zero or oversized divisor makes
/// the corresponding factor 0, so "does not fit" yields 0 rather than an
/// error.
pub fn fit_one_orientation(
    sheet_length: f64,
    sheet_width: f64,
    item_length: f64,
    item_width: f64,
) -> u32 {
    let along_length = whole_fits(sheet_length, item_length) as u64;
    let along_width = whole_fits(sheet_width, item_width) as u64;
    (along_length * along_width).min(u32::MAX as u64) as u32
}

/// Fit an item onto a parent sheet, testing both orientations.
///
/// Tries the item as declared and rotated 90 degrees, keeps the orientation
/// with the higher yield, and reports the resulting grid. Ties favor the
/// normal orientation. Any missing or invalid dimension produces the all-zero
/// layout.
///
/// The efficiency numerator uses the declared (unrotated) item area; area is
/// rotation-invariant, so the winning orientation does not change it.
pub fn compute_layout(parent: Dimensions, item: Dimensions) -> SheetLayout {
    if !parent.is_valid() || !item.is_valid() {
        return SheetLayout::default();
    }

    let count_normal = fit_one_orientation(parent.height, parent.width, item.height, item.width);
    let count_rotated = fit_one_orientation(parent.height, parent.width, item.width, item.height);

    let orientation = if count_normal >= count_rotated {
        Orientation::Normal
    } else {
        Orientation::Rotated
    };

    // Recompute the grid from the placed item so rows x columns always
    // multiplies back to the per-sheet count.
    let placed = orientation.oriented(item);
    let items_per_row = whole_fits(parent.width, placed.width);
    let items_per_column = whole_fits(parent.height, placed.height);
    let items_per_sheet = items_per_row.saturating_mul(items_per_column);

    let efficiency_percent = if items_per_sheet == 0 {
        0.0
    } else {
        (items_per_sheet as f64 * item.area() * 100.0 / parent.area()).min(100.0)
    };

    SheetLayout {
        usable_width: parent.width,
        usable_height: parent.height,
        items_per_sheet,
        items_per_row,
        items_per_column,
        efficiency_percent,
        orientation,
    }
}
