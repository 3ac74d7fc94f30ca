//! Sheet-cutting planner: subdividing a parent sheet into press-sized pieces.

use tracing::debug;

use crate::model::{CutPiece, CuttingPlan, Dimensions};

/// Grid counts for one cutting strategy: pieces across the width and down
/// the height.
fn strategy_counts(sheet: Dimensions, max_piece: Dimensions) -> (u32, u32) {
    let per_row = (sheet.width / max_piece.width).floor();
    let per_column = (sheet.height / max_piece.height).floor();
    (per_row as u32, per_column as u32)
}

/// Plan how a parent sheet is cut into uniform press-sized pieces.
///
/// Two strategies are evaluated: the parent as-is, and the parent rotated 90
/// degrees before cutting. The strategy yielding more pieces wins; ties keep
/// the unrotated parent. The remainder is distributed evenly, so every piece
/// has the same size and the pieces sum exactly to the parent dimensions.
///
/// If the press sheet does not fit the parent in either orientation the plan
/// is empty; this is a valid "no yield" result, not an error.
pub fn plan_cutting(parent: Dimensions, max_piece: Dimensions) -> CuttingPlan {
    if !parent.is_valid() || !max_piece.is_valid() {
        return CuttingPlan::empty(parent);
    }

    let (a_per_row, a_per_column) = strategy_counts(parent, max_piece);
    let swapped = parent.swapped();
    let (b_per_row, b_per_column) = strategy_counts(swapped, max_piece);

    let a_total = a_per_row as u64 * a_per_column as u64;
    let b_total = b_per_row as u64 * b_per_column as u64;

    let (sheet, pieces_per_row, pieces_per_column, rotated) = if a_total >= b_total {
        (parent, a_per_row, a_per_column, false)
    } else {
        (swapped, b_per_row, b_per_column, true)
    };

    if pieces_per_row == 0 || pieces_per_column == 0 {
        debug!(
            "press sheet {} does not fit parent {} in either orientation",
            max_piece, parent
        );
        return CuttingPlan::empty(sheet);
    }

    // Even subdivision: the remainder is spread over all pieces instead of
    // leaving a trim strip.
    let piece_width = sheet.width / pieces_per_row as f64;
    let piece_height = sheet.height / pieces_per_column as f64;

    let mut pieces = Vec::with_capacity(pieces_per_row as usize * pieces_per_column as usize);
    for row in 0..pieces_per_column {
        for col in 0..pieces_per_row {
            pieces.push(CutPiece::new(
                col as f64 * piece_width,
                row as f64 * piece_height,
                piece_width,
                piece_height,
            ));
        }
    }

    let vertical_cut_positions = (1..pieces_per_row)
        .map(|i| i as f64 * piece_width)
        .collect();
    let horizontal_cut_positions = (1..pieces_per_column)
        .map(|i| i as f64 * piece_height)
        .collect();

    debug!(
        "cutting plan: {}x{} pieces of {:.1}x{:.1} (rotated: {})",
        pieces_per_row, pieces_per_column, piece_width, piece_height, rotated
    );

    CuttingPlan {
        pieces,
        vertical_cut_positions,
        horizontal_cut_positions,
        pieces_per_row,
        pieces_per_column,
        piece_width,
        piece_height,
        rotated,
        sheet,
    }
}
