//! Cutting plan types: how a parent sheet is subdivided into press pieces.

use serde::{Deserialize, Serialize};

use super::Dimensions;

/// One sub-rectangle of a parent sheet after cutting.
///
/// Origin is the parent's top-left corner, axes aligned with the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CutPiece {
    /// Left edge X position on the parent.
    pub x: f64,
    /// Top edge Y position on the parent.
    pub y: f64,
    /// Piece width.
    pub width: f64,
    /// Piece height.
    pub height: f64,
}

impl CutPiece {
    /// Create a new piece.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the right edge X coordinate.
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate.
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Piece surface area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Piece size as a dimension pair.
    pub fn size(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Full subdivision of one parent sheet into uniform press-sized pieces.
///
/// A plan with zero pieces means the press sheet does not fit the parent in
/// either orientation; downstream code treats that as "no yield", not as an
/// error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CuttingPlan {
    /// Every cut piece, row-major from the parent's top-left corner.
    pub pieces: Vec<CutPiece>,
    /// Interior vertical cut line X positions.
    pub vertical_cut_positions: Vec<f64>,
    /// Interior horizontal cut line Y positions.
    pub horizontal_cut_positions: Vec<f64>,
    /// Pieces across the sheet width.
    pub pieces_per_row: u32,
    /// Pieces down the sheet height.
    pub pieces_per_column: u32,
    /// Width of each piece.
    pub piece_width: f64,
    /// Height of each piece.
    pub piece_height: f64,
    /// Whether the parent was rotated 90 degrees before cutting.
    pub rotated: bool,
    /// Parent dimensions the plan was computed against (post-rotation).
    pub sheet: Dimensions,
}

impl CuttingPlan {
    /// An empty plan for a parent the press sheet cannot be cut from.
    pub fn empty(sheet: Dimensions) -> Self {
        Self {
            sheet,
            ..Default::default()
        }
    }

    /// Total number of pieces cut from the parent.
    pub fn total_pieces(&self) -> u32 {
        self.pieces_per_row.saturating_mul(self.pieces_per_column)
    }

    /// Whether the plan yields no pieces.
    pub fn is_empty(&self) -> bool {
        self.total_pieces() == 0
    }

    /// Size of each piece as a dimension pair.
    pub fn piece_size(&self) -> Dimensions {
        Dimensions::new(self.piece_width, self.piece_height)
    }

    /// Total number of cut lines (vertical plus horizontal).
    pub fn cut_count(&self) -> usize {
        self.vertical_cut_positions.len() + self.horizontal_cut_positions.len()
    }
}
