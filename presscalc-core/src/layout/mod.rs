//! Imposition layout engine: grid fitting and sheet cutting.

mod cutting;
mod fit;

pub use cutting::plan_cutting;
pub use fit::{compute_layout, fit_one_orientation};
