//! Derived cost and sheet-count arithmetic.

mod paper;
mod sheets;

pub use paper::paper_cost;
pub use sheets::{sheets_needed, sheets_used, total_items, waste, waste_rate};
