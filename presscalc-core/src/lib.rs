//! presscalc-core - Core library for sheet imposition and print job estimation.
//!
//! This library computes how printed items are imposed on parent paper
//! sheets (including cutting the parent into press-sized pieces), derives
//! sheet counts and tiered paper costs, and renders plain-text estimate
//! reports for quotation jobs.
//!
//! # Example
//!
//! ```no_run
//! use presscalc_core::{estimate_job, generate_report, load_job_file};
//! use std::path::Path;
//!
//! let job = load_job_file(Path::new("job.json")).unwrap();
//! let estimate = estimate_job(&job).unwrap();
//! println!("{}", generate_report(&job, &estimate));
//! ```

pub mod config;
pub mod costing;
pub mod error;
pub mod estimate;
pub mod layout;
pub mod model;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::{PressConfig, Unit};
pub use error::{EstimateError, Result};
pub use estimate::{estimate_job, estimate_paper, JobEstimate, PaperEstimate};
pub use layout::{compute_layout, fit_one_orientation, plan_cutting};
pub use model::{
    load_job_file, parse_job, CutPiece, CuttingPlan, Dimensions, JobSpec, Orientation, Override,
    PaperKey, PaperPricing, PaperSpec, ProductSpec, SheetLayout,
};
pub use report::generate_report;
pub use validation::{quick_validate, validate_job, ValidationResult};

/// Estimate a job file and render its report.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Load and parse the JSON job file
/// 2. Validate the specification
/// 3. Estimate layout, cutting, sheet counts and paper cost
/// 4. Render the plain-text report
pub fn estimate_job_file(path: &std::path::Path) -> Result<String> {
    let job = load_job_file(path)?;
    let estimate = estimate_job(&job)?;
    Ok(generate_report(&job, &estimate))
}
