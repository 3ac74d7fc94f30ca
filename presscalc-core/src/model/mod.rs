//! Data model types for imposition and job estimation.

mod cutting;
mod dimensions;
mod job;
mod layout;

pub use cutting::{CutPiece, CuttingPlan};
pub use dimensions::Dimensions;
pub use job::{
    load_job_file, parse_job, JobSpec, Override, PaperKey, PaperPricing, PaperSpec, ProductSpec,
};
pub use layout::{Orientation, SheetLayout};
