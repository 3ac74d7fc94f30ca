//! Job specification validation.

mod validate;

pub use validate::{
    quick_validate, validate_job, validate_paper, validate_product, ValidationResult,
};
