//! Validation logic for job specifications.

use crate::config::EPS;
use crate::error::{EstimateError, Result};
use crate::layout::compute_layout;
use crate::model::{JobSpec, PaperSpec, ProductSpec};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a whole job.
pub fn validate_job(job: &JobSpec) -> Result<ValidationResult> {
    if job.products.is_empty() {
        return Err(EstimateError::EmptyJob);
    }

    let mut result = ValidationResult::ok();
    for product in &job.products {
        result.merge(validate_product(product));
    }

    Ok(result)
}

/// Validate a single product and its papers.
pub fn validate_product(product: &ProductSpec) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if product.quantity == 0 {
        result.add_warning(format!("Product {}: Quantity is zero", product.id));
    }

    match (product.item_width, product.item_height) {
        (None, _) | (_, None) => {
            result.add_warning(format!(
                "Product {}: Output dimensions required for a yield estimate",
                product.id
            ));
        }
        (Some(w), Some(h)) if !product.item_size().is_valid() => {
            result.add_error(format!(
                "Product {}: Invalid item dimensions ({}x{})",
                product.id, w, h
            ));
        }
        _ => {}
    }

    if product.papers.is_empty() {
        result.add_warning(format!("Product {}: No papers to estimate", product.id));
    }

    for paper in &product.papers {
        result.merge(validate_paper(product, paper));
    }

    result
}

/// Validate a single paper of a product.
pub fn validate_paper(product: &ProductSpec, paper: &PaperSpec) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let sheet = paper.sheet_size();

    match (paper.sheet_width, paper.sheet_height) {
        (None, _) | (_, None) => {
            result.add_error(format!(
                "Product {}, Paper {}: Missing sheet dimensions",
                product.id, paper.id
            ));
        }
        (Some(w), Some(h)) if !sheet.is_valid() => {
            result.add_error(format!(
                "Product {}, Paper {}: Invalid sheet dimensions ({}x{})",
                product.id, paper.id, w, h
            ));
        }
        _ => {}
    }

    if let Some(press) = &paper.press {
        let max_piece = press.max_piece();
        if !max_piece.is_valid() {
            result.add_error(format!(
                "Product {}, Paper {}: Invalid press sheet size ({}x{})",
                product.id, paper.id, press.max_piece_width, press.max_piece_height
            ));
        } else if sheet.is_valid() {
            let fits_as_is =
                max_piece.width <= sheet.width + EPS && max_piece.height <= sheet.height + EPS;
            let fits_rotated =
                max_piece.width <= sheet.height + EPS && max_piece.height <= sheet.width + EPS;
            if !fits_as_is && !fits_rotated {
                result.add_warning(format!(
                    "Product {}, Paper {}: Press sheet {} does not fit parent {}",
                    product.id, paper.id, max_piece, sheet
                ));
            }
        }
    }

    // Only meaningful when all dimensions are present and sane.
    let item = product.item_size();
    if sheet.is_valid() && item.is_valid() && paper.press.is_none() {
        let layout = compute_layout(sheet, item);
        if layout.is_empty() {
            result.add_warning(format!(
                "Product {}, Paper {}: Item {} does not fit sheet {} in either orientation",
                product.id, paper.id, item, sheet
            ));
        }
    }

    if paper.pricing.is_empty() {
        result.add_warning(format!(
            "Product {}, Paper {}: No pricing information, cost will be zero",
            product.id, paper.id
        ));
    } else if paper.pricing.sheets_per_packet == Some(0) {
        result.add_warning(format!(
            "Product {}, Paper {}: Packet size of zero ignored",
            product.id, paper.id
        ));
    }

    result
}

/// Quick validation check for the command-line --validate flag.
pub fn quick_validate(job: &JobSpec) -> Result<()> {
    let result = validate_job(job)?;

    if !result.passed {
        return Err(EstimateError::Validation {
            errors: result.errors,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PressConfig;
    use crate::model::{Override, PaperPricing};

    fn create_basic_product() -> ProductSpec {
        ProductSpec {
            id: 1,
            name: "card".to_string(),
            quantity: 5000,
            item_width: Some(9.0),
            item_height: Some(5.5),
            papers: vec![create_basic_paper()],
        }
    }

    fn create_basic_paper() -> PaperSpec {
        PaperSpec {
            id: 1,
            name: "coated".to_string(),
            gsm: Some(300),
            sheet_width: Some(100.0),
            sheet_height: Some(70.0),
            press: None,
            pricing: PaperPricing {
                sheets_per_packet: Some(20),
                price_per_packet: Some(200.0),
                price_per_sheet: Some(15.0),
            },
            entered_sheets: Override::Auto,
        }
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_add_warning_keeps_passing() {
        let mut result = ValidationResult::ok();
        result.add_warning("minor");
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_add_error_fails() {
        let mut result = ValidationResult::ok();
        result.add_error("broken");
        assert!(!result.passed);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("w1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("e1");
        result2.add_warning("w2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_job tests ====================

    #[test]
    fn test_validate_job_empty() {
        let job = JobSpec::default();
        let result = validate_job(&job);
        assert!(matches!(result, Err(EstimateError::EmptyJob)));
    }

    #[test]
    fn test_validate_job_valid() {
        let job = JobSpec {
            products: vec![create_basic_product()],
            ..Default::default()
        };
        let result = validate_job(&job).expect("should validate");
        assert!(result.passed, "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    // ==================== validate_product tests ====================

    #[test]
    fn test_validate_product_zero_quantity_warns() {
        let mut product = create_basic_product();
        product.quantity = 0;
        let result = validate_product(&product);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("Quantity")));
    }

    #[test]
    fn test_validate_product_missing_item_dimensions_warns() {
        let mut product = create_basic_product();
        product.item_height = None;
        let result = validate_product(&product);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Output dimensions required")));
    }

    #[test]
    fn test_validate_product_negative_item_dimension_errors() {
        let mut product = create_basic_product();
        product.item_width = Some(-9.0);
        let result = validate_product(&product);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Invalid item dimensions")));
    }

    // ==================== validate_paper tests ====================

    #[test]
    fn test_validate_paper_missing_sheet_dimensions_errors() {
        let product = create_basic_product();
        let mut paper = create_basic_paper();
        paper.sheet_width = None;
        let result = validate_paper(&product, &paper);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Missing sheet dimensions")));
    }

    #[test]
    fn test_validate_paper_zero_sheet_dimension_errors() {
        let product = create_basic_product();
        let mut paper = create_basic_paper();
        paper.sheet_height = Some(0.0);
        let result = validate_paper(&product, &paper);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Invalid sheet dimensions")));
    }

    #[test]
    fn test_validate_paper_item_does_not_fit_warns() {
        let mut product = create_basic_product();
        product.item_width = Some(120.0);
        product.item_height = Some(80.0);
        let paper = create_basic_paper();
        let result = validate_paper(&product, &paper);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("does not fit")));
    }

    #[test]
    fn test_validate_paper_press_too_large_warns() {
        let product = create_basic_product();
        let mut paper = create_basic_paper();
        paper.press = Some(PressConfig::new(120.0, 120.0));
        let result = validate_paper(&product, &paper);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Press sheet") && w.contains("does not fit")));
    }

    #[test]
    fn test_validate_paper_no_pricing_warns() {
        let product = create_basic_product();
        let mut paper = create_basic_paper();
        paper.pricing = PaperPricing::default();
        let result = validate_paper(&product, &paper);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("No pricing")));
    }

    // ==================== quick_validate tests ====================

    #[test]
    fn test_quick_validate_success() {
        let job = JobSpec {
            products: vec![create_basic_product()],
            ..Default::default()
        };
        assert!(quick_validate(&job).is_ok());
    }

    #[test]
    fn test_quick_validate_failure() {
        let mut product = create_basic_product();
        product.papers[0].sheet_width = Some(-100.0);
        let job = JobSpec {
            products: vec![product],
            ..Default::default()
        };
        let result = quick_validate(&job);
        assert!(matches!(result, Err(EstimateError::Validation { .. })));
    }
}
