//! Job estimation pipeline: layout, cutting, sheet counts and paper cost
//! for every (product, paper) pair of a job.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Unit;
use crate::costing::{paper_cost, sheets_needed, sheets_used, total_items, waste, waste_rate};
use crate::error::{EstimateError, Result};
use crate::layout::{compute_layout, plan_cutting};
use crate::model::{CuttingPlan, JobSpec, PaperKey, PaperSpec, ProductSpec, SheetLayout};
use crate::validation::validate_job;

/// Complete estimate for one paper of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperEstimate {
    /// Composite key of the (product, paper) pair.
    pub key: PaperKey,
    /// Item layout on the printable sheet (a press piece when cutting is
    /// planned, the parent sheet otherwise).
    pub layout: SheetLayout,
    /// How the parent sheet is cut into press pieces, when a press size is
    /// configured.
    pub cutting: Option<CuttingPlan>,
    /// Items yielded by one parent sheet.
    pub items_per_parent: u32,
    /// Parent sheets needed for the required quantity.
    pub sheets_needed: u32,
    /// Parent sheets actually used, after the manual override.
    pub sheets_used: u32,
    /// Items produced by the used sheets.
    pub total_items: u32,
    /// Items produced beyond the required quantity.
    pub waste: u32,
    /// Waste as a fraction of everything produced.
    pub waste_rate: f64,
    /// Paper cost for the used sheets.
    pub paper_cost: f64,
}

/// Estimate totals for a whole job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobEstimate {
    /// One estimate per (product, paper) pair, in job order.
    pub papers: Vec<PaperEstimate>,
    /// Sum of used sheets across all papers.
    pub total_sheets: u32,
    /// Sum of paper costs across all papers.
    pub total_cost: f64,
}

impl JobEstimate {
    /// Look up the estimate for one (product, paper) pair.
    pub fn paper(&self, key: PaperKey) -> Option<&PaperEstimate> {
        self.papers.iter().find(|p| p.key == key)
    }
}

/// Estimate one paper of one product.
///
/// With a press configured, the parent sheet is first cut into press pieces
/// and the item layout is computed per piece; otherwise the item is laid out
/// directly on the parent. All dimensions are normalized to centimeters
/// before computation.
pub fn estimate_paper(product: &ProductSpec, paper: &PaperSpec, unit: Unit) -> PaperEstimate {
    let factor = unit.to_cm_factor();
    let parent = paper.sheet_size().scaled(factor);
    let item = product.item_size().scaled(factor);

    let (layout, cutting, items_per_parent) = match &paper.press {
        Some(press) => {
            let plan = plan_cutting(parent, press.max_piece().scaled(factor));
            let layout = compute_layout(plan.piece_size(), item);
            let items = layout.items_per_sheet.saturating_mul(plan.total_pieces());
            (layout, Some(plan), items)
        }
        None => {
            let layout = compute_layout(parent, item);
            (layout, None, layout.items_per_sheet)
        }
    };

    let needed = sheets_needed(product.quantity, items_per_parent);
    let used = sheets_used(needed, paper.entered_sheets);
    let produced = total_items(used, items_per_parent);

    PaperEstimate {
        key: PaperKey::new(product.id, paper.id),
        layout,
        cutting,
        items_per_parent,
        sheets_needed: needed,
        sheets_used: used,
        total_items: produced,
        waste: waste(produced, product.quantity),
        waste_rate: waste_rate(produced, product.quantity),
        paper_cost: paper_cost(used, &paper.pricing),
    }
}

/// Estimate a whole job.
///
/// Validates the specification first: warnings are logged and estimation
/// continues, hard errors abort with [`EstimateError::Validation`].
pub fn estimate_job(job: &JobSpec) -> Result<JobEstimate> {
    let validation = validate_job(job)?;

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    if !validation.passed {
        return Err(EstimateError::Validation {
            errors: validation.errors,
        });
    }

    let mut estimate = JobEstimate::default();
    for product in &job.products {
        for paper in &product.papers {
            let paper_estimate = estimate_paper(product, paper, job.unit);
            estimate.total_sheets += paper_estimate.sheets_used;
            estimate.total_cost += paper_estimate.paper_cost;
            estimate.papers.push(paper_estimate);
        }
    }

    Ok(estimate)
}
