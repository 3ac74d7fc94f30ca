//! Plain-text estimate report generator.

use std::fmt::Write;

use crate::estimate::{JobEstimate, PaperEstimate};
use crate::model::{JobSpec, PaperSpec, ProductSpec};

/// Generate a plain-text report for an estimated job.
pub fn generate_report(job: &JobSpec, estimate: &JobEstimate) -> String {
    let mut output = String::new();

    generate_header(&mut output, job);

    for product in &job.products {
        generate_product_section(&mut output, job, product, estimate);
    }

    generate_totals(&mut output, estimate);

    output
}

/// Generate the report header.
fn generate_header(output: &mut String, job: &JobSpec) {
    writeln!(output, "========================================").unwrap();
    if job.name.is_empty() {
        writeln!(output, " Print Job Estimate").unwrap();
    } else {
        writeln!(output, " Print Job Estimate: {}", job.name).unwrap();
    }
    writeln!(output, "========================================").unwrap();
    writeln!(output, "Dimensions in {}", job.unit).unwrap();
    writeln!(output).unwrap();
}

/// Generate the section for one product and its papers.
fn generate_product_section(
    output: &mut String,
    job: &JobSpec,
    product: &ProductSpec,
    estimate: &JobEstimate,
) {
    writeln!(output, "Product {}: {}", product.id, product.name).unwrap();
    writeln!(output, "  Quantity: {}", product.quantity).unwrap();
    match (product.item_width, product.item_height) {
        (Some(w), Some(h)) => {
            writeln!(output, "  Item size: {} x {} {}", w, h, job.unit).unwrap()
        }
        _ => writeln!(output, "  Item size: (not set)").unwrap(),
    }

    for paper in &product.papers {
        let key = crate::model::PaperKey::new(product.id, paper.id);
        if let Some(paper_estimate) = estimate.paper(key) {
            generate_paper_section(output, paper, paper_estimate);
        }
    }

    writeln!(output).unwrap();
}

/// Generate the block for one estimated paper.
fn generate_paper_section(output: &mut String, paper: &PaperSpec, estimate: &PaperEstimate) {
    write!(output, "  Paper {}: {}", paper.id, paper.name).unwrap();
    if let Some(gsm) = paper.gsm {
        write!(output, " ({} gsm)", gsm).unwrap();
    }
    writeln!(output).unwrap();

    writeln!(output, "    Parent sheet: {}", paper.sheet_size()).unwrap();

    if let Some(plan) = &estimate.cutting {
        if plan.is_empty() {
            writeln!(output, "    Cutting: press sheet does not fit").unwrap();
        } else {
            writeln!(
                output,
                "    Cutting: {} x {} pieces of {:.1} x {:.1}{}",
                plan.pieces_per_row,
                plan.pieces_per_column,
                plan.piece_width,
                plan.piece_height,
                if plan.rotated { " (parent rotated)" } else { "" }
            )
            .unwrap();
            if !plan.vertical_cut_positions.is_empty() {
                writeln!(
                    output,
                    "      Vertical cuts at: {}",
                    format_positions(&plan.vertical_cut_positions)
                )
                .unwrap();
            }
            if !plan.horizontal_cut_positions.is_empty() {
                writeln!(
                    output,
                    "      Horizontal cuts at: {}",
                    format_positions(&plan.horizontal_cut_positions)
                )
                .unwrap();
            }
        }
    }

    let layout = &estimate.layout;
    if layout.is_empty() {
        writeln!(output, "    Layout: item does not fit").unwrap();
    } else {
        writeln!(
            output,
            "    Layout: {} x {} = {} ups, {} orientation, {:.1}% efficiency",
            layout.items_per_row,
            layout.items_per_column,
            layout.items_per_sheet,
            layout.orientation,
            layout.efficiency_percent
        )
        .unwrap();
    }

    writeln!(
        output,
        "    Items per parent sheet: {}",
        estimate.items_per_parent
    )
    .unwrap();

    if estimate.sheets_used > estimate.sheets_needed {
        writeln!(
            output,
            "    Sheets: {} needed, {} used (manual entry)",
            estimate.sheets_needed, estimate.sheets_used
        )
        .unwrap();
    } else {
        writeln!(output, "    Sheets: {}", estimate.sheets_used).unwrap();
    }

    writeln!(
        output,
        "    Produced: {} items, waste {} ({:.1}%)",
        estimate.total_items,
        estimate.waste,
        estimate.waste_rate * 100.0
    )
    .unwrap();

    writeln!(output, "    Paper cost: {:.2}", estimate.paper_cost).unwrap();
}

/// Generate the totals footer.
fn generate_totals(output: &mut String, estimate: &JobEstimate) {
    writeln!(output, "----------------------------------------").unwrap();
    writeln!(
        output,
        "Totals: {} sheets, paper cost {:.2}",
        estimate.total_sheets, estimate.total_cost
    )
    .unwrap();
}

/// Format cut positions as a compact comma-separated list.
fn format_positions(positions: &[f64]) -> String {
    positions
        .iter()
        .map(|p| format!("{:.1}", p))
        .collect::<Vec<_>>()
        .join(", ")
}
