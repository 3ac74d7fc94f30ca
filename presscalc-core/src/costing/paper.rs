//! Tiered paper cost: packets first, loose sheets for the remainder.

use crate::model::PaperPricing;

/// Paper cost for a sheet count under the supplier's pricing tiers.
///
/// With only packet pricing, partial packets are bought whole; with only
/// per-sheet pricing, every sheet is loose; with both, full packets are
/// bought at the packet price and the remainder at the sheet price. No
/// pricing at all costs 0.
pub fn paper_cost(sheets: u32, pricing: &PaperPricing) -> f64 {
    match (pricing.packet(), pricing.price_per_sheet) {
        (Some((per_packet, packet_price)), Some(sheet_price)) => {
            let full_packets = sheets / per_packet;
            let remainder = sheets % per_packet;
            full_packets as f64 * packet_price + remainder as f64 * sheet_price
        }
        (Some((per_packet, packet_price)), None) => {
            let packets = (sheets + per_packet - 1) / per_packet;
            packets as f64 * packet_price
        }
        (None, Some(sheet_price)) => sheets as f64 * sheet_price,
        (None, None) => 0.0,
    }
}
