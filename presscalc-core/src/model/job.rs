//! Job specification: the JSON input model for an estimate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Dimensions;
use crate::config::{PressConfig, Unit};
use crate::error::{EstimateError, Result};

/// A field that is either computed automatically or manually overridden.
///
/// Replaces nullable numeric fields where `null` and `0` would otherwise
/// be indistinguishable: `Auto` means "use the computed value", `Manual`
/// carries an explicit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Override<T> {
    Auto,
    Manual(T),
}

impl<T> Default for Override<T> {
    fn default() -> Self {
        Override::Auto
    }
}

impl<T> Override<T> {
    /// Whether a manual value is present.
    pub fn is_manual(&self) -> bool {
        matches!(self, Override::Manual(_))
    }

    /// The manual value, if present.
    pub fn manual(self) -> Option<T> {
        match self {
            Override::Auto => None,
            Override::Manual(value) => Some(value),
        }
    }
}

/// Stable composite key identifying one paper of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaperKey {
    /// Owning product ID.
    pub product_id: u32,
    /// Paper ID within the product.
    pub paper_id: u32,
}

impl PaperKey {
    /// Create a new key.
    pub fn new(product_id: u32, paper_id: u32) -> Self {
        Self {
            product_id,
            paper_id,
        }
    }
}

impl std::fmt::Display for PaperKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.product_id, self.paper_id)
    }
}

/// Supplier pricing for one paper, packet tier first.
///
/// Absent prices stay `None`; an explicit zero is a real price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaperPricing {
    /// Sheets per packet; zero or absent disables packet pricing.
    #[serde(default)]
    pub sheets_per_packet: Option<u32>,
    /// Price of one full packet.
    #[serde(default)]
    pub price_per_packet: Option<f64>,
    /// Price of one loose sheet.
    #[serde(default)]
    pub price_per_sheet: Option<f64>,
}

impl PaperPricing {
    /// Packet tier, if usable: a positive packet size with a price.
    pub fn packet(&self) -> Option<(u32, f64)> {
        match (self.sheets_per_packet, self.price_per_packet) {
            (Some(size), Some(price)) if size > 0 => Some((size, price)),
            _ => None,
        }
    }

    /// Whether no pricing information is present at all.
    pub fn is_empty(&self) -> bool {
        self.packet().is_none() && self.price_per_sheet.is_none()
    }
}

/// One paper stock a product can be printed on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaperSpec {
    /// Paper ID, unique within the product.
    pub id: u32,
    /// Paper name as listed by the supplier.
    #[serde(default)]
    pub name: String,
    /// Paper weight in grams per square meter.
    #[serde(default)]
    pub gsm: Option<u32>,
    /// Parent sheet width.
    #[serde(default)]
    pub sheet_width: Option<f64>,
    /// Parent sheet height.
    #[serde(default)]
    pub sheet_height: Option<f64>,
    /// Press capability; when present the parent is cut to press pieces
    /// before imposition.
    #[serde(default)]
    pub press: Option<PressConfig>,
    /// Supplier pricing.
    #[serde(default)]
    pub pricing: PaperPricing,
    /// Manual sheet-count floor entered by the operator.
    #[serde(default)]
    pub entered_sheets: Override<u32>,
}

impl PaperSpec {
    /// Parent sheet size as a dimension pair (invalid when a side is unset).
    pub fn sheet_size(&self) -> Dimensions {
        Dimensions::from_options(self.sheet_width, self.sheet_height)
    }
}

/// One product line of the quotation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductSpec {
    /// Product ID, unique within the job.
    pub id: u32,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Required quantity of finished items.
    #[serde(default)]
    pub quantity: u32,
    /// Trimmed item width.
    #[serde(default)]
    pub item_width: Option<f64>,
    /// Trimmed item height.
    #[serde(default)]
    pub item_height: Option<f64>,
    /// Candidate papers for this product.
    #[serde(default)]
    pub papers: Vec<PaperSpec>,
}

impl ProductSpec {
    /// Item size as a dimension pair (invalid when a side is unset).
    pub fn item_size(&self) -> Dimensions {
        Dimensions::from_options(self.item_width, self.item_height)
    }
}

/// A complete quotation job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobSpec {
    /// Job name or reference.
    #[serde(default)]
    pub name: String,
    /// Unit all job dimensions are given in.
    #[serde(default)]
    pub unit: Unit,
    /// Product lines.
    #[serde(default)]
    pub products: Vec<ProductSpec>,
}

impl JobSpec {
    /// Find a product by ID.
    pub fn find_product(&self, product_id: u32) -> Option<&ProductSpec> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

/// Parse a job specification from JSON text.
pub fn parse_job(content: &str) -> Result<JobSpec> {
    let job: JobSpec = serde_json::from_str(content)?;
    Ok(job)
}

/// Load a job specification from a JSON file.
pub fn load_job_file(path: &Path) -> Result<JobSpec> {
    if !path.exists() {
        return Err(EstimateError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(EstimateError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_job(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ==================== Override tests ====================

    #[test]
    fn test_override_default_is_auto() {
        let entry: Override<u32> = Override::default();
        assert_eq!(entry, Override::Auto);
        assert!(!entry.is_manual());
        assert_eq!(entry.manual(), None);
    }

    #[test]
    fn test_override_manual() {
        let entry = Override::Manual(120u32);
        assert!(entry.is_manual());
        assert_eq!(entry.manual(), Some(120));
    }

    #[test]
    fn test_override_serde_round_trip() {
        let auto: Override<u32> = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(auto, Override::Auto);

        let manual: Override<u32> = serde_json::from_str("{\"manual\": 5}").unwrap();
        assert_eq!(manual, Override::Manual(5));

        assert_eq!(serde_json::to_string(&auto).unwrap(), "\"auto\"");
        assert_eq!(serde_json::to_string(&manual).unwrap(), "{\"manual\":5}");
    }

    #[test]
    fn test_override_distinguishes_zero_from_auto() {
        let zero: Override<u32> = serde_json::from_str("{\"manual\": 0}").unwrap();
        assert_eq!(zero, Override::Manual(0));
        assert!(zero.is_manual());
    }

    // ==================== PaperPricing tests ====================

    #[test]
    fn test_pricing_packet_requires_size_and_price() {
        let both = PaperPricing {
            sheets_per_packet: Some(20),
            price_per_packet: Some(200.0),
            price_per_sheet: None,
        };
        assert_eq!(both.packet(), Some((20, 200.0)));

        let zero_size = PaperPricing {
            sheets_per_packet: Some(0),
            price_per_packet: Some(200.0),
            price_per_sheet: None,
        };
        assert_eq!(zero_size.packet(), None);
        assert!(zero_size.is_empty());

        let no_price = PaperPricing {
            sheets_per_packet: Some(20),
            ..Default::default()
        };
        assert_eq!(no_price.packet(), None);
    }

    // ==================== parse_job tests ====================

    #[test]
    fn test_parse_job_minimal() {
        let job = parse_job(r#"{"name": "empty", "products": []}"#).unwrap();
        assert_eq!(job.name, "empty");
        assert_eq!(job.unit, Unit::Centimeters);
        assert!(job.products.is_empty());
    }

    #[test]
    fn test_parse_job_full() {
        let content = r#"{
            "name": "business cards",
            "unit": "cm",
            "products": [{
                "id": 1,
                "name": "card",
                "quantity": 5000,
                "item_width": 9.0,
                "item_height": 5.5,
                "papers": [{
                    "id": 2,
                    "name": "coated",
                    "gsm": 300,
                    "sheet_width": 100.0,
                    "sheet_height": 70.0,
                    "press": {"max_piece_width": 52.0, "max_piece_height": 72.0},
                    "pricing": {"sheets_per_packet": 20, "price_per_packet": 200.0, "price_per_sheet": 15.0},
                    "entered_sheets": {"manual": 40}
                }]
            }]
        }"#;

        let job = parse_job(content).unwrap();
        let product = job.find_product(1).unwrap();
        assert_eq!(product.quantity, 5000);
        assert_eq!(product.item_size().width, 9.0);

        let paper = &product.papers[0];
        assert_eq!(paper.gsm, Some(300));
        assert_eq!(paper.sheet_size().height, 70.0);
        assert_eq!(paper.press.unwrap().max_piece_width, 52.0);
        assert_eq!(paper.entered_sheets, Override::Manual(40));
        assert_eq!(paper.pricing.packet(), Some((20, 200.0)));
    }

    #[test]
    fn test_parse_job_defaults() {
        let job = parse_job(
            r#"{"products": [{"id": 1, "papers": [{"id": 1}]}]}"#,
        )
        .unwrap();
        let paper = &job.products[0].papers[0];
        assert!(!paper.sheet_size().is_valid());
        assert_eq!(paper.entered_sheets, Override::Auto);
        assert!(paper.pricing.is_empty());
        assert!(paper.press.is_none());
    }

    #[test]
    fn test_parse_job_invalid_json() {
        let result = parse_job("not json");
        assert!(matches!(result, Err(EstimateError::Json(_))));
    }

    #[test]
    fn test_paper_key_ordering() {
        let mut keys = vec![
            PaperKey::new(2, 1),
            PaperKey::new(1, 2),
            PaperKey::new(1, 1),
        ];
        keys.sort();
        assert_eq!(keys[0], PaperKey::new(1, 1));
        assert_eq!(keys[1], PaperKey::new(1, 2));
        assert_eq!(keys[2], PaperKey::new(2, 1));
        assert_eq!(keys[2].to_string(), "2:1");
    }
}
