//! Core types for countertop pricing

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One row as delivered by a tabular parser: header name -> cell text
pub type RawRow = HashMap<String, String>;

/// Deserialize null as default value
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Accept a JSON number or a numeric string; anything else becomes `None`
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => parse_number(&s),
        _ => None,
    }))
}

/// Accept `true`/`false` or a "yes"/"no" style string
fn yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::String(s)) => parse_flag(&s),
        _ => false,
    })
}

/// Parse a spreadsheet number cell.
///
/// Tolerates surrounding whitespace, a leading `$` and thousands separators.
/// Returns `None` for empty, non-numeric or non-finite input.
pub fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a yes/no flag as typed into a web form
pub fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

// ============================================================================
// Catalog records
// ============================================================================

/// One priced material (slab color) from the supplier sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialEntry {
    /// Color name, e.g. "Frost-N"
    pub name: String,
    pub vendor: String,
    pub thickness: String,
    /// Material type, e.g. "Quartz", "Marble"
    pub material_type: String,
    /// Nominal slab size as written in the sheet
    pub size: String,
    /// Total price per square foot
    pub total_per_area: f64,
    /// Base cost per square foot
    pub cost_per_area: f64,
    pub price_group: i64,
    /// Informational price bracket, e.g. "Low Tier"
    pub tier: String,
}

impl MaterialEntry {
    /// Replacement cost used by the match resolver
    pub fn replacement_cost(&self) -> f64 {
        self.cost_per_area * self.total_per_area
    }
}

/// Labor line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborEntry {
    pub key: String,
    pub cost: f64,
}

/// Flat price per square foot for a material category (quote pricing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceListEntry {
    /// Trimmed, lower-cased category, e.g. "granite and quartz"
    pub material: String,
    pub price: f64,
}

// ============================================================================
// Estimate
// ============================================================================

/// Dimension-based estimate request.
///
/// Numbers may arrive as JSON numbers or numeric strings; unparseable values
/// deserialize to `None` and are rejected during validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[serde(default, alias = "material", deserialize_with = "null_to_default")]
    pub material_name: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub length_inches: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub width_inches: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub slab_length_inches: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub slab_width_inches: Option<f64>,

    #[serde(default)]
    pub labor_key: Option<String>,
}

/// Priced breakdown for an estimate; currency and area fields carry 2 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub material: String,
    pub length_inches: f64,
    pub width_inches: f64,
    pub slab_length_inches: Option<f64>,
    pub slab_width_inches: Option<f64>,
    pub slab_count: u64,
    pub base_sq_ft: f64,
    pub final_sq_ft: f64,
    pub base_cost: f64,
    pub marked_up_cost: f64,
    /// Labor key actually used ("Default" when none was supplied)
    pub labor_key: String,
    pub labor_cost: f64,
    pub total_estimate: f64,
}

// ============================================================================
// Attribute matching
// ============================================================================

/// Damage severity reported by the vision provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    None,
    Low,
    Moderate,
    Severe,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Severity::None),
            "Low" => Ok(Severity::Low),
            "Moderate" => Ok(Severity::Moderate),
            "Severe" => Ok(Severity::Severe),
            other => Err(format!(
                "unknown severity '{}' (expected None, Low, Moderate or Severe)",
                other
            )),
        }
    }
}

/// Visual attributes of a photographed countertop, as returned by the vision provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedAttributes {
    #[serde(default, deserialize_with = "null_to_default")]
    pub stone_type: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub color_and_pattern: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub damage_type: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub severity: Severity,
}

/// Catalog entry projected for the alternatives list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PossibleMatch {
    pub color_name: String,
    pub material: String,
    pub thickness: String,
    /// Two-decimal string
    pub replacement_cost: String,
}

/// Care and repair guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub professional_recommendation: String,
    pub cleaning_recommendation: String,
    pub repair_recommendation: String,
}

/// Best-effort match of observed attributes against the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Matched color name, or "No match found"
    pub color_match_suggestion: String,
    /// Two-decimal string, or "N/A"
    pub estimated_cost: String,
    pub material_composition: String,
    pub is_natural_stone: bool,
    #[serde(flatten)]
    pub recommendations: Recommendations,
    /// Every catalog entry, in catalog order
    pub possible_matches: Vec<PossibleMatch>,
}

// ============================================================================
// Project quote
// ============================================================================

/// Sink / cooktop cutout grade
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CutoutGrade {
    #[default]
    Standard,
    Premium,
}

impl From<String> for CutoutGrade {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "premium" => CutoutGrade::Premium,
            _ => CutoutGrade::Standard,
        }
    }
}

impl From<CutoutGrade> for String {
    fn from(grade: CutoutGrade) -> Self {
        match grade {
            CutoutGrade::Standard => "standard".to_string(),
            CutoutGrade::Premium => "premium".to_string(),
        }
    }
}

/// Edge profile, which scales the material cost
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EdgeDetail {
    #[default]
    Standard,
    Premium,
    Custom,
}

impl From<String> for EdgeDetail {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "premium" => EdgeDetail::Premium,
            "custom" => EdgeDetail::Custom,
            _ => EdgeDetail::Standard,
        }
    }
}

impl From<EdgeDetail> for String {
    fn from(edge: EdgeDetail) -> Self {
        match edge {
            EdgeDetail::Standard => "standard".to_string(),
            EdgeDetail::Premium => "premium".to_string(),
            EdgeDetail::Custom => "custom".to_string(),
        }
    }
}

fn default_material_category() -> String {
    "granite and quartz".to_string()
}

/// Whole-project quote request (area already known)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default, alias = "totalSqFt", deserialize_with = "lenient_f64")]
    pub total_sq_ft: Option<f64>,

    #[serde(default = "default_material_category", alias = "materialType")]
    pub material_category: String,

    #[serde(default)]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub vendor: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "yes_no")]
    pub demo: bool,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub sink_qty: Option<f64>,

    #[serde(default)]
    pub sink_type: CutoutGrade,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub cooktop_qty: Option<f64>,

    #[serde(default)]
    pub cooktop_type: CutoutGrade,

    #[serde(default, deserialize_with = "yes_no")]
    pub backsplash: bool,

    #[serde(default)]
    pub edge_detail: EdgeDetail,
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            total_sq_ft: None,
            material_category: default_material_category(),
            customer_name: None,
            vendor: None,
            color: None,
            demo: false,
            sink_qty: None,
            sink_type: CutoutGrade::Standard,
            cooktop_qty: None,
            cooktop_type: CutoutGrade::Standard,
            backsplash: false,
            edge_detail: EdgeDetail::Standard,
        }
    }
}

/// Preliminary project quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub customer_name: String,
    pub vendor: String,
    pub color: String,
    pub material_category: String,
    pub total_sq_ft: f64,
    pub price_per_sq_ft: f64,
    pub material_cost: f64,
    pub sink_cost: f64,
    pub cooktop_cost: f64,
    pub backsplash_cost: f64,
    pub preliminary_total: f64,
    pub slab_count: u64,
}
