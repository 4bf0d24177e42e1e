//! Row validation for supplier sheets
//!
//! Each raw row is judged on its own. A bad row is skipped with a reason and
//! never aborts the rest of the load.

use countertop_types::{parse_number, LaborEntry, MaterialEntry, PriceListEntry, RawRow};
use serde::Serialize;

const NAME: &[&str] = &["Color Name", "ColorName", "Name"];
const VENDOR: &[&str] = &["Vendor Name", "Vendor"];
const THICKNESS: &[&str] = &["Thickness"];
const MATERIAL_TYPE: &[&str] = &["Material", "Material Type", "MaterialType"];
const SIZE: &[&str] = &["Size", "size"];
const TOTAL_PER_AREA: &[&str] = &["Total/SqFt", "TotalPerSqFt"];
const COST_PRIMARY: &[&str] = &["BaseCostPerSqFt", "Cost/SqFt"];
const COST_FALLBACK: &[&str] = &["Cost"];
const PRICE_GROUP: &[&str] = &["Price Group", "PriceGroup"];
const TIER: &[&str] = &["Tier"];

const LABOR_KEY: &[&str] = &["LaborKey", "Labor Key", "Key"];
const LABOR_COST: &[&str] = &["Cost"];

const PRICE_MATERIAL: &[&str] = &["Material"];
const PRICE_VALUE: &[&str] = &["Price"];

/// Why a row was left out of the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SkipReason {
    MissingField { field: &'static str },
    NotNumeric { field: &'static str, value: String },
    OutOfRange { field: &'static str, value: f64 },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingField { field } => write!(f, "missing {}", field),
            SkipReason::NotNumeric { field, value } => {
                write!(f, "{} is not a number: '{}'", field, value)
            }
            SkipReason::OutOfRange { field, value } => {
                write!(f, "{} out of range: {}", field, value)
            }
        }
    }
}

/// Outcome of validating one row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome<T> {
    Accepted(T),
    Skipped(SkipReason),
}

impl<T> From<Result<T, SkipReason>> for RowOutcome<T> {
    fn from(result: Result<T, SkipReason>) -> Self {
        match result {
            Ok(value) => RowOutcome::Accepted(value),
            Err(reason) => RowOutcome::Skipped(reason),
        }
    }
}

pub fn validate_material_row(row: &RawRow) -> RowOutcome<MaterialEntry> {
    material_from_row(row).into()
}

pub fn validate_labor_row(row: &RawRow) -> RowOutcome<LaborEntry> {
    labor_from_row(row).into()
}

pub fn validate_price_row(row: &RawRow) -> RowOutcome<PriceListEntry> {
    price_from_row(row).into()
}

fn material_from_row(row: &RawRow) -> Result<MaterialEntry, SkipReason> {
    let name = required_text(row, NAME, "name")?;
    let material_type = required_text(row, MATERIAL_TYPE, "materialType")?;

    // Primary cost column wins whenever it has a value
    let cost_cell = field(row, COST_PRIMARY)
        .or_else(|| field(row, COST_FALLBACK))
        .ok_or(SkipReason::MissingField {
            field: "costPerArea",
        })?;
    let cost_per_area = number(cost_cell, "costPerArea")?;
    if cost_per_area < 0.0 {
        return Err(SkipReason::OutOfRange {
            field: "costPerArea",
            value: cost_per_area,
        });
    }

    let total_cell = field(row, TOTAL_PER_AREA).ok_or(SkipReason::MissingField {
        field: "totalPerArea",
    })?;
    let total_per_area = number(total_cell, "totalPerArea")?;
    if total_per_area <= 0.0 {
        return Err(SkipReason::OutOfRange {
            field: "totalPerArea",
            value: total_per_area,
        });
    }

    let price_group = match field(row, PRICE_GROUP) {
        Some(cell) => cell
            .trim()
            .parse::<i64>()
            .map_err(|_| SkipReason::NotNumeric {
                field: "priceGroup",
                value: cell.to_string(),
            })?,
        None => 0,
    };

    Ok(MaterialEntry {
        name,
        vendor: optional_text(row, VENDOR),
        thickness: optional_text(row, THICKNESS),
        material_type,
        size: optional_text(row, SIZE),
        total_per_area,
        cost_per_area,
        price_group,
        tier: optional_text(row, TIER),
    })
}

fn labor_from_row(row: &RawRow) -> Result<LaborEntry, SkipReason> {
    let key = required_text(row, LABOR_KEY, "laborKey")?;
    let cell = field(row, LABOR_COST).ok_or(SkipReason::MissingField { field: "cost" })?;
    let cost = number(cell, "cost")?;
    if cost < 0.0 {
        return Err(SkipReason::OutOfRange { field: "cost", value: cost });
    }
    Ok(LaborEntry { key, cost })
}

fn price_from_row(row: &RawRow) -> Result<PriceListEntry, SkipReason> {
    let material = required_text(row, PRICE_MATERIAL, "material")?.to_lowercase();
    let cell = field(row, PRICE_VALUE).ok_or(SkipReason::MissingField { field: "price" })?;
    let price = number(cell, "price")?;
    if price < 0.0 {
        return Err(SkipReason::OutOfRange {
            field: "price",
            value: price,
        });
    }
    Ok(PriceListEntry { material, price })
}

/// First non-empty cell among the header aliases.
///
/// Exact header match first, then a trimmed case-insensitive match.
fn field<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
    aliases.iter().find_map(|alias| {
        let cell = row.get(*alias).or_else(|| {
            row.iter()
                .find(|(header, _)| header.trim().eq_ignore_ascii_case(alias))
                .map(|(_, value)| value)
        })?;
        let cell = cell.trim();
        (!cell.is_empty()).then_some(cell)
    })
}

fn required_text(
    row: &RawRow,
    aliases: &[&str],
    name: &'static str,
) -> Result<String, SkipReason> {
    field(row, aliases)
        .map(str::to_string)
        .ok_or(SkipReason::MissingField { field: name })
}

fn optional_text(row: &RawRow, aliases: &[&str]) -> String {
    field(row, aliases).unwrap_or_default().to_string()
}

fn number(cell: &str, name: &'static str) -> Result<f64, SkipReason> {
    parse_number(cell).ok_or_else(|| SkipReason::NotNumeric {
        field: name,
        value: cell.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn frost_row() -> RawRow {
        row(&[
            ("Color Name", "Frost-N"),
            ("Vendor Name", "MSI"),
            ("Thickness", "3cm"),
            ("Material", "Quartz"),
            ("size", "126 x 63"),
            ("Total/SqFt", "55.13"),
            ("Cost/SqFt", "10.24"),
            ("Price Group", "2"),
            ("Tier", "Low Tier"),
        ])
    }

    #[test]
    fn test_material_row_full() {
        let RowOutcome::Accepted(entry) = validate_material_row(&frost_row()) else {
            panic!("row should be accepted");
        };
        assert_eq!(entry.name, "Frost-N");
        assert_eq!(entry.vendor, "MSI");
        assert_eq!(entry.material_type, "Quartz");
        assert_eq!(entry.size, "126 x 63");
        assert!((entry.cost_per_area - 10.24).abs() < 1e-9);
        assert!((entry.total_per_area - 55.13).abs() < 1e-9);
        assert_eq!(entry.price_group, 2);
        assert_eq!(entry.tier, "Low Tier");
    }

    #[test]
    fn test_material_cost_fallback_alias() {
        let mut r = frost_row();
        r.remove("Cost/SqFt");
        r.insert("Cost".to_string(), "12".to_string());
        let RowOutcome::Accepted(entry) = validate_material_row(&r) else {
            panic!("fallback cost should be used");
        };
        assert!((entry.cost_per_area - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_material_primary_cost_wins_over_fallback() {
        let mut r = frost_row();
        r.insert("Cost".to_string(), "99".to_string());
        let RowOutcome::Accepted(entry) = validate_material_row(&r) else {
            panic!("row should be accepted");
        };
        assert!((entry.cost_per_area - 10.24).abs() < 1e-9);
    }

    #[test]
    fn test_material_empty_primary_falls_back() {
        let mut r = frost_row();
        r.insert("Cost/SqFt".to_string(), "  ".to_string());
        r.insert("Cost".to_string(), "8.5".to_string());
        let RowOutcome::Accepted(entry) = validate_material_row(&r) else {
            panic!("row should be accepted");
        };
        assert!((entry.cost_per_area - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_material_non_numeric_cost_skipped() {
        let mut r = frost_row();
        r.insert("Cost/SqFt".to_string(), "call".to_string());
        assert_eq!(
            validate_material_row(&r),
            RowOutcome::Skipped(SkipReason::NotNumeric {
                field: "costPerArea",
                value: "call".to_string(),
            })
        );
    }

    #[test]
    fn test_material_missing_name_skipped() {
        let mut r = frost_row();
        r.remove("Color Name");
        assert_eq!(
            validate_material_row(&r),
            RowOutcome::Skipped(SkipReason::MissingField { field: "name" })
        );
    }

    #[test]
    fn test_material_zero_total_skipped() {
        let mut r = frost_row();
        r.insert("Total/SqFt".to_string(), "0".to_string());
        assert!(matches!(
            validate_material_row(&r),
            RowOutcome::Skipped(SkipReason::OutOfRange { field: "totalPerArea", .. })
        ));
    }

    #[test]
    fn test_material_optional_fields_default() {
        let r = row(&[
            ("Name", "Calacatta"),
            ("material type", "Marble"),
            ("Cost", "$1,020.00"),
            ("TotalPerSqFt", "40"),
        ]);
        let RowOutcome::Accepted(entry) = validate_material_row(&r) else {
            panic!("row should be accepted");
        };
        assert_eq!(entry.vendor, "");
        assert_eq!(entry.price_group, 0);
        assert!((entry.cost_per_area - 1020.0).abs() < 1e-9);
    }

    #[test]
    fn test_labor_rows() {
        let ok = row(&[("LaborKey", "Default"), ("Cost", "50")]);
        assert_eq!(
            validate_labor_row(&ok),
            RowOutcome::Accepted(LaborEntry {
                key: "Default".to_string(),
                cost: 50.0,
            })
        );

        let bad = row(&[("LaborKey", "Install"), ("Cost", "tbd")]);
        assert!(matches!(validate_labor_row(&bad), RowOutcome::Skipped(_)));

        let missing = row(&[("Cost", "10")]);
        assert_eq!(
            validate_labor_row(&missing),
            RowOutcome::Skipped(SkipReason::MissingField { field: "laborKey" })
        );
    }

    #[test]
    fn test_price_row_key_lowercased() {
        let r = row(&[("Material", " Granite and Quartz "), ("Price", "45")]);
        assert_eq!(
            validate_price_row(&r),
            RowOutcome::Accepted(PriceListEntry {
                material: "granite and quartz".to_string(),
                price: 45.0,
            })
        );
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::NotNumeric {
            field: "cost",
            value: "x".to_string(),
        };
        assert_eq!(reason.to_string(), "cost is not a number: 'x'");
    }
}
