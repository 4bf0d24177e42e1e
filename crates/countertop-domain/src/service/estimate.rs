//! Dimension-based countertop estimate
//!
//! # Formula
//! base sq ft  = length x width / 144
//! final sq ft = base sq ft x 1.2            (20% waste allowance)
//! slabs       = ceil(final sq ft / slab area)
//! total       = base cost x 1.35 x final sq ft + labor
//!
//! Waste and markup are fixed pricing policy, not configuration.

use countertop_store::{Catalog, DEFAULT_LABOR_KEY};
use countertop_types::{EstimateRequest, EstimateResult, PricingError};

use super::round2;

pub const SQ_IN_PER_SQ_FT: f64 = 144.0;
pub const WASTE_FACTOR: f64 = 1.2;
pub const MARKUP: f64 = 1.35;

/// Price a countertop from its dimensions, a material and optional labor key
pub fn compute_estimate(
    req: &EstimateRequest,
    catalog: &Catalog,
) -> Result<EstimateResult, PricingError> {
    let material_name = req.material_name.trim();
    if material_name.is_empty() {
        return Err(PricingError::validation("materialName", "is required"));
    }
    let length = positive(req.length_inches, "lengthInches")?;
    let width = positive(req.width_inches, "widthInches")?;

    let base_sq_ft = length * width / SQ_IN_PER_SQ_FT;
    let final_sq_ft = base_sq_ft * WASTE_FACTOR;
    let slab_count = slab_count(final_sq_ft, req.slab_length_inches, req.slab_width_inches);

    let material = catalog
        .find_material(material_name)
        .ok_or_else(|| PricingError::not_found("material", material_name))?;

    let base_cost = material.cost_per_area;
    if !base_cost.is_finite() || base_cost < 0.0 {
        return Err(PricingError::validation(
            "costPerArea",
            format!("invalid base cost for material '{}'", material_name),
        ));
    }
    let marked_up_cost = base_cost * MARKUP;

    let labor_key = req
        .labor_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty());
    let labor_cost = catalog.labor_cost(labor_key);

    let material_total = marked_up_cost * final_sq_ft;
    let total_estimate = material_total + labor_cost;

    Ok(EstimateResult {
        material: req.material_name.clone(),
        length_inches: length,
        width_inches: width,
        slab_length_inches: req.slab_length_inches,
        slab_width_inches: req.slab_width_inches,
        slab_count,
        base_sq_ft: round2(base_sq_ft),
        final_sq_ft: round2(final_sq_ft),
        base_cost: round2(base_cost),
        marked_up_cost: round2(marked_up_cost),
        labor_key: labor_key.unwrap_or(DEFAULT_LABOR_KEY).to_string(),
        labor_cost: round2(labor_cost),
        total_estimate: round2(total_estimate),
    })
}

/// Whole slabs needed to cover `final_sq_ft`; 0 unless both slab sides are positive
pub fn slab_count(final_sq_ft: f64, slab_length: Option<f64>, slab_width: Option<f64>) -> u64 {
    match (slab_length, slab_width) {
        (Some(l), Some(w)) if l > 0.0 && w > 0.0 => {
            let slab_area = l * w / SQ_IN_PER_SQ_FT;
            (final_sq_ft / slab_area).ceil() as u64
        }
        _ => 0,
    }
}

fn positive(value: Option<f64>, field: &'static str) -> Result<f64, PricingError> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(_) => Err(PricingError::validation(field, "must be a positive number")),
        None => Err(PricingError::validation(field, "is missing or not a number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countertop_types::{LaborEntry, MaterialEntry};

    fn quartz(cost: f64) -> MaterialEntry {
        MaterialEntry {
            name: "Quartz".to_string(),
            vendor: "MSI".to_string(),
            thickness: "3cm".to_string(),
            material_type: "Quartz".to_string(),
            size: "126 x 63".to_string(),
            total_per_area: 55.0,
            cost_per_area: cost,
            price_group: 1,
            tier: "Low Tier".to_string(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_entries(
            vec![quartz(10.24)],
            vec![
                LaborEntry {
                    key: "Default".to_string(),
                    cost: 50.0,
                },
                LaborEntry {
                    key: "Full Install".to_string(),
                    cost: 325.5,
                },
            ],
        )
    }

    fn request(length: f64, width: f64) -> EstimateRequest {
        EstimateRequest {
            material_name: "Quartz".to_string(),
            length_inches: Some(length),
            width_inches: Some(width),
            ..Default::default()
        }
    }

    #[test]
    fn test_area_and_waste() {
        let result = compute_estimate(&request(100.0, 50.0), &catalog()).unwrap();
        assert_eq!(result.base_sq_ft, 34.72);
        assert_eq!(result.final_sq_ft, 41.67);
        assert_eq!(result.slab_count, 0);
    }

    #[test]
    fn test_full_breakdown_with_default_labor() {
        // 100 x 50 in -> 41.6667 sq ft after waste; 10.24 x 1.35 = 13.824 per sq ft
        let result = compute_estimate(&request(100.0, 50.0), &catalog()).unwrap();
        assert_eq!(result.base_cost, 10.24);
        assert_eq!(result.marked_up_cost, 13.82);
        assert_eq!(result.labor_key, "Default");
        assert_eq!(result.labor_cost, 50.0);
        assert_eq!(result.total_estimate, 626.0);
    }

    #[test]
    fn test_slab_count_rounds_up() {
        let mut req = request(100.0, 50.0);
        req.slab_length_inches = Some(126.0);
        req.slab_width_inches = Some(63.0);
        let result = compute_estimate(&req, &catalog()).unwrap();
        assert_eq!(result.slab_count, 1);

        // 300 x 100 in -> 250 sq ft final; 55.125 sq ft per slab -> 4.54 -> 5
        let mut big = request(300.0, 100.0);
        big.slab_length_inches = Some(126.0);
        big.slab_width_inches = Some(63.0);
        assert_eq!(compute_estimate(&big, &catalog()).unwrap().slab_count, 5);
    }

    #[test]
    fn test_slab_count_needs_both_sides() {
        assert_eq!(slab_count(41.67, Some(126.0), None), 0);
        assert_eq!(slab_count(41.67, Some(126.0), Some(0.0)), 0);
        assert_eq!(slab_count(41.67, Some(-1.0), Some(63.0)), 0);
    }

    #[test]
    fn test_explicit_labor_key_case_insensitive() {
        let mut req = request(100.0, 50.0);
        req.labor_key = Some("full install".to_string());
        let result = compute_estimate(&req, &catalog()).unwrap();
        assert_eq!(result.labor_key, "full install");
        assert_eq!(result.labor_cost, 325.5);
        assert_eq!(result.total_estimate, 901.5);
    }

    #[test]
    fn test_unknown_labor_key_costs_nothing() {
        let mut req = request(100.0, 50.0);
        req.labor_key = Some("Demolition".to_string());
        let result = compute_estimate(&req, &catalog()).unwrap();
        assert_eq!(result.labor_cost, 0.0);
        assert_eq!(result.total_estimate, 576.0);
    }

    #[test]
    fn test_no_default_labor_row() {
        let catalog = Catalog::from_entries(vec![quartz(10.24)], vec![]);
        let result = compute_estimate(&request(100.0, 50.0), &catalog).unwrap();
        assert_eq!(result.labor_cost, 0.0);
    }

    #[test]
    fn test_material_lookup_case_insensitive() {
        let mut req = request(100.0, 50.0);
        req.material_name = "quartz".to_string();
        let lower = compute_estimate(&req, &catalog()).unwrap();
        let upper = compute_estimate(&request(100.0, 50.0), &catalog()).unwrap();
        assert_eq!(lower.total_estimate, upper.total_estimate);
        assert_eq!(lower.material, "quartz");
    }

    #[test]
    fn test_unknown_material_not_found() {
        let mut req = request(100.0, 50.0);
        req.material_name = "Unobtainium".to_string();
        assert_eq!(
            compute_estimate(&req, &catalog()),
            Err(PricingError::not_found("material", "Unobtainium"))
        );
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let zero = request(0.0, 50.0);
        assert!(matches!(
            compute_estimate(&zero, &catalog()),
            Err(PricingError::Validation { ref field, .. }) if field == "lengthInches"
        ));

        let mut missing = request(100.0, 50.0);
        missing.width_inches = None;
        assert!(matches!(
            compute_estimate(&missing, &catalog()),
            Err(PricingError::Validation { ref field, .. }) if field == "widthInches"
        ));

        let nan = request(f64::NAN, 50.0);
        assert!(compute_estimate(&nan, &catalog()).is_err());
    }

    #[test]
    fn test_validation_precedes_lookup() {
        let mut req = request(-5.0, 50.0);
        req.material_name = "Unobtainium".to_string();
        assert!(matches!(
            compute_estimate(&req, &catalog()),
            Err(PricingError::Validation { .. })
        ));
    }

    #[test]
    fn test_missing_material_name() {
        let mut req = request(100.0, 50.0);
        req.material_name = "  ".to_string();
        assert!(matches!(
            compute_estimate(&req, &catalog()),
            Err(PricingError::Validation { ref field, .. }) if field == "materialName"
        ));
    }

    #[test]
    fn test_invalid_base_cost() {
        let catalog = Catalog::from_entries(vec![quartz(f64::NAN)], vec![]);
        assert!(matches!(
            compute_estimate(&request(100.0, 50.0), &catalog),
            Err(PricingError::Validation { ref field, .. }) if field == "costPerArea"
        ));
    }

    #[test]
    fn test_repeat_calls_are_identical() {
        let catalog = catalog();
        let mut req = request(97.5, 25.25);
        req.slab_length_inches = Some(120.0);
        req.slab_width_inches = Some(55.0);
        let first = serde_json::to_string(&compute_estimate(&req, &catalog).unwrap()).unwrap();
        let second = serde_json::to_string(&compute_estimate(&req, &catalog).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
