//! Preliminary whole-project quote
//!
//! Area is supplied directly. The price per square foot comes from the
//! catalog price list by material category, defaulting to $50.

use countertop_store::Catalog;
use countertop_types::{CutoutGrade, EdgeDetail, PricingError, QuoteBreakdown, QuoteRequest};

use super::round2;

pub const DEFAULT_PRICE_PER_SQ_FT: f64 = 50.0;
pub const DEMO_SURCHARGE: f64 = 1.10;
pub const BACKSPLASH_PER_SQ_FT: f64 = 20.0;
pub const SQ_FT_PER_SLAB: f64 = 100.0;

fn sink_rate(grade: CutoutGrade) -> f64 {
    match grade {
        CutoutGrade::Standard => 100.0,
        CutoutGrade::Premium => 150.0,
    }
}

fn cooktop_rate(grade: CutoutGrade) -> f64 {
    match grade {
        CutoutGrade::Standard => 120.0,
        CutoutGrade::Premium => 160.0,
    }
}

fn edge_multiplier(edge: EdgeDetail) -> f64 {
    match edge {
        EdgeDetail::Standard => 1.0,
        EdgeDetail::Premium => 1.05,
        EdgeDetail::Custom => 1.10,
    }
}

pub fn compute_quote(req: &QuoteRequest, catalog: &Catalog) -> Result<QuoteBreakdown, PricingError> {
    let total_sq_ft = match req.total_sq_ft {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => {
            return Err(PricingError::validation(
                "totalSqFt",
                "must be a positive number",
            ))
        }
    };
    let sink_qty = quantity(req.sink_qty, "sinkQty")?;
    let cooktop_qty = quantity(req.cooktop_qty, "cooktopQty")?;

    let material_category = req.material_category.trim().to_lowercase();
    let price_per_sq_ft = catalog
        .find_price(&material_category)
        .unwrap_or(DEFAULT_PRICE_PER_SQ_FT);

    let mut material_cost = total_sq_ft * price_per_sq_ft;
    if req.demo {
        material_cost *= DEMO_SURCHARGE;
    }
    material_cost *= edge_multiplier(req.edge_detail);

    let sink_cost = sink_qty * sink_rate(req.sink_type);
    let cooktop_cost = cooktop_qty * cooktop_rate(req.cooktop_type);
    let backsplash_cost = if req.backsplash {
        total_sq_ft * BACKSPLASH_PER_SQ_FT
    } else {
        0.0
    };

    let preliminary_total = material_cost + sink_cost + cooktop_cost + backsplash_cost;
    let slab_count = (total_sq_ft / SQ_FT_PER_SLAB).ceil() as u64;

    Ok(QuoteBreakdown {
        customer_name: req.customer_name.clone().unwrap_or_else(|| "N/A".to_string()),
        vendor: req.vendor.clone().unwrap_or_else(|| "default vendor".to_string()),
        color: req.color.clone().unwrap_or_else(|| "default color".to_string()),
        material_category,
        total_sq_ft: round2(total_sq_ft),
        price_per_sq_ft: round2(price_per_sq_ft),
        material_cost: round2(material_cost),
        sink_cost: round2(sink_cost),
        cooktop_cost: round2(cooktop_cost),
        backsplash_cost: round2(backsplash_cost),
        preliminary_total: round2(preliminary_total),
        slab_count,
    })
}

fn quantity(value: Option<f64>, field: &'static str) -> Result<f64, PricingError> {
    match value {
        None => Ok(0.0),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(_) => Err(PricingError::validation(field, "must be zero or more")),
    }
}
