//! Domain services

pub mod estimate;
pub mod loading;
pub mod match_resolver;
pub mod quote;
pub mod recommendation;

pub use estimate::compute_estimate;
pub use loading::load_catalog;
pub use match_resolver::resolve_match;
pub use quote::compute_quote;
pub use recommendation::derive_recommendations;

/// Round to 2 decimal places (applied to outputs only)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Two-decimal string used by the match resolver's cost fields
pub(crate) fn format_currency(value: f64) -> String {
    format!("{:.2}", value)
}
