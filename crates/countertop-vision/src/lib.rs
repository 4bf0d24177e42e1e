//! Vision module - reads vision provider answers into catalog matches
//!
//! Provider output is free text that usually, but not always, contains the
//! JSON object we asked for. A payload that cannot be read is reported as an
//! `Unavailable` outcome instead of an error so callers can render it.

pub mod prompts;

pub use prompts::STONE_ANALYSIS_PROMPT;

use countertop_domain::resolve_match;
use countertop_store::Catalog;
use countertop_types::{MatchResult, ObservedAttributes, PricingError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of analyzing one provider response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoneAnalysis {
    Matched(MatchResult),
    Unavailable { error: String },
}

impl StoneAnalysis {
    pub fn is_matched(&self) -> bool {
        matches!(self, StoneAnalysis::Matched(_))
    }
}

/// Extract JSON from an AI response (handles markdown code blocks and prose)
pub fn extract_json_from_response(response: &str) -> String {
    let response = response.trim();

    if response.starts_with("```") {
        if let Some(end) = response.rfind("```") {
            let start = response.find('\n').map(|i| i + 1).unwrap_or(response.len());
            if start < end {
                return response[start..end].trim().to_string();
            }
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if start < end {
                return response[start..=end].to_string();
            }
        }
    }

    response.to_string()
}

/// Parse observed attributes from a provider response
pub fn parse_attributes(response: &str) -> Result<ObservedAttributes, PricingError> {
    let json = extract_json_from_response(response);
    let value: serde_json::Value = serde_json::from_str(&json)
        .map_err(|e| PricingError::AnalysisUnavailable(format!("response is not JSON: {}", e)))?;

    if !value.is_object() {
        return Err(PricingError::AnalysisUnavailable(
            "response is not a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        PricingError::AnalysisUnavailable(format!("unexpected attribute payload: {}", e))
    })
}

/// Parse a provider response and match it against the catalog
pub fn analyze_response(response: &str, catalog: &Catalog) -> StoneAnalysis {
    match parse_attributes(response) {
        Ok(attrs) => {
            debug!(
                stone_type = %attrs.stone_type,
                severity = %attrs.severity,
                "parsed vision attributes"
            );
            StoneAnalysis::Matched(resolve_match(&attrs, catalog))
        }
        Err(e) => {
            warn!(error = %e, "vision payload could not be parsed");
            StoneAnalysis::Unavailable {
                error: e.to_string(),
            }
        }
    }
}
