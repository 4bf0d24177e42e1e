//! Match observed countertop attributes against the material catalog
//!
//! Matching is a loose first-match policy over catalog order: an entry matches
//! when its material type equals the observed stone type (case-insensitive)
//! and the observed color description contains the first hyphen-delimited
//! token of the entry's color name ("Frost-N" matches "... frost white ...").
//! Earlier catalog rows win ties. No similarity scoring is applied.

use countertop_store::Catalog;
use countertop_types::{MatchResult, MaterialEntry, ObservedAttributes, PossibleMatch};

use super::recommendation::derive_recommendations;
use super::format_currency;

pub const NO_MATCH: &str = "No match found";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NOT_IDENTIFIED: &str = "Not identified";

/// Stone types reported as natural stone (compared exactly as supplied)
const NATURAL_STONES: [&str; 2] = ["Marble", "Granite"];

/// Resolve the best catalog match plus the full list of alternatives
pub fn resolve_match(attrs: &ObservedAttributes, catalog: &Catalog) -> MatchResult {
    let stone_type = normalize(&attrs.stone_type);
    let description = normalize(&attrs.color_and_pattern);

    let candidate = catalog
        .materials()
        .iter()
        .find(|entry| matches_observation(entry, &stone_type, &description));

    let (color_match_suggestion, estimated_cost) = match candidate {
        Some(entry) => (entry.name.clone(), format_currency(entry.replacement_cost())),
        None => (NO_MATCH.to_string(), NOT_AVAILABLE.to_string()),
    };

    let material_composition = if attrs.stone_type.trim().is_empty() {
        NOT_IDENTIFIED.to_string()
    } else {
        format!("{} (Natural)", attrs.stone_type)
    };

    MatchResult {
        color_match_suggestion,
        estimated_cost,
        material_composition,
        is_natural_stone: NATURAL_STONES.contains(&attrs.stone_type.as_str()),
        recommendations: derive_recommendations(attrs.severity, &attrs.stone_type),
        possible_matches: catalog.materials().iter().map(possible_match).collect(),
    }
}

/// Lower-cased, trimmed form used for matching
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// First hyphen-delimited token of a color name, normalized
pub fn color_token(color_name: &str) -> String {
    normalize(color_name.split('-').next().unwrap_or_default())
}

/// Whether a catalog entry fits an already-normalized observation
pub fn matches_observation(entry: &MaterialEntry, stone_type: &str, description: &str) -> bool {
    if normalize(&entry.material_type) != stone_type {
        return false;
    }
    let token = color_token(&entry.name);
    // An empty token would be contained in every description
    !token.is_empty() && description.contains(&token)
}

fn possible_match(entry: &MaterialEntry) -> PossibleMatch {
    PossibleMatch {
        color_name: entry.name.clone(),
        material: entry.material_type.clone(),
        thickness: entry.thickness.clone(),
        replacement_cost: format_currency(entry.replacement_cost()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countertop_types::Severity;

    fn entry(name: &str, material_type: &str, cost: f64, total: f64) -> MaterialEntry {
        MaterialEntry {
            name: name.to_string(),
            vendor: "Vendor".to_string(),
            thickness: "3cm".to_string(),
            material_type: material_type.to_string(),
            size: String::new(),
            total_per_area: total,
            cost_per_area: cost,
            price_group: 1,
            tier: String::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_entries(
            vec![
                entry("Frost-N", "Quartz", 10.24, 55.13),
                entry("Calacatta-Gold", "Marble", 20.0, 42.5),
                entry("Frost-Premium", "Quartz", 30.0, 60.0),
                entry("Black Galaxy", "Granite", 12.0, 48.0),
            ],
            vec![],
        )
    }

    fn attrs(stone_type: &str, color: &str, severity: Severity) -> ObservedAttributes {
        ObservedAttributes {
            stone_type: stone_type.to_string(),
            color_and_pattern: color.to_string(),
            damage_type: "Chip".to_string(),
            severity,
        }
    }

    #[test]
    fn test_color_token() {
        assert_eq!(color_token("Frost-N"), "frost");
        assert_eq!(color_token("Calacatta-Gold-Extra"), "calacatta");
        assert_eq!(color_token("Black Galaxy"), "black galaxy");
        assert_eq!(color_token("-N"), "");
    }

    #[test]
    fn test_match_found_first_in_catalog_order() {
        let result = resolve_match(
            &attrs("quartz", "Frost white with subtle grey flecks", Severity::None),
            &catalog(),
        );
        // Both Frost-N and Frost-Premium fit; the earlier row wins
        assert_eq!(result.color_match_suggestion, "Frost-N");
        assert_eq!(result.estimated_cost, "564.53");
    }

    #[test]
    fn test_stone_type_must_match() {
        let result = resolve_match(
            &attrs("Granite", "frost white", Severity::None),
            &catalog(),
        );
        assert_eq!(result.color_match_suggestion, NO_MATCH);
        assert_eq!(result.estimated_cost, NOT_AVAILABLE);
    }

    #[test]
    fn test_no_match_still_lists_full_catalog() {
        let result = resolve_match(
            &attrs("Quartz", "solid charcoal", Severity::Low),
            &catalog(),
        );
        assert_eq!(result.color_match_suggestion, "No match found");
        assert_eq!(result.estimated_cost, "N/A");
        let names: Vec<_> = result
            .possible_matches
            .iter()
            .map(|m| m.color_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Frost-N", "Calacatta-Gold", "Frost-Premium", "Black Galaxy"]
        );
        assert_eq!(result.possible_matches[1].material, "Marble");
        assert_eq!(result.possible_matches[1].replacement_cost, "850.00");
        assert_eq!(result.possible_matches[3].replacement_cost, "576.00");
    }

    #[test]
    fn test_multi_word_token() {
        let result = resolve_match(
            &attrs("Granite", "Black galaxy with gold speckles", Severity::None),
            &catalog(),
        );
        assert_eq!(result.color_match_suggestion, "Black Galaxy");
    }

    #[test]
    fn test_material_composition() {
        let found = resolve_match(&attrs("Marble", "", Severity::None), &catalog());
        assert_eq!(found.material_composition, "Marble (Natural)");

        let missing = resolve_match(&attrs("", "frost", Severity::None), &catalog());
        assert_eq!(missing.material_composition, NOT_IDENTIFIED);
        assert_eq!(missing.color_match_suggestion, NO_MATCH);
    }

    #[test]
    fn test_natural_stone_check_is_case_sensitive() {
        assert!(resolve_match(&attrs("Marble", "", Severity::None), &catalog()).is_natural_stone);
        assert!(resolve_match(&attrs("Granite", "", Severity::None), &catalog()).is_natural_stone);
        assert!(!resolve_match(&attrs("marble", "", Severity::None), &catalog()).is_natural_stone);
        assert!(!resolve_match(&attrs("Quartz", "", Severity::None), &catalog()).is_natural_stone);
    }

    #[test]
    fn test_lowercase_marble_still_matches_catalog() {
        let result = resolve_match(
            &attrs("marble", "calacatta with gold veining", Severity::Moderate),
            &catalog(),
        );
        assert_eq!(result.color_match_suggestion, "Calacatta-Gold");
        assert!(!result.is_natural_stone);
    }

    #[test]
    fn test_recommendations_attached() {
        let result = resolve_match(
            &attrs("Marble", "calacatta", Severity::Severe),
            &catalog(),
        );
        assert_eq!(
            result.recommendations.professional_recommendation,
            "Contact a professional for repair or replacement."
        );
        assert_eq!(
            result.recommendations.repair_recommendation,
            "Professional repair recommended."
        );
    }

    #[test]
    fn test_empty_catalog() {
        let result = resolve_match(
            &attrs("Quartz", "frost", Severity::None),
            &Catalog::empty(),
        );
        assert_eq!(result.color_match_suggestion, NO_MATCH);
        assert!(result.possible_matches.is_empty());
    }
}
