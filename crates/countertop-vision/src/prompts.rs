//! Prompt sent to the vision provider alongside the countertop photo
//!
//! The caller layer owns the provider call; this crate only defines what the
//! provider is asked for and how its answer is read back.

use std::sync::LazyLock;

use countertop_types::Severity;

const SEVERITIES: [Severity; 4] = [
    Severity::None,
    Severity::Low,
    Severity::Moderate,
    Severity::Severe,
];

fn build_stone_analysis_prompt() -> String {
    let template = serde_json::json!({
        "stoneType": "<Granite | Marble | Quartz | Quartzite | ...>",
        "colorAndPattern": "<color and pattern description>",
        "damageType": "<Chip | Crack | Stain | Etch | None>",
        "severity": "<severity>",
    });
    let template = serde_json::to_string(&template).unwrap_or_else(|_| "{}".to_string());
    let severities: Vec<&str> = SEVERITIES.iter().map(Severity::label).collect();

    format!(
        concat!(
            "You are a countertop material specialist. ",
            "Look at the photographed countertop and identify the stone type, ",
            "its color and pattern, and any visible damage. ",
            "Name the main color first in colorAndPattern (for example \"frost white with grey veins\").\n",
            "Respond with a single JSON object and nothing else:\n",
            "{template}\n",
            "severity must be exactly one of: {severities}."
        ),
        template = template,
        severities = severities.join(", "),
    )
}

/// Stone analysis prompt, built once
pub static STONE_ANALYSIS_PROMPT: LazyLock<String> = LazyLock::new(build_stone_analysis_prompt);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_every_field() {
        for field in ["stoneType", "colorAndPattern", "damageType", "severity"] {
            assert!(STONE_ANALYSIS_PROMPT.contains(field), "missing {}", field);
        }
    }

    #[test]
    fn test_prompt_lists_allowed_severities() {
        assert!(STONE_ANALYSIS_PROMPT.contains("None, Low, Moderate, Severe"));
    }
}
