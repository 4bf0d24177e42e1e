//! Care and repair guidance from damage severity and stone type

use countertop_types::{Recommendations, Severity};

pub const CONTACT_PROFESSIONAL: &str = "Contact a professional for repair or replacement.";
pub const CONSIDER_PROFESSIONAL: &str = "Consider professional repair.";
pub const NO_ACTION: &str = "No action required.";

pub const MARBLE_CLEANING: &str =
    "Use a pH-neutral cleaner made for marble. Avoid acidic or abrasive products.";
pub const GENERAL_CLEANING: &str = "Clean with mild soap and warm water.";

pub const REPAIR_RECOMMENDED: &str = "Professional repair recommended.";
pub const NO_REPAIRS: &str = "No repairs needed.";

/// Fixed rule table; `stone_type` is compared exactly as supplied
pub fn derive_recommendations(severity: Severity, stone_type: &str) -> Recommendations {
    let professional = match severity {
        Severity::Severe => CONTACT_PROFESSIONAL,
        Severity::Moderate => CONSIDER_PROFESSIONAL,
        Severity::Low | Severity::None => NO_ACTION,
    };

    let cleaning = if stone_type == "Marble" {
        MARBLE_CLEANING
    } else {
        GENERAL_CLEANING
    };

    let repair = match severity {
        Severity::Severe | Severity::Moderate => REPAIR_RECOMMENDED,
        Severity::Low | Severity::None => NO_REPAIRS,
    };

    Recommendations {
        professional_recommendation: professional.to_string(),
        cleaning_recommendation: cleaning.to_string(),
        repair_recommendation: repair.to_string(),
    }
}
