use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Verdict for one ingredient or a whole scan, ordered from best to worst.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    #[default]
    Safe,
    Caution,
    Unsafe,
}

impl SafetyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SafetyStatus::Safe => "safe",
            SafetyStatus::Caution => "caution",
            SafetyStatus::Unsafe => "unsafe",
        }
    }

    /// Worst of the two verdicts.
    pub fn worst(self, other: SafetyStatus) -> SafetyStatus {
        self.max(other)
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientClassificationResult {
    /// The ingredient exactly as supplied, for display.
    pub ingredient: String,
    pub is_safe: bool,
    pub status: SafetyStatus,
    /// Display names of every allergen matched through a common keyword.
    pub matched_allergens: Vec<String>,
    pub requires_caution: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl IngredientClassificationResult {
    pub fn safe(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            is_safe: true,
            status: SafetyStatus::Safe,
            matched_allergens: Vec::new(),
            requires_caution: false,
            explanation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanAggregateResult {
    /// Per-ingredient results in input order.
    pub ingredients: Vec<IngredientClassificationResult>,
    pub overall_safety: SafetyStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordering() {
        assert!(SafetyStatus::Safe < SafetyStatus::Caution);
        assert!(SafetyStatus::Caution < SafetyStatus::Unsafe);
        assert_eq!(
            SafetyStatus::Caution.worst(SafetyStatus::Unsafe),
            SafetyStatus::Unsafe
        );
        assert_eq!(SafetyStatus::Safe.worst(SafetyStatus::Safe), SafetyStatus::Safe);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&SafetyStatus::Caution).unwrap();
        assert_eq!(json, "\"caution\"");
        let parsed: SafetyStatus = serde_json::from_str("\"unsafe\"").unwrap();
        assert_eq!(parsed, SafetyStatus::Unsafe);
    }

    #[test]
    fn test_explanation_omitted_when_absent() {
        let json = serde_json::to_value(IngredientClassificationResult::safe("water")).unwrap();
        assert!(json.get("explanation").is_none());
        assert_eq!(json["status"], "safe");
    }
}
