use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    alternatives::IngredientAlternatives, common::generate_timestamp,
    ingredient_check::entities::SafetyStatus,
};

/// One ingredient as reported by the vision model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// Legacy alpha-gal flag kept for older clients.
    #[serde(default)]
    pub is_mammal_based: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_caution: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergen_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_allergen: Option<bool>,
}

impl Ingredient {
    pub fn is_unsafe(&self) -> bool {
        self.is_allergen.unwrap_or(false) || self.is_mammal_based
    }

    pub fn needs_caution(&self) -> bool {
        self.requires_caution.unwrap_or(false)
    }

    pub fn status(&self) -> SafetyStatus {
        if self.is_unsafe() {
            SafetyStatus::Unsafe
        } else if self.needs_caution() {
            SafetyStatus::Caution
        } else {
            SafetyStatus::Safe
        }
    }
}

/// Structured answer expected from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub overall_safety: SafetyStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanResult {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub status: SafetyStatus,
    pub is_safe: bool,
    pub ingredients: Vec<Ingredient>,
    pub product_name: Option<String>,
    pub scanned_for_allergens: Vec<String>,
}

impl ScanResult {
    pub fn new(
        status: SafetyStatus,
        ingredients: Vec<Ingredient>,
        product_name: Option<String>,
        scanned_for_allergens: Vec<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            timestamp: now,
            status,
            is_safe: status == SafetyStatus::Safe,
            ingredients,
            product_name,
            scanned_for_allergens,
        }
    }

    /// Same analysis under a fresh id and timestamp.
    pub fn reissued(&self) -> Self {
        Self::new(
            self.status,
            self.ingredients.clone(),
            self.product_name.clone(),
            self.scanned_for_allergens.clone(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// The vision model produced the ingredient list.
    Model,
    /// The model was unreachable and the label text was classified locally.
    Deterministic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDisagreement {
    pub ingredient: String,
    pub model_status: SafetyStatus,
    pub deterministic_status: SafetyStatus,
    pub matched_allergens: Vec<String>,
}

/// Keyword re-check of what the model reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CrossCheckReport {
    pub deterministic_safety: SafetyStatus,
    pub disagreements: Vec<IngredientDisagreement>,
}

impl CrossCheckReport {
    pub fn agrees(&self) -> bool {
        self.disagreements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanSummary {
    pub title: String,
    pub status: SafetyStatus,
    pub product_name: Option<String>,
    pub ingredient_count: usize,
    pub unsafe_count: usize,
    pub caution_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanReport {
    pub scan: ScanResult,
    pub source: AnalysisSource,
    /// The analysis was served from the scan cache instead of a new model call.
    pub from_cache: bool,
    /// Verdict the model gave for the whole label, when the model answered.
    pub model_safety: Option<SafetyStatus>,
    pub cross_check: Option<CrossCheckReport>,
    pub summary: ScanSummary,
    /// Plain-text result ready to share.
    pub share_text: String,
    pub alternatives: Vec<IngredientAlternatives>,
}
