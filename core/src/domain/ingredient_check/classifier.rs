use std::collections::HashSet;

use tracing::trace;

use crate::domain::{
    allergen::registry::AllergenRegistry,
    ingredient_check::{
        aggregator::aggregate,
        entities::{IngredientClassificationResult, SafetyStatus, ScanAggregateResult},
        normalizer::normalize,
    },
};

/// Keyword matcher over an injected allergen registry.
///
/// Matching is literal substring containment on normalized text, so "oats" also
/// matches inside "goats".
#[derive(Debug, Clone, Copy)]
pub struct IngredientClassifier<'a> {
    registry: &'a AllergenRegistry,
}

impl<'a> IngredientClassifier<'a> {
    pub fn new(registry: &'a AllergenRegistry) -> Self {
        Self { registry }
    }

    /// Classifies one ingredient against the given allergen ids, in the order given.
    ///
    /// Unknown ids are skipped and a repeated id is only checked once. Matched allergen
    /// names accumulate, while the explanation is overwritten by each matching allergen,
    /// so it describes the last one processed.
    pub fn classify<S>(&self, ingredient_name: &str, allergen_ids: &[S]) -> IngredientClassificationResult
    where
        S: AsRef<str>,
    {
        let sanitized = normalize(ingredient_name);

        let mut matched_allergens = Vec::new();
        let mut requires_caution = false;
        let mut explanation = None;
        let mut seen = HashSet::new();

        for allergen_id in allergen_ids.iter().map(|id| id.as_ref()) {
            if !seen.insert(allergen_id) {
                continue;
            }

            let Some(entry) = self.registry.entry(allergen_id) else {
                trace!(allergen_id, "skipping unknown allergen id");
                continue;
            };

            let allergen = &entry.definition;
            let is_common = entry
                .common_keywords
                .iter()
                .any(|keyword| sanitized.contains(keyword.as_str()));

            if is_common {
                matched_allergens.push(allergen.name.clone());
                explanation = Some(format!(
                    "Contains {}. {}",
                    allergen.name.to_lowercase(),
                    allergen.description
                ));
                continue;
            }

            let is_caution = entry
                .caution_keywords
                .iter()
                .any(|keyword| sanitized.contains(keyword.as_str()));

            if is_caution {
                requires_caution = true;
                explanation = Some(format!(
                    "May contain {}. Verify the source with the manufacturer.",
                    allergen.name.to_lowercase()
                ));
            }
        }

        let status = if !matched_allergens.is_empty() {
            SafetyStatus::Unsafe
        } else if requires_caution {
            SafetyStatus::Caution
        } else {
            SafetyStatus::Safe
        };

        IngredientClassificationResult {
            ingredient: ingredient_name.to_string(),
            is_safe: matched_allergens.is_empty() && !requires_caution,
            status,
            matched_allergens,
            requires_caution,
            explanation,
        }
    }

    /// Classifies every name in order, duplicates included, and folds the overall verdict.
    pub fn analyze_ingredients<N, S>(&self, names: &[N], allergen_ids: &[S]) -> ScanAggregateResult
    where
        N: AsRef<str>,
        S: AsRef<str>,
    {
        let ingredients: Vec<IngredientClassificationResult> = names
            .iter()
            .map(|name| self.classify(name.as_ref(), allergen_ids))
            .collect();
        let overall_safety = aggregate(&ingredients);

        ScanAggregateResult {
            ingredients,
            overall_safety,
        }
    }
}
