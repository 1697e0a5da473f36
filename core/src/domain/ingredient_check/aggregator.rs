use crate::domain::ingredient_check::entities::{IngredientClassificationResult, SafetyStatus};

/// Folds per-ingredient results into the scan verdict.
///
/// Any unsafe ingredient makes the scan unsafe; otherwise any ingredient needing caution
/// makes it caution. An empty scan is safe.
pub fn aggregate(results: &[IngredientClassificationResult]) -> SafetyStatus {
    if results.iter().any(|r| r.status == SafetyStatus::Unsafe) {
        return SafetyStatus::Unsafe;
    }

    if results.iter().any(|r| r.requires_caution) {
        return SafetyStatus::Caution;
    }

    SafetyStatus::Safe
}
