use crate::domain::{
    allergen::entities::AllergenDefinition,
    common::entities::app_errors::CoreError,
    ingredient_check::{
        entities::{IngredientClassificationResult, ScanAggregateResult},
        value_objects::{
            AnalyzeIngredientsInput, AnalyzeLabelTextInput, ClassifyIngredientInput,
            SuggestKeywordsInput,
        },
    },
    ingredient_index::keywords::KeywordSuggestion,
};

/// Deterministic, offline allergen checks.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientCheckService: Send + Sync {
    fn list_allergens(&self) -> Vec<AllergenDefinition>;

    fn get_allergen(&self, allergen_id: &str) -> Result<AllergenDefinition, CoreError>;

    fn classify_ingredient(&self, input: ClassifyIngredientInput) -> IngredientClassificationResult;

    fn analyze_ingredients(&self, input: AnalyzeIngredientsInput) -> ScanAggregateResult;

    /// Splits a printed ingredient list and analyzes every entry.
    fn analyze_label_text(&self, input: AnalyzeLabelTextInput) -> ScanAggregateResult;

    /// Registry keywords starting with a prefix, for search-as-you-type.
    fn suggest_keywords(&self, input: SuggestKeywordsInput) -> Vec<KeywordSuggestion>;
}
