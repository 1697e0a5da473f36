use tracing::instrument;

use crate::domain::{
    allergen::entities::AllergenDefinition,
    common::{entities::app_errors::CoreError, services::Service},
    ingredient_check::{
        entities::{IngredientClassificationResult, ScanAggregateResult},
        label_text::parse_ingredients_from_text,
        ports::IngredientCheckService,
        value_objects::{
            AnalyzeIngredientsInput, AnalyzeLabelTextInput, ClassifyIngredientInput,
            SuggestKeywordsInput,
        },
    },
    ingredient_index::keywords::{KeywordSuggestion, suggest_keywords},
    scan::ports::LLMClient,
};

impl<LLM> IngredientCheckService for Service<LLM>
where
    LLM: LLMClient,
{
    fn list_allergens(&self) -> Vec<AllergenDefinition> {
        self.registry.list_all().to_vec()
    }

    fn get_allergen(&self, allergen_id: &str) -> Result<AllergenDefinition, CoreError> {
        self.registry
            .get_by_id(allergen_id)
            .cloned()
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(ingredient = %input.ingredient_name))]
    fn classify_ingredient(&self, input: ClassifyIngredientInput) -> IngredientClassificationResult {
        self.classifier()
            .classify(&input.ingredient_name, &input.allergen_ids)
    }

    #[instrument(skip(self, input), fields(count = input.ingredients.len()))]
    fn analyze_ingredients(&self, input: AnalyzeIngredientsInput) -> ScanAggregateResult {
        self.classifier()
            .analyze_ingredients(&input.ingredients, &input.allergen_ids)
    }

    #[instrument(skip(self, input))]
    fn analyze_label_text(&self, input: AnalyzeLabelTextInput) -> ScanAggregateResult {
        let ingredients = parse_ingredients_from_text(&input.label_text);
        tracing::debug!(count = ingredients.len(), "parsed label text");

        self.classifier()
            .analyze_ingredients(&ingredients, &input.allergen_ids)
    }

    fn suggest_keywords(&self, input: SuggestKeywordsInput) -> Vec<KeywordSuggestion> {
        suggest_keywords(&self.keyword_index, &input.prefix, input.limit)
    }
}
