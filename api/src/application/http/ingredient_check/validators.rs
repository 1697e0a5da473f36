use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ClassifyIngredientRequest {
    /// An empty name is accepted and classified as safe.
    #[validate(length(max = 200, message = "ingredient_name must be at most 200 characters"))]
    pub ingredient_name: String,
    #[validate(length(max = 50, message = "at most 50 allergen ids"))]
    #[serde(default)]
    pub allergen_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeIngredientsRequest {
    #[validate(length(max = 500, message = "at most 500 ingredients"))]
    pub ingredients: Vec<String>,
    #[validate(length(max = 50, message = "at most 50 allergen ids"))]
    #[serde(default)]
    pub allergen_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeLabelTextRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "label_text must be between 1 and 5000 characters"
    ))]
    pub label_text: String,
    #[validate(length(max = 50, message = "at most 50 allergen ids"))]
    #[serde(default)]
    pub allergen_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct SuggestKeywordsParams {
    #[validate(length(min = 1, max = 100, message = "prefix must be between 1 and 100 characters"))]
    #[schema(example = "whe")]
    pub prefix: String,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    #[schema(example = 20)]
    pub limit: Option<usize>,
}
