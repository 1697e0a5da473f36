use alphago_core::domain::{
    ingredient_check::{ports::IngredientCheckService, value_objects::SuggestKeywordsInput},
    ingredient_index::KeywordSuggestion,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient_check::validators::SuggestKeywordsParams,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestKeywordsResponse {
    pub data: Vec<KeywordSuggestion>,
}

#[utoipa::path(
    get,
    path = "/suggest",
    tag = "ingredient-check",
    summary = "Suggest allergen keywords",
    description = "Registry keywords starting with the given prefix, alphabetically, with the allergens that list them",
    responses(
        (status = 200, body = SuggestKeywordsResponse),
        (status = 400, description = "Invalid query")
    ),
    params(SuggestKeywordsParams),
)]
pub async fn suggest_keywords(
    State(state): State<AppState>,
    ValidateQuery(params): ValidateQuery<SuggestKeywordsParams>,
) -> Result<Response<SuggestKeywordsResponse>, ApiError> {
    let data = state.service.suggest_keywords(SuggestKeywordsInput {
        prefix: params.prefix,
        limit: params.limit.unwrap_or(DEFAULT_LIMIT),
    });

    Ok(Response::OK(SuggestKeywordsResponse { data }))
}
