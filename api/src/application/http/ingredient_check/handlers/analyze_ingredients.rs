use alphago_core::domain::ingredient_check::{
    entities::ScanAggregateResult, ports::IngredientCheckService,
    value_objects::AnalyzeIngredientsInput,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient_check::validators::AnalyzeIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeIngredientsResponse {
    pub data: ScanAggregateResult,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "ingredient-check",
    summary = "Analyze an ingredient list",
    responses(
        (status = 200, body = AnalyzeIngredientsResponse),
        (status = 400, description = "Invalid body")
    ),
    request_body = AnalyzeIngredientsRequest
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientsRequest>,
) -> Result<Response<AnalyzeIngredientsResponse>, ApiError> {
    let data = state.service.analyze_ingredients(AnalyzeIngredientsInput {
        ingredients: payload.ingredients,
        allergen_ids: payload.allergen_ids,
    });

    Ok(Response::OK(AnalyzeIngredientsResponse { data }))
}
