use alphago_core::domain::ingredient_check::{
    entities::IngredientClassificationResult, ports::IngredientCheckService,
    value_objects::ClassifyIngredientInput,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient_check::validators::ClassifyIngredientRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifyIngredientResponse {
    pub data: IngredientClassificationResult,
}

#[utoipa::path(
    post,
    path = "/classify",
    tag = "ingredient-check",
    summary = "Classify one ingredient",
    description = "Keyword check of a single ingredient against the selected allergens",
    responses(
        (status = 200, body = ClassifyIngredientResponse),
        (status = 400, description = "Invalid body")
    ),
    request_body = ClassifyIngredientRequest
)]
pub async fn classify_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ClassifyIngredientRequest>,
) -> Result<Response<ClassifyIngredientResponse>, ApiError> {
    let data = state.service.classify_ingredient(ClassifyIngredientInput {
        ingredient_name: payload.ingredient_name,
        allergen_ids: payload.allergen_ids,
    });

    Ok(Response::OK(ClassifyIngredientResponse { data }))
}
