use alphago_core::domain::ingredient_check::{
    ports::IngredientCheckService, value_objects::AnalyzeLabelTextInput,
};
use axum::extract::State;

use crate::application::http::{
    ingredient_check::{
        handlers::analyze_ingredients::AnalyzeIngredientsResponse,
        validators::AnalyzeLabelTextRequest,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze-text",
    tag = "ingredient-check",
    summary = "Analyze printed label text",
    description = "Splits a printed ingredient list on commas and semicolons, then analyzes every entry",
    responses(
        (status = 200, body = AnalyzeIngredientsResponse),
        (status = 400, description = "Invalid body")
    ),
    request_body = AnalyzeLabelTextRequest
)]
pub async fn analyze_label_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeLabelTextRequest>,
) -> Result<Response<AnalyzeIngredientsResponse>, ApiError> {
    let data = state.service.analyze_label_text(AnalyzeLabelTextInput {
        label_text: payload.label_text,
        allergen_ids: payload.allergen_ids,
    });

    Ok(Response::OK(AnalyzeIngredientsResponse { data }))
}
