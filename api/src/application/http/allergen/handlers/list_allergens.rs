use alphago_core::domain::{
    allergen::entities::AllergenDefinition, ingredient_check::ports::IngredientCheckService,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListAllergensResponse {
    pub data: Vec<AllergenDefinition>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "allergen",
    summary = "List allergens",
    description = "Returns every allergen the scanner can check for, in catalog order",
    responses(
        (status = 200, body = ListAllergensResponse)
    ),
)]
pub async fn list_allergens(
    State(state): State<AppState>,
) -> Result<Response<ListAllergensResponse>, ApiError> {
    let data = state.service.list_allergens();

    Ok(Response::OK(ListAllergensResponse { data }))
}
