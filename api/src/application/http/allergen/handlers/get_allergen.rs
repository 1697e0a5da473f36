use alphago_core::domain::{
    allergen::entities::AllergenDefinition, ingredient_check::ports::IngredientCheckService,
};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetAllergenResponse {
    pub data: AllergenDefinition,
}

#[utoipa::path(
    get,
    path = "/{allergen_id}",
    tag = "allergen",
    summary = "Get an allergen",
    responses(
        (status = 200, body = GetAllergenResponse),
        (status = 404, description = "Unknown allergen id")
    ),
    params(
        ("allergen_id" = String, Path, description = "Allergen id, e.g. alpha-gal"),
    ),
)]
pub async fn get_allergen(
    Path(allergen_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetAllergenResponse>, ApiError> {
    let data = state.service.get_allergen(&allergen_id).map_err(|_| {
        ApiError::NotFound(format!("Allergen '{}' not found", allergen_id))
    })?;

    Ok(Response::OK(GetAllergenResponse { data }))
}
