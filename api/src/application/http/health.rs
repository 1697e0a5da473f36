use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub allergens: usize,
}

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        allergens: state.service.registry().len(),
    }))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health))
}
