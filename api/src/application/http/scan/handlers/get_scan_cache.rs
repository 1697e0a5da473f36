use alphago_core::domain::scan::{cache::ScanCacheStats, ports::ScanService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanCacheResponse {
    pub data: ScanCacheStats,
}

#[utoipa::path(
    get,
    path = "/cache",
    tag = "scan",
    summary = "Scan cache size",
    description = "Number of model reports kept for repeated scans, and the cache capacity",
    responses(
        (status = 200, body = ScanCacheResponse)
    ),
)]
pub async fn get_scan_cache(
    State(state): State<AppState>,
) -> Result<Response<ScanCacheResponse>, ApiError> {
    let data = state.service.scan_cache_stats().await;

    Ok(Response::OK(ScanCacheResponse { data }))
}
