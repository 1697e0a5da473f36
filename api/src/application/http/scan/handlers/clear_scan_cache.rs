use alphago_core::domain::scan::ports::ScanService;
use axum::extract::State;

use super::get_scan_cache::ScanCacheResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/cache",
    tag = "scan",
    summary = "Clear the scan cache",
    description = "Drops every cached report so the next scan of any label calls the model again",
    responses(
        (status = 200, body = ScanCacheResponse)
    ),
)]
pub async fn clear_scan_cache(
    State(state): State<AppState>,
) -> Result<Response<ScanCacheResponse>, ApiError> {
    state.service.clear_scan_cache().await;
    let data = state.service.scan_cache_stats().await;

    Ok(Response::OK(ScanCacheResponse { data }))
}
