use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    clear_scan_cache::{__path_clear_scan_cache, clear_scan_cache},
    get_scan_cache::{__path_get_scan_cache, get_scan_cache},
    scan_label_image::{MAX_IMAGE_SIZE, __path_scan_label_image, scan_label_image},
    scan_label_text::{__path_scan_label_text, scan_label_text},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(scan_label_text, scan_label_image, get_scan_cache, clear_scan_cache))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/scans/text", state.args.server.root_path),
            post(scan_label_text),
        )
        .route(
            &format!("{}/scans/image", state.args.server.root_path),
            // Leave room for the multipart framing around the image itself.
            post(scan_label_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .route(
            &format!("{}/scans/cache", state.args.server.root_path),
            get(get_scan_cache).delete(clear_scan_cache),
        )
}
