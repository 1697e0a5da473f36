use alphago_core::domain::scan::{
    entities::ScanReport,
    ports::ScanService,
    value_objects::{AnalyzeLabelInput, LabelInput},
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    scan::validators::ScanLabelTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanLabelResponse {
    pub data: ScanReport,
}

#[utoipa::path(
    post,
    path = "/text",
    tag = "scan",
    summary = "Scan label text",
    description = "Reads a printed ingredient list through the model, cross-checks the answer and falls back to keyword matching when the model is unreachable",
    responses(
        (status = 200, body = ScanLabelResponse),
        (status = 400, description = "Invalid body"),
        (status = 502, description = "Model answered with an error")
    ),
    request_body = ScanLabelTextRequest
)]
pub async fn scan_label_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ScanLabelTextRequest>,
) -> Result<Response<ScanLabelResponse>, ApiError> {
    let data = state
        .service
        .analyze_label(AnalyzeLabelInput {
            label: LabelInput::Text(payload.label_text),
            allergen_ids: payload.allergen_ids,
            language: payload.language,
            product_name: payload.product_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScanLabelResponse { data }))
}
