use alphago_core::domain::scan::{
    ports::ScanService,
    value_objects::{AnalyzeLabelInput, LabelInput, OutputLanguage},
};
use axum::extract::{Multipart, State};

use crate::application::http::{
    scan::handlers::scan_label_text::ScanLabelResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

#[utoipa::path(
    post,
    path = "/image",
    tag = "scan",
    summary = "Scan a label photo",
    description = "Multipart upload with an `image` part (max 10 MiB), optional comma separated `allergen_ids`, `language` and `product_name` parts",
    responses(
        (status = 200, body = ScanLabelResponse),
        (status = 400, description = "Missing or invalid parts"),
        (status = 413, description = "Image too large"),
        (status = 503, description = "Model unreachable")
    ),
)]
pub async fn scan_label_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ScanLabelResponse>, ApiError> {
    let mut image: Option<(Vec<u8>, String)> = None;
    let mut allergen_ids: Vec<String> = Vec::new();
    let mut language: Option<OutputLanguage> = None;
    let mut product_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("image/jpeg")
                    .to_string();
                if !mime_type.starts_with("image/") {
                    return Err(ApiError::BadRequest(format!(
                        "Unsupported content type: {}",
                        mime_type
                    )));
                }

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::PayloadTooLarge(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some((data.to_vec(), mime_type));
            }
            "allergen_ids" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read allergen_ids: {}", e))
                })?;
                allergen_ids.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(str::to_string),
                );
            }
            "language" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read language: {}", e))
                })?;
                language = Some(OutputLanguage::from(value.as_str()));
            }
            "product_name" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read product_name: {}", e))
                })?;
                product_name = Some(value).filter(|name| !name.trim().is_empty());
            }
            _ => {}
        }
    }

    let (data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let data = state
        .service
        .analyze_label(AnalyzeLabelInput {
            label: LabelInput::Image { data, mime_type },
            allergen_ids,
            language,
            product_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScanLabelResponse { data }))
}
