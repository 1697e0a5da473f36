use alphago_core::domain::scan::value_objects::OutputLanguage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ScanLabelTextRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "label_text must be between 1 and 5000 characters"
    ))]
    pub label_text: String,
    #[validate(length(max = 50, message = "at most 50 allergen ids"))]
    #[serde(default)]
    pub allergen_ids: Vec<String>,
    pub language: Option<OutputLanguage>,
    #[validate(length(max = 200, message = "product_name must be at most 200 characters"))]
    pub product_name: Option<String>,
}
