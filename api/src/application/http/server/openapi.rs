use utoipa::OpenApi;

use crate::application::http::{
    allergen::router::AllergenApiDoc, health::HealthApiDoc,
    ingredient_check::router::IngredientCheckApiDoc, scan::router::ScanApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AlphaGo Allergen API"
    ),
    nest(
        (path = "/allergens", api = AllergenApiDoc),
        (path = "/ingredients", api = IngredientCheckApiDoc),
        (path = "/scans", api = ScanApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
