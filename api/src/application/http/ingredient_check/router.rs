use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    analyze_ingredients::{__path_analyze_ingredients, analyze_ingredients},
    analyze_label_text::{__path_analyze_label_text, analyze_label_text},
    classify_ingredient::{__path_classify_ingredient, classify_ingredient},
    suggest_keywords::{__path_suggest_keywords, suggest_keywords},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    classify_ingredient,
    analyze_ingredients,
    analyze_label_text,
    suggest_keywords
))]
pub struct IngredientCheckApiDoc;

pub fn ingredient_check_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients/classify", state.args.server.root_path),
            post(classify_ingredient),
        )
        .route(
            &format!("{}/ingredients/analyze", state.args.server.root_path),
            post(analyze_ingredients),
        )
        .route(
            &format!("{}/ingredients/analyze-text", state.args.server.root_path),
            post(analyze_label_text),
        )
        .route(
            &format!("{}/ingredients/suggest", state.args.server.root_path),
            get(suggest_keywords),
        )
}
