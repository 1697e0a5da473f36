use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_allergen::{__path_get_allergen, get_allergen},
    list_allergens::{__path_list_allergens, list_allergens},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_allergens, get_allergen))]
pub struct AllergenApiDoc;

pub fn allergen_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/allergens", state.args.server.root_path),
            get(list_allergens),
        )
        .route(
            &format!("{}/allergens/{{allergen_id}}", state.args.server.root_path),
            get(get_allergen),
        )
}
