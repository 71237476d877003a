pub mod create;
pub mod get;
pub mod list;
pub mod search;


use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the /recipes endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list::list_recipes).post(create::create_recipe))
        .route("/recipes/{recipe_id}", get(get::get_recipe))
        .route("/recipes/search/", get(search::search_all_recipes))
        .route("/recipes/search/{query}", get(search::search_recipes))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        get::get_recipe,
        create::create_recipe,
        search::search_recipes,
    ),
    components(schemas(
        list::RecipeSummary,
        get::RecipeResponse,
        create::CreateRecipeRequest,
    ))
)]
pub struct ApiDoc;
