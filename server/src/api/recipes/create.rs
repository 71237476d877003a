use crate::api::ErrorResponse;
use crate::api::recipes::get::RecipeResponse;
use crate::error::AppError;
use crate::models::NewRecipe;
use crate::store;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use cookbook_core::validate_recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    #[schema(example = "Чашушули")]
    pub dish_name: String,
    #[schema(example = 60)]
    pub cooking_time_minutes: i32,
    #[schema(example = "Говядина: 800г, растит. масло: 1 ст. ложка, томаты: 300г")]
    pub ingredients: String,
    #[schema(example = "Тушёное мясо кусочками с томатами, луком, болгарским перцем")]
    pub description: String,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponse),
        (status = 400, description = "Invalid field value", body = ErrorResponse),
        (status = 409, description = "A recipe with this dish_name already exists", body = ErrorResponse),
        (status = 422, description = "Missing or mistyped field")
    )
)]
pub async fn create_recipe(
    State(pool): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), AppError> {
    validate_recipe(
        &request.dish_name,
        request.cooking_time_minutes,
        &request.ingredients,
    )?;

    let mut conn = pool.get()?;

    let recipe = store::create(
        &mut conn,
        &NewRecipe {
            dish_name: &request.dish_name,
            cooking_time_minutes: request.cooking_time_minutes,
            ingredients: &request.ingredients,
            description: Some(&request.description),
            views_count: 0,
        },
    )?;

    tracing::info!(recipe_id = recipe.recipe_id, "Created recipe");

    Ok((StatusCode::CREATED, Json(RecipeResponse::from(recipe))))
}
