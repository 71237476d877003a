use crate::api::ErrorResponse;
use crate::error::AppError;
use crate::models::Recipe;
use crate::store;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full recipe as stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    pub recipe_id: i32,
    pub dish_name: String,
    pub cooking_time_minutes: i32,
    pub ingredients: String,
    pub description: Option<String>,
    pub views_count: i32,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            recipe_id: recipe.recipe_id,
            dish_name: recipe.dish_name,
            cooking_time_minutes: recipe.cooking_time_minutes,
            ingredients: recipe.ingredients,
            description: recipe.description,
            views_count: recipe.views_count,
        }
    }
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}",
    tag = "recipes",
    params(
        ("recipe_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details; counts as one view", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(pool): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<Json<RecipeResponse>, AppError> {
    let mut conn = pool.get()?;

    // BEGIN IMMEDIATE takes the write lock up front, so a concurrent viewer
    // waits on busy_timeout instead of failing a SHARED -> RESERVED upgrade.
    let recipe = conn.immediate_transaction(|conn| {
        let recipe = store::get_by_id(conn, recipe_id)?.ok_or(AppError::NotFound)?;
        store::increment_views(conn, &recipe).map_err(AppError::from)
    })?;

    Ok(Json(RecipeResponse::from(recipe)))
}
