use crate::api::ErrorResponse;
use crate::error::AppError;
use crate::models::Recipe;
use crate::store;
use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Short form of a recipe used by listing and search.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeSummary {
    pub recipe_id: i32,
    pub dish_name: String,
    pub views_count: i32,
    pub cooking_time_minutes: i32,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            recipe_id: recipe.recipe_id,
            dish_name: recipe.dish_name,
            views_count: recipe.views_count,
            cooking_time_minutes: recipe.cooking_time_minutes,
        }
    }
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, most viewed first, then quickest to cook", body = Vec<RecipeSummary>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(pool): State<AppState>,
) -> Result<Json<Vec<RecipeSummary>>, AppError> {
    let mut conn = pool.get()?;

    let recipes = store::list_by_popularity(&mut conn)?;

    Ok(Json(recipes.into_iter().map(RecipeSummary::from).collect()))
}
