use crate::api::recipes::list::RecipeSummary;
use crate::error::AppError;
use crate::models::Recipe;
use crate::store;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use cookbook_core::{hybrid_search, RecipeSource};
use diesel::SqliteConnection;

/// Feeds both search phases from one pooled connection.
struct StoreSource<'a> {
    conn: &'a mut SqliteConnection,
}

impl RecipeSource for StoreSource<'_> {
    type Recipe = Recipe;
    type Error = AppError;

    fn find_by_pattern(&mut self, like_pattern: &str) -> Result<Vec<Recipe>, AppError> {
        Ok(store::search_by_pattern(self.conn, like_pattern)?)
    }

    fn load_all(&mut self) -> Result<Vec<Recipe>, AppError> {
        Ok(store::list_all(self.conn)?)
    }
}

fn run_search(pool: &AppState, query: &str) -> Result<Vec<RecipeSummary>, AppError> {
    let mut conn = pool.get()?;

    let found = hybrid_search(&mut StoreSource { conn: &mut conn }, query)?;
    tracing::debug!(query, hits = found.len(), "Searched recipes");

    Ok(found.into_iter().map(RecipeSummary::from).collect())
}

#[utoipa::path(
    get,
    path = "/recipes/search/{query}",
    tag = "recipes",
    params(
        ("query" = String, Path, description = "Text to find in dish names and descriptions, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching recipes, empty when nothing matches", body = Vec<RecipeSummary>)
    )
)]
pub async fn search_recipes(
    State(pool): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<RecipeSummary>>, AppError> {
    run_search(&pool, &query).map(Json)
}

/// `/recipes/search/` with nothing after the slash: the empty query.
pub async fn search_all_recipes(
    State(pool): State<AppState>,
) -> Result<Json<Vec<RecipeSummary>>, AppError> {
    run_search(&pool, "").map(Json)
}
