//! Out-of-band bootstrap of the demonstration catalog.

use crate::models::NewRecipe;
use crate::store::{self, StoreError};
use cookbook_core::SEED_RECIPES;
use diesel::SqliteConnection;

/// Clears `recipes_data` and loads the fixed seed dishes, keeping their view
/// counts. Returns the number of rows inserted.
pub fn seed_db(conn: &mut SqliteConnection) -> Result<usize, StoreError> {
    let rows: Vec<NewRecipe> = SEED_RECIPES
        .iter()
        .map(|seed| NewRecipe {
            dish_name: seed.dish_name,
            cooking_time_minutes: seed.cooking_time_minutes,
            ingredients: seed.ingredients,
            description: Some(seed.description),
            views_count: seed.views_count,
        })
        .collect();

    let inserted = store::replace_all(conn, &rows)?;
    tracing::info!(inserted, "Seeded recipe catalog");

    Ok(inserted)
}
