//! Data access for the `recipes_data` table.
//!
//! Every function works on a connection checked out by the caller and opens a
//! `db.query` span, which `telemetry::DbQueryCountingLayer` counts per request.

use crate::db::fold_case;
use crate::models::{NewRecipe, Recipe};
use crate::schema::recipes_data;
use cookbook_core::search::LIKE_ESCAPE;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;
use tracing::span::EnteredSpan;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Recipe '{0}' already exists")]
    DuplicateDishName(String),

    #[error("Database query failed: {0}")]
    Query(#[from] DieselError),
}

fn query_span(operation: &'static str) -> EnteredSpan {
    tracing::info_span!("db.query", db.operation = operation).entered()
}

/// Every recipe, in insertion order.
pub fn list_all(conn: &mut SqliteConnection) -> QueryResult<Vec<Recipe>> {
    let _span = query_span("list_all");
    recipes_data::table
        .select(Recipe::as_select())
        .order(recipes_data::recipe_id.asc())
        .load(conn)
}

/// Every recipe, most viewed first; ties go to the quicker dish.
pub fn list_by_popularity(conn: &mut SqliteConnection) -> QueryResult<Vec<Recipe>> {
    let _span = query_span("list_by_popularity");
    recipes_data::table
        .select(Recipe::as_select())
        .order((
            recipes_data::views_count.desc(),
            recipes_data::cooking_time_minutes.asc(),
        ))
        .load(conn)
}

pub fn get_by_id(conn: &mut SqliteConnection, recipe_id: i32) -> QueryResult<Option<Recipe>> {
    let _span = query_span("get_by_id");
    recipes_data::table
        .find(recipe_id)
        .select(Recipe::as_select())
        .first(conn)
        .optional()
}

/// Inserts a recipe and reads the stored row back.
///
/// The unique index on `dish_name` is the only duplicate check.
pub fn create(conn: &mut SqliteConnection, new_recipe: &NewRecipe) -> Result<Recipe, StoreError> {
    let _span = query_span("create");
    conn.immediate_transaction::<_, DieselError, _>(|conn| {
        diesel::insert_into(recipes_data::table)
            .values(new_recipe)
            .execute(conn)?;

        recipes_data::table
            .filter(recipes_data::dish_name.eq(new_recipe.dish_name))
            .select(Recipe::as_select())
            .first(conn)
    })
    .map_err(|err| match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            StoreError::DuplicateDishName(new_recipe.dish_name.to_string())
        }
        other => StoreError::Query(other),
    })
}

/// Writes back `recipe.views_count + 1`.
///
/// The new value comes from the row as the caller read it, not from an
/// in-database increment, so two concurrent viewers can both write the same
/// count and one view is lost.
pub fn increment_views(conn: &mut SqliteConnection, recipe: &Recipe) -> QueryResult<Recipe> {
    let _span = query_span("increment_views");
    let views_count = recipe.views_count.saturating_add(1);

    diesel::update(recipes_data::table.find(recipe.recipe_id))
        .set(recipes_data::views_count.eq(views_count))
        .execute(conn)?;

    Ok(Recipe {
        views_count,
        ..recipe.clone()
    })
}

/// Phase one search: `like_pattern` against the case-folded dish name or
/// description. The pattern must already be escaped with `LIKE_ESCAPE`.
pub fn search_by_pattern(
    conn: &mut SqliteConnection,
    like_pattern: &str,
) -> QueryResult<Vec<Recipe>> {
    let _span = query_span("search_by_pattern");
    recipes_data::table
        .filter(
            fold_case(recipes_data::dish_name.nullable())
                .like(like_pattern)
                .escape(LIKE_ESCAPE)
                .or(fold_case(recipes_data::description)
                    .like(like_pattern)
                    .escape(LIKE_ESCAPE)),
        )
        .select(Recipe::as_select())
        .order(recipes_data::recipe_id.asc())
        .load(conn)
}

/// Replaces the whole catalog with `recipes` in one transaction.
pub fn replace_all(
    conn: &mut SqliteConnection,
    recipes: &[NewRecipe],
) -> Result<usize, StoreError> {
    let _span = query_span("replace_all");
    let inserted = conn.immediate_transaction::<_, DieselError, _>(|conn| {
        let deleted = diesel::delete(recipes_data::table).execute(conn)?;
        tracing::debug!(deleted, "Cleared recipes_data");

        if recipes.is_empty() {
            return Ok(0);
        }
        diesel::insert_into(recipes_data::table)
            .values(recipes)
            .execute(conn)
    })?;

    Ok(inserted)
}
