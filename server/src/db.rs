use anyhow::{anyhow, Context, Result};
use cookbook_core::search;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel::sql_types::{Nullable, Text};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

// Unicode-aware replacement for SQLite's `lower()`, which only folds ASCII.
// Backed by `cookbook_core::search::fold_case`, which also builds the pattern.
// Registered on every pooled connection by `ConnectionSetup`.
diesel::define_sql_function! {
    fn fold_case(x: Nullable<Text>) -> Nullable<Text>;
}

/// Per-connection setup run when the pool opens a new SQLite connection.
#[derive(Debug)]
struct ConnectionSetup;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(r2d2::Error::QueryError)?;
        fold_case_utils::register_impl(conn, |text: Option<String>| {
            text.map(|t| search::fold_case(&t))
        })
        .map_err(r2d2::Error::QueryError)
    }
}

pub fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionSetup))
        .build(manager)
        .with_context(|| format!("Failed to create database pool for {database_url}"))?;

    // Run pending migrations on startup
    let mut conn = pool
        .get()
        .context("Failed to get DB connection for migrations")?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Failed to run database migrations: {e}"))?;

    Ok(pool)
}
