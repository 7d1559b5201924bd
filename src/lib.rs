pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod schema;

use std::io::{BufRead, Write};

use diesel::pg::PgConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use application::{seed, Console, Session, SessionSummary};
use errors::AppError;
use infrastructure::{DieselStore, InMemoryStore};

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), AppError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::Migration(e.to_string()))?;
    for version in applied {
        log::info!("Applied migration {}", version);
    }
    Ok(())
}

/// Runs one order-taking session in a single transaction. The transaction
/// commits when the session ends normally and rolls back on any error.
pub fn run<R: BufRead, W: Write>(
    pool: &DbPool,
    console: Console<R, W>,
) -> Result<SessionSummary, AppError> {
    let mut conn = pool.get()?;
    let conn: &mut PgConnection = &mut conn;

    log::debug!("Begin of transaction");
    let summary = conn.transaction::<_, AppError, _>(|conn| {
        let mut store = DieselStore::new(conn);
        Session::new(console).run(&mut store, seed()?)
    })?;
    log::debug!("End of transaction");

    Ok(summary)
}

/// Runs a session against an in-memory store; nothing is written anywhere.
pub fn run_dry<R: BufRead, W: Write>(
    console: Console<R, W>,
) -> Result<(SessionSummary, InMemoryStore), AppError> {
    let mut store = InMemoryStore::default();
    let summary = Session::new(console).run(&mut store, seed()?)?;
    Ok((summary, store))
}
