//! Storage collaborators for the gateway.
//!
//! [`RecordStore`] is the narrow interface handlers call, one method per
//! access pattern. [`PgStore`] serves it from PostgreSQL; [`ReferenceDb`] is
//! an in-memory implementation used by tests and local tooling.

use sqlx::postgres::PgPoolOptions;

pub mod postgres;
pub mod reference;
pub mod sql;
pub mod store;

pub use postgres::PgStore;
pub use reference::ReferenceDb;
pub use store::{RecordStore, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
