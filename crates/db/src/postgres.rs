//! PostgreSQL-backed [`RecordStore`].

use async_trait::async_trait;
use gatherly_core::query::{Patch, Query};
use gatherly_core::resource::Resource;
use gatherly_core::types::Record;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryScalar;
use sqlx::Postgres;

use crate::sql;
use crate::store::{RecordStore, StoreError};
use crate::DbPool;

/// Serves [`RecordStore`] from a shared connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Build a JSON-returning query with every value bound as text.
fn json_query<'q>(
    sql: &'q str,
    binds: impl IntoIterator<Item = &'q str>,
) -> QueryScalar<'q, Postgres, Record, PgArguments> {
    tracing::trace!(sql, "Executing query");
    binds
        .into_iter()
        .fold(sqlx::query_scalar::<_, Record>(sql), |q, value| {
            q.bind(value)
        })
}

fn predicate_values(query: &Query) -> impl Iterator<Item = &str> {
    query.predicates.iter().map(|p| p.value.as_str())
}

#[async_trait]
impl RecordStore for PgStore {
    async fn find_by_key(&self, query: &Query) -> Result<Option<Record>, StoreError> {
        let sql = sql::select(query);
        let row = json_query(&sql, predicate_values(query))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_by_filter(&self, query: &Query) -> Result<Vec<Record>, StoreError> {
        let sql = sql::select(query);
        let rows = json_query(&sql, predicate_values(query))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, resource: Resource, patch: &Patch) -> Result<Vec<Record>, StoreError> {
        let sql = sql::insert(resource, patch);
        let rows = json_query(&sql, patch.iter().map(|(_, v)| v))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, query: &Query, patch: &Patch) -> Result<Vec<Record>, StoreError> {
        let sql = sql::update(query, patch);
        let binds = patch.iter().map(|(_, v)| v).chain(predicate_values(query));
        let rows = json_query(&sql, binds).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn delete_by_key(&self, query: &Query) -> Result<u64, StoreError> {
        let sql = sql::delete(query);
        tracing::trace!(sql = %sql, "Executing query");
        let result = predicate_values(query)
            .fold(sqlx::query(&sql), |q, value| q.bind(value))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn health(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
