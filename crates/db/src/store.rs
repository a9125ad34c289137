use async_trait::async_trait;
use gatherly_core::query::{Patch, Query};
use gatherly_core::resource::Resource;
use gatherly_core::types::Record;

/// Failure reported by a storage collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A query or transport error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store refused the operation (duplicate key, unavailable backend).
    #[error("{0}")]
    Rejected(String),
}

/// The storage operations the gateway needs, one per access pattern.
///
/// Every method receives a fully-typed [`Query`] or [`Patch`]; handlers
/// never see SQL. Each call is a single round-trip and implementations keep
/// no per-request state.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch at most one row matching `query`. `Ok(None)` when none match.
    async fn find_by_key(&self, query: &Query) -> Result<Option<Record>, StoreError>;

    /// Fetch every row matching `query`, honouring its sort field.
    async fn list_by_filter(&self, query: &Query) -> Result<Vec<Record>, StoreError>;

    /// Insert one row into `resource` and return what was stored.
    async fn insert(&self, resource: Resource, patch: &Patch) -> Result<Vec<Record>, StoreError>;

    /// Apply `patch` to the rows matching `query` and return them.
    ///
    /// An empty result means nothing matched.
    async fn update(&self, query: &Query, patch: &Patch) -> Result<Vec<Record>, StoreError>;

    /// Delete the rows matching `query`, returning how many were removed.
    async fn delete_by_key(&self, query: &Query) -> Result<u64, StoreError>;

    /// Cheap reachability probe for health reporting.
    async fn health(&self) -> Result<(), StoreError>;
}
