//! The request-to-outcome mapping shared by every resource endpoint.
//!
//! Handlers validate their inputs, build a typed query, and call one of
//! these functions. Each issues its store calls sequentially and converts
//! every outcome into exactly one [`AppResult`].

use gatherly_core::error::CoreError;
use gatherly_core::query::{Patch, Query};
use gatherly_core::resource::{DeletePolicy, Resource};
use gatherly_core::types::Record;
use gatherly_db::{RecordStore, StoreError};

use crate::error::{AppError, AppResult};

/// How a store failure is reported to the client.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// 500 with the message and the underlying error as `details`.
    Detailed(&'static str),
    /// 500 with the message only.
    Generic(&'static str),
}

impl Failure {
    fn wrap(self, err: StoreError) -> AppError {
        match self {
            Failure::Detailed(message) => AppError::backend(message, err),
            Failure::Generic(message) => AppError::opaque(message, err),
        }
    }
}

fn not_found(resource: Resource) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: resource.entity(),
    })
}

/// Single-row lookup. An empty result is a 404 for the query's resource.
pub async fn fetch_one(
    store: &dyn RecordStore,
    query: &Query,
    failure: Failure,
) -> AppResult<Record> {
    store
        .find_by_key(query)
        .await
        .map_err(|e| failure.wrap(e))?
        .ok_or_else(|| not_found(query.resource))
}

/// Filtered listing. An empty result is a successful empty array.
pub async fn fetch_list(
    store: &dyn RecordStore,
    query: &Query,
    failure: Failure,
) -> AppResult<Vec<Record>> {
    store.list_by_filter(query).await.map_err(|e| failure.wrap(e))
}

/// Insert one row and return what the store reports as inserted.
pub async fn create(
    store: &dyn RecordStore,
    resource: Resource,
    patch: &Patch,
    failure: Failure,
) -> AppResult<Vec<Record>> {
    store
        .insert(resource, patch)
        .await
        .map_err(|e| failure.wrap(e))
}

/// Apply a partial patch to the single row `query` identifies.
///
/// An empty patch is rejected before the store is called; zero affected
/// rows is a 404.
pub async fn update_one(
    store: &dyn RecordStore,
    query: &Query,
    patch: &Patch,
    failure: Failure,
) -> AppResult<Record> {
    if patch.is_empty() {
        return Err(CoreError::Validation("at least one field is required".to_string()).into());
    }

    store
        .update(query, patch)
        .await
        .map_err(|e| failure.wrap(e))?
        .into_iter()
        .next()
        .ok_or_else(|| not_found(query.resource))
}

/// Delete the row `query` identifies, following the resource's policy.
///
/// [`DeletePolicy::ProbeThenConfirm`] looks the row up first: a probe error
/// or an empty probe is a 404 and nothing is deleted.
/// [`DeletePolicy::Direct`] deletes straight away and does not care whether
/// anything matched.
pub async fn delete(store: &dyn RecordStore, query: &Query, failure: Failure) -> AppResult<()> {
    let resource = query.resource;

    if resource.delete_policy() == DeletePolicy::ProbeThenConfirm {
        match store.find_by_key(query).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(not_found(resource)),
            Err(e) => return Err(AppError::probe_failed(resource.entity(), e)),
        }
    }

    let removed = store
        .delete_by_key(query)
        .await
        .map_err(|e| failure.wrap(e))?;
    tracing::debug!(table = resource.table(), removed, "Delete executed");
    Ok(())
}
