//! Handlers for the vendor directory (read-only).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gatherly_core::query::Query as RecordQuery;
use gatherly_core::resource::Resource;
use gatherly_core::validation::require;

use crate::error::AppResult;
use crate::gateway::{self, Failure};
use crate::state::AppState;

/// GET /vendors
///
/// Every vendor, ordered by business name.
pub async fn list_vendors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let query = RecordQuery::on(Resource::Vendor).order_asc(Resource::Vendor.display_order());
    let vendors = gateway::fetch_list(
        state.store.as_ref(),
        &query,
        Failure::Detailed("Failed to fetch vendors"),
    )
    .await?;

    Ok(Json(vendors))
}

/// GET /vendors/{vendor_id}
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let vendor_id = require("vendor_id", Some(vendor_id.as_str()))?;

    let vendor = gateway::fetch_one(
        state.store.as_ref(),
        &RecordQuery::by_key(Resource::Vendor, vendor_id),
        Failure::Detailed("Failed to fetch vendor"),
    )
    .await?;

    Ok(Json(vendor))
}
