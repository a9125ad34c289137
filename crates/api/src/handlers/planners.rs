//! Handlers for planners (read-only).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gatherly_core::query::Query as RecordQuery;
use gatherly_core::resource::Resource;
use gatherly_core::validation::require;

use crate::error::AppResult;
use crate::gateway::{self, Failure};
use crate::state::AppState;

/// GET /planners/{planner_id}
pub async fn get_planner(
    State(state): State<AppState>,
    Path(planner_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let planner_id = require("planner_id", Some(planner_id.as_str()))?;

    let planner = gateway::fetch_one(
        state.store.as_ref(),
        &RecordQuery::by_key(Resource::Planner, planner_id),
        Failure::Detailed("Failed to fetch planner"),
    )
    .await?;

    Ok(Json(planner))
}
