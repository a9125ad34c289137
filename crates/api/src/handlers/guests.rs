//! Handlers for an event's guest list.
//!
//! A guest is addressed by the composite `event_id` + `guest_id`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gatherly_core::query::{Patch, Query as RecordQuery};
use gatherly_core::resource::{guest, Resource};
use gatherly_core::validation::{optional, reject_blank, require, require_all, require_email};
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::gateway::{self, Failure};
use crate::query::{CreateGuest, UpdateGuest};
use crate::state::AppState;

/// RSVP state given to guests created without one.
const DEFAULT_RSVP_STATUS: &str = "pending";

fn guest_query(event_id: &str, guest_id: &str) -> RecordQuery {
    RecordQuery::on(Resource::Guest)
        .eq(guest::EVENT_ID, event_id)
        .eq(guest::GUEST_ID, guest_id)
        .single()
}

/// GET /events/{event_id}/guests
pub async fn list_guests(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event_id = require("event_id", Some(event_id.as_str()))?;

    let query = RecordQuery::on(Resource::Guest)
        .eq(guest::EVENT_ID, event_id)
        .order_asc(Resource::Guest.display_order());
    let guests = gateway::fetch_list(
        state.store.as_ref(),
        &query,
        Failure::Detailed("Failed to fetch guests"),
    )
    .await?;

    Ok(Json(guests))
}

/// GET /events/{event_id}/guests/{guest_id}
pub async fn get_guest(
    State(state): State<AppState>,
    Path((event_id, guest_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let event_id = require("event_id", Some(event_id.as_str()))?;
    let guest_id = require("guest_id", Some(guest_id.as_str()))?;

    let guest = gateway::fetch_one(
        state.store.as_ref(),
        &guest_query(event_id, guest_id),
        Failure::Detailed("Failed to fetch guest"),
    )
    .await?;

    Ok(Json(guest))
}

/// POST /events/{event_id}/guests
///
/// Add a guest to an event. `rsvp_status` defaults to `pending`.
pub async fn create_guest(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    AppJson(input): AppJson<CreateGuest>,
) -> AppResult<impl IntoResponse> {
    let event_id = require("event_id", Some(event_id.as_str()))?;
    require_all(&[
        ("name", input.name.as_deref()),
        ("email", input.email.as_deref()),
    ])?;
    let name = require("name", input.name.as_deref())?;
    let email = require("email", input.email.as_deref())?;
    require_email("email", email)?;

    let guest_id = Uuid::new_v4().to_string();
    let rsvp_status = optional(input.rsvp_status.as_deref()).unwrap_or(DEFAULT_RSVP_STATUS);

    let patch = Patch::new()
        .set(guest::GUEST_ID, guest_id.as_str())
        .set(guest::EVENT_ID, event_id)
        .set(guest::NAME, name)
        .set(guest::EMAIL, email)
        .set(guest::RSVP_STATUS, rsvp_status)
        .set_opt(guest::CELL_NUMBER, input.cell_number.as_deref())
        .set_opt(guest::DIETARY_INFO, input.dietary_info.as_deref());

    let created = gateway::create(
        state.store.as_ref(),
        Resource::Guest,
        &patch,
        Failure::Generic("Failed to add guest"),
    )
    .await?;

    tracing::info!(event_id, guest_id = %guest_id, "Guest added");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /events/{event_id}/guests/{guest_id}
pub async fn update_guest(
    State(state): State<AppState>,
    Path((event_id, guest_id)): Path<(String, String)>,
    AppJson(input): AppJson<UpdateGuest>,
) -> AppResult<impl IntoResponse> {
    let event_id = require("event_id", Some(event_id.as_str()))?;
    let guest_id = require("guest_id", Some(guest_id.as_str()))?;
    let name = reject_blank("name", input.name.as_deref())?;
    let email = reject_blank("email", input.email.as_deref())?;
    if let Some(email) = email {
        require_email("email", email)?;
    }

    let patch = Patch::new()
        .set_opt(guest::NAME, name)
        .set_opt(guest::EMAIL, email)
        .set_opt(guest::RSVP_STATUS, optional(input.rsvp_status.as_deref()))
        .set_opt(guest::CELL_NUMBER, input.cell_number.as_deref())
        .set_opt(guest::DIETARY_INFO, input.dietary_info.as_deref());

    let guest = gateway::update_one(
        state.store.as_ref(),
        &guest_query(event_id, guest_id),
        &patch,
        Failure::Generic("Failed to update guest"),
    )
    .await?;

    tracing::info!(event_id, guest_id, fields = patch.len(), "Guest updated");

    Ok(Json(guest))
}

/// DELETE /events/{event_id}/guests/{guest_id}
///
/// Always 204 once the store accepts the delete, whether or not a row
/// matched.
pub async fn delete_guest(
    State(state): State<AppState>,
    Path((event_id, guest_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let event_id = require("event_id", Some(event_id.as_str()))?;
    let guest_id = require("guest_id", Some(guest_id.as_str()))?;

    gateway::delete(
        state.store.as_ref(),
        &guest_query(event_id, guest_id),
        Failure::Generic("Failed to delete guest"),
    )
    .await?;

    tracing::info!(event_id, guest_id, "Guest deleted");

    Ok(StatusCode::NO_CONTENT)
}
