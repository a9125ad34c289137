//! Handlers for events.
//!
//! Event deletes probe for the row first and answer with a confirmation
//! body; guest deletes (see [`super::guests`]) do not.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gatherly_core::query::{Patch, Query as RecordQuery};
use gatherly_core::resource::{event, Resource};
use gatherly_core::schedule::{compose_timestamp, resolve_timestamp};
use gatherly_core::validation::{optional, reject_blank, require, require_all};
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::gateway::{self, Failure};
use crate::query::{CreateEvent, PlannerFilter, UpdateEvent};
use crate::response::{DeletedEvent, EventExport, UpdatedEvent};
use crate::state::AppState;

/// GET /events?planner_id=
///
/// List a planner's events, earliest first.
pub async fn list_events(
    State(state): State<AppState>,
    Query(filter): Query<PlannerFilter>,
) -> AppResult<impl IntoResponse> {
    let planner_id = require("planner_id", filter.planner_id.as_deref())?;

    let query = RecordQuery::on(Resource::Event)
        .eq(event::PLANNER_ID, planner_id)
        .order_asc(Resource::Event.display_order());
    let events = gateway::fetch_list(
        state.store.as_ref(),
        &query,
        Failure::Detailed("Failed to fetch events"),
    )
    .await?;

    Ok(Json(events))
}

/// POST /events
///
/// Create an event for a planner. `date` plus optional `start_time` become
/// the stored `start_time` timestamp.
pub async fn create_event(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    require_all(&[
        ("planner_id", input.planner_id.as_deref()),
        ("name", input.name.as_deref()),
        ("date", input.date.as_deref()),
        ("venue", input.venue.as_deref()),
        ("theme", input.theme.as_deref()),
    ])?;
    let planner_id = require("planner_id", input.planner_id.as_deref())?;
    let name = require("name", input.name.as_deref())?;
    let date = require("date", input.date.as_deref())?;
    let venue = require("venue", input.venue.as_deref())?;
    let theme = require("theme", input.theme.as_deref())?;

    let start_time = compose_timestamp(date, optional(input.start_time.as_deref()))?;
    let end_time = optional(input.end_time.as_deref())
        .map(|time| compose_timestamp(date, Some(time)))
        .transpose()?;

    let event_id = optional(input.event_id.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let patch = Patch::new()
        .set(event::EVENT_ID, event_id.as_str())
        .set(event::PLANNER_ID, planner_id)
        .set(event::NAME, name)
        .set_opt(event::DESCRIPTION, input.description.as_deref())
        .set(event::START_TIME, start_time)
        .set_opt(event::END_TIME, end_time)
        .set(event::VENUE, venue)
        .set(event::THEME, theme);

    let created = gateway::create(
        state.store.as_ref(),
        Resource::Event,
        &patch,
        Failure::Generic("Failed to create event"),
    )
    .await?;

    tracing::info!(event_id = %event_id, "Event created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /events/id/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event_id = require("event_id", Some(event_id.as_str()))?;

    let event = gateway::fetch_one(
        state.store.as_ref(),
        &RecordQuery::by_key(Resource::Event, event_id),
        Failure::Detailed("Failed to fetch event"),
    )
    .await?;

    Ok(Json(event))
}

/// PUT /events/{event_id}
///
/// Partially update an event. When `date` is supplied it is combined with
/// `start_time` (defaulting to midnight) into the stored timestamp.
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    AppJson(input): AppJson<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    let event_id = require("event_id", Some(event_id.as_str()))?;
    let name = reject_blank("name", input.name.as_deref())?;
    let venue = reject_blank("venue", input.venue.as_deref())?;
    let theme = reject_blank("theme", input.theme.as_deref())?;
    let start_time = resolve_timestamp(input.date.as_deref(), input.start_time.as_deref())?;
    let end_time = match optional(input.end_time.as_deref()) {
        Some(time) => resolve_timestamp(input.date.as_deref(), Some(time))?,
        None => None,
    };

    let patch = Patch::new()
        .set_opt(event::NAME, name)
        .set_opt(event::DESCRIPTION, input.description.as_deref())
        .set_opt(event::START_TIME, start_time)
        .set_opt(event::END_TIME, end_time)
        .set_opt(event::VENUE, venue)
        .set_opt(event::THEME, theme);

    let event = gateway::update_one(
        state.store.as_ref(),
        &RecordQuery::by_key(Resource::Event, event_id),
        &patch,
        Failure::Generic("Failed to update event"),
    )
    .await?;

    tracing::info!(event_id, fields = patch.len(), "Event updated");

    Ok(Json(UpdatedEvent {
        success: true,
        event,
    }))
}

/// DELETE /events/{event_id}
///
/// Probe, then delete. A missing event (or a failed probe) is a 404.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event_id = require("event_id", Some(event_id.as_str()))?;

    gateway::delete(
        state.store.as_ref(),
        &RecordQuery::by_key(Resource::Event, event_id),
        Failure::Detailed("Failed to delete event"),
    )
    .await?;

    tracing::info!(event_id, "Event deleted");

    Ok(Json(DeletedEvent {
        message: "Event deleted successfully",
        event_id: event_id.to_string(),
    }))
}

/// GET /events/export
///
/// Every event, earliest first, with a count.
pub async fn export_events(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let query = RecordQuery::on(Resource::Event).order_asc(Resource::Event.display_order());
    let events = gateway::fetch_list(
        state.store.as_ref(),
        &query,
        Failure::Detailed("Failed to export events"),
    )
    .await?;

    tracing::info!(count = events.len(), "Events exported");

    Ok(Json(EventExport {
        success: true,
        count: events.len(),
        events,
    }))
}
