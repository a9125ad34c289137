//! Route definitions for events.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// ```text
/// GET    /events?planner_id=   -> list_events
/// POST   /events               -> create_event
/// GET    /events/export        -> export_events
/// GET    /events/id/{event_id} -> get_event
/// PUT    /events/{event_id}    -> update_event
/// DELETE /events/{event_id}    -> delete_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            get(events::list_events).post(events::create_event),
        )
        .route("/events/export", get(events::export_events))
        .route("/events/id/{event_id}", get(events::get_event))
        .route(
            "/events/{event_id}",
            put(events::update_event).delete(events::delete_event),
        )
}
