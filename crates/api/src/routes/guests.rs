//! Route definitions for an event's guests.

use axum::routing::get;
use axum::Router;

use crate::handlers::guests;
use crate::state::AppState;

/// ```text
/// GET    /events/{event_id}/guests             -> list_guests
/// POST   /events/{event_id}/guests             -> create_guest
/// GET    /events/{event_id}/guests/{guest_id}  -> get_guest
/// PUT    /events/{event_id}/guests/{guest_id}  -> update_guest
/// DELETE /events/{event_id}/guests/{guest_id}  -> delete_guest
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/events/{event_id}/guests",
            get(guests::list_guests).post(guests::create_guest),
        )
        .route(
            "/events/{event_id}/guests/{guest_id}",
            get(guests::get_guest)
                .put(guests::update_guest)
                .delete(guests::delete_guest),
        )
}
