pub mod events;
pub mod guests;
pub mod health;
pub mod invites;
pub mod planners;
pub mod vendors;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                                  list by planner, create
/// /events/export                           every event with a count
/// /events/id/{event_id}                    get
/// /events/{event_id}                       update, delete
/// /events/{event_id}/guests                list, create
/// /events/{event_id}/guests/{guest_id}     get, update, delete
///
/// /planners/{planner_id}                   get
///
/// /vendors                                 list
/// /vendors/{vendor_id}                     get
///
/// /send-invite                             send invitation email
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(events::router())
        .merge(guests::router())
        .merge(planners::router())
        .merge(vendors::router())
        .merge(invites::router())
}
