use axum::routing::get;
use axum::Router;

use crate::handlers::planners;
use crate::state::AppState;

/// GET /planners/{planner_id} -> get_planner
pub fn router() -> Router<AppState> {
    Router::new().route("/planners/{planner_id}", get(planners::get_planner))
}
