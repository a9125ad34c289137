//! Route definitions for the vendor directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::vendors;
use crate::state::AppState;

/// ```text
/// GET /vendors              -> list_vendors
/// GET /vendors/{vendor_id}  -> get_vendor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vendors", get(vendors::list_vendors))
        .route("/vendors/{vendor_id}", get(vendors::get_vendor))
}
