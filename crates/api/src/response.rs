//! Response bodies for the few endpoints that wrap their records.
//!
//! Everything else returns the stored record or array unwrapped.

use gatherly_core::types::Record;
use serde::Serialize;

/// `PUT /events/{event_id}` success body.
#[derive(Debug, Serialize)]
pub struct UpdatedEvent {
    pub success: bool,
    pub event: Record,
}

/// `DELETE /events/{event_id}` success body.
#[derive(Debug, Serialize)]
pub struct DeletedEvent {
    pub message: &'static str,
    pub event_id: String,
}

/// `GET /events/export` success body.
#[derive(Debug, Serialize)]
pub struct EventExport {
    pub success: bool,
    pub count: usize,
    pub events: Vec<Record>,
}

/// A bare `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
