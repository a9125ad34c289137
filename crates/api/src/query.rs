//! Query-string and body payloads for API handlers.
//!
//! Every field is optional at the serde level so that a missing value
//! reaches our own validation and produces `"<field> is required"` rather
//! than a deserializer rejection.

use serde::Deserialize;

/// `?planner_id=` on the event listing.
#[derive(Debug, Deserialize)]
pub struct PlannerFilter {
    pub planner_id: Option<String>,
}

/// Body of `POST /events`.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub event_id: Option<String>,
    pub planner_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Time of day, `HH:MM` or `HH:MM:SS`.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub venue: Option<String>,
    pub theme: Option<String>,
}

/// Body of `PUT /events/{event_id}`. Only supplied fields change.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub venue: Option<String>,
    pub theme: Option<String>,
}

/// Body of `POST /events/{event_id}/guests`.
#[derive(Debug, Deserialize)]
pub struct CreateGuest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub rsvp_status: Option<String>,
    pub cell_number: Option<String>,
    pub dietary_info: Option<String>,
}

/// Body of `PUT /events/{event_id}/guests/{guest_id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateGuest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub rsvp_status: Option<String>,
    pub cell_number: Option<String>,
    pub dietary_info: Option<String>,
}

/// Body of `POST /send-invite`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInvite {
    pub guest_email: Option<String>,
    pub guest_name: Option<String>,
    pub event_name: Option<String>,
}
