use axum::routing::post;
use axum::Router;

use crate::handlers::invites;
use crate::state::AppState;

/// POST /send-invite -> send_invite
pub fn router() -> Router<AppState> {
    Router::new().route("/send-invite", post(invites::send_invite))
}
