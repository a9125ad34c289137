//! Handler for sending an invitation email.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gatherly_core::error::CoreError;
use gatherly_core::validation::{missing_fields, require_email};
use gatherly_mail::InviteEmail;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::SendInvite;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /send-invite
///
/// Validation and configuration are checked before the transport is
/// touched. Credential rejections become a 401; any other transport error
/// is a generic 500.
pub async fn send_invite(
    State(state): State<AppState>,
    AppJson(input): AppJson<SendInvite>,
) -> AppResult<impl IntoResponse> {
    let missing = missing_fields(&[
        ("guestEmail", input.guest_email.as_deref()),
        ("eventName", input.event_name.as_deref()),
    ]);
    if !missing.is_empty() {
        return Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        ))
        .into());
    }

    let to = input.guest_email.as_deref().unwrap_or_default().trim();
    require_email("guestEmail", to)?;

    let Some(mailer) = state.mailer.as_ref() else {
        return Err(CoreError::Config("Email service not configured".to_string()).into());
    };

    let email = InviteEmail::compose(
        to,
        input.guest_name.as_deref(),
        input.event_name.as_deref(),
    );

    if let Err(err) = mailer.send(&email).await {
        if err.is_auth_failure() {
            tracing::warn!(error = %err, "Invite transport rejected credentials");
            return Err(CoreError::Unauthorized(
                "Authentication failed - token may be invalid or expired".to_string(),
            )
            .into());
        }
        return Err(AppError::opaque("Failed to send invitation", err));
    }

    tracing::info!(to, "Invitation sent");

    Ok(Json(MessageResponse {
        message: "Invitation sent successfully!",
    }))
}
