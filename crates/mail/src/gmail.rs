//! Gmail API transport.
//!
//! Each send exchanges the configured refresh token for a short-lived access
//! token, then posts the base64url-encoded MIME message to
//! `users/me/messages/send`. A 401 from either endpoint, or an
//! `invalid_grant` answer from the token endpoint, is reported as
//! [`MailError::Unauthorized`].

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::GmailConfig;
use crate::error::MailError;
use crate::invite::InviteEmail;
use crate::Mailer;

/// HTTP timeout for a single API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Default, Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: String,
}

#[derive(Debug, Serialize)]
struct SendRequest {
    raw: String,
}

/// Sends invitations through the Gmail REST API.
pub struct GmailMailer {
    client: reqwest::Client,
    config: GmailConfig,
    from_address: String,
}

impl GmailMailer {
    pub fn new(config: GmailConfig, from_address: String) -> Result<Self, MailError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            config,
            from_address,
        })
    }

    async fn access_token(&self) -> Result<String, MailError> {
        let response = self
            .client
            .post(&self.config.token_url)
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("refresh_token", self.config.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let token: TokenResponse = response.json().await?;
            return Ok(token.access_token);
        }

        let body: TokenErrorResponse = response.json().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED || body.error == "invalid_grant" {
            Err(MailError::Unauthorized(format!(
                "token endpoint returned HTTP {status} {}",
                body.error
            )))
        } else {
            Err(MailError::Transport(format!(
                "token endpoint returned HTTP {status}"
            )))
        }
    }
}

#[async_trait]
impl Mailer for GmailMailer {
    async fn send(&self, email: &InviteEmail) -> Result<(), MailError> {
        let message = email.to_message(&self.from_address)?;
        let raw = URL_SAFE_NO_PAD.encode(message.formatted());

        let token = self.access_token().await?;
        let url = format!(
            "{}/gmail/v1/users/me/messages/send",
            self.config.api_base.trim_end_matches('/')
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&SendRequest { raw })
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                tracing::info!(to = %email.to, transport = "gmail", "Invitation email sent");
                Ok(())
            }
            StatusCode::UNAUTHORIZED => Err(MailError::Unauthorized(
                "Gmail API returned HTTP 401".to_string(),
            )),
            status => Err(MailError::Transport(format!(
                "Gmail API returned HTTP {status}"
            ))),
        }
    }
}
