//! SMTP transport via `lettre`.

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::error::MailError;
use crate::invite::InviteEmail;
use crate::Mailer;

/// SMTP reply codes that mean the server refused our credentials.
const AUTH_FAILURE_CODES: [&str; 3] = ["530", "534", "535"];

/// Sends invitations over STARTTLS SMTP with username/password auth.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig, from_address: String) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(classify)?
            .port(config.port)
            .credentials(Credentials::new(config.user, config.password))
            .build();

        Ok(Self {
            transport,
            from_address,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &InviteEmail) -> Result<(), MailError> {
        let message = email.to_message(&self.from_address)?;
        self.transport.send(message).await.map_err(classify)?;

        tracing::info!(to = %email.to, transport = "smtp", "Invitation email sent");
        Ok(())
    }
}

/// Split SMTP failures into credential rejections and everything else.
fn classify(err: lettre::transport::smtp::Error) -> MailError {
    let code = err.status().map(|c| c.to_string());
    match code.as_deref() {
        Some(code) if AUTH_FAILURE_CODES.contains(&code) => {
            MailError::Unauthorized(err.to_string())
        }
        _ => MailError::Transport(err.to_string()),
    }
}
