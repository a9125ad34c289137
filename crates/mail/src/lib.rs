//! Invitation email delivery.
//!
//! [`Mailer`] is the single "send" operation the API depends on. Two
//! transports implement it: [`GmailMailer`] (OAuth refresh token + Gmail REST
//! API) and [`SmtpMailer`] (`lettre` over STARTTLS). [`build_mailer`] picks
//! one from a [`MailConfig`].

use std::sync::Arc;

use async_trait::async_trait;

pub mod config;
pub mod error;
pub mod gmail;
pub mod invite;
pub mod smtp;

pub use config::{MailConfig, TransportConfig};
pub use error::MailError;
pub use gmail::GmailMailer;
pub use invite::InviteEmail;
pub use smtp::SmtpMailer;

/// A configured email transport.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one invitation. Credential rejections surface as
    /// [`MailError::Unauthorized`].
    async fn send(&self, email: &InviteEmail) -> Result<(), MailError>;
}

/// Construct the transport selected by `config`.
pub fn build_mailer(config: MailConfig) -> Result<Arc<dyn Mailer>, MailError> {
    let mailer: Arc<dyn Mailer> = match config.transport {
        TransportConfig::Gmail(gmail) => Arc::new(GmailMailer::new(gmail, config.from_address)?),
        TransportConfig::Smtp(smtp) => Arc::new(SmtpMailer::new(smtp, config.from_address)?),
    };
    Ok(mailer)
}
