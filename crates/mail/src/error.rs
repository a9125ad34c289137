/// Error type for invite delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The transport rejected our credentials (HTTP 401, revoked refresh
    /// token, SMTP 530/534/535).
    #[error("Mail transport rejected credentials: {0}")]
    Unauthorized(String),

    /// Any other transport-level failure.
    #[error("Mail transport error: {0}")]
    Transport(String),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// The HTTP request to the mail API failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl MailError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, MailError::Unauthorized(_))
    }
}
