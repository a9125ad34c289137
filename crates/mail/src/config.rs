//! Mail transport configuration.
//!
//! Exactly one transport is active. `MAIL_TRANSPORT` selects it explicitly;
//! otherwise Gmail is used when its OAuth client id is present, then SMTP
//! when its user is present. Missing credentials yield `None`, which the API
//! reports per request as "service not configured".

/// Default SMTP relay.
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Google's OAuth 2.0 token endpoint.
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Base URL of the Gmail REST API.
pub const GMAIL_API_BASE: &str = "https://gmail.googleapis.com";

/// Resolved mail settings.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// RFC 5322 "From" mailbox.
    pub from_address: String,
    pub transport: TransportConfig,
}

#[derive(Debug, Clone)]
pub enum TransportConfig {
    Gmail(GmailConfig),
    Smtp(SmtpConfig),
}

/// OAuth refresh-token credentials for the Gmail API.
#[derive(Debug, Clone)]
pub struct GmailConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub token_url: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable               | Transport | Default                   |
    /// |------------------------|-----------|---------------------------|
    /// | `MAIL_TRANSPORT`       | both      | auto-detect               |
    /// | `MAIL_FROM`            | both      | `GMAIL_USER` / `SMTP_USER` |
    /// | `GMAIL_CLIENT_ID`      | gmail     | required                  |
    /// | `GMAIL_CLIENT_SECRET`  | gmail     | required                  |
    /// | `GMAIL_REFRESH_TOKEN`  | gmail     | required                  |
    /// | `GMAIL_USER`           | gmail     | sender fallback           |
    /// | `SMTP_HOST`            | smtp      | `smtp.gmail.com`          |
    /// | `SMTP_PORT`            | smtp      | `587`                     |
    /// | `SMTP_USER`            | smtp      | required                  |
    /// | `SMTP_PASS`            | smtp      | required                  |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`MailConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let selected = get("MAIL_TRANSPORT").map(|t| t.to_ascii_lowercase());
        let use_gmail = match selected.as_deref() {
            Some("gmail") => true,
            Some("smtp") => false,
            Some(other) => {
                tracing::warn!(transport = other, "Unknown MAIL_TRANSPORT, mail disabled");
                return None;
            }
            None => get("GMAIL_CLIENT_ID").is_some(),
        };

        if use_gmail {
            let transport = TransportConfig::Gmail(GmailConfig {
                client_id: get("GMAIL_CLIENT_ID")?,
                client_secret: get("GMAIL_CLIENT_SECRET")?,
                refresh_token: get("GMAIL_REFRESH_TOKEN")?,
                token_url: GOOGLE_TOKEN_URL.to_string(),
                api_base: GMAIL_API_BASE.to_string(),
            });
            let from_address = get("MAIL_FROM").or_else(|| get("GMAIL_USER"))?;
            Some(Self {
                from_address,
                transport,
            })
        } else {
            let user = get("SMTP_USER")?;
            let password = get("SMTP_PASS")?;
            let port = get("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT);
            Some(Self {
                from_address: get("MAIL_FROM").unwrap_or_else(|| user.clone()),
                transport: TransportConfig::Smtp(SmtpConfig {
                    host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                    port,
                    user,
                    password,
                }),
            })
        }
    }

    /// Short transport name for logs.
    pub fn transport_name(&self) -> &'static str {
        match self.transport {
            TransportConfig::Gmail(_) => "gmail",
            TransportConfig::Smtp(_) => "smtp",
        }
    }
}
