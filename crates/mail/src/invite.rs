//! Invitation email composition.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::Message;

use crate::error::MailError;

/// Greeting used when the guest's name is unknown.
const FALLBACK_GUEST_NAME: &str = "there";

/// Event reference used when the event name is unknown.
const FALLBACK_EVENT_NAME: &str = "our upcoming event";

/// A fully rendered invitation, independent of any transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl InviteEmail {
    /// Render the invitation for `to`.
    ///
    /// Blank names fall back to "there" and "our upcoming event". Both names
    /// are HTML-escaped before interpolation.
    pub fn compose(to: &str, guest_name: Option<&str>, event_name: Option<&str>) -> Self {
        let guest = non_blank(guest_name).unwrap_or(FALLBACK_GUEST_NAME);
        let event = non_blank(event_name).unwrap_or(FALLBACK_EVENT_NAME);

        let subject = format!("You're invited to {event}!");
        let html = format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <body style=\"font-family: Arial, sans-serif; color: #333333;\">\n\
             <h2>Hi {guest},</h2>\n\
             <p>You're invited to <strong>{event}</strong>!</p>\n\
             <p>We would love to celebrate with you. Please RSVP at your earliest convenience.</p>\n\
             <p>Warm regards,<br>The Gatherly Team</p>\n\
             </body>\n\
             </html>\n",
            guest = escape_html(guest),
            event = escape_html(event),
        );

        Self {
            to: to.trim().to_string(),
            subject,
            html,
        }
    }

    /// Build the MIME message sent by every transport.
    pub fn to_message(&self, from: &str) -> Result<Message, MailError> {
        let from: Mailbox = from.parse()?;
        let to: Mailbox = self.to.parse()?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(self.html.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
