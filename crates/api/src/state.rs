use std::sync::Arc;

use gatherly_db::RecordStore;
use gatherly_mail::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Relational store every resource handler reads and writes through.
    pub store: Arc<dyn RecordStore>,
    /// Invite transport; `None` when mail credentials are not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
}
