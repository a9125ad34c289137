#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use gatherly_api::config::ServerConfig;
use gatherly_api::router::build_app_router;
use gatherly_api::state::AppState;
use gatherly_core::query::{Patch, Query};
use gatherly_core::resource::Resource;
use gatherly_core::types::Record;
use gatherly_db::{RecordStore, ReferenceDb, StoreError};
use gatherly_mail::{InviteEmail, MailError, Mailer};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Error text every injected store failure carries.
pub const INJECTED_FAILURE: &str = "connection refused";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://localhost/gatherly_test".to_string(),
        database_max_connections: 1,
    }
}

/// Build the full application router over the given collaborators, with
/// the same middleware stack production uses.
pub fn build_test_app(store: ScriptedStore, mailer: Option<Arc<dyn Mailer>>) -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(store),
        mailer,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Store wrapper
// ---------------------------------------------------------------------------

/// A [`ReferenceDb`] that records every call it receives and can be told to
/// fail specific operations.
#[derive(Clone, Default)]
pub struct ScriptedStore {
    pub db: ReferenceDb,
    calls: Arc<Mutex<Vec<&'static str>>>,
    failing: Arc<Mutex<HashSet<&'static str>>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call to `operation` fail with [`INJECTED_FAILURE`].
    pub fn fail_on(self, operation: &'static str) -> Self {
        self.failing.lock().unwrap().insert(operation);
        self
    }

    pub async fn seed(&self, resource: Resource, record: Record) {
        self.db.seed(resource, record).await;
    }

    /// Names of the operations invoked so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn enter(&self, operation: &'static str) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(operation);
        if self.failing.lock().unwrap().contains(operation) {
            Err(StoreError::Rejected(INJECTED_FAILURE.to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for ScriptedStore {
    async fn find_by_key(&self, query: &Query) -> Result<Option<Record>, StoreError> {
        self.enter("find_by_key")?;
        self.db.find_by_key(query).await
    }

    async fn list_by_filter(&self, query: &Query) -> Result<Vec<Record>, StoreError> {
        self.enter("list_by_filter")?;
        self.db.list_by_filter(query).await
    }

    async fn insert(&self, resource: Resource, patch: &Patch) -> Result<Vec<Record>, StoreError> {
        self.enter("insert")?;
        self.db.insert(resource, patch).await
    }

    async fn update(&self, query: &Query, patch: &Patch) -> Result<Vec<Record>, StoreError> {
        self.enter("update")?;
        self.db.update(query, patch).await
    }

    async fn delete_by_key(&self, query: &Query) -> Result<u64, StoreError> {
        self.enter("delete_by_key")?;
        self.db.delete_by_key(query).await
    }

    async fn health(&self) -> Result<(), StoreError> {
        self.enter("health")?;
        self.db.health().await
    }
}

// ---------------------------------------------------------------------------
// Mailer stub
// ---------------------------------------------------------------------------

/// How [`RecordingMailer`] answers a send.
#[derive(Clone, Copy, Debug)]
pub enum MailOutcome {
    Delivered,
    Unauthorized,
    Broken,
}

/// A [`Mailer`] that keeps every message it is asked to send.
#[derive(Clone)]
pub struct RecordingMailer {
    outcome: MailOutcome,
    sent: Arc<Mutex<Vec<InviteEmail>>>,
}

impl RecordingMailer {
    pub fn new(outcome: MailOutcome) -> Self {
        Self {
            outcome,
            sent: Arc::default(),
        }
    }

    pub fn sent(&self) -> Vec<InviteEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &InviteEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        match self.outcome {
            MailOutcome::Delivered => Ok(()),
            MailOutcome::Unauthorized => Err(MailError::Unauthorized("HTTP 401".into())),
            MailOutcome::Broken => Err(MailError::Transport("smtp relay unreachable".into())),
        }
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(body.to_string()), true).await
}

/// POST an arbitrary raw body as `application/json`.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body), true).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response<Body> {
    let mut request = Request::builder().method(method).uri(uri);
    if json {
        request = request.header("content-type", "application/json");
    }
    app.oneshot(request.body(body).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
