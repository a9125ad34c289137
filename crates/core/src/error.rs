/// Domain-level failures shared by every crate in the workspace.
///
/// Each variant maps to exactly one HTTP status in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Missing or malformed input. The store is never consulted.
    #[error("{0}")]
    Validation(String),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A collaborator rejected our credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Required process configuration is absent.
    #[error("{0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the `"<field> is required"` validation failure.
    pub fn required(field: &str) -> Self {
        CoreError::Validation(format!("{field} is required"))
    }
}
