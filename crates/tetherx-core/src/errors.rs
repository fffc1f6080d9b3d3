use thiserror::Error;

/// Result type alias using TetherXError
pub type Result<T> = std::result::Result<T, TetherXError>;

/// Canonical error taxonomy for TetherX operations
///
/// The protocol's own logic is failure-free: a missing router capability
/// yields a normal not-found response, never an error. These variants are
/// produced by collaborator implementations (attach contexts, router
/// capabilities) and propagated through handle operations unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TetherXError {
    /// A collaborator failed while propagating attachment
    #[error("Attach propagation failed at {absolute_path}: {message}")]
    AttachFailed {
        absolute_path: String,
        message: String,
    },

    /// A router capability failed while handling a forwarded request
    #[error("Request routing failed for {url}: {message}")]
    RouteFailed { url: String, message: String },
}

impl TetherXError {
    /// Get the stable error code for this error
    ///
    /// Codes are stable across releases and are safe to match on in
    /// callers, tests, and log assertions.
    pub fn code(&self) -> &'static str {
        match self {
            TetherXError::AttachFailed { .. } => "ERR_ATTACH_FAILED",
            TetherXError::RouteFailed { .. } => "ERR_ROUTE_FAILED",
        }
    }
}
