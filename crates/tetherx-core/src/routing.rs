//! Request routing interface for addressed requests.

use async_trait::async_trait;
use tetherx_core_types::{TetherRequest, TetherResponse};

use crate::errors::Result;

/// Route an addressed request to a response.
///
/// Implemented by values that answer requests directly, and by handles,
/// which forward to their value's router capability or synthesize the
/// canonical not-found response.
#[async_trait]
pub trait RequestRouter: Send + Sync {
    /// Handle an addressed request.
    ///
    /// A target that has nothing at the URL responds with a not-found
    /// status; that is a normal response, not an error.
    ///
    /// # Errors
    ///
    /// Returns `TetherXError::RouteFailed` if the routing target fails
    /// while producing a response.
    async fn request(&self, request: &TetherRequest) -> Result<TetherResponse>;
}
