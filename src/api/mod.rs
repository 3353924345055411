//! Remote Store Bindings
//!
//! Thin async wrappers around the todo backend's REST endpoints.

mod todos;

pub use todos::*;

use thiserror::Error;

/// Base path for the todo collection
pub const TODOS_PATH: &str = "/todos";

/// Errors surfaced by the remote store
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered outside the 2xx range
    #[error("server responded with status {0}")]
    Status(u16),
    /// The request body could not be serialized
    #[error("could not encode request body: {0}")]
    Encode(String),
    /// The response body was not the expected JSON shape
    #[error("could not decode response body: {0}")]
    Decode(String),
}
