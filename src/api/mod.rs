//! Remote API abstraction for the todo backend.
//!
//! This module defines the interface the UI talks to, along with the todo
//! data model and error classification for remote calls.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod rest;

pub use rest::RestApi;

/// Error classification for remote operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Invalid todo: {0}")]
    Validation(String),

    #[error("API error: status {status}")]
    Api { status: u16, body: String },

    #[error("Invalid response data: {0}")]
    InvalidData(String),
}

/// One todo item as the backend returns it.
///
/// The id is opaque and assigned by the backend. The original service
/// spells the field `_id` on the wire; both spellings decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(alias = "_id")]
    pub id: String,
    pub text: String,
}

/// The four remote operations the client consumes.
///
/// Implementations talk to a concrete service; the UI only sees this trait,
/// so tests can drive the controller without a network.
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetch the full todo collection.
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError>;

    /// Create a todo and return it with its server-assigned id.
    async fn create_todo(&self, text: &str) -> Result<Todo, ApiError>;

    /// Replace the text of an existing todo.
    async fn update_todo(&self, id: &str, text: &str) -> Result<(), ApiError>;

    /// Delete a todo by id.
    async fn delete_todo(&self, id: &str) -> Result<(), ApiError>;
}
