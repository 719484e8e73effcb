//! # Framework Errors
//!
//! Common error type shared by the actor and its clients.

/// Errors that can occur within the resource framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
