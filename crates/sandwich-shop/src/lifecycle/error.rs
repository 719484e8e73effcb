//! Error types for starting and stopping the shop system.

use resource_actor::FrameworkError;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Opening the database or creating the schema failed.
    #[error("Storage setup failed: {0}")]
    Storage(#[from] sqlx::Error),

    /// An actor could not start, or its loop ended with an error.
    #[error("Actor failed: {0}")]
    Actor(#[from] FrameworkError),

    #[error("Actor task panicked: {0}")]
    Panicked(#[from] JoinError),
}
