//! Shared error types for the services crate.

use thiserror::Error;

use book_core::model::ConfigError;

/// Errors emitted while setting up page decoration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}
