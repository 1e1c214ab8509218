//! Fatal startup and serving errors.

use thiserror::Error;

use crate::{domain::RepositoryError, usecase::ApplicationError};

#[derive(Debug, Error)]
pub enum ServerError {
    /// Listener could not be bound or the server loop failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage backend could not be set up
    #[error("Repository setup failed: {0}")]
    Repository(#[from] RepositoryError),

    /// A command or event kind has no handler
    #[error("Mediator wiring is incomplete: {0}")]
    Wiring(#[from] ApplicationError),
}
