//! Error handler for signup.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Errors raised by controller collaborators.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("email is already linked to an account")]
    EmailAlreadyUsed,

    /// Any other failure of an adapter. The source is kept for logs only.
    #[error("internal server error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors preventing the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
