//! Error types shared across the crate.

use std::io;

use thiserror::Error;

use crate::data::SourceError;

/// Errors emitted by the quiz controller and the runner around it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// Rejected before any state was touched.
    #[error("{0}")]
    InvalidInput(String),
    /// The question bank failed or returned nothing usable.
    #[error(transparent)]
    ExternalSource(#[from] SourceError),
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl QuizError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        QuizError::InvalidInput(message.into())
    }

    /// Whether the error should be shown on the setup screen rather than
    /// aborting the application.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, QuizError::InvalidInput(_) | QuizError::ExternalSource(_))
    }
}
