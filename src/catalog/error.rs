/// Domain-level retrieval error
///
/// The repository converts every store failure into this type so callers
/// never depend on the driver's error representation.

use thiserror::Error;

/// A read against the catalog store failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RetrievalError {
    message: String,
}

impl RetrievalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap a driver error with the name of the failed operation
    pub(crate) fn from_store(context: &str, source: sqlx::Error) -> Self {
        Self::new(format!("{context}: {source}"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;
