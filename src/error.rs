//! Error taxonomy for report commands.
//!
//! Every variant is terminal for the running command: nothing is retried and
//! the command layer turns any of them into a failure exit code.

use crate::domain::entities::RecordKind;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Malformed or inconsistent user input, detected before any fetch.
    #[error("Invalid {field} \"{value}\": {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A page could not be read from the record store.
    #[error("Failed to fetch page {page}: {message}")]
    Fetch { page: u32, message: String },

    /// Raw failure reported by a repository implementation.
    #[error("Record store error: {0}")]
    Store(String),

    /// A record of another family showed up inside a render session.
    #[error("Cannot render a {found} record in a {expected} report")]
    ProjectionMismatch {
        expected: RecordKind,
        found: RecordKind,
    },

    #[error("Confirmation prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReportError {
    pub fn validation(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn fetch(page: u32, cause: impl std::fmt::Display) -> Self {
        Self::Fetch {
            page,
            message: cause.to_string(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Returns true for errors caused by user input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<sqlx::Error> for ReportError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut => Self::store("timed out waiting for a database connection"),
            sqlx::Error::Io(io) => Self::store(format!("database unreachable: {io}")),
            other => Self::store(other.to_string()),
        }
    }
}

impl From<dialoguer::Error> for ReportError {
    fn from(e: dialoguer::Error) -> Self {
        Self::Prompt(e.to_string())
    }
}
