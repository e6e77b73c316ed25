//! Error types for the CarRent system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarRentError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("{reason}")]
    AuthorizationDenied { reason: String },

    #[error("{reason}")]
    AuthenticationFailed { reason: String },

    #[error("Image upload failed: {0}")]
    Upload(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CarRentError {
    /// The single authorization rejection used for every ownership or
    /// role failure, so callers cannot tell a foreign resource apart
    /// from one they simply may not touch.
    pub fn unauthorized() -> Self {
        Self::AuthorizationDenied {
            reason: "Unauthorized".into(),
        }
    }

    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Errors that indicate a fault on our side rather than a rejected
    /// request.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Internal(_))
    }
}

impl From<garde::Report> for CarRentError {
    fn from(report: garde::Report) -> Self {
        Self::Validation {
            message: report.to_string(),
        }
    }
}

pub type CarRentResult<T> = Result<T, CarRentError>;
