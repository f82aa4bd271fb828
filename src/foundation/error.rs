/// Convenience result type used across marksite.
pub type MarkResult<T> = Result<T, MarkError>;

/// Top-level error taxonomy used by the selection and content APIs.
#[derive(thiserror::Error, Debug)]
pub enum MarkError {
    /// The registry had no entry matching the selection filter.
    #[error("no scenes available")]
    NoScenesAvailable,

    /// The upstream content generator failed or returned a non-success status.
    #[error("external service error: {message}")]
    ExternalService {
        /// HTTP status reported by the upstream, when one was received.
        status: Option<u16>,
        /// Human-readable failure description.
        message: String,
    },

    /// Invalid user-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MarkError {
    /// Build a [`MarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MarkError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MarkError::ExternalService`] value without a status code.
    pub fn external(msg: impl Into<String>) -> Self {
        Self::ExternalService {
            status: None,
            message: msg.into(),
        }
    }

    /// Build a [`MarkError::ExternalService`] value for a non-success upstream status.
    pub fn external_status(status: u16) -> Self {
        Self::ExternalService {
            status: Some(status),
            message: format!("upstream returned status {status}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
