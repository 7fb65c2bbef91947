use serde_json::Value;
use thiserror::Error;

/// The single error type surfaced by `ApiClient`.
///
/// Three kinds, distinguished by `status()`:
/// - `Server`: the backend declared a failure (status is the HTTP status).
/// - `Network`: the request never got a response (status 0).
/// - `Unexpected`: parse/runtime failure on our side (status 0).
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    #[error("{message}")]
    Network { message: String },

    #[error("{message}")]
    Unexpected { message: String },
}

impl ApiError {
    pub fn server(status: u16, message: impl Into<String>, details: Option<Value>) -> Self {
        ApiError::Server {
            status,
            message: message.into(),
            details,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        ApiError::Unexpected {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Server { message, .. }
            | ApiError::Network { message }
            | ApiError::Unexpected { message } => message,
        }
    }

    /// HTTP status for server-declared errors, 0 otherwise.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Server { status, .. } => *status,
            ApiError::Network { .. } | ApiError::Unexpected { .. } => 0,
        }
    }

    pub fn details(&self) -> Option<&Value> {
        match self {
            ApiError::Server { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }
}
