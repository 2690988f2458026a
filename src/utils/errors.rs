use thiserror::Error;

/// Cause preserved on errors that wrap a lower-level failure.
pub type ErrorCause = Box<dyn std::error::Error + Send + Sync + 'static>;

const NETWORK_USER_MESSAGE: &str = "Please check your internet connection and try again.";
const API_USER_MESSAGE: &str = "An error occurred while fetching data.";

/// Every failure that crosses a use-case boundary. The enum is closed on
/// purpose: callers match exhaustively instead of probing error types at
/// runtime.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Connectivity is absent or the request never completed at the
    /// transport level.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: Option<ErrorCause>,
    },

    /// Caller-supplied input violates a domain constraint.
    #[error("{message}")]
    Validation { message: String, user_message: String },

    /// The remote endpoint answered with a non-success status, or the
    /// failure could not be classified as anything more specific.
    #[error("{message}")]
    Api {
        message: String,
        status: Option<u16>,
        user_message: String,
        #[source]
        source: Option<ErrorCause>,
    },
}

impl DomainError {
    pub fn network(message: impl Into<String>) -> Self {
        DomainError::Network {
            message: message.into(),
            source: None,
        }
    }

    pub fn network_caused_by(message: impl Into<String>, cause: impl Into<ErrorCause>) -> Self {
        DomainError::Network {
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    /// Validation failure whose user-facing text is the diagnostic itself.
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        let user_message = message.clone();
        DomainError::Validation { message, user_message }
    }

    pub fn validation_with_user_message(
        message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        DomainError::Validation {
            user_message: non_empty_or(user_message.into(), &message),
            message,
        }
    }

    pub fn api(
        message: impl Into<String>,
        status: Option<u16>,
        user_message: impl Into<String>,
    ) -> Self {
        DomainError::Api {
            message: message.into(),
            status,
            user_message: non_empty_or(user_message.into(), API_USER_MESSAGE),
            source: None,
        }
    }

    pub fn api_caused_by(
        message: impl Into<String>,
        status: Option<u16>,
        user_message: impl Into<String>,
        cause: impl Into<ErrorCause>,
    ) -> Self {
        DomainError::Api {
            message: message.into(),
            status,
            user_message: non_empty_or(user_message.into(), API_USER_MESSAGE),
            source: Some(cause.into()),
        }
    }

    /// Stable machine code, one per kind.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Network { .. } => "NETWORK_ERROR",
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::Api { .. } => "API_ERROR",
        }
    }

    /// Text fit for display. Guaranteed non-empty.
    pub fn user_message(&self) -> &str {
        match self {
            DomainError::Network { .. } => NETWORK_USER_MESSAGE,
            DomainError::Validation { user_message, .. } => user_message,
            DomainError::Api { user_message, .. } => user_message,
        }
    }

    /// HTTP status of the failed response, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DomainError::Api { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, DomainError::Network { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }

    pub fn is_api(&self) -> bool {
        matches!(self, DomainError::Api { .. })
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
