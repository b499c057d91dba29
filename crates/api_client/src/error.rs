//! Error taxonomy for backend calls.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Failure modes of a backend request, rendered inline by the owning panel.
pub enum ApiError {
    /// The session token was missing, expired, or rejected.
    Unauthorized,
    /// The server answered with a non-success status.
    Http {
        /// HTTP status code.
        status: u16,
        /// Server-provided error message, or the status text.
        message: String,
    },
    /// The request never completed (offline, DNS, CORS, aborted).
    Network(String),
    /// The response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "session is not authorized"),
            Self::Http { status, message } => write!(f, "server error {status}: {message}"),
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Decode(message) => write!(f, "unexpected response: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn display_messages_are_user_presentable() {
        let cases = [
            (ApiError::Unauthorized, "session is not authorized"),
            (
                ApiError::Http {
                    status: 500,
                    message: "boom".to_string(),
                },
                "server error 500: boom",
            ),
            (
                ApiError::Network("offline".to_string()),
                "network error: offline",
            ),
            (
                ApiError::Decode("missing field".to_string()),
                "unexpected response: missing field",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }
}
