//! Error types for backend communication.
//!
//! | Variant | Cause | Surfaced as |
//! |---------|-------|-------------|
//! | `Transport` | connection refused, DNS, timeout | fallback chat reply / mood alert |
//! | `Status` | backend answered non-2xx | same as transport |
//! | `Decode` | body was not the expected JSON | same as transport |
//! | `Aborted` | request task dropped before settling | fallback chat reply |
//!
//! Nothing here is fatal; the caller logs and degrades the UI.

use thiserror::Error;

use crate::traits::HttpError;

/// Errors returned by [`crate::backend::BackendClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request aborted before completion")]
    Aborted,
}

impl ApiError {
    /// Short message suitable for the status bar.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(HttpError::Timeout(_)) => {
                "The server took too long to respond.".to_string()
            }
            ApiError::Transport(_) => {
                "Unable to reach the MindWell service. Check that the backend is running."
                    .to_string()
            }
            ApiError::Status { status, .. } if *status >= 500 => {
                "The MindWell service is having trouble right now.".to_string()
            }
            ApiError::Status { status, .. } => {
                format!("The MindWell service rejected the request (HTTP {}).", status)
            }
            ApiError::Decode(_) => "Received an unexpected response from the server.".to_string(),
            ApiError::Aborted => "The request was interrupted.".to_string(),
        }
    }

    /// Stable code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport(HttpError::ConnectionFailed(_)) => "E_NET_CONN",
            ApiError::Transport(HttpError::Timeout(_)) => "E_NET_TIMEOUT",
            ApiError::Transport(HttpError::InvalidUrl(_)) => "E_NET_URL",
            ApiError::Transport(HttpError::Other(_)) => "E_NET_OTHER",
            ApiError::Status { .. } => "E_HTTP_STATUS",
            ApiError::Decode(_) => "E_DECODE",
            ApiError::Aborted => "E_ABORTED",
        }
    }

    /// True when no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Aborted)
    }
}

/// Result alias for backend operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_error() {
        let err: ApiError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert!(err.is_transport());
        assert_eq!(err.error_code(), "E_NET_CONN");
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_transport());
        assert_eq!(err.error_code(), "E_DECODE");
    }

    #[test]
    fn test_status_user_messages() {
        let server = ApiError::Status {
            status: 500,
            body: "Chat error".to_string(),
        };
        assert!(server.user_message().contains("trouble"));

        let client = ApiError::Status {
            status: 422,
            body: String::new(),
        };
        assert!(client.user_message().contains("422"));
        assert_eq!(client.to_string(), "server returned HTTP 422: ");
    }

    #[test]
    fn test_all_variants_have_messages() {
        let errors = vec![
            ApiError::Transport(HttpError::Timeout("t".into())),
            ApiError::Transport(HttpError::InvalidUrl("u".into())),
            ApiError::Transport(HttpError::Other("o".into())),
            ApiError::Aborted,
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
            assert!(err.error_code().starts_with("E_"));
        }
    }
}
