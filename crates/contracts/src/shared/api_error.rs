//! Error taxonomy shared by every API call the console makes.
//!
//! All HTTP helpers map their failures into [`ApiError`], so pages can decide
//! how to surface an error (banner, toast, poll abort) without inspecting
//! status codes themselves.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No session, or the backend rejected the token (401/403)
    #[error("not authenticated")]
    Unauthenticated,

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// 4xx responses other than auth failures
    #[error("request rejected ({status}): {message}")]
    Validation { status: u16, message: String },

    /// 5xx responses
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The body did not match the expected schema
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

impl ApiError {
    /// Classify a non-2xx response. `body` is the raw response text, used to
    /// pull a server-supplied `message` when one is present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = Self::extract_message(body).unwrap_or_else(|| default_reason(status));
        match status {
            401 | 403 => ApiError::Unauthenticated,
            400..=499 => ApiError::Validation { status, message },
            _ => ApiError::Server { status, message },
        }
    }

    fn extract_message(body: &str) -> Option<String> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }
        match serde_json::from_str::<ErrorBody>(trimmed) {
            Ok(parsed) if !parsed.message.trim().is_empty() => Some(parsed.message),
            Ok(_) => None,
            // Plain-text bodies are used as-is when short enough to show.
            Err(_) if trimmed.len() <= 200 && !trimmed.starts_with('<') => {
                Some(trimmed.to_string())
            }
            Err(_) => None,
        }
    }

    /// Whether retrying the same request later can reasonably succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Server { .. } => true,
            ApiError::Validation { status, .. } => matches!(status, 408 | 429),
            ApiError::Unauthenticated | ApiError::Decode(_) => false,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation { status, .. } | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short text for toasts and banners
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthenticated => "Your session has expired. Please sign in again.".into(),
            ApiError::Network(_) => "Could not reach the server. Check your connection.".into(),
            ApiError::Validation { message, .. } => message.clone(),
            ApiError::Server { message, .. } => format!("Server error: {}", message),
            ApiError::Decode(_) => "The server sent an unexpected response.".into(),
        }
    }
}

fn default_reason(status: u16) -> String {
    match status {
        400 => "Bad request",
        404 => "Not found",
        408 => "Request timeout",
        409 => "Conflict",
        422 => "Unprocessable entity",
        429 => "Too many requests",
        500 => "Internal server error",
        502 => "Bad gateway",
        503 => "Service unavailable",
        504 => "Gateway timeout",
        _ => "Unexpected status",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_map_to_unauthenticated() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthenticated);
        assert_eq!(ApiError::from_status(403, "{\"message\":\"no\"}"), ApiError::Unauthenticated);
    }

    #[test]
    fn test_server_message_is_extracted() {
        let err = ApiError::from_status(422, r#"{"message":"title is required"}"#);
        assert_eq!(
            err,
            ApiError::Validation {
                status: 422,
                message: "title is required".to_string()
            }
        );
        assert_eq!(err.user_message(), "title is required");
    }

    #[test]
    fn test_error_alias_and_fallbacks() {
        let err = ApiError::from_status(500, r#"{"error":"db down"}"#);
        assert_eq!(err.to_string(), "server error (500): db down");

        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "server error (502): Bad gateway");

        let err = ApiError::from_status(404, "benchmark not found");
        assert_eq!(err.to_string(), "request rejected (404): benchmark not found");
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Network("reset".into()).is_transient());
        assert!(ApiError::from_status(503, "").is_transient());
        assert!(ApiError::from_status(429, "").is_transient());
        assert!(!ApiError::from_status(400, "").is_transient());
        assert!(!ApiError::Decode("missing field".into()).is_transient());
        assert!(!ApiError::Unauthenticated.is_transient());
    }
}
