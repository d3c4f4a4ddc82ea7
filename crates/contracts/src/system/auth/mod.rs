use crate::shared::api_error::ApiError;
use serde::Deserialize;

/// localStorage key holding the bearer token
pub const ACCESS_TOKEN_KEY: &str = "auth_access_token";

/// Who the console is talking to the API as
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated { token: String },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredToken {
    Bare(String),
    Object {
        #[serde(alias = "access_token", alias = "accessToken")]
        token: String,
    },
}

impl Session {
    /// Build a session from the raw localStorage value.
    ///
    /// Accepts a JSON string, a JSON object with a `token` field, or a plain
    /// token that is not JSON. Anything else (absent, blank, malformed, other
    /// JSON values) is `Unauthenticated`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Session::Unauthenticated;
        };

        let token = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => match serde_json::from_value::<StoredToken>(value) {
                Ok(StoredToken::Bare(t)) | Ok(StoredToken::Object { token: t }) => t,
                Err(e) => {
                    log::warn!("ignoring stored session of unexpected shape: {}", e);
                    return Session::Unauthenticated;
                }
            },
            // Not JSON at all: a raw token written by an older build
            Err(_) if !raw.starts_with(['{', '[', '"']) && !raw.contains(char::is_whitespace) => {
                raw.to_string()
            }
            Err(e) => {
                log::warn!("ignoring malformed stored session: {}", e);
                return Session::Unauthenticated;
            }
        };

        Self::with_token(token)
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            Session::Unauthenticated
        } else {
            Session::Authenticated { token }
        }
    }

    /// Value written back to localStorage
    pub fn to_stored(&self) -> Option<String> {
        self.token().and_then(|t| serde_json::to_string(t).ok())
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token } => Some(token),
            Session::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// `Authorization` header value, or `Unauthenticated` before any I/O
    pub fn bearer_header(&self) -> Result<String, ApiError> {
        self.token()
            .map(|t| format!("Bearer {}", t))
            .ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_is_unauthenticated() {
        assert_eq!(Session::from_stored(None), Session::Unauthenticated);
        assert_eq!(Session::from_stored(Some("")), Session::Unauthenticated);
        assert_eq!(Session::from_stored(Some("  ")), Session::Unauthenticated);
        assert_eq!(Session::from_stored(Some("\"\"")), Session::Unauthenticated);
    }

    #[test]
    fn test_accepted_shapes() {
        let expected = Session::with_token("abc.def.ghi");
        assert_eq!(Session::from_stored(Some("\"abc.def.ghi\"")), expected);
        assert_eq!(Session::from_stored(Some(r#"{"token":"abc.def.ghi"}"#)), expected);
        assert_eq!(Session::from_stored(Some(r#"{"access_token":"abc.def.ghi"}"#)), expected);
        assert_eq!(Session::from_stored(Some("abc.def.ghi")), expected);
    }

    #[test]
    fn test_malformed_json_never_panics() {
        assert_eq!(Session::from_stored(Some("{\"token\":")), Session::Unauthenticated);
        assert_eq!(Session::from_stored(Some("[1,2]")), Session::Unauthenticated);
        assert_eq!(Session::from_stored(Some(r#"{"user":"x"}"#)), Session::Unauthenticated);
        assert_eq!(Session::from_stored(Some("not a token")), Session::Unauthenticated);
        for scalar in ["null", "true", "42"] {
            assert_eq!(Session::from_stored(Some(scalar)), Session::Unauthenticated, "{}", scalar);
        }
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(Session::Unauthenticated.bearer_header(), Err(ApiError::Unauthenticated));
        assert_eq!(
            Session::with_token("t0k").bearer_header().unwrap(),
            "Bearer t0k"
        );
    }

    #[test]
    fn test_stored_value_reads_back() {
        let session = Session::with_token("t0k");
        let stored = session.to_stored().unwrap();
        assert_eq!(Session::from_stored(Some(&stored)), session);
        assert_eq!(Session::Unauthenticated.to_stored(), None);
    }
}
