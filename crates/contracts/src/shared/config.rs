use serde::{Deserialize, Serialize};

/// Config object injected into the page at deploy time as
/// `window.__RUNTIME_CONFIG__`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "apiBaseUrl")]
    pub api_base_url: Option<String>,
}

fn is_local_origin(origin: &str) -> bool {
    let host = origin
        .split("://")
        .nth(1)
        .unwrap_or(origin)
        .split(['/', ':'])
        .next()
        .unwrap_or_default();
    matches!(host, "localhost" | "127.0.0.1")
}

/// Resolve the API base URL.
///
/// The console is normally served by the same host as the API, so the page
/// origin is the base. During local development the runtime config may
/// point at a remote API instead.
pub fn resolve_api_base(origin: &str, runtime: Option<&RuntimeConfig>) -> String {
    let override_base = runtime
        .and_then(|c| c.api_base_url.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let base = match override_base {
        Some(base) if is_local_origin(origin) => base,
        _ => origin,
    };
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(base: &str) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: Some(base.to_string()),
        }
    }

    #[test]
    fn test_origin_is_default() {
        assert_eq!(resolve_api_base("https://console.example.com", None), "https://console.example.com");
        assert_eq!(resolve_api_base("https://console.example.com/", None), "https://console.example.com");
    }

    #[test]
    fn test_override_only_applies_on_localhost() {
        let c = cfg("https://api.staging.example.com/");
        assert_eq!(
            resolve_api_base("http://localhost:8080", Some(&c)),
            "https://api.staging.example.com"
        );
        assert_eq!(
            resolve_api_base("http://127.0.0.1:3000", Some(&c)),
            "https://api.staging.example.com"
        );
        assert_eq!(
            resolve_api_base("https://console.example.com", Some(&c)),
            "https://console.example.com"
        );
    }

    #[test]
    fn test_blank_override_is_ignored() {
        assert_eq!(resolve_api_base("http://localhost:8080", Some(&cfg("  "))), "http://localhost:8080");
        assert_eq!(
            resolve_api_base("http://localhost:8080", Some(&RuntimeConfig::default())),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_runtime_config_aliases() {
        let c: RuntimeConfig = serde_json::from_str(r#"{"apiBaseUrl":"https://x"}"#).unwrap();
        assert_eq!(c.api_base_url.as_deref(), Some("https://x"));
        let c: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, RuntimeConfig::default());
    }
}
