//! UI preferences persisted in localStorage.

use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "console_ui_preferences_v1";

pub const PAGE_SIZE_OPTIONS: [u64; 4] = [10, 20, 50, 100];

fn default_true() -> bool {
    true
}

fn default_page_size() -> u64 {
    20
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default = "default_true")]
    pub sidebar_open: bool,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            page_size: default_page_size(),
        }
    }
}

impl UiPreferences {
    /// Parse a stored value; anything unreadable falls back to defaults
    pub fn parse(raw: Option<&str>) -> Self {
        let mut prefs = raw
            .and_then(|r| serde_json::from_str::<UiPreferences>(r).ok())
            .unwrap_or_default();
        if !PAGE_SIZE_OPTIONS.contains(&prefs.page_size) {
            prefs.page_size = default_page_size();
        }
        prefs
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load() -> UiPreferences {
    let raw = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    UiPreferences::parse(raw.as_deref())
}

pub fn save(prefs: &UiPreferences) {
    let Some(s) = storage() else { return };
    match serde_json::to_string(prefs) {
        Ok(json) => {
            let _ = s.set_item(STORAGE_KEY, &json);
        }
        Err(e) => log::warn!("failed to persist UI preferences: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_broken_value_uses_defaults() {
        assert_eq!(UiPreferences::parse(None), UiPreferences::default());
        assert_eq!(UiPreferences::parse(Some("{oops")), UiPreferences::default());
    }

    #[test]
    fn test_partial_value_keeps_known_fields() {
        let prefs = UiPreferences::parse(Some(r#"{"sidebar_open":false}"#));
        assert!(!prefs.sidebar_open);
        assert_eq!(prefs.page_size, 20);
    }

    #[test]
    fn test_unsupported_page_size_is_reset() {
        let prefs = UiPreferences::parse(Some(r#"{"sidebar_open":true,"page_size":7}"#));
        assert_eq!(prefs.page_size, 20);
        let prefs = UiPreferences::parse(Some(r#"{"page_size":50}"#));
        assert_eq!(prefs.page_size, 50);
    }
}
