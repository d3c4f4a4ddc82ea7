//! API base URL resolution for the running page.

use contracts::shared::config::{resolve_api_base, RuntimeConfig};
use wasm_bindgen::JsValue;

const RUNTIME_CONFIG_KEY: &str = "__RUNTIME_CONFIG__";

/// Read `window.__RUNTIME_CONFIG__`, if the deployment injected one
pub fn runtime_config() -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<RuntimeConfig>(value) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("ignoring malformed {}: {}", RUNTIME_CONFIG_KEY, e);
            None
        }
    }
}

/// Get the base URL for API requests
///
/// The page origin, unless a local dev build points elsewhere through the
/// runtime config. Empty when there is no window.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let origin = window.location().origin().unwrap_or_default();
    resolve_api_base(&origin, runtime_config().as_ref())
}

/// Build a full API URL from a path such as `/main/compliance/api/v3/controls`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
