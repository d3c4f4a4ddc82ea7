use contracts::system::auth::{Session, ACCESS_TOKEN_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the persisted session. Missing or malformed values give
/// `Session::Unauthenticated`.
pub fn load_session() -> Session {
    let raw = get_local_storage().and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten());
    Session::from_stored(raw.as_deref())
}

/// Persist `session`; an unauthenticated session clears the stored token
pub fn save_session(session: &Session) {
    let Some(storage) = get_local_storage() else {
        log::warn!("localStorage unavailable, session not persisted");
        return;
    };
    match session.to_stored() {
        Some(value) => {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, &value);
        }
        None => {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
