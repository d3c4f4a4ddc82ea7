use contracts::shared::api_error::ApiError;
use contracts::system::auth::{Session, ACCESS_TOKEN_KEY};
use leptos::prelude::*;
use std::cell::Cell;

use super::storage;

// Session signal of the mounted provider, read by the HTTP helpers which run
// outside any component owner
thread_local! {
    static ACTIVE_SESSION: Cell<Option<RwSignal<Session>>> = const { Cell::new(None) };
}

/// Session context provider component.
///
/// The session is read from localStorage once at startup; afterwards the
/// context is the source of truth and storage mirrors it. Logins and logouts
/// in other tabs arrive as `storage` events and are applied here.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(storage::load_session());
    if !session.get_untracked().is_authenticated() {
        log::info!("no stored session, sign-in required");
    }

    register_session(session);
    provide_context(session);

    let _ = window_event_listener(leptos::ev::storage, move |ev: leptos::ev::StorageEvent| {
        // `key` is None when another tab cleared all of storage
        if ev.key().is_some_and(|k| k != ACCESS_TOKEN_KEY) {
            return;
        }
        let next = Session::from_stored(ev.new_value().as_deref());
        if session.get_untracked() != next {
            log::info!("session changed in another tab");
            session.set(next);
        }
    });

    children()
}

/// Hook to access the session signal
pub fn use_session() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().expect("SessionProvider not found in component tree")
}

pub fn register_session(session: RwSignal<Session>) {
    ACTIVE_SESSION.with(|s| s.set(Some(session)));
}

/// Current session of the mounted provider; `Unauthenticated` without one
pub fn current_session() -> Session {
    ACTIVE_SESSION
        .with(|s| s.get())
        .and_then(|s| s.try_get_untracked())
        .unwrap_or_default()
}

/// Sign out when the API rejected the token. Returns `true` when a live
/// session was dropped.
pub fn expire_rejected(session: RwSignal<Session>, err: &ApiError) -> bool {
    if *err != ApiError::Unauthenticated {
        return false;
    }
    let was_authenticated = session
        .try_with_untracked(|s| s.is_authenticated())
        .unwrap_or(false);
    if was_authenticated {
        session.try_set(Session::Unauthenticated);
    }
    was_authenticated
}

/// Apply an API failure to the active session; the guard then shows login
pub fn handle_api_error(err: &ApiError) {
    let Some(session) = ACTIVE_SESSION.with(|s| s.get()) else {
        return;
    };
    if expire_rejected(session, err) {
        log::warn!("token rejected by the API, signing out");
        storage::clear_session();
    }
}

/// Start a session from a pasted bearer token
pub fn do_login(session: RwSignal<Session>, token: &str) -> Result<(), String> {
    let next = Session::with_token(token);
    if !next.is_authenticated() {
        return Err("Token must not be empty".to_string());
    }
    storage::save_session(&next);
    session.set(next);
    Ok(())
}

pub fn do_logout(session: RwSignal<Session>) {
    storage::clear_session();
    session.set(Session::Unauthenticated);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_follow_the_registered_session() {
        assert_eq!(current_session(), Session::Unauthenticated);

        let session = RwSignal::new(Session::with_token("first"));
        register_session(session);
        assert_eq!(current_session(), Session::with_token("first"));

        // e.g. a logout applied from another tab
        session.set(Session::Unauthenticated);
        assert_eq!(current_session().bearer_header(), Err(ApiError::Unauthenticated));
    }

    #[test]
    fn test_rejected_token_signs_out() {
        let session = RwSignal::new(Session::with_token("stale"));

        assert!(!expire_rejected(session, &ApiError::from_status(500, "")));
        assert!(session.get_untracked().is_authenticated());

        assert!(expire_rejected(session, &ApiError::from_status(401, "")));
        assert_eq!(session.get_untracked(), Session::Unauthenticated);

        // already signed out, nothing left to clear
        assert!(!expire_rejected(session, &ApiError::from_status(403, "")));
    }
}
