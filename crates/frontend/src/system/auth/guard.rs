use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::context::use_session;
use crate::routes::app_route::AppRoute;
use crate::system::pages::login::LoginPage;

fn may_render(route: &AppRoute, session: &Session) -> bool {
    !route.requires_auth() || session.is_authenticated()
}

/// Renders `children` when the current route is public or a session exists;
/// otherwise the login page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let route = Memo::new(move |_| AppRoute::parse(&location.pathname.get()));

    view! {
        <Show
            when=move || route.with(|r| session.with(|s| may_render(r, s)))
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_paths_need_a_session_too() {
        let anonymous = Session::Unauthenticated;
        let signed_in = Session::with_token("t0k");

        let missing = AppRoute::parse("/no/such/page");
        assert_eq!(missing, AppRoute::NotFound);
        assert!(!may_render(&missing, &anonymous));
        assert!(may_render(&missing, &signed_in));

        assert!(may_render(&AppRoute::Login, &anonymous));
        assert!(!may_render(&AppRoute::Widgets, &anonymous));
    }
}
