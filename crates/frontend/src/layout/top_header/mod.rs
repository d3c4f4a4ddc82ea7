//! TopHeader component - application top navigation bar.
//!
//! Holds the sidebar toggle, the title of the current page and the
//! sign-out action.

use crate::layout::global_context::use_global_context;
use crate::routes::app_route::AppRoute;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_session};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let location = use_location();

    let page_title = move || AppRoute::parse(&location.pathname.get()).title();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Compliance Console"</span>
                <span class="top-header__page">{page_title}</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| do_logout(session)
                    title="Sign out"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
