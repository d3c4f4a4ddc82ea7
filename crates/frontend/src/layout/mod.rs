pub mod global_context;
pub mod left;
pub mod notifications;
pub mod top_header;

use left::sidebar::Sidebar;
use left::Left;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use notifications::NotificationHost;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
///
/// The routed page renders into the content area through `<Outlet />`.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Left>
                    <Sidebar />
                </Left>

                <div class="app-main">
                    <Outlet />
                </div>
            </div>

            <NotificationHost />
        </div>
    }
}
