use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationService;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar state and other persisted UI preferences
    provide_context(AppGlobalContext::new());

    // Toasts for failed mutations
    provide_context(NotificationService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
