use crate::routes::app_route::AppRoute;
use crate::shared::page_frame::{PageCategory, PageFrame};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PageCategory::System>
            <div class="page__header">
                <h1 class="page__title">"Page not found"</h1>
            </div>
            <div class="page__content">
                <p>"Nothing lives at this address."</p>
                <A href=AppRoute::Overview.to_path()>"Back to overview"</A>
            </div>
        </PageFrame>
    }
}
