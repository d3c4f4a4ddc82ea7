//! Loading, empty and error feedback shared by list and detail pages.

use crate::shared::icons::icon;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use thaw::Spinner;

/// Error banner with a retry action. Rows of the last successful load stay
/// rendered below it.
#[component]
pub fn ErrorBanner(
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__icon">{icon("alert-triangle")}</span>
                    <span class="warning-box__text">{e.user_message()}</span>
                    {on_retry.map(|retry| view! {
                        <button class="button button--secondary" on:click=move |_| retry.run(())>
                            {icon("refresh")}
                            "Retry"
                        </button>
                    })}
                </div>
            }
        })
    }
}

#[component]
pub fn LoadingIndicator(#[prop(into)] when: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || when.get()>
            <div class="loading-indicator">
                <Spinner />
            </div>
        </Show>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{message}</p>
        </div>
    }
}
