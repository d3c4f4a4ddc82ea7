//! Toast notifications for the outcome of user actions.
//!
//! Mutations report failures here; list pages use an inline banner instead.

use crate::shared::icons::icon;
use contracts::shared::api_error::ApiError;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const AUTO_DISMISS_MS: u32 = 6_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    fn push(&self, kind: NotificationKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Notification { id, kind, message }));

        let items = self.items;
        Timeout::new(AUTO_DISMISS_MS, move || {
            items.try_update(|items| items.retain(|n| n.id != id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    /// Report a failed action. `action` reads like "Failed to {action}".
    pub fn error(&self, action: &str, err: &ApiError) {
        log::error!("failed to {}: {}", action, err);
        self.push(
            NotificationKind::Error,
            format!("Failed to {}: {}", action, err.user_message()),
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let class = match n.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="toast__text">{n.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
