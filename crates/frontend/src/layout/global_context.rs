use crate::shared::preferences::{self, UiPreferences};
use leptos::prelude::*;

/// App-wide UI state. Values are seeded from and written back to the
/// persisted preferences.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub page_size: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let prefs = preferences::load();
        Self {
            left_open: RwSignal::new(prefs.sidebar_open),
            page_size: RwSignal::new(prefs.page_size),
        }
    }

    fn persist(&self) {
        preferences::save(&UiPreferences {
            sidebar_open: self.left_open.get_untracked(),
            page_size: self.page_size.get_untracked(),
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|v| *v = !*v);
        self.persist();
    }

    pub fn set_page_size(&self, size: u64) {
        self.page_size.set(size);
        self.persist();
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
