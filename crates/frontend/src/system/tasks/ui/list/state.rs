use crate::shared::list_loader::ListQuery;
use contracts::shared::list::PageRequest;
use leptos::prelude::*;

/// Tasks are paged but not filtered
pub fn create_state(per_page: u64) -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery {
        page: PageRequest::new(1, per_page),
        ..Default::default()
    })
}
