use crate::shared::list_loader::ListQuery;
use contracts::shared::filter_query::FilterQuery;
use leptos::prelude::*;

/// Benchmarks start unfiltered
pub fn create_state(per_page: u64) -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery::with_filter(FilterQuery::new(), per_page))
}
