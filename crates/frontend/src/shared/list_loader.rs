//! Signal-backed list state with last-request-wins loading.

use crate::layout::global_context::use_global_context;
use contracts::shared::api_error::ApiError;
use contracts::shared::filter_query::FilterQuery;
use contracts::shared::list::{ListPage, ListState, ListStatus, PageRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Filter and page of one list view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub filter: FilterQuery,
    pub page: PageRequest,
}

impl ListQuery {
    pub fn with_filter(filter: FilterQuery, per_page: u64) -> Self {
        Self {
            filter,
            page: PageRequest::new(1, per_page),
        }
    }

    /// A changed filter always starts again from the first page
    pub fn set_filter(&mut self, filter: FilterQuery) {
        self.filter = filter;
        self.page.cursor = 1;
    }
}

pub struct ListLoader<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
}

impl<T: Send + Sync + 'static> Clone for ListLoader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListLoader<T> {}

impl<T: Clone + Send + Sync + 'static> ListLoader<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
        }
    }

    /// Issue a fetch. Only the response to the most recent call is applied.
    pub fn load<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = Result<ListPage<T>, ApiError>> + 'static,
    {
        let Some(ticket) = self.state.try_update(|s| s.begin()) else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            let result = fetch.await;
            if let Err(e) = &result {
                log::warn!("list load failed: {}", e);
            }
            state.try_update(|s| s.finish(ticket, result));
        });
    }

    /// Reload whenever `query` changes, starting right away
    pub fn load_on_change<F, Fut>(&self, query: RwSignal<ListQuery>, fetch: F)
    where
        F: Fn(ListQuery) -> Fut + 'static,
        Fut: Future<Output = Result<ListPage<T>, ApiError>> + 'static,
    {
        let loader = *self;
        Effect::new(move |_| {
            let q = query.get();
            loader.load(fetch(q));
        });
    }

    pub fn rows(&self) -> Vec<T> {
        self.state.with(|s| s.rows.clone())
    }

    pub fn total_count(&self) -> u64 {
        self.state.with(|s| s.total_count)
    }

    pub fn status(&self) -> ListStatus {
        self.state.with(|s| s.status.clone())
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.with(|s| s.error().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ListLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter signal for a `FilterPanel`, kept in sync with `query`
pub fn filter_signal(query: RwSignal<ListQuery>) -> RwSignal<FilterQuery> {
    let filter = RwSignal::new(query.with_untracked(|q| q.filter.clone()));
    Effect::new(move |_| {
        let next = filter.get();
        if query.with_untracked(|q| q.filter != next) {
            query.update(|q| q.set_filter(next));
        }
    });
    filter
}

/// Page change handler that also remembers the chosen page size
pub fn page_change_callback(query: RwSignal<ListQuery>) -> Callback<PageRequest> {
    let ctx = use_global_context();
    Callback::new(move |page: PageRequest| {
        if page.per_page != query.with_untracked(|q| q.page.per_page) {
            ctx.set_page_size(page.per_page);
        }
        query.update(|q| q.page = page);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filter_query::FilterToken;

    #[test]
    fn test_new_filter_resets_cursor() {
        let mut q = ListQuery::with_filter(FilterQuery::new(), 50);
        q.page.cursor = 4;
        let mut filter = FilterQuery::new();
        filter.push(FilterToken::equals("severity", "high"));
        q.set_filter(filter.clone());
        assert_eq!(q.page, PageRequest::new(1, 50));
        assert_eq!(q.filter, filter);
    }
}
