//! Paged list responses and the client-side state of a list page.
//!
//! Every list fetch takes a [`RequestTicket`]; a response is applied only when
//! its ticket is still the latest one, so a slow response to an old filter can
//! never overwrite the rows of a newer one.

use crate::shared::api_error::ApiError;
use crate::shared::filter_query::{Dimension, FilterOperation, FilterQuery, TranslatedFilter};
use serde::{Deserialize, Serialize};

/// `{items, total_count}` as returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_count: u64,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// Cursor-based pagination as the list endpoints expect it (1-based cursor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub cursor: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            cursor: 1,
            per_page: 20,
        }
    }
}

impl PageRequest {
    pub fn new(cursor: u64, per_page: u64) -> Self {
        Self {
            cursor: cursor.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Total number of pages for `total_count` rows
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.per_page.max(1))
    }
}

/// Body shared by the filtered `POST` list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredListRequest {
    #[serde(flatten)]
    pub filter: TranslatedFilter,
    pub operation: FilterOperation,
    pub cursor: u64,
    pub per_page: u64,
}

impl FilteredListRequest {
    pub fn new(query: &FilterQuery, known: &[Dimension], page: PageRequest) -> Self {
        Self {
            filter: query.translate(known),
            operation: query.operation,
            cursor: page.cursor,
            per_page: page.per_page,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Idle,
    Loading,
    Loaded,
    /// The request succeeded and matched nothing
    Empty,
    /// The request failed; rows from the last success stay visible
    Failed(ApiError),
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub total_count: u64,
    pub status: ListStatus,
    sequencer: RequestSequencer,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
            status: ListStatus::Idle,
            sequencer: RequestSequencer::default(),
        }
    }
}

impl<T> ListState<T> {
    /// Start a new fetch; any fetch still in flight becomes stale
    pub fn begin(&mut self) -> RequestTicket {
        self.status = ListStatus::Loading;
        self.sequencer.issue()
    }

    /// Apply a response. Returns `false` when the ticket is stale and the
    /// response was dropped.
    pub fn finish(&mut self, ticket: RequestTicket, result: Result<ListPage<T>, ApiError>) -> bool {
        if !self.sequencer.is_current(ticket) {
            log::debug!("dropping stale list response {:?}", ticket);
            return false;
        }
        match result {
            Ok(page) => {
                self.status = if page.items.is_empty() {
                    ListStatus::Empty
                } else {
                    ListStatus::Loaded
                };
                self.total_count = page.total_count.max(page.items.len() as u64);
                self.rows = page.items;
            }
            Err(err) => {
                self.status = ListStatus::Failed(err);
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            ListStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<&str>, total: u64) -> ListPage<String> {
        ListPage {
            items: items.into_iter().map(String::from).collect(),
            total_count: total,
        }
    }

    #[test]
    fn test_last_request_wins() {
        let mut state = ListState::<String>::default();
        let first = state.begin();
        let second = state.begin();

        // second response arrives first
        assert!(state.finish(second, Ok(page(vec!["new"], 1))));
        // the slow first response must not overwrite it
        assert!(!state.finish(first, Ok(page(vec!["old", "older"], 2))));

        assert_eq!(state.rows, vec!["new".to_string()]);
        assert_eq!(state.total_count, 1);
        assert_eq!(state.status, ListStatus::Loaded);
    }

    #[test]
    fn test_stale_error_is_ignored() {
        let mut state = ListState::<String>::default();
        let first = state.begin();
        let second = state.begin();
        assert!(!state.finish(first, Err(ApiError::Network("timeout".into()))));
        assert!(state.is_loading());
        assert!(state.finish(second, Ok(page(vec!["a"], 1))));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_empty_and_failed_are_distinct() {
        let mut state = ListState::<String>::default();
        let t = state.begin();
        state.finish(t, Ok(page(vec![], 0)));
        assert_eq!(state.status, ListStatus::Empty);

        let t = state.begin();
        state.finish(t, Ok(page(vec!["a", "b"], 10)));
        let t = state.begin();
        state.finish(t, Err(ApiError::from_status(500, "")));
        assert!(matches!(state.status, ListStatus::Failed(ApiError::Server { status: 500, .. })));
        // rows of the last success remain
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.total_count, 10);
    }

    #[test]
    fn test_list_page_defaults_missing_fields() {
        let page: ListPage<String> = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_filtered_request_body() {
        use crate::shared::filter_query::{dimensions::SEVERITY, FilterToken};

        let mut query = FilterQuery::new();
        query.push(FilterToken::equals("severity", "high"));
        query.push(FilterToken::equals("owner", "sec-team"));
        let body = FilteredListRequest::new(&query, &[SEVERITY], PageRequest::new(2, 50));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "severity": ["high"],
                "tags": { "owner": ["sec-team"] },
                "operation": "and",
                "cursor": 2,
                "per_page": 50
            })
        );
    }

    #[test]
    fn test_page_request_math() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req, PageRequest { cursor: 1, per_page: 1 });
        let req = PageRequest::new(2, 20);
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(20), 1);
        assert_eq!(req.total_pages(41), 3);
    }
}
