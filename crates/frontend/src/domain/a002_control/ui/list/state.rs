use crate::shared::list_loader::ListQuery;
use contracts::domain::a002_control::aggregate::default_control_query;
use contracts::shared::filter_query::{dimensions, FilterQuery, FilterToken};
use leptos::prelude::*;

/// Controls start with every severity selected
pub fn create_state(per_page: u64) -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery::with_filter(default_control_query(), per_page))
}

/// Controls of one benchmark, any severity
pub fn benchmark_filter(benchmark_id: &str) -> FilterQuery {
    let mut filter = FilterQuery::new();
    filter.push(FilterToken::equals(dimensions::PARENT_BENCHMARK.key, benchmark_id));
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_control::aggregate::CONTROL_FILTER_DIMENSIONS;

    #[test]
    fn test_benchmark_filter_uses_parent_dimension() {
        let out = benchmark_filter("aws_cis_v140").translate(CONTROL_FILTER_DIMENSIONS);
        assert_eq!(
            out.dimension("parent_benchmark"),
            Some(&["aws_cis_v140".to_string()][..])
        );
        assert!(out.tags.is_empty());
    }
}
