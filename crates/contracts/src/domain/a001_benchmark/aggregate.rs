use crate::shared::filter_query::{dimensions, Dimension, FilterQuery};
use crate::shared::list::{FilteredListRequest, PageRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Dimensions the benchmarks list endpoint accepts as arrays
pub const BENCHMARK_FILTER_DIMENSIONS: &[Dimension] = &[
    dimensions::SEVERITY,
    dimensions::CONNECTOR,
    dimensions::PARENT_BENCHMARK,
];

/// Compliance benchmark (framework)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "integrationTypes", alias = "integration_types")]
    pub connectors: Vec<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub auto_assign: bool,
    #[serde(default)]
    pub number_of_controls: u64,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /main/compliance/api/v3/benchmarks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkListRequest {
    #[serde(flatten)]
    pub list: FilteredListRequest,
    /// Only top-level frameworks, not nested sections
    pub root: bool,
}

impl BenchmarkListRequest {
    pub fn new(query: &FilterQuery, page: PageRequest) -> Self {
        Self {
            list: FilteredListRequest::new(query, BENCHMARK_FILTER_DIMENSIONS, page),
            root: true,
        }
    }
}

/// Integration as seen from a benchmark's assignment tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkAssignment {
    pub integration_id: String,
    #[serde(default, alias = "integration_name")]
    pub name: String,
    #[serde(default)]
    pub integration_type: String,
    #[serde(default)]
    pub assigned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BenchmarkAssignments {
    #[serde(default)]
    pub items: Vec<BenchmarkAssignment>,
    #[serde(default)]
    pub auto_assign: bool,
}

impl BenchmarkAssignments {
    pub fn assigned_ids(&self) -> BTreeSet<String> {
        self.items
            .iter()
            .filter(|a| a.assigned)
            .map(|a| a.integration_id.clone())
            .collect()
    }
}

/// Body of `POST /main/compliance/api/v3/benchmark/{id}/assign`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRequest {
    pub integration_ids: Vec<String>,
    pub auto_assign: bool,
}

impl AssignRequest {
    /// With auto-assign on, the backend assigns every integration itself and
    /// the explicit list is sent empty.
    pub fn from_selection(selected: &BTreeSet<String>, auto_assign: bool) -> Self {
        Self {
            integration_ids: if auto_assign {
                Vec::new()
            } else {
                selected.iter().cloned().collect()
            },
            auto_assign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_query::FilterToken;
    use serde_json::json;

    #[test]
    fn test_benchmark_decodes_integration_types_alias() {
        let b: Benchmark = serde_json::from_value(json!({
            "id": "cis_v140",
            "title": "CIS v1.4.0",
            "integrationTypes": ["aws_cloud_account"],
            "number_of_controls": 58
        }))
        .unwrap();
        assert_eq!(b.connectors, vec!["aws_cloud_account"]);
        assert_eq!(b.number_of_controls, 58);
        assert!(b.tags.is_empty());
    }

    #[test]
    fn test_list_request_body() {
        let mut query = FilterQuery::new();
        query.push(FilterToken::equals("integrationType", "azure"));
        query.push(FilterToken::equals("category", "security"));
        let body = BenchmarkListRequest::new(&query, PageRequest::default());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "connector": ["azure"],
                "tags": { "category": ["security"] },
                "operation": "and",
                "cursor": 1,
                "per_page": 20,
                "root": true
            })
        );
    }

    #[test]
    fn test_assign_request_from_selection() {
        let assignments: BenchmarkAssignments = serde_json::from_value(json!({
            "items": [
                { "integration_id": "a", "integration_name": "prod", "assigned": true },
                { "integration_id": "b", "name": "dev" },
                { "integration_id": "c", "assigned": true }
            ]
        }))
        .unwrap();
        let selected = assignments.assigned_ids();
        assert_eq!(selected.len(), 2);

        let req = AssignRequest::from_selection(&selected, false);
        assert_eq!(req.integration_ids, vec!["a", "c"]);

        let req = AssignRequest::from_selection(&selected, true);
        assert!(req.integration_ids.is_empty());
        assert!(req.auto_assign);
    }
}
