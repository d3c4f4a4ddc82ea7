use crate::enums::severity::Severity;
use crate::shared::filter_query::{dimensions, Dimension, FilterQuery};
use crate::shared::list::{FilteredListRequest, PageRequest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CONTROL_FILTER_DIMENSIONS: &[Dimension] = &[
    dimensions::SEVERITY,
    dimensions::CONNECTOR,
    dimensions::PARENT_BENCHMARK,
    dimensions::LIST_OF_TABLES,
    dimensions::PRIMARY_TABLE,
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlQuery {
    #[serde(default)]
    pub primary_table: Option<String>,
    #[serde(default)]
    pub list_of_tables: Vec<String>,
    #[serde(default, alias = "queryToExecute")]
    pub query_to_execute: String,
}

/// Single compliance rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_severity")]
    pub severity: Severity,
    #[serde(default, alias = "integrationType", alias = "integration_type")]
    pub connector: Vec<String>,
    #[serde(default)]
    pub parent_benchmarks: Vec<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub query: Option<ControlQuery>,
}

fn default_severity() -> Severity {
    Severity::None
}

/// Filter a controls page starts with: every severity selected
pub fn default_control_query() -> FilterQuery {
    FilterQuery::seeded(
        dimensions::SEVERITY.key,
        Severity::all().into_iter().map(|s| s.code()),
    )
}

/// Body of `POST /main/compliance/api/v3/controls`
pub fn control_list_request(query: &FilterQuery, page: PageRequest) -> FilteredListRequest {
    FilteredListRequest::new(query, CONTROL_FILTER_DIMENSIONS, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_query_selects_all_severities() {
        let body = control_list_request(&default_control_query(), PageRequest::default());
        assert_eq!(
            body.filter.dimension("severity").unwrap(),
            &["critical", "high", "medium", "low", "none"]
        );
        assert!(body.filter.tags.is_empty());
    }

    #[test]
    fn test_table_dimensions_are_known_on_controls() {
        let mut query = FilterQuery::new();
        query.push(crate::shared::filter_query::FilterToken::equals("primary_table", "aws_iam_role"));
        query.push(crate::shared::filter_query::FilterToken::equals("list_of_tables", "aws_iam_policy"));
        let body = control_list_request(&query, PageRequest::default());
        assert_eq!(body.filter.dimension("primary_table").unwrap(), &["aws_iam_role"]);
        assert_eq!(body.filter.dimension("list_of_tables").unwrap(), &["aws_iam_policy"]);
    }

    #[test]
    fn test_control_decodes_with_query() {
        let c: Control = serde_json::from_value(json!({
            "id": "aws_iam_root_mfa",
            "title": "Root account has MFA",
            "severity": "critical",
            "integrationType": ["aws_cloud_account"],
            "query": { "primary_table": "aws_iam_account_summary", "list_of_tables": ["aws_iam_account_summary"] }
        }))
        .unwrap();
        assert_eq!(c.severity, Severity::Critical);
        assert_eq!(c.connector, vec!["aws_cloud_account"]);
        assert_eq!(
            c.query.unwrap().primary_table.as_deref(),
            Some("aws_iam_account_summary")
        );
    }

    #[test]
    fn test_missing_severity_defaults_to_none() {
        let c: Control = serde_json::from_value(json!({ "id": "x", "title": "X" })).unwrap();
        assert_eq!(c.severity, Severity::None);
    }

    #[test]
    fn test_odd_severity_does_not_fail_the_page() {
        let page: crate::shared::list::ListPage<Control> = serde_json::from_value(json!({
            "items": [
                { "id": "a", "title": "A", "severity": "High" },
                { "id": "b", "title": "B", "severity": "" },
                { "id": "c", "title": "C" }
            ],
            "total_count": 3
        }))
        .unwrap();
        let severities: Vec<Severity> = page.items.iter().map(|c| c.severity).collect();
        assert_eq!(severities, vec![Severity::High, Severity::None, Severity::None]);
    }
}
