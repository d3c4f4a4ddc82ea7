use crate::shared::filter_query::{dimensions, Dimension};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const QUERY_FILTER_DIMENSIONS: &[Dimension] = &[
    dimensions::CONNECTOR,
    dimensions::LIST_OF_TABLES,
    dimensions::PRIMARY_TABLE,
];

pub const VIEW_FILTER_DIMENSIONS: &[Dimension] =
    &[dimensions::LIST_OF_TABLES, dimensions::PRIMARY_TABLE];

/// Saved queries and views share one record shape and differ only in the
/// endpoint and the filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedQueryKind {
    Query,
    View,
}

impl NamedQueryKind {
    pub fn list_path(&self) -> &'static str {
        match self {
            NamedQueryKind::Query => "/main/core/api/v3/queries",
            NamedQueryKind::View => "/main/core/api/v3/views",
        }
    }

    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            NamedQueryKind::Query => QUERY_FILTER_DIMENSIONS,
            NamedQueryKind::View => VIEW_FILTER_DIMENSIONS,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NamedQueryKind::Query => "Queries",
            NamedQueryKind::View => "Views",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDefinition {
    #[serde(default)]
    pub query_to_execute: String,
    #[serde(default)]
    pub primary_table: Option<String>,
    #[serde(default)]
    pub list_of_tables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedQuery {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub query: QueryDefinition,
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_query::{translate, FilterToken};

    #[test]
    fn test_views_do_not_know_connector() {
        let tokens = vec![
            FilterToken::equals("connector", "aws"),
            FilterToken::equals("primary_table", "aws_ec2_instance"),
        ];
        let views = translate(&tokens, NamedQueryKind::View.dimensions());
        assert_eq!(views.tags["connector"], vec!["aws"]);
        assert!(views.dimension("primary_table").is_some());

        let queries = translate(&tokens, NamedQueryKind::Query.dimensions());
        assert!(queries.tags.is_empty());
        assert_eq!(queries.dimension("connector").unwrap(), &["aws"]);
    }
}
