//! Property-filter query and its translation into list request bodies.
//!
//! The property-filter widget produces a flat list of `{propertyKey, value,
//! operator}` tokens. Each list page knows a small set of dimensions the
//! backend accepts as dedicated arrays (`severity`, `connector`, ...);
//! every other key is a user-defined resource tag and goes into `tags`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A filter token as emitted by the UI widget, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilterToken {
    pub property_key: Option<String>,
    pub value: Option<String>,
    pub operator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("filter token has an empty property key")]
    EmptyPropertyKey,
    #[error("filter token for '{key}' has no value")]
    MissingValue { key: String },
    #[error("operator '{operator}' is not supported for '{key}'")]
    UnsupportedOperator { key: String, operator: String },
}

/// A validated equality token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterToken {
    pub property_key: String,
    pub value: String,
}

impl FilterToken {
    pub fn equals(property_key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_key: property_key.into(),
            value: value.into(),
        }
    }

    /// Chip label shown in the filter panel
    pub fn label(&self) -> String {
        format!("{} = {}", self.property_key, self.value)
    }
}

impl TryFrom<RawFilterToken> for FilterToken {
    type Error = FilterError;

    fn try_from(raw: RawFilterToken) -> Result<Self, Self::Error> {
        let key = raw
            .property_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(FilterError::EmptyPropertyKey)?;

        match raw.operator.as_deref().map(str::trim) {
            None | Some("") | Some("=") => {}
            Some(other) => {
                return Err(FilterError::UnsupportedOperator {
                    key,
                    operator: other.to_string(),
                })
            }
        }

        let value = raw.value.ok_or_else(|| FilterError::MissingValue { key: key.clone() })?;

        Ok(FilterToken {
            property_key: key,
            value,
        })
    }
}

/// Combinator hint passed through to the backend as-is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperation {
    #[default]
    And,
    Or,
}

/// A dimension the backend accepts as a dedicated array field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    /// Output field name
    pub key: &'static str,
    /// Other property keys the widget may use for the same dimension
    pub aliases: &'static [&'static str],
}

impl Dimension {
    pub const fn new(key: &'static str) -> Self {
        Self { key, aliases: &[] }
    }

    pub const fn with_aliases(key: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { key, aliases }
    }

    pub fn matches(&self, property_key: &str) -> bool {
        self.key == property_key || self.aliases.iter().any(|a| *a == property_key)
    }
}

pub mod dimensions {
    use super::Dimension;

    pub const SEVERITY: Dimension = Dimension::new("severity");
    pub const CONNECTOR: Dimension =
        Dimension::with_aliases("connector", &["integrationType", "integration_type"]);
    pub const PARENT_BENCHMARK: Dimension = Dimension::new("parent_benchmark");
    pub const LIST_OF_TABLES: Dimension = Dimension::new("list_of_tables");
    pub const PRIMARY_TABLE: Dimension = Dimension::new("primary_table");
}

/// Result of translating a token list for one page's dimension table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslatedFilter {
    #[serde(flatten)]
    dimensions: BTreeMap<&'static str, Vec<String>>,
    pub tags: BTreeMap<String, Vec<String>>,
}

impl TranslatedFilter {
    /// Values collected for a known dimension; `None` when no token matched
    pub fn dimension(&self, key: &str) -> Option<&[String]> {
        self.dimensions.get(key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty() && self.tags.is_empty()
    }
}

/// Split tokens into per-dimension arrays and a tag map.
///
/// Values keep submission order and duplicates are kept.
pub fn translate(tokens: &[FilterToken], known: &[Dimension]) -> TranslatedFilter {
    let mut out = TranslatedFilter::default();
    for token in tokens {
        match known.iter().find(|d| d.matches(&token.property_key)) {
            Some(dimension) => out
                .dimensions
                .entry(dimension.key)
                .or_default()
                .push(token.value.clone()),
            None => out
                .tags
                .entry(token.property_key.clone())
                .or_default()
                .push(token.value.clone()),
        }
    }
    out
}

/// Current state of a page's property filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub tokens: Vec<FilterToken>,
    pub operation: FilterOperation,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query pre-populated with one token per value, e.g. all severities
    pub fn seeded<I, S>(property_key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: values
                .into_iter()
                .map(|v| FilterToken::equals(property_key, v))
                .collect(),
            operation: FilterOperation::Or,
        }
    }

    /// Validate a widget change event into a new query
    pub fn from_raw(
        raw: Vec<RawFilterToken>,
        operation: FilterOperation,
    ) -> Result<Self, FilterError> {
        let tokens = raw
            .into_iter()
            .map(FilterToken::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tokens, operation })
    }

    pub fn push(&mut self, token: FilterToken) {
        self.tokens.push(token);
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.tokens.len() {
            self.tokens.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn translate(&self, known: &[Dimension]) -> TranslatedFilter {
        translate(&self.tokens, known)
    }
}

#[cfg(test)]
mod tests {
    use super::dimensions::*;
    use super::*;
    use serde_json::json;

    fn tok(k: &str, v: &str) -> FilterToken {
        FilterToken::equals(k, v)
    }

    #[test]
    fn test_severity_and_tag_example() {
        let tokens = vec![
            tok("severity", "high"),
            tok("severity", "critical"),
            tok("env", "prod"),
        ];
        let out = translate(&tokens, &[SEVERITY]);
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({ "severity": ["high", "critical"], "tags": { "env": ["prod"] } })
        );
    }

    #[test]
    fn test_empty_tokens_produce_no_dimensions() {
        let out = translate(&[], &[SEVERITY, CONNECTOR, PRIMARY_TABLE]);
        assert_eq!(out.dimension("severity"), None);
        assert_eq!(out.dimension("connector"), None);
        assert!(out.tags.is_empty());
        assert_eq!(serde_json::to_value(&out).unwrap(), json!({ "tags": {} }));
    }

    #[test]
    fn test_duplicates_append_in_order() {
        let tokens = vec![
            tok("primary_table", "aws_s3_bucket"),
            tok("team", "a"),
            tok("primary_table", "aws_s3_bucket"),
            tok("team", "b"),
            tok("team", "a"),
        ];
        let out = translate(&tokens, &[PRIMARY_TABLE]);
        assert_eq!(
            out.dimension("primary_table").unwrap(),
            &["aws_s3_bucket".to_string(), "aws_s3_bucket".to_string()]
        );
        assert_eq!(out.tags["team"], vec!["a", "b", "a"]);
    }

    #[test]
    fn test_aliases_fold_into_canonical_key() {
        let tokens = vec![tok("integrationType", "aws"), tok("connector", "azure")];
        let out = translate(&tokens, &[CONNECTOR]);
        assert_eq!(out.dimension("connector").unwrap(), &["aws", "azure"]);
        assert!(out.tags.is_empty());
    }

    #[test]
    fn test_key_outside_page_table_is_a_tag() {
        // list_of_tables is a dimension on some pages but not on this one
        let tokens = vec![tok("list_of_tables", "aws_iam_user")];
        let out = translate(&tokens, &[SEVERITY]);
        assert_eq!(out.dimension("list_of_tables"), None);
        assert_eq!(out.tags["list_of_tables"], vec!["aws_iam_user"]);
    }

    #[test]
    fn test_translate_is_deterministic() {
        let tokens = vec![
            tok("severity", "low"),
            tok("b", "1"),
            tok("a", "2"),
            tok("parent_benchmark", "cis"),
        ];
        let known = [SEVERITY, PARENT_BENCHMARK];
        let first = serde_json::to_string(&translate(&tokens, &known)).unwrap();
        let second = serde_json::to_string(&translate(&tokens, &known)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_raw_token_validation() {
        let ok = FilterToken::try_from(RawFilterToken {
            property_key: Some(" env ".into()),
            value: Some("".into()),
            operator: Some("=".into()),
        })
        .unwrap();
        assert_eq!(ok, tok("env", ""));

        let missing = FilterToken::try_from(RawFilterToken {
            property_key: Some("env".into()),
            value: None,
            operator: None,
        });
        assert_eq!(missing, Err(FilterError::MissingValue { key: "env".into() }));

        let empty_key = FilterToken::try_from(RawFilterToken {
            property_key: Some("   ".into()),
            value: Some("x".into()),
            operator: None,
        });
        assert_eq!(empty_key, Err(FilterError::EmptyPropertyKey));

        let bad_op = FilterToken::try_from(RawFilterToken {
            property_key: Some("severity".into()),
            value: Some("high".into()),
            operator: Some("!=".into()),
        });
        assert!(matches!(bad_op, Err(FilterError::UnsupportedOperator { .. })));
    }

    #[test]
    fn test_from_raw_rejects_whole_event_on_bad_token() {
        let raw: Vec<RawFilterToken> = serde_json::from_value(json!([
            { "propertyKey": "severity", "value": "high", "operator": "=" },
            { "propertyKey": "env" }
        ]))
        .unwrap();
        assert!(FilterQuery::from_raw(raw, FilterOperation::And).is_err());
    }

    #[test]
    fn test_seeded_query() {
        let q = FilterQuery::seeded("severity", ["critical", "high"]);
        assert_eq!(q.operation, FilterOperation::Or);
        assert_eq!(q.tokens, vec![tok("severity", "critical"), tok("severity", "high")]);

        let mut q = q;
        q.remove(0);
        q.remove(10);
        assert_eq!(q.tokens.len(), 1);
        q.clear();
        assert!(q.translate(&[SEVERITY]).is_empty());
    }
}
