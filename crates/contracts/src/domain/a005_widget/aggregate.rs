use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard widget definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub widget_type: String,
    #[serde(default)]
    pub query_id: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub widget_props: serde_json::Value,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
