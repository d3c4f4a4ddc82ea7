use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connected cloud account or credential source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub integration_id: String,
    pub name: String,
    #[serde(default)]
    pub provider_id: String,
    pub integration_type: String,
    #[serde(default)]
    pub state: IntegrationState,
    #[serde(default)]
    pub last_check: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IntegrationState {
    Active,
    Inactive,
    Archived,
    Sample,
    #[default]
    #[serde(other)]
    Unknown,
}

impl IntegrationState {
    pub fn display_name(&self) -> &'static str {
        match self {
            IntegrationState::Active => "Active",
            IntegrationState::Inactive => "Inactive",
            IntegrationState::Archived => "Archived",
            IntegrationState::Sample => "Sample",
            IntegrationState::Unknown => "Unknown",
        }
    }
}

/// Query string of `GET /main/integration/api/v1/integrations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationListQuery {
    pub integration_type: String,
    pub cursor: u64,
    pub per_page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_state_is_tolerated() {
        let i: Integration = serde_json::from_str(
            r#"{"integration_id":"i1","name":"prod","integration_type":"aws_cloud_account","state":"HEALTHY_ISH"}"#,
        )
        .unwrap();
        assert_eq!(i.state, IntegrationState::Unknown);

        let i: Integration = serde_json::from_str(
            r#"{"integration_id":"i1","name":"prod","integration_type":"aws_cloud_account","state":"ACTIVE"}"#,
        )
        .unwrap();
        assert_eq!(i.state.display_name(), "Active");
    }
}
