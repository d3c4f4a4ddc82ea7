use serde::{Deserialize, Serialize};

/// Installable connector type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub id: String,
    pub name: String,
    /// Integration type this plugin provides, e.g. `aws_cloud_account`
    #[serde(alias = "integration_type")]
    pub plugin_type: String,
    #[serde(default)]
    pub install_state: String,
    #[serde(default)]
    pub operational_status: String,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub count: PluginCounts,
    #[serde(default)]
    pub capabilities: PluginCapabilities,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub active: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginCapabilities {
    #[serde(default)]
    pub integration: bool,
    #[serde(default)]
    pub discovery: bool,
    #[serde(default)]
    pub schema: bool,
}

impl Plugin {
    pub fn is_installed(&self) -> bool {
        self.install_state.eq_ignore_ascii_case("installed")
    }

    pub fn is_enabled(&self) -> bool {
        self.operational_status.eq_ignore_ascii_case("enabled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_state_helpers() {
        let p: Plugin = serde_json::from_str(
            r#"{"id":"1","name":"AWS","integration_type":"aws_cloud_account","install_state":"INSTALLED","operational_status":"enabled","count":{"total":4}}"#,
        )
        .unwrap();
        assert!(p.is_installed());
        assert!(p.is_enabled());
        assert_eq!(p.count.total, 4);
        assert_eq!(p.count.active, 0);
        assert!(!p.capabilities.schema);
    }
}
