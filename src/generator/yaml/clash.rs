use serde::{Deserialize, Serialize};

use crate::models::{GeneralSettings, ProxyGroupRecord, ProxyRecord};

/// Represents a complete Clash configuration output
///
/// Field order is the key order of the rendered document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashYamlOutput {
    #[serde(default)]
    pub proxies: Vec<ProxyRecord>,

    /// The auto-select group first, then every explicit group
    #[serde(default)]
    pub proxy_groups: Vec<ProxyGroupRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<GeneralSettings>,

    #[serde(default)]
    pub rules: Vec<String>,
}

impl ClashYamlOutput {
    /// Render the document as YAML
    ///
    /// Non-ASCII names are written literally and nested blocks use a two
    /// space indentation.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Parse a rendered document back into its structure
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
