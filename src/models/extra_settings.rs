use serde::{Deserialize, Serialize};

/// Default listen address of the generated DNS block
pub const DEFAULT_DNS_LISTEN: &str = "0.0.0.0:53";
/// Default enhanced mode of the generated DNS block
pub const DEFAULT_ENHANCED_MODE: &str = "fake-ip";
/// Name of the synthesized auto-select group
pub const DEFAULT_AUTO_GROUP_NAME: &str = "auto";
/// Health check URL of the synthesized auto-select group
pub const DEFAULT_AUTO_GROUP_URL: &str = "http://www.gstatic.com/generate_204";
/// Health check interval of the synthesized auto-select group, in seconds
pub const DEFAULT_AUTO_GROUP_INTERVAL: u32 = 300;
/// Region routed directly by the generated GEOIP rule
pub const DEFAULT_GEOIP_REGION: &str = "CN";

/// Settings for profile conversion
///
/// The defaults reproduce the fixed values every generated document has
/// always carried; a settings file may override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraSettings {
    /// Listen address of the DNS block
    pub dns_listen: String,
    /// Enhanced mode of the DNS block
    pub enhanced_mode: String,
    /// Name of the auto-select group
    pub auto_group_name: String,
    /// Health check URL of the auto-select group
    pub auto_group_url: String,
    /// Health check interval of the auto-select group
    pub auto_group_interval: u32,
    /// Region used in the GEOIP rule
    pub geoip_region: String,
}

impl Default for ExtraSettings {
    fn default() -> Self {
        ExtraSettings {
            dns_listen: DEFAULT_DNS_LISTEN.to_string(),
            enhanced_mode: DEFAULT_ENHANCED_MODE.to_string(),
            auto_group_name: DEFAULT_AUTO_GROUP_NAME.to_string(),
            auto_group_url: DEFAULT_AUTO_GROUP_URL.to_string(),
            auto_group_interval: DEFAULT_AUTO_GROUP_INTERVAL,
            geoip_region: DEFAULT_GEOIP_REGION.to_string(),
        }
    }
}
