use serde::{Deserialize, Serialize};

use super::ExtraSettings;

/// DNS settings derived from the `[General]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralSettings {
    pub enable: bool,
    pub listen: String,
    pub enhanced_mode: String,
    #[serde(default)]
    pub nameserver: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Vec<String>>,
}

impl GeneralSettings {
    /// Settings created when a `[General]` header is seen, before any key
    pub fn new(ext: &ExtraSettings) -> Self {
        GeneralSettings {
            enable: true,
            listen: ext.dns_listen.clone(),
            enhanced_mode: ext.enhanced_mode.clone(),
            nameserver: Vec::new(),
            fallback: None,
        }
    }

    /// Replace the nameservers with a comma separated list
    ///
    /// Entries are trimmed but kept even when empty.
    pub fn set_dns_servers(&mut self, value: &str) {
        self.nameserver = value.split(',').map(|s| s.trim().to_string()).collect();
    }

    /// Use a single DNS-over-HTTPS server as fallback
    pub fn set_doh_server(&mut self, value: &str) {
        self.fallback = Some(vec![value.trim().to_string()]);
    }
}
