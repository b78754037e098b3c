use serde::{Deserialize, Serialize};

use super::ExtraSettings;

/// Type of the synthesized auto-select group
pub const URL_TEST_GROUP_TYPE: &str = "url-test";

/// A proxy group in Clash form
///
/// `interval` and `url` are only carried by the synthesized auto-select
/// group; explicit groups serialize as `name`, `type` and `proxies`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProxyGroupRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub proxies: Vec<String>,
}

impl ProxyGroupRecord {
    /// Build the auto-select group over every proxy name
    pub fn auto(proxy_names: &[String], ext: &ExtraSettings) -> Self {
        ProxyGroupRecord {
            name: ext.auto_group_name.clone(),
            group_type: URL_TEST_GROUP_TYPE.to_string(),
            interval: Some(ext.auto_group_interval),
            url: Some(ext.auto_group_url.clone()),
            proxies: proxy_names.to_vec(),
        }
    }

    /// Build an explicit group whose members are the auto group followed by
    /// every proxy name
    ///
    /// The member list written in the profile is not consulted.
    pub fn with_members(
        name: &str,
        group_type: &str,
        proxy_names: &[String],
        ext: &ExtraSettings,
    ) -> Self {
        let mut proxies = Vec::with_capacity(proxy_names.len() + 1);
        proxies.push(ext.auto_group_name.clone());
        proxies.extend_from_slice(proxy_names);

        ProxyGroupRecord {
            name: name.to_string(),
            group_type: group_type.to_string(),
            interval: None,
            url: None,
            proxies,
        }
    }
}
