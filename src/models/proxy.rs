//! Proxy model definitions
//!
//! A [`ProxyRecord`] is one entry of the `[Proxy]` section, already shaped
//! the way Clash expects it: `encrypt-method` becomes `cipher` and
//! `udp-relay` becomes the boolean `udp`.

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// A single proxy in Clash form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProxyRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub proxy_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp: Option<bool>,
    /// Keys the converter does not interpret, passed through verbatim
    #[serde(flatten)]
    pub extra: LinkedHashMap<String, String>,
}

impl ProxyRecord {
    pub fn new(name: &str, proxy_type: &str) -> Self {
        ProxyRecord {
            name: name.to_string(),
            proxy_type: proxy_type.to_string(),
            ..Default::default()
        }
    }

    /// Fill `server`, then `port`, from a bare positional parameter
    ///
    /// Returns `Ok(false)` when both fields are already set and the value
    /// was not used.
    pub fn fill_positional(&mut self, value: &str) -> Result<bool, String> {
        if self.server.is_none() {
            self.server = Some(value.to_string());
            Ok(true)
        } else if self.port.is_none() {
            self.port = Some(parse_port(value).ok_or_else(|| value.to_string())?);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// Parse a port number, rejecting zero and anything above 65535
pub fn parse_port(value: &str) -> Option<u16> {
    match value.trim().parse::<u16>() {
        Ok(0) | Err(_) => None,
        Ok(port) => Some(port),
    }
}

/// Normalize a Surge boolean flag such as `udp-relay`
///
/// Only `true`, compared case-insensitively, counts as enabled.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
