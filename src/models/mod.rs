//! Core data models for the converter
//!
//! These records are built by the profile parser and serialized as-is by the
//! Clash generator, so their field order and serde attributes define the
//! layout of the generated document.
//!
//! # Usage
//!
//! ```rust
//! use surge2clash::models::{ExtraSettings, ProxyGroupRecord, ProxyRecord};
//!
//! let mut proxy = ProxyRecord::new("HK01", "ss");
//! proxy.server = Some("1.2.3.4".to_string());
//! proxy.port = Some(443);
//!
//! let names = vec![proxy.name.clone()];
//! let auto = ProxyGroupRecord::auto(&names, &ExtraSettings::default());
//! assert_eq!(auto.proxies, vec!["HK01"]);
//! ```

mod extra_settings;
mod general;
mod proxy;
mod proxy_group;

pub use extra_settings::*;
pub use general::GeneralSettings;
pub use proxy::{parse_flag, parse_port, ProxyRecord};
pub use proxy_group::{ProxyGroupRecord, URL_TEST_GROUP_TYPE};
