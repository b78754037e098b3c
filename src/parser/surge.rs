//! Record extraction for Surge-style profiles
//!
//! Extraction runs in two passes over the tagged lines produced by
//! [`split_sections`]. The first pass only collects proxy names, because
//! every proxy group lists all proxies and a group line may precede the
//! proxies it refers to. The second pass builds the typed records with that
//! name list as read-only input.

use log::{debug, warn};

use crate::error::ConvertError;
use crate::models::{
    parse_flag, parse_port, ExtraSettings, GeneralSettings, ProxyGroupRecord, ProxyRecord,
};
use crate::parser::section::{split_sections, RawLine, Section};

/// Everything extracted from a profile
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurgeProfile {
    /// Proxy names in order of appearance, duplicates preserved
    pub proxy_names: Vec<String>,
    pub proxies: Vec<ProxyRecord>,
    /// Explicit groups in order of appearance
    pub groups: Vec<ProxyGroupRecord>,
    /// Present iff a `[General]` header was seen
    pub general: Option<GeneralSettings>,
    /// Name of the last `[Proxy Group]` entry
    pub default_group: Option<String>,
}

/// Split a `key = value` line at the first `=`
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    line.split_once('=').map(|(k, v)| (k.trim(), v.trim()))
}

/// Collect the name of every proxy line, in order
///
/// `#!` lines inside `[Proxy]` count as well when they contain `=`, so
/// group membership may name entries that have no record.
pub fn collect_proxy_names(lines: &[RawLine<'_>]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| match line {
            RawLine::Content {
                line,
                section: Section::Proxy,
            }
            | RawLine::Comment {
                line,
                section: Section::Proxy,
            } => split_key_value(line).map(|(name, _)| name.to_string()),
            _ => None,
        })
        .collect()
}

/// Parse the right-hand side of a proxy line
///
/// The first parameter is the proxy type. Later parameters are either
/// `key=value` pairs or bare values filling `server` then `port`.
pub fn parse_proxy_line(name: &str, details: &str) -> Result<ProxyRecord, ConvertError> {
    let mut params = details.split(',').map(str::trim);
    let proxy_type = params.next().unwrap_or_default();
    let mut node = ProxyRecord::new(name, proxy_type);
    let mut udp_relay: Option<String> = None;

    let invalid_port = |value: &str| ConvertError::InvalidPort {
        proxy: name.to_string(),
        value: value.to_string(),
    };

    for param in params {
        match split_key_value(param) {
            Some((key, value)) => match key {
                "encrypt-method" | "cipher" => node.cipher = Some(value.to_string()),
                "server" => node.server = Some(value.to_string()),
                "port" => {
                    node.port = Some(parse_port(value).ok_or_else(|| invalid_port(value))?);
                }
                "udp-relay" | "udp" => udp_relay = Some(value.to_string()),
                "type" => node.proxy_type = value.to_string(),
                "name" => debug!("Ignoring 'name' parameter of proxy '{}'", name),
                _ => {
                    node.extra.insert(key.to_string(), value.to_string());
                }
            },
            None => {
                if !node.fill_positional(param).map_err(|v| invalid_port(&v))? {
                    debug!("Ignoring extra parameter '{}' of proxy '{}'", param, name);
                }
            }
        }
    }

    if let Some(value) = udp_relay {
        node.udp = Some(parse_flag(&value));
    }

    Ok(node)
}

/// Parse a profile into typed records
///
/// Lines missing their `=` separator are skipped with a warning. A port
/// that is not a valid integer aborts the whole parse.
pub fn parse_profile(content: &str, ext: &ExtraSettings) -> Result<SurgeProfile, ConvertError> {
    let lines = split_sections(content);
    let proxy_names = collect_proxy_names(&lines);
    debug!("Collected {} proxy names", proxy_names.len());

    let mut profile = SurgeProfile::default();
    let mut rule_count = 0usize;

    for line in &lines {
        let (line, section) = match *line {
            RawLine::Header(Section::General) => {
                profile.general = Some(GeneralSettings::new(ext));
                continue;
            }
            RawLine::Header(_) | RawLine::Comment { .. } => continue,
            RawLine::Content { line, section } => (line, section),
        };

        match section {
            Section::General => {
                let Some(general) = profile.general.as_mut() else {
                    continue;
                };
                match split_key_value(line) {
                    Some(("dns-server", value)) => general.set_dns_servers(value),
                    Some(("doh-server", value)) => general.set_doh_server(value),
                    _ => {}
                }
            }
            Section::Proxy => {
                let Some((name, details)) = split_key_value(line) else {
                    warn!("Skipping malformed {} line: {}", section.as_str(), line);
                    continue;
                };
                profile.proxies.push(parse_proxy_line(name, details)?);
            }
            Section::ProxyGroup => {
                let Some((name, details)) = split_key_value(line) else {
                    warn!("Skipping malformed {} line: {}", section.as_str(), line);
                    continue;
                };
                let group_type = details.split(',').next().unwrap_or_default().trim();
                profile.groups.push(ProxyGroupRecord::with_members(
                    name,
                    group_type,
                    &proxy_names,
                    ext,
                ));
                profile.default_group = Some(name.to_string());
            }
            Section::Rule => rule_count += 1,
            Section::Unknown => {}
        }
    }

    if rule_count > 0 {
        debug!("Dropped {} rule lines", rule_count);
    }
    if lines.is_empty() {
        debug!("Profile has no recognized content");
    }

    profile.proxy_names = proxy_names;
    Ok(profile)
}
