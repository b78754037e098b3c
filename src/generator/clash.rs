use log::{debug, info};

use crate::error::ConvertError;
use crate::generator::yaml::clash::ClashYamlOutput;
use crate::models::{ExtraSettings, ProxyGroupRecord};
use crate::parser::{parse_profile, SurgeProfile};

/// Build the terminal routing rules
///
/// Only two rules are emitted: the GEOIP rule sending the configured region
/// direct, and the MATCH rule sending everything else to the default group
/// (empty when the profile has no groups).
pub fn terminal_rules(default_group: Option<&str>, ext: &ExtraSettings) -> Vec<String> {
    vec![
        format!("GEOIP,{},DIRECT", ext.geoip_region),
        format!("MATCH,{}", default_group.unwrap_or_default()),
    ]
}

/// Assemble extracted records into a Clash document
pub fn assemble(profile: SurgeProfile, ext: &ExtraSettings) -> ClashYamlOutput {
    let rules = terminal_rules(profile.default_group.as_deref(), ext);

    let mut proxy_groups = Vec::with_capacity(profile.groups.len() + 1);
    proxy_groups.push(ProxyGroupRecord::auto(&profile.proxy_names, ext));
    proxy_groups.extend(profile.groups);

    ClashYamlOutput {
        proxies: profile.proxies,
        proxy_groups,
        dns: profile.general,
        rules,
    }
}

/// Convert a Surge profile to a Clash YAML document using default settings
pub fn surge_to_clash(content: &str) -> Result<String, ConvertError> {
    surge_to_clash_with(content, &ExtraSettings::default())
}

/// Convert a Surge profile to a Clash YAML document
pub fn surge_to_clash_with(content: &str, ext: &ExtraSettings) -> Result<String, ConvertError> {
    let profile = parse_profile(content, ext)?;
    let output = assemble(profile, ext);
    info!(
        "Generated Clash config with {} proxies and {} groups",
        output.proxies.len(),
        output.proxy_groups.len()
    );

    let yaml = output.to_yaml()?;
    debug!("Rendered {} bytes of YAML", yaml.len());
    Ok(yaml)
}
