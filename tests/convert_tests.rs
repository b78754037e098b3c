use surge2clash::{surge_to_clash, ClashYamlOutput, ConvertError, ProxyRecord};

const PROFILE: &str = r#"#!MANAGED-CONFIG https://sub.example.com/surge interval=86400 strict=false

[General]
loglevel = notify
dns-server = 223.5.5.5, 119.29.29.29
doh-server = https://doh.pub/dns-query
skip-proxy = 127.0.0.1, 192.168.0.0/16

[Proxy]
🇭🇰 香港 01 = ss, hk.example.com, 8388, encrypt-method=aes-128-gcm, password=pa55, udp-relay=true
🇯🇵 日本 01 = ss, jp.example.com, 8389, encrypt-method=chacha20-poly1305, udp-relay=False
US 01 = trojan, us.example.com, 443, password=secret, sni=us.example.com, skip-cert-verify=true

[Proxy Group]
Proxy = select, 🇭🇰 香港 01, 🇯🇵 日本 01
Streaming = url-test, US 01, url=http://www.gstatic.com/generate_204, interval=600

[Rule]
DOMAIN-SUFFIX,google.com,Proxy
GEOIP,CN,DIRECT
FINAL,Proxy

[MITM]
hostname = *.example.com
"#;

fn convert(content: &str) -> ClashYamlOutput {
    let yaml = surge_to_clash(content).unwrap();
    ClashYamlOutput::from_yaml(&yaml).unwrap()
}

#[cfg(test)]
mod convert_tests {
    use super::*;

    #[test]
    fn test_full_profile() {
        let output = convert(PROFILE);

        assert_eq!(output.proxies.len(), 3);
        let hk = &output.proxies[0];
        assert_eq!(hk.name, "🇭🇰 香港 01");
        assert_eq!(hk.proxy_type, "ss");
        assert_eq!(hk.server.as_deref(), Some("hk.example.com"));
        assert_eq!(hk.port, Some(8388));
        assert_eq!(hk.cipher.as_deref(), Some("aes-128-gcm"));
        assert_eq!(hk.udp, Some(true));
        assert_eq!(hk.extra.get("password").map(String::as_str), Some("pa55"));

        assert_eq!(output.proxies[1].udp, Some(false));

        let us = &output.proxies[2];
        assert_eq!(us.udp, None);
        assert_eq!(us.cipher, None);
        assert_eq!(
            us.extra.get("skip-cert-verify").map(String::as_str),
            Some("true")
        );

        let names: Vec<&str> = output.proxy_groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["auto", "Proxy", "Streaming"]);

        let dns = output.dns.expect("dns block");
        assert!(dns.enable);
        assert_eq!(dns.listen, "0.0.0.0:53");
        assert_eq!(dns.enhanced_mode, "fake-ip");
        assert_eq!(dns.nameserver, vec!["223.5.5.5", "119.29.29.29"]);
        assert_eq!(dns.fallback, Some(vec!["https://doh.pub/dns-query".to_string()]));

        assert_eq!(output.rules, vec!["GEOIP,CN,DIRECT", "MATCH,Streaming"]);
    }

    #[test]
    fn test_group_membership_is_auto_plus_all_proxies() {
        let output = convert(PROFILE);
        let all: Vec<String> = output.proxies.iter().map(|p| p.name.clone()).collect();

        assert_eq!(output.proxy_groups[0].proxies, all);
        assert_eq!(output.proxy_groups[0].group_type, "url-test");
        assert_eq!(output.proxy_groups[0].interval, Some(300));

        let mut expected = vec!["auto".to_string()];
        expected.extend(all);
        for group in &output.proxy_groups[1..] {
            assert_eq!(group.proxies, expected, "group {}", group.name);
            assert_eq!(group.interval, None);
            assert_eq!(group.url, None);
        }
        assert_eq!(output.proxy_groups[2].group_type, "url-test");
    }

    #[test]
    fn test_duplicate_names_preserved() {
        let output = convert("[Proxy]\nA = ss, a, 1\nA = ss, b, 2\n[Proxy Group]\nG = select\n");
        assert_eq!(output.proxies.len(), 2);
        assert_eq!(output.proxy_groups[0].proxies, vec!["A", "A"]);
        assert_eq!(output.proxy_groups[1].proxies, vec!["auto", "A", "A"]);
    }

    #[test]
    fn test_comment_lines_in_proxy_section_join_groups() {
        let output = convert("[Proxy]\n#!note = x\nA = ss, a, 1\n[Proxy Group]\nG = select\n");
        assert_eq!(output.proxies.len(), 1);
        assert_eq!(output.proxy_groups[0].proxies, vec!["#!note", "A"]);
        assert_eq!(output.proxy_groups[1].proxies, vec!["auto", "#!note", "A"]);
    }

    #[test]
    fn test_empty_nameserver_entries_are_kept() {
        let output = convert("[General]\ndns-server = 8.8.8.8, , 1.1.1.1\n");
        assert_eq!(output.dns.unwrap().nameserver, vec!["8.8.8.8", "", "1.1.1.1"]);
    }

    #[test]
    fn test_shadowsocks_record() {
        let output = convert(
            "[Proxy]\nHK01 = ss, 1.2.3.4, 443, encrypt-method=aes-128-gcm, udp-relay=true",
        );
        let mut expected = ProxyRecord::new("HK01", "ss");
        expected.server = Some("1.2.3.4".to_string());
        expected.port = Some(443);
        expected.cipher = Some("aes-128-gcm".to_string());
        expected.udp = Some(true);
        assert_eq!(output.proxies, vec![expected]);
    }

    #[test]
    fn test_dns_only() {
        let yaml = surge_to_clash("[General]\ndns-server = 8.8.8.8, 1.1.1.1").unwrap();
        assert!(!yaml.contains("fallback"));

        let output = ClashYamlOutput::from_yaml(&yaml).unwrap();
        let dns = output.dns.unwrap();
        assert_eq!(dns.nameserver, vec!["8.8.8.8", "1.1.1.1"]);
        assert_eq!(dns.fallback, None);
        assert!(output.proxies.is_empty());
    }

    #[test]
    fn test_empty_profile() {
        let yaml = surge_to_clash("").unwrap();
        assert!(!yaml.contains("dns:"));

        let output = convert("");
        assert!(output.proxies.is_empty());
        assert_eq!(output.proxy_groups.len(), 1);
        assert_eq!(output.proxy_groups[0].name, "auto");
        assert!(output.proxy_groups[0].proxies.is_empty());
        assert_eq!(output.rules, vec!["GEOIP,CN,DIRECT", "MATCH,"]);
    }

    #[test]
    fn test_rules_are_not_carried_over() {
        let output = convert(PROFILE);
        assert_eq!(output.rules.len(), 2);
        assert!(!output.rules.iter().any(|r| r.contains("google.com")));
    }

    #[test]
    fn test_output_layout() {
        let yaml = surge_to_clash(PROFILE).unwrap();

        let keys: Vec<&str> = yaml
            .lines()
            .filter(|l| !l.starts_with(' ') && !l.starts_with('-'))
            .filter_map(|l| l.split(':').next())
            .collect();
        assert_eq!(keys, vec!["proxies", "proxy-groups", "dns", "rules"]);

        assert!(yaml.contains("香港 01"));
        assert!(!yaml.contains("\\u"));
        assert!(!yaml.contains("encrypt-method"));
        assert!(!yaml.contains("udp-relay"));
        assert!(yaml.contains("\n  nameserver:\n"));
    }

    #[test]
    fn test_structural_round_trip() {
        let yaml = surge_to_clash(PROFILE).unwrap();
        let output = ClashYamlOutput::from_yaml(&yaml).unwrap();
        assert_eq!(output.to_yaml().unwrap(), yaml);
    }

    #[test]
    fn test_invalid_port_fails_whole_conversion() {
        let err = surge_to_clash("[Proxy]\nA = ss, a, 1\nB = ss, b, port80\n").unwrap_err();
        match err {
            ConvertError::InvalidPort { proxy, value } => {
                assert_eq!(proxy, "B");
                assert_eq!(value, "port80");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(matches!(
            surge_to_clash("[Proxy]\nA = ss, a, 99999\n"),
            Err(ConvertError::InvalidPort { .. })
        ));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let output = convert("[Proxy]\nnot a proxy\nA = ss, a, 1\n[Proxy Group]\nbroken\n");
        assert_eq!(output.proxies.len(), 1);
        assert_eq!(output.proxy_groups.len(), 1);
        assert_eq!(output.rules[1], "MATCH,");
    }

    #[test]
    fn test_parallel_conversions_are_independent() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let profile = format!(
                        "[Proxy]\nP{i} = ss, a, {}\n[Proxy Group]\nG{i} = select\n",
                        1000 + i
                    );
                    convert(&profile)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let output = handle.join().unwrap();
            assert_eq!(output.proxies.len(), 1);
            assert_eq!(output.proxies[0].name, format!("P{}", i));
            assert_eq!(output.rules[1], format!("MATCH,G{}", i));
        }
    }
}
