//! Security report rendering.
//!
//! Collects the security posture into one structure and renders it as a
//! plain-text report: security gate state, total bypass attempts, the last
//! verdict, probe configuration, and the most recent audit entries.

use crate::audit::{AuditEntry, AuditLog};
use crate::config::Config;
use crate::constants;
use crate::state::{SecurityVerdict, VpnState};
use crate::utils;
use std::fmt::Write as _;

/// All data rendered into the security report.
pub struct ReportInfo {
    pub security_enabled: bool,
    pub bypass_attempts: u64,
    pub vpn_state: VpnState,
    pub verdict: Option<SecurityVerdict>,
    pub targets: Vec<String>,
    pub config_source: String,
    pub recent_entries: Vec<AuditEntry>,
}

/// Assemble the report from the current posture.
///
/// The bypass-attempt total is recovered from the audit log so it survives
/// process restarts.
#[must_use]
pub fn collect(
    security_enabled: bool,
    vpn_state: VpnState,
    verdict: Option<SecurityVerdict>,
    config: &Config,
    config_source: &str,
    audit: &AuditLog,
) -> ReportInfo {
    let entries = audit.snapshot();
    let bypass_attempts = entries
        .iter()
        .filter(|e| e.message.starts_with(constants::AUDIT_TAG_VIOLATION))
        .count() as u64;

    ReportInfo {
        security_enabled,
        bypass_attempts,
        vpn_state,
        verdict,
        targets: config.probe.targets.clone(),
        config_source: config_source.to_string(),
        recent_entries: audit.recent(constants::AUDIT_TAIL_LEN),
    }
}

/// Render the report body.
#[must_use]
pub fn format_report(info: &ReportInfo) -> String {
    let mut body = String::with_capacity(1024);

    let _ = writeln!(body, "Security Report");
    let _ = writeln!(body, "===============\n");

    let _ = writeln!(
        body,
        "  Security gate:    {}",
        if info.security_enabled {
            "enabled"
        } else {
            "DISABLED"
        }
    );
    let _ = writeln!(body, "  Bypass attempts:  {}", info.bypass_attempts);
    let _ = writeln!(body, "  VPN state:        {}", info.vpn_state);

    match &info.verdict {
        Some(verdict) => {
            let _ = writeln!(body, "  Last verdict:     {}", verdict.summary());
        }
        None => {
            let _ = writeln!(body, "  Last verdict:     no investigation run yet");
        }
    }

    let _ = writeln!(body, "\n  Probe targets ({}):", info.config_source);
    if info.targets.is_empty() {
        let _ = writeln!(body, "    (none configured)");
    } else {
        for target in &info.targets {
            let _ = writeln!(body, "    {target}");
        }
    }

    let _ = writeln!(body, "\n  Recent audit entries:");
    if info.recent_entries.is_empty() {
        let _ = writeln!(body, "    (empty)");
    } else {
        for entry in &info.recent_entries {
            let _ = writeln!(
                body,
                "    [{:>8}] {}",
                utils::format_age(entry.timestamp),
                entry.message
            );
        }
    }

    body
}

/// Render and print the report.
pub fn print(info: &ReportInfo) {
    println!("{}", format_report(info));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RiskLevel;

    fn sample_info() -> ReportInfo {
        ReportInfo {
            security_enabled: true,
            bypass_attempts: 3,
            vpn_state: VpnState::Connected,
            verdict: Some(SecurityVerdict {
                vpn_active: true,
                local_services_blocked: false,
                bypass_detected: true,
                investigation_complete: true,
                risk: RiskLevel::High,
            }),
            targets: vec!["192.168.0.200".to_string()],
            config_source: "default".to_string(),
            recent_entries: vec![AuditEntry {
                timestamp: 0,
                message: "SECURITY VIOLATION: blocked GET http://192.168.0.200/".to_string(),
            }],
        }
    }

    #[test]
    fn test_format_report_contains_required_fields() {
        let body = format_report(&sample_info());
        assert!(body.contains("Security gate:    enabled"));
        assert!(body.contains("Bypass attempts:  3"));
        assert!(body.contains("bypass detected (risk HIGH)"));
        assert!(body.contains("192.168.0.200"));
        assert!(body.contains("SECURITY VIOLATION"));
    }

    #[test]
    fn test_format_report_disabled_gate_is_loud() {
        let mut info = sample_info();
        info.security_enabled = false;
        let body = format_report(&info);
        assert!(body.contains("DISABLED"));
    }

    #[test]
    fn test_format_report_empty_sections() {
        let info = ReportInfo {
            security_enabled: true,
            bypass_attempts: 0,
            vpn_state: VpnState::Disconnected,
            verdict: None,
            targets: vec![],
            config_source: "default".to_string(),
            recent_entries: vec![],
        };
        let body = format_report(&info);
        assert!(body.contains("no investigation run yet"));
        assert!(body.contains("(none configured)"));
        assert!(body.contains("(empty)"));
    }

    #[test]
    fn test_collect_counts_violations_from_audit() {
        let audit = AuditLog::new();
        audit.append("SECURITY VIOLATION: blocked GET http://a/");
        audit.append("Connection attempt: GET http://b/");
        audit.append("SECURITY VIOLATION: blocked POST http://c/");

        let config = Config::default();
        let info = collect(
            true,
            VpnState::Disconnected,
            None,
            &config,
            "default",
            &audit,
        );
        assert_eq!(info.bypass_attempts, 2);
        assert_eq!(info.recent_entries.len(), 3);
    }
}
