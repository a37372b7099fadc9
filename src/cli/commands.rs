//! One-shot CLI command handlers.

use crate::audit::AuditLog;
use crate::cli::report;
use crate::client::{CurlTransport, Method, SecureApiClient};
use crate::config::Config;
use crate::constants;
use crate::core::investigator;
use crate::core::prober::{ProbeTarget, TcpProber};
use crate::gate::SecurityGate;
use crate::state::RiskLevel;
use crate::utils;
use crate::vpn::{InterfaceScanner, VpnStateSource};

/// Load the persisted audit log, or start empty when unavailable.
fn load_audit() -> AuditLog {
    utils::audit_path()
        .map(|path| AuditLog::load(&path))
        .unwrap_or_default()
}

/// Persist the audit log, ignoring a missing config directory.
fn save_audit(audit: &AuditLog) {
    if let Ok(path) = utils::audit_path() {
        let _ = audit.save(&path);
    }
}

/// `lanwarden investigate`: one investigation pass, verdict to stdout.
///
/// # Errors
///
/// Returns a message on invalid probe data or JSON serialization failure.
pub fn run_investigate(config: &Config, json: bool, targets: &[String]) -> Result<(), String> {
    let target_strings: &[String] = if targets.is_empty() {
        &config.probe.targets
    } else {
        targets
    };
    let targets: Vec<ProbeTarget> = target_strings
        .iter()
        .map(|t| ProbeTarget::parse(t, config.probe.port))
        .collect();

    if !json {
        println!("{}", constants::CLI_MSG_INVESTIGATING);
    }

    let prober = TcpProber::new(&config.probe);
    let audit = load_audit();
    let vpn_state = InterfaceScanner.current_state();

    let investigation =
        investigator::run(vpn_state, &prober, &targets, &audit).map_err(|e| e.to_string())?;
    save_audit(&audit);

    if json {
        let out = serde_json::to_string_pretty(&investigation)
            .map_err(|e| format!("Failed to serialize investigation: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("\nVPN state: {}", investigation.vpn_state);
    for probe in &investigation.probes {
        if probe.is_reachable {
            println!(
                "  {} reachable ({:.1} ms, {:.0}% loss)",
                probe.host,
                probe.latency_ms.unwrap_or(0.0),
                probe.packet_loss_percent
            );
        } else {
            println!(
                "  {} unreachable ({})",
                probe.host,
                probe.error.as_deref().unwrap_or("no detail")
            );
        }
    }

    let verdict = investigation.verdict;
    println!();
    if !verdict.investigation_complete {
        println!("{}", constants::CLI_MSG_INDETERMINATE);
    } else if verdict.bypass_detected {
        println!("{}", constants::CLI_MSG_BYPASS);
    } else if verdict.vpn_active {
        println!("{}", constants::CLI_MSG_BLOCKED);
    } else {
        println!("{}", constants::CLI_MSG_NOT_ACTIVE);
    }
    println!("Risk: {}", verdict.risk);

    if verdict.risk == RiskLevel::High {
        return Err("bypass detected".to_string());
    }
    Ok(())
}

/// `lanwarden request`: one security-gated HTTP request.
///
/// The gate starts enabled, so a plain request is rejected and audited as
/// a violation; `--bypass` or `--emergency <justification>` let it
/// proceed.
///
/// # Errors
///
/// Returns a message for an unknown method, a gate rejection, or a
/// transport failure.
pub fn run_request(
    url: &str,
    method: &str,
    body: Option<&str>,
    bypass: bool,
    emergency: Option<&str>,
) -> Result<(), String> {
    let method = parse_method(method)?;
    let audit = load_audit();
    let client = SecureApiClient::new(
        SecurityGate::new(),
        audit.clone(),
        std::sync::Arc::new(CurlTransport),
    );

    let result = match emergency {
        Some(justification) => client.emergency_request(method, url, body, justification),
        None => client.request(method, url, body, bypass),
    };
    save_audit(&audit);

    match result {
        Ok(response) => {
            println!("{} {url} -> {}", method.as_str(), response.status);
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn parse_method(input: &str) -> Result<Method, String> {
    match input.to_lowercase().as_str() {
        "get" => Ok(Method::Get),
        "post" => Ok(Method::Post),
        "put" => Ok(Method::Put),
        "delete" => Ok(Method::Delete),
        other => Err(format!("Unknown HTTP method: {other}")),
    }
}

/// `lanwarden report`: render the security report.
pub fn run_report(config: &Config, config_source: &str) {
    let audit = load_audit();
    let gate = SecurityGate::new();
    let vpn_state = InterfaceScanner.current_state();

    let info = report::collect(
        gate.is_enabled(),
        vpn_state,
        None,
        config,
        config_source,
        &audit,
    );
    report::print(&info);
}

/// `lanwarden audit`: print recent audit entries.
pub fn run_audit(limit: usize) {
    let audit = load_audit();
    let entries = audit.recent(limit);
    if entries.is_empty() {
        println!("Audit log is empty");
        return;
    }
    for entry in entries {
        println!("[{:>8}] {}", utils::format_age(entry.timestamp), entry.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method_case_insensitive() {
        assert_eq!(parse_method("GET").unwrap(), Method::Get);
        assert_eq!(parse_method("post").unwrap(), Method::Post);
        assert_eq!(parse_method("Put").unwrap(), Method::Put);
        assert_eq!(parse_method("delete").unwrap(), Method::Delete);
    }

    #[test]
    fn test_parse_method_unknown() {
        assert!(parse_method("patch").unwrap_err().contains("patch"));
    }
}
