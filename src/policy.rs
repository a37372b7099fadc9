//! VPN bypass policy evaluator.
//!
//! Classifies the relationship between the reported VPN state and the
//! actual reachability of locally-scoped endpoints. A pure function over
//! already-collected probe data: no I/O, no hidden state, idempotent.
//! Bypass and no-bypass outcomes are valid classifications, not errors;
//! only structurally invalid probes are rejected.

use crate::state::{ReachabilityProbe, RiskLevel, SecurityVerdict, VpnState};

/// Rejection of structurally invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A probe violated the reachable/latency/error invariants.
    InvalidProbe { host: String, reason: String },
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProbe { host, reason } => {
                write!(f, "invalid probe for {host}: {reason}")
            }
        }
    }
}

impl std::error::Error for PolicyError {}

/// Evaluate the bypass policy for one set of probe results.
///
/// Decision rule:
/// 1. VPN disconnected: the policy does not apply. Risk is LOW and
///    `local_services_blocked` reports whether every probe was unreachable.
/// 2. VPN connected: any reachable probe is a bypass (HIGH); all probes
///    unreachable means the VPN is holding (LOW); no probes at all is
///    indeterminate (MEDIUM, `investigation_complete = false`).
/// 3. Transitional states (connecting/disconnecting/error) are
///    indeterminate regardless of probe results.
///
/// # Errors
///
/// Returns [`PolicyError::InvalidProbe`] for the first probe that fails
/// structural validation. Invalid data is never coerced.
pub fn evaluate(
    vpn_state: VpnState,
    probes: &[ReachabilityProbe],
) -> Result<SecurityVerdict, PolicyError> {
    for probe in probes {
        probe
            .validate()
            .map_err(|reason| PolicyError::InvalidProbe {
                host: probe.host.clone(),
                reason,
            })?;
    }

    let all_blocked = probes.iter().all(|p| !p.is_reachable);
    let any_reachable = probes.iter().any(|p| p.is_reachable);

    if vpn_state.is_transitional() {
        // No usable evidence while the tunnel is in flux; the original
        // merged error/connecting/disconnecting into one bucket.
        return Ok(SecurityVerdict {
            vpn_active: false,
            local_services_blocked: false,
            bypass_detected: false,
            investigation_complete: false,
            risk: RiskLevel::Medium,
        });
    }

    if !vpn_state.is_connected() {
        return Ok(SecurityVerdict {
            vpn_active: false,
            local_services_blocked: all_blocked,
            bypass_detected: false,
            investigation_complete: true,
            risk: RiskLevel::Low,
        });
    }

    if probes.is_empty() {
        return Ok(SecurityVerdict {
            vpn_active: true,
            local_services_blocked: false,
            bypass_detected: false,
            investigation_complete: false,
            risk: RiskLevel::Medium,
        });
    }

    if any_reachable {
        Ok(SecurityVerdict {
            vpn_active: true,
            local_services_blocked: false,
            bypass_detected: true,
            investigation_complete: true,
            risk: RiskLevel::High,
        })
    } else {
        Ok(SecurityVerdict {
            vpn_active: true,
            local_services_blocked: true,
            bypass_detected: false,
            investigation_complete: true,
            risk: RiskLevel::Low,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reachable(host: &str, latency: f64) -> ReachabilityProbe {
        ReachabilityProbe::reachable(host, latency, 0.0)
    }

    fn unreachable(host: &str) -> ReachabilityProbe {
        ReachabilityProbe::unreachable(host, "connect timeout")
    }

    #[test]
    fn test_connected_all_blocked_is_low_risk() {
        // Scenario 1: two unreachable local targets under a connected VPN.
        let probes = vec![
            unreachable("192.168.0.200"),
            unreachable("crookedservices.local"),
        ];
        let verdict = evaluate(VpnState::Connected, &probes).unwrap();
        assert!(verdict.vpn_active);
        assert!(verdict.local_services_blocked);
        assert!(!verdict.bypass_detected);
        assert!(verdict.investigation_complete);
        assert_eq!(verdict.risk, RiskLevel::Low);
    }

    #[test]
    fn test_connected_any_reachable_is_bypass() {
        // Scenario 2: one reachable local target under a connected VPN.
        let probes = vec![reachable("192.168.0.200", 10.0)];
        let verdict = evaluate(VpnState::Connected, &probes).unwrap();
        assert!(verdict.vpn_active);
        assert!(!verdict.local_services_blocked);
        assert!(verdict.bypass_detected);
        assert!(verdict.investigation_complete);
        assert_eq!(verdict.risk, RiskLevel::High);
    }

    #[test]
    fn test_connected_mixed_probes_is_bypass() {
        let probes = vec![unreachable("192.168.0.1"), reachable("192.168.0.200", 3.5)];
        let verdict = evaluate(VpnState::Connected, &probes).unwrap();
        assert!(verdict.bypass_detected);
        assert_eq!(verdict.risk, RiskLevel::High);
    }

    #[test]
    fn test_disconnected_reachable_is_not_bypass() {
        // Scenario 3: reachable local target while the VPN is down.
        let probes = vec![reachable("192.168.0.200", 12.5)];
        let verdict = evaluate(VpnState::Disconnected, &probes).unwrap();
        assert!(!verdict.vpn_active);
        assert!(!verdict.bypass_detected);
        assert!(!verdict.local_services_blocked);
        assert!(verdict.investigation_complete);
        assert_eq!(verdict.risk, RiskLevel::Low);
    }

    #[test]
    fn test_disconnected_all_unreachable_reports_blocked() {
        let probes = vec![unreachable("192.168.0.200")];
        let verdict = evaluate(VpnState::Disconnected, &probes).unwrap();
        assert!(verdict.local_services_blocked);
        assert_eq!(verdict.risk, RiskLevel::Low);
    }

    #[test]
    fn test_connecting_empty_is_indeterminate() {
        // Scenario 4: transitional state with no probes.
        let verdict = evaluate(VpnState::Connecting, &[]).unwrap();
        assert!(!verdict.investigation_complete);
        assert!(!verdict.bypass_detected);
        assert_eq!(verdict.risk, RiskLevel::Medium);
    }

    #[test]
    fn test_transitional_states_ignore_probe_results() {
        let probes = vec![reachable("192.168.0.200", 8.0)];
        for state in [
            VpnState::Connecting,
            VpnState::Disconnecting,
            VpnState::Error,
        ] {
            let verdict = evaluate(state, &probes).unwrap();
            assert!(!verdict.investigation_complete, "{state}");
            assert!(!verdict.bypass_detected, "{state}");
            assert_eq!(verdict.risk, RiskLevel::Medium, "{state}");
        }
    }

    #[test]
    fn test_connected_no_probes_is_indeterminate() {
        let verdict = evaluate(VpnState::Connected, &[]).unwrap();
        assert!(verdict.vpn_active);
        assert!(!verdict.investigation_complete);
        assert!(!verdict.bypass_detected);
        assert_eq!(verdict.risk, RiskLevel::Medium);
    }

    #[test]
    fn test_never_bypass_when_not_connected() {
        let probes = vec![reachable("10.0.0.5", 1.0)];
        for state in [
            VpnState::Disconnected,
            VpnState::Connecting,
            VpnState::Disconnecting,
            VpnState::Error,
        ] {
            let verdict = evaluate(state, &probes).unwrap();
            assert!(!verdict.bypass_detected, "{state}");
        }
    }

    #[test]
    fn test_invalid_probe_rejected_not_coerced() {
        let probe = ReachabilityProbe {
            host: "192.168.0.200".to_string(),
            is_reachable: true,
            latency_ms: None,
            packet_loss_percent: 0.0,
            error: None,
        };
        let err = evaluate(VpnState::Connected, &[probe]).unwrap_err();
        match err {
            PolicyError::InvalidProbe { host, reason } => {
                assert_eq!(host, "192.168.0.200");
                assert!(reason.contains("missing latency"));
            }
        }
    }

    #[test]
    fn test_idempotent_evaluation() {
        let probes = vec![reachable("192.168.0.200", 10.0), unreachable("10.0.0.1")];
        let first = evaluate(VpnState::Connected, &probes).unwrap();
        let second = evaluate(VpnState::Connected, &probes).unwrap();
        assert_eq!(first, second);
    }
}
