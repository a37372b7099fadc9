//! Security verdict types produced by the bypass policy evaluator.

use serde::{Deserialize, Serialize};

/// Caller-visible risk classification.
///
/// HIGH drives kill-switch style remediation in consumers; this crate only
/// classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        write!(f, "{label}")
    }
}

/// Outcome of one investigation run.
///
/// Constructed once by the evaluator and immutable thereafter; consumed by
/// reporting and audit logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecurityVerdict {
    /// Whether the VPN was reported connected at evaluation time.
    pub vpn_active: bool,
    /// Whether every probed local endpoint was unreachable.
    pub local_services_blocked: bool,
    /// Whether a locally-scoped endpoint was reachable despite an active VPN.
    pub bypass_detected: bool,
    /// False when the evidence was insufficient (no probes, or VPN state
    /// transitional).
    pub investigation_complete: bool,
    /// Derived risk classification.
    pub risk: RiskLevel,
}

impl SecurityVerdict {
    /// One-line summary suitable for audit entries and CLI output.
    #[must_use]
    pub fn summary(&self) -> String {
        if !self.investigation_complete {
            return format!("indeterminate (risk {})", self.risk);
        }
        if self.bypass_detected {
            format!("bypass detected (risk {})", self.risk)
        } else if self.vpn_active {
            format!("local services blocked (risk {})", self.risk)
        } else {
            format!("vpn inactive (risk {})", self.risk)
        }
    }
}
