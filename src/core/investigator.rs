//! Investigation orchestration.
//!
//! One investigation run: read the VPN state, probe every configured
//! locally-scoped target, evaluate the bypass policy, and append the
//! verdict to the audit log. The prober and state source are injected
//! capabilities, so runs are reproducible in tests.

use crate::audit::AuditLog;
use crate::constants;
use crate::core::prober::{ProbeTarget, Prober};
use crate::policy::{self, PolicyError};
use crate::state::{ReachabilityProbe, SecurityVerdict, VpnState};
use serde::Serialize;

/// Everything observed during one investigation run.
#[derive(Debug, Clone, Serialize)]
pub struct Investigation {
    pub vpn_state: VpnState,
    pub probes: Vec<ReachabilityProbe>,
    pub verdict: SecurityVerdict,
}

/// Run one investigation and record the outcome.
///
/// # Errors
///
/// Propagates [`PolicyError`] for structurally invalid probe data. Probers
/// in this crate always produce valid probes, so this only fires for
/// misbehaving injected capabilities.
pub fn run(
    vpn_state: VpnState,
    prober: &dyn Prober,
    targets: &[ProbeTarget],
    audit: &AuditLog,
) -> Result<Investigation, PolicyError> {
    let probes: Vec<ReachabilityProbe> = targets.iter().map(|t| prober.probe(t)).collect();
    let verdict = policy::evaluate(vpn_state, &probes)?;

    audit.append(format!(
        "{}: vpn {vpn_state}, {} target(s), {}",
        constants::AUDIT_TAG_INVESTIGATION,
        probes.len(),
        verdict.summary()
    ));

    Ok(Investigation {
        vpn_state,
        probes,
        verdict,
    })
}
