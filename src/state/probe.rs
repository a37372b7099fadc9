//! Reachability probe result types.

use serde::{Deserialize, Serialize};

/// Result of one reachability probe against a locally-scoped endpoint.
///
/// Structural invariants: a reachable probe carries a latency and no error;
/// an unreachable probe carries no latency. [`ReachabilityProbe::validate`]
/// enforces these before a probe enters the policy evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReachabilityProbe {
    /// Target host as configured (IP or name, no port).
    pub host: String,
    /// Whether the endpoint answered.
    pub is_reachable: bool,
    /// Connect latency in milliseconds, present only if reachable.
    pub latency_ms: Option<f64>,
    /// Failed attempts over total attempts, 0–100.
    pub packet_loss_percent: f32,
    /// Failure description, present only if not reachable.
    pub error: Option<String>,
}

impl ReachabilityProbe {
    /// Build a probe for an endpoint that answered.
    #[must_use]
    pub fn reachable(host: impl Into<String>, latency_ms: f64, packet_loss_percent: f32) -> Self {
        Self {
            host: host.into(),
            is_reachable: true,
            latency_ms: Some(latency_ms),
            packet_loss_percent,
            error: None,
        }
    }

    /// Build a probe for an endpoint that did not answer.
    #[must_use]
    pub fn unreachable(host: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            is_reachable: false,
            latency_ms: None,
            packet_loss_percent: 100.0,
            error: Some(error.into()),
        }
    }

    /// Check the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns a human-readable description of the first violated invariant.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.packet_loss_percent) {
            return Err(format!(
                "packet loss {}% outside 0-100",
                self.packet_loss_percent
            ));
        }
        if self.is_reachable {
            match self.latency_ms {
                None => return Err("reachable probe missing latency".to_string()),
                Some(ms) if ms <= 0.0 => {
                    return Err(format!("reachable probe with non-positive latency {ms}"));
                }
                Some(_) => {}
            }
            if self.error.is_some() {
                return Err("reachable probe carrying an error".to_string());
            }
        } else if self.latency_ms.is_some() {
            return Err("unreachable probe carrying a latency".to_string());
        }
        Ok(())
    }
}
