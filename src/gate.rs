//! Process-wide security-enabled flag with timed auto-re-enable.
//!
//! Disabling accepts a duration after which the flag reverts to enabled on
//! its own. The deferred re-enable is cancellable: every manual state
//! change bumps an epoch counter, and an expiring timer only takes effect
//! if its epoch is still current (last-write-wins, never an error).

use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
struct GateState {
    enabled: bool,
    epoch: u64,
}

/// Shared security gate consulted before outbound requests.
///
/// Cloning is cheap; all clones observe the same flag.
#[derive(Debug, Clone)]
pub struct SecurityGate {
    state: Arc<Mutex<GateState>>,
}

impl Default for SecurityGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SecurityGate {
    /// New gate, enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(GateState {
                enabled: true,
                epoch: 0,
            })),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.lock().map(|s| s.enabled).unwrap_or(true)
    }

    /// Manually enable security. Any pending auto-re-enable becomes a no-op.
    pub fn enable(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.enabled = true;
            state.epoch += 1;
        }
    }

    /// Disable security for `duration`, then revert to enabled autonomously.
    ///
    /// Returns the epoch of this disable window (used by tests to drive
    /// expiry deterministically).
    pub fn disable_for(&self, duration: Duration) -> u64 {
        let epoch = {
            let Ok(mut state) = self.state.lock() else {
                return 0;
            };
            state.enabled = false;
            state.epoch += 1;
            state.epoch
        };

        let gate = self.clone();
        std::thread::spawn(move || {
            std::thread::sleep(duration);
            gate.expire(epoch);
        });

        epoch
    }

    /// Re-enable the gate if `epoch` is still the current disable window.
    ///
    /// Called by the deferred timer; stale epochs are ignored.
    pub fn expire(&self, epoch: u64) {
        if let Ok(mut state) = self.state.lock() {
            if state.epoch == epoch {
                state.enabled = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_enabled() {
        let gate = SecurityGate::new();
        assert!(gate.is_enabled());
    }

    #[test]
    fn test_disable_then_expire_re_enables() {
        let gate = SecurityGate::new();
        let epoch = gate.disable_for(Duration::from_secs(3600));
        assert!(!gate.is_enabled());
        gate.expire(epoch);
        assert!(gate.is_enabled());
    }

    #[test]
    fn test_manual_enable_cancels_pending_timer() {
        let gate = SecurityGate::new();
        let epoch = gate.disable_for(Duration::from_secs(3600));
        gate.enable();
        assert!(gate.is_enabled());

        // A later fresh disable must not be clobbered by the stale timer.
        let _ = gate.disable_for(Duration::from_secs(3600));
        gate.expire(epoch);
        assert!(!gate.is_enabled());
    }

    #[test]
    fn test_stale_expiry_after_re_disable_is_noop() {
        let gate = SecurityGate::new();
        let first = gate.disable_for(Duration::from_secs(3600));
        let second = gate.disable_for(Duration::from_secs(3600));
        gate.expire(first);
        assert!(!gate.is_enabled());
        gate.expire(second);
        assert!(gate.is_enabled());
    }

    #[test]
    fn test_clones_share_state() {
        let gate = SecurityGate::new();
        let other = gate.clone();
        let _ = gate.disable_for(Duration::from_secs(3600));
        assert!(!other.is_enabled());
        other.enable();
        assert!(gate.is_enabled());
    }
}
