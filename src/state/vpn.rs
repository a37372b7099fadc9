//! VPN tunnel state types.

use serde::{Deserialize, Serialize};

/// Last known state of the VPN tunnel.
///
/// Set by the VPN state monitor, read by the bypass policy evaluator.
/// The monitor is the source of truth; transitional states are reported
/// as observed and never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VpnState {
    /// No active VPN tunnel.
    #[default]
    Disconnected,
    /// Tunnel negotiation in progress.
    Connecting,
    /// Tunnel established and reported healthy.
    Connected,
    /// Teardown in progress.
    Disconnecting,
    /// Monitor could not determine tunnel state.
    Error,
}

impl VpnState {
    /// Whether the bypass policy applies in this state.
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Transitional or failed states carry no usable evidence.
    #[must_use]
    pub const fn is_transitional(self) -> bool {
        matches!(self, Self::Connecting | Self::Disconnecting | Self::Error)
    }
}

impl std::fmt::Display for VpnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Disconnecting => "disconnecting",
            Self::Error => "error",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_connected() {
        assert!(VpnState::Connected.is_connected());
        assert!(!VpnState::Disconnected.is_connected());
        assert!(!VpnState::Connecting.is_connected());
    }

    #[test]
    fn test_is_transitional() {
        assert!(VpnState::Connecting.is_transitional());
        assert!(VpnState::Disconnecting.is_transitional());
        assert!(VpnState::Error.is_transitional());
        assert!(!VpnState::Connected.is_transitional());
        assert!(!VpnState::Disconnected.is_transitional());
    }

    #[test]
    fn test_display() {
        assert_eq!(VpnState::Connected.to_string(), "connected");
        assert_eq!(VpnState::Error.to_string(), "error");
    }
}
