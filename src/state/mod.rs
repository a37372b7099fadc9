//! Core domain state types.

mod probe;
mod verdict;
mod vpn;

pub use probe::ReachabilityProbe;
pub use verdict::{RiskLevel, SecurityVerdict};
pub use vpn::VpnState;
