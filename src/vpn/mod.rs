//! VPN tunnel state detection.
//!
//! Scans system network interfaces for an active tunnel (`wg*`, `tun*`,
//! `utun*`, `ppp*`). The scanner is the source of truth for
//! [`VpnState::Connected`] / [`VpnState::Disconnected`]; command failures
//! surface as [`VpnState::Error`] rather than a guess.

use crate::state::VpnState;
use std::process::Command;

/// Interface name prefixes that indicate a tunnel device.
const TUNNEL_PREFIXES: [&str; 4] = ["wg", "tun", "utun", "ppp"];

/// Capability for reading the current VPN state.
///
/// The watch worker and the investigator consume this trait; tests inject
/// fixed states.
pub trait VpnStateSource: Send + Sync {
    fn current_state(&self) -> VpnState;
}

/// Interface-scanning state source.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceScanner;

impl VpnStateSource for InterfaceScanner {
    fn current_state(&self) -> VpnState {
        match list_interfaces() {
            Some(listing) => {
                if has_active_tunnel(&listing) {
                    VpnState::Connected
                } else {
                    VpnState::Disconnected
                }
            }
            None => VpnState::Error,
        }
    }
}

/// List interface names and flags, one per line.
fn list_interfaces() -> Option<String> {
    // Linux first, then the BSD/macOS fallback.
    if let Some(out) = cmd_stdout("ip", &["-o", "link", "show"]) {
        return Some(out);
    }
    cmd_stdout("ifconfig", &["-a"])
}

/// Whether the listing contains an up tunnel interface.
///
/// Handles both `ip -o link` lines (`3: wg0: <POINTOPOINT,UP,...>`) and
/// `ifconfig -a` headers (`utun3: flags=8051<UP,POINTOPOINT,...>`).
fn has_active_tunnel(listing: &str) -> bool {
    for line in listing.lines() {
        let Some(name) = interface_name(line) else {
            continue;
        };
        let is_tunnel = TUNNEL_PREFIXES.iter().any(|prefix| {
            name.strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.chars().all(|c| c.is_ascii_digit()))
        });
        if is_tunnel && line.contains("UP") {
            return true;
        }
    }
    false
}

/// Extract the interface name from a listing line, or None for
/// continuation lines.
fn interface_name(line: &str) -> Option<&str> {
    // `ip -o link`: "3: wg0: <...>"; `ifconfig`: "utun3: flags=...".
    let mut parts = line.split(':').map(str::trim);
    let first = parts.next()?;
    if first.chars().all(|c| c.is_ascii_digit()) && !first.is_empty() {
        // Numbered `ip` output; the name is the second field.
        let name = parts.next()?;
        if name.is_empty() {
            return None;
        }
        // Strip VLAN-style suffixes like "wg0@NONE".
        return Some(name.split('@').next().unwrap_or(name));
    }
    // ifconfig continuation lines are indented.
    if line.starts_with(char::is_whitespace) || first.is_empty() {
        return None;
    }
    Some(first)
}

fn cmd_stdout(cmd: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(cmd).args(args).output().ok()?;
    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IP_LINK_WITH_WG: &str = "\
1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN
2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq state UP
3: wg0: <POINTOPOINT,NOARP,UP,LOWER_UP> mtu 1420 qdisc noqueue state UNKNOWN";

    const IP_LINK_NO_TUNNEL: &str = "\
1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN
2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq state UP";

    const IFCONFIG_WITH_UTUN: &str = "\
lo0: flags=8049<UP,LOOPBACK,RUNNING,MULTICAST> mtu 16384
\tinet 127.0.0.1 netmask 0xff000000
en0: flags=8863<UP,BROADCAST,SMART,RUNNING,SIMPLEX,MULTICAST> mtu 1500
utun3: flags=8051<UP,POINTOPOINT,RUNNING,MULTICAST> mtu 1400
\tinet 10.8.0.2 --> 10.8.0.2 netmask 0xffffff00";

    #[test]
    fn test_detects_wireguard_interface() {
        assert!(has_active_tunnel(IP_LINK_WITH_WG));
    }

    #[test]
    fn test_no_tunnel_interfaces() {
        assert!(!has_active_tunnel(IP_LINK_NO_TUNNEL));
    }

    #[test]
    fn test_detects_utun_interface() {
        assert!(has_active_tunnel(IFCONFIG_WITH_UTUN));
    }

    #[test]
    fn test_down_tunnel_is_not_active() {
        let listing = "3: wg0: <POINTOPOINT,NOARP> mtu 1420 qdisc noop state DOWN";
        assert!(!has_active_tunnel(listing));
    }

    #[test]
    fn test_prefix_requires_numeric_suffix() {
        // "tunnelbroker0" must not count as a tun device.
        let listing = "2: tunnelbroker0: <BROADCAST,UP> mtu 1500";
        assert!(!has_active_tunnel(listing));
    }

    #[test]
    fn test_interface_name_ip_format() {
        assert_eq!(
            interface_name("3: wg0: <POINTOPOINT,UP> mtu 1420"),
            Some("wg0")
        );
        assert_eq!(
            interface_name("4: wg1@NONE: <POINTOPOINT,UP> mtu 1420"),
            Some("wg1")
        );
    }

    #[test]
    fn test_interface_name_ifconfig_format() {
        assert_eq!(
            interface_name("utun3: flags=8051<UP,POINTOPOINT> mtu 1400"),
            Some("utun3")
        );
        assert_eq!(interface_name("\tinet 127.0.0.1 netmask 0xff000000"), None);
    }
}
