//! Application-wide constants and configuration values.
//!
//! This module defines all static configuration values used throughout
//! lanwarden, including timing intervals, probe defaults, file paths, and
//! UI messages.

#![allow(dead_code)]
use std::time::Duration;

// === Application Metadata ===

/// Application name and title (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Short technical summary of the application (from Cargo.toml).
pub const APP_SUMMARY: &str = env!("CARGO_PKG_DESCRIPTION");

// === Timing Configuration ===

/// UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 250;
/// Interval between background investigation passes.
pub const WATCH_POLL_RATE: Duration = Duration::from_secs(10);
/// How long a toast notification stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

// === Probe Configuration ===

/// Default TCP port probed when a target gives no explicit port.
pub const DEFAULT_PROBE_PORT: u16 = 80;
/// Per-attempt TCP connect timeout in milliseconds.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 1500;
/// Connect attempts per target; failures feed the packet-loss figure.
pub const DEFAULT_PROBE_ATTEMPTS: u32 = 4;
/// Locally-scoped targets probed when no config file overrides them.
pub const DEFAULT_PROBE_TARGETS: [&str; 2] = ["192.168.0.1", "192.168.1.1"];

// === Audit Log Configuration ===

/// Maximum retained audit entries; oldest evicted first on overflow.
pub const AUDIT_LOG_CAPACITY: usize = 100;
/// Name of the persisted audit log file inside the config directory.
pub const AUDIT_FILE_NAME: &str = "audit.json";
/// Entries shown by default in reports and the dashboard tail.
pub const AUDIT_TAIL_LEN: usize = 10;

// === Path Configuration ===

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Transport Configuration ===

/// Timeout for outbound HTTP requests in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// === Messages: CLI Output ===

pub const CLI_MSG_INVESTIGATING: &str = "Probing locally-scoped targets...";
pub const CLI_MSG_NO_TARGETS: &str = "No probe targets configured";
pub const CLI_MSG_BYPASS: &str =
    "VPN BYPASS DETECTED: local services reachable while VPN is connected";
pub const CLI_MSG_BLOCKED: &str = "VPN holding: all local targets unreachable";
pub const CLI_MSG_INDETERMINATE: &str =
    "Investigation indeterminate (VPN state transitional or no evidence)";
pub const CLI_MSG_NOT_ACTIVE: &str = "VPN not connected; bypass policy does not apply";

// === Messages: Audit ===

pub const AUDIT_TAG_EMERGENCY: &str = "EMERGENCY ACCESS";
pub const AUDIT_TAG_VIOLATION: &str = "SECURITY VIOLATION";
pub const AUDIT_TAG_INVESTIGATION: &str = "INVESTIGATION";

// === Error Messages ===

pub const ERR_EMPTY_JUSTIFICATION: &str = "Emergency access requires a non-empty justification";
pub const ERR_TRANSPORT_FAILED: &str = "Transport request failed";
pub const ERR_CURL_SPAWN_FAILED: &str = "Failed to run curl (is it installed?)";
