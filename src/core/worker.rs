//! Background watch worker.
//!
//! Runs investigations on an interval in a background thread and delivers
//! results to the TUI over an MPSC channel. The main loop drains the
//! channel on each tick.

use crate::audit::AuditLog;
use crate::config::Config;
use crate::core::investigator::{self, Investigation};
use crate::core::prober::{ProbeTarget, TcpProber};
use crate::vpn::{InterfaceScanner, VpnStateSource};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Updates sent from the watch worker to the main application.
#[derive(Debug)]
pub enum WatchUpdate {
    /// A completed investigation pass.
    Investigation(Investigation),
    /// Error message for the toast/log.
    Error(String),
}

/// Spawn the background watch worker.
///
/// Each pass reads the VPN state, probes the configured targets, evaluates
/// the policy, and appends to the shared audit log.
pub fn spawn_watch_worker(config: Config, audit: AuditLog) -> Receiver<WatchUpdate> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let prober = TcpProber::new(&config.probe);
        let targets = ProbeTarget::from_config(&config.probe);
        let scanner = InterfaceScanner;
        let poll_rate = config.poll_rate();

        loop {
            let vpn_state = scanner.current_state();
            let update = match investigator::run(vpn_state, &prober, &targets, &audit) {
                Ok(investigation) => WatchUpdate::Investigation(investigation),
                Err(e) => WatchUpdate::Error(e.to_string()),
            };
            if tx.send(update).is_err() {
                return;
            }

            thread::sleep(poll_rate);
        }
    });

    rx
}
