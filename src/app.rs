//! TUI application state.
//!
//! Owns everything the dashboard renders: the latest investigation, the
//! shared audit log, toast notifications, and quit handling. Updates
//! arrive from the background watch worker and are drained on each tick.

use crate::audit::AuditLog;
use crate::config::Config;
use crate::core::investigator::Investigation;
use crate::core::worker::WatchUpdate;
use crate::constants;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::mpsc::Receiver;
use std::time::Instant;

/// Toast notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Error,
}

/// Transient on-screen notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    created: Instant,
}

impl Toast {
    fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            message,
            toast_type,
            created: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.created.elapsed() >= constants::TOAST_DURATION
    }
}

/// Application state for the watch dashboard.
pub struct App {
    pub config: Config,
    pub config_source: String,
    pub audit: AuditLog,
    pub investigation: Option<Investigation>,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    updates: Receiver<WatchUpdate>,
}

impl App {
    #[must_use]
    pub fn new(
        config: Config,
        config_source: String,
        audit: AuditLog,
        updates: Receiver<WatchUpdate>,
    ) -> Self {
        Self {
            config,
            config_source,
            audit,
            investigation: None,
            toast: None,
            should_quit: false,
            updates,
        }
    }

    /// Handle a key press.
    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') => {
                // Dismiss any toast.
                self.toast = None;
            }
            _ => {}
        }
    }

    /// Drain worker updates and expire toasts. Called on every tick.
    pub fn on_tick(&mut self) {
        while let Ok(update) = self.updates.try_recv() {
            match update {
                WatchUpdate::Investigation(investigation) => {
                    if investigation.verdict.bypass_detected
                        && !self.last_bypass_detected()
                    {
                        self.show_toast(
                            "VPN bypass detected: local service reachable".to_string(),
                            ToastType::Error,
                        );
                    }
                    self.investigation = Some(investigation);
                }
                WatchUpdate::Error(message) => {
                    self.show_toast(message, ToastType::Error);
                }
            }
        }

        if self.toast.as_ref().is_some_and(Toast::expired) {
            self.toast = None;
        }
    }

    fn last_bypass_detected(&self) -> bool {
        self.investigation
            .as_ref()
            .is_some_and(|i| i.verdict.bypass_detected)
    }

    fn show_toast(&mut self, message: String, toast_type: ToastType) {
        self.toast = Some(Toast::new(message, toast_type));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::investigator::Investigation;
    use crate::state::{ReachabilityProbe, RiskLevel, SecurityVerdict, VpnState};
    use std::sync::mpsc;

    fn app_with_channel() -> (App, mpsc::Sender<WatchUpdate>) {
        let (tx, rx) = mpsc::channel();
        let app = App::new(
            Config::default(),
            "default".to_string(),
            AuditLog::new(),
            rx,
        );
        (app, tx)
    }

    fn bypass_investigation() -> Investigation {
        Investigation {
            vpn_state: VpnState::Connected,
            probes: vec![ReachabilityProbe::reachable("192.168.0.200", 10.0, 0.0)],
            verdict: SecurityVerdict {
                vpn_active: true,
                local_services_blocked: false,
                bypass_detected: true,
                investigation_complete: true,
                risk: RiskLevel::High,
            },
        }
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _tx) = app_with_channel();
        app.on_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit);

        let (mut app, _tx) = app_with_channel();
        app.on_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tick_drains_investigation() {
        let (mut app, tx) = app_with_channel();
        tx.send(WatchUpdate::Investigation(bypass_investigation()))
            .unwrap();
        app.on_tick();
        assert!(app.investigation.is_some());
        // First bypass raises a toast.
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_repeated_bypass_does_not_retoast() {
        let (mut app, tx) = app_with_channel();
        tx.send(WatchUpdate::Investigation(bypass_investigation()))
            .unwrap();
        app.on_tick();
        app.toast = None;

        tx.send(WatchUpdate::Investigation(bypass_investigation()))
            .unwrap();
        app.on_tick();
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_worker_error_becomes_toast() {
        let (mut app, tx) = app_with_channel();
        tx.send(WatchUpdate::Error("probe failed".to_string()))
            .unwrap();
        app.on_tick();
        let toast = app.toast.unwrap();
        assert_eq!(toast.toast_type, ToastType::Error);
        assert_eq!(toast.message, "probe failed");
    }

    #[test]
    fn test_dismiss_toast() {
        let (mut app, tx) = app_with_channel();
        tx.send(WatchUpdate::Error("oops".to_string())).unwrap();
        app.on_tick();
        app.on_key(KeyEvent::from(KeyCode::Char('c')));
        assert!(app.toast.is_none());
    }
}
