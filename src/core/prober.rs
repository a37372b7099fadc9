//! Local endpoint reachability probing.
//!
//! The real prober opens plain TCP connections with a timeout and derives
//! latency from the fastest successful connect and packet loss from the
//! failed share of attempts. No raw sockets, no elevated privileges.
//!
//! Probing is a capability: the evaluator and the investigator consume the
//! [`Prober`] trait, so tests inject canned results instead of touching
//! the network.

use crate::config::ProbeConfig;
use crate::constants;
use crate::state::ReachabilityProbe;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

/// A host/port pair to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub host: String,
    pub port: u16,
}

impl ProbeTarget {
    /// Parse a `host` or `host:port` string. Bare hosts get `default_port`.
    #[must_use]
    pub fn parse(input: &str, default_port: u16) -> Self {
        let input = input.trim();
        // IPv6 literals keep their colons; only split when the tail parses
        // as a port.
        if let Some((host, port_str)) = input.rsplit_once(':') {
            if let Ok(port) = port_str.parse::<u16>() {
                if !host.is_empty() && !host.contains(':') {
                    return Self {
                        host: host.to_string(),
                        port,
                    };
                }
            }
        }
        Self {
            host: input.to_string(),
            port: default_port,
        }
    }

    /// Resolve configured target strings.
    #[must_use]
    pub fn from_config(config: &ProbeConfig) -> Vec<Self> {
        config
            .targets
            .iter()
            .map(|t| Self::parse(t, config.port))
            .collect()
    }
}

/// Reachability probing capability.
pub trait Prober: Send + Sync {
    /// Probe one target, always yielding a structurally valid result.
    fn probe(&self, target: &ProbeTarget) -> ReachabilityProbe;
}

/// TCP connect prober.
#[derive(Debug, Clone)]
pub struct TcpProber {
    timeout: Duration,
    attempts: u32,
}

impl Default for TcpProber {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(constants::DEFAULT_PROBE_TIMEOUT_MS),
            attempts: constants::DEFAULT_PROBE_ATTEMPTS,
        }
    }
}

impl TcpProber {
    #[must_use]
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            timeout: Duration::from_millis(config.timeout_ms),
            attempts: config.attempts.max(1),
        }
    }

    fn connect_once(&self, target: &ProbeTarget) -> Result<f64, String> {
        let addr = format!("{}:{}", target.host, target.port);
        let mut addrs = addr
            .to_socket_addrs()
            .map_err(|e| format!("resolve failed: {e}"))?;
        let Some(sock_addr) = addrs.next() else {
            return Err("no address resolved".to_string());
        };

        let start = Instant::now();
        TcpStream::connect_timeout(&sock_addr, self.timeout)
            .map_err(|e| format!("connect failed: {e}"))?;
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        // Sub-microsecond connects still count as a round trip.
        Ok(elapsed.max(0.001))
    }
}

impl Prober for TcpProber {
    fn probe(&self, target: &ProbeTarget) -> ReachabilityProbe {
        let mut best_latency: Option<f64> = None;
        let mut failures = 0u32;
        let mut last_error = String::new();

        for _ in 0..self.attempts {
            match self.connect_once(target) {
                Ok(latency) => {
                    best_latency = Some(best_latency.map_or(latency, |b: f64| b.min(latency)));
                }
                Err(e) => {
                    failures += 1;
                    last_error = e;
                }
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        let loss = (f64::from(failures) / f64::from(self.attempts) * 100.0) as f32;

        match best_latency {
            Some(latency) => ReachabilityProbe::reachable(target.host.clone(), latency, loss),
            None => ReachabilityProbe::unreachable(target.host.clone(), last_error),
        }
    }
}
