//! Security-gated HTTP request wrapper.
//!
//! `SecureApiClient` consults the [`SecurityGate`] before any network I/O:
//! when the gate is enabled and the caller did not pass `bypass_security`,
//! the request is rejected up front with [`ClientError::SecurityViolation`]
//! and counted as a bypass attempt. The emergency variant always proceeds
//! but demands a justification and leaves an `EMERGENCY ACCESS` audit
//! entry.
//!
//! The transport is an injected capability: the real implementation shells
//! out to curl, and tests supply a fixture satisfying the same trait.

use crate::audit::AuditLog;
use crate::constants;
use crate::gate::SecurityGate;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// HTTP method subset used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Response returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

/// Errors surfaced by [`SecureApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Rejected by the security gate before any I/O.
    SecurityViolation,
    /// Emergency access called without a justification.
    EmptyJustification,
    /// Collaborator failure, passed through unmodified.
    Transport(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SecurityViolation => write!(f, "request blocked: security enabled"),
            Self::EmptyJustification => write!(f, "{}", constants::ERR_EMPTY_JUSTIFICATION),
            Self::Transport(e) => write!(f, "{}: {e}", constants::ERR_TRANSPORT_FAILED),
        }
    }
}

impl std::error::Error for ClientError {}

/// Outbound transport capability.
///
/// Implementations must be callable from multiple threads; each request is
/// independent.
pub trait Transport: Send + Sync {
    /// Issue one request.
    ///
    /// # Errors
    ///
    /// Returns a transport-level failure description.
    fn send(&self, method: Method, url: &str, body: Option<&str>) -> Result<Response, String>;
}

/// Real transport that shells out to curl.
#[derive(Debug, Default)]
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn send(&self, method: Method, url: &str, body: Option<&str>) -> Result<Response, String> {
        let timeout = constants::HTTP_TIMEOUT_SECS.to_string();
        let mut args = vec![
            "-s",
            "-o",
            "/dev/null",
            "-w",
            "%{http_code}",
            "--max-time",
            &timeout,
            "-X",
            method.as_str(),
        ];
        if let Some(payload) = body {
            args.push("-d");
            args.push(payload);
        }
        args.push(url);

        let output = std::process::Command::new("curl")
            .args(&args)
            .output()
            .map_err(|e| format!("{}: {e}", constants::ERR_CURL_SPAWN_FAILED))?;

        if !output.status.success() {
            return Err(format!(
                "curl exited with {}",
                output.status.code().unwrap_or(-1)
            ));
        }

        let code = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let status = code
            .parse::<u16>()
            .map_err(|_| format!("unparseable status line: {code}"))?;
        Ok(Response {
            status,
            body: String::new(),
        })
    }
}

/// HTTP client enforcing the security gate before issuing requests.
pub struct SecureApiClient {
    gate: SecurityGate,
    audit: AuditLog,
    transport: Arc<dyn Transport>,
    bypass_attempts: AtomicU64,
}

impl SecureApiClient {
    #[must_use]
    pub fn new(gate: SecurityGate, audit: AuditLog, transport: Arc<dyn Transport>) -> Self {
        Self {
            gate,
            audit,
            transport,
            bypass_attempts: AtomicU64::new(0),
        }
    }

    /// Total requests rejected by the gate since construction.
    #[must_use]
    pub fn bypass_attempts(&self) -> u64 {
        self.bypass_attempts.load(Ordering::Relaxed)
    }

    /// Issue a request, subject to the security gate.
    ///
    /// # Errors
    ///
    /// [`ClientError::SecurityViolation`] when the gate is enabled and
    /// `bypass_security` is false (no I/O performed); transport failures
    /// pass through as [`ClientError::Transport`].
    pub fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
        bypass_security: bool,
    ) -> Result<Response, ClientError> {
        if self.gate.is_enabled() && !bypass_security {
            self.bypass_attempts.fetch_add(1, Ordering::Relaxed);
            self.audit.append(format!(
                "{}: blocked {} {url}",
                constants::AUDIT_TAG_VIOLATION,
                method.as_str()
            ));
            return Err(ClientError::SecurityViolation);
        }

        self.audit
            .append(format!("Connection attempt: {} {url}", method.as_str()));
        self.transport
            .send(method, url, body)
            .map_err(ClientError::Transport)
    }

    /// Issue a request regardless of the gate, with a mandatory
    /// justification recorded in the audit log.
    ///
    /// # Errors
    ///
    /// [`ClientError::EmptyJustification`] when the justification is blank;
    /// transport failures pass through as [`ClientError::Transport`].
    pub fn emergency_request(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
        justification: &str,
    ) -> Result<Response, ClientError> {
        if justification.trim().is_empty() {
            return Err(ClientError::EmptyJustification);
        }

        self.audit.append(format!(
            "{}: {} {url} — {}",
            constants::AUDIT_TAG_EMERGENCY,
            method.as_str(),
            justification.trim()
        ));
        self.transport
            .send(method, url, body)
            .map_err(ClientError::Transport)
    }
}
