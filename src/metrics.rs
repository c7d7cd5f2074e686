//! Skill invocation metrics.
//!
//! Counters are plain atomics so the skill can be shared across concurrent
//! invocations without locking.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Invocation counters for one skill instance.
#[derive(Debug, Default)]
pub struct SkillMetrics {
    /// Number of request envelopes received
    requests: AtomicUsize,

    /// Number of responses produced by a request handler
    handled: AtomicUsize,

    /// Number of responses produced by the error handler
    errors: AtomicUsize,

    /// Number of session-ended notifications received
    sessions_ended: AtomicUsize,

    /// Number of envelopes refused by request verification; these never
    /// reach the skill and are not part of `requests`
    rejected: AtomicUsize,
}

impl SkillMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an inbound request.
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a response produced by a request handler.
    pub fn record_handled(&self) {
        self.handled.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a response produced by the error handler.
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a session-ended notification.
    pub fn record_session_ended(&self) {
        self.sessions_ended.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an envelope refused before invocation.
    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn handled(&self) -> usize {
        self.handled.load(Ordering::Relaxed)
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn sessions_ended(&self) -> usize {
        self.sessions_ended.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let requests = self.requests();
        let errors = self.errors();
        let error_rate = if requests > 0 {
            (errors as f64 / requests as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            requests,
            handled: self.handled(),
            errors,
            sessions_ended: self.sessions_ended(),
            rejected: self.rejected(),
            error_rate,
        }
    }
}

/// Snapshot of the skill's counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Number of requests received
    pub requests: usize,

    /// Number of responses produced by a request handler
    pub handled: usize,

    /// Number of responses produced by the error handler
    pub errors: usize,

    /// Number of session-ended notifications received
    pub sessions_ended: usize,

    /// Envelopes refused by request verification
    pub rejected: usize,

    /// Error responses as a percentage of requests (0-100)
    pub error_rate: f64,
}
