//! Simulated billing gateway.
//!
//! Stands in for a real checkout integration. Every command is logged and
//! acknowledged as `Pending` after a configurable latency; nothing is charged
//! and nothing leaves the process. Supports:
//! - Artificial latency
//! - Error injection
//! - Opt-in submission tracking for assertions

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{BillingCommand, BillingError, BillingGateway, BillingReceipt};

/// Recorded submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub command: BillingCommand,
    pub receipt: Option<BillingReceipt>,
}

#[derive(Default)]
struct SimulationState {
    /// Error to return on the next submission.
    next_error: Option<BillingError>,

    /// Error to return on every submission.
    persistent_error: Option<BillingError>,

    submissions: Vec<Submission>,
}

/// Billing gateway that only pretends.
///
/// # Example
///
/// ```ignore
/// let gateway = SimulatedBillingGateway::new(Duration::from_millis(800)).with_recording();
/// gateway.fail_next(BillingError::Unavailable("maintenance".into()));
/// ```
#[derive(Clone, Default)]
pub struct SimulatedBillingGateway {
    latency: Duration,
    recording: bool,
    inner: Arc<Mutex<SimulationState>>,
}

impl SimulatedBillingGateway {
    /// Create a gateway that answers after `latency`.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            recording: false,
            inner: Arc::default(),
        }
    }

    /// Create a gateway that answers immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Keep every submission for later inspection.
    ///
    /// Off by default; the server only logs and acknowledges.
    pub fn with_recording(mut self) -> Self {
        self.recording = true;
        self
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Injection
    // ════════════════════════════════════════════════════════════════════════════

    /// Fail the next submission with `error`.
    pub fn fail_next(&self, error: BillingError) {
        self.lock().next_error = Some(error);
    }

    /// Fail every submission with `error` until cleared.
    pub fn fail_always(&self, error: BillingError) {
        self.lock().persistent_error = Some(error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.lock();
        state.next_error = None;
        state.persistent_error = None;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Submission Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// All recorded submissions, failed ones included.
    pub fn submissions(&self) -> Vec<Submission> {
        self.lock().submissions.clone()
    }

    /// Number of recorded submissions.
    pub fn submission_count(&self) -> usize {
        self.lock().submissions.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SimulationState> {
        // a panic while holding the lock leaves plain data behind; keep going
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl BillingGateway for SimulatedBillingGateway {
    async fn submit(&self, command: BillingCommand) -> Result<BillingReceipt, BillingError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut state = self.lock();
        let injected = match state.next_error.take() {
            Some(error) => Some(error),
            None => state.persistent_error.clone(),
        };
        let outcome = match injected {
            Some(error) => Err(error),
            None => Ok(BillingReceipt::pending()),
        };

        match &outcome {
            Ok(receipt) => tracing::info!(
                command = command.kind(),
                command_id = %receipt.command_id,
                viewer = ?command.viewer().map(|v| v.as_str()),
                "Simulated billing command accepted"
            ),
            Err(e) => tracing::warn!(
                command = command.kind(),
                error = %e,
                "Simulated billing command failed"
            ),
        }

        if self.recording {
            state.submissions.push(Submission {
                command,
                receipt: outcome.as_ref().ok().cloned(),
            });
        }
        outcome
    }
}
