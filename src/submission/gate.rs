//! Disable-on-submit gating for a single form.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::BoardError;

/// Allows one submission at a time.
///
/// Acquiring the gate hands out a [`SubmissionPermit`]; the gate re-opens
/// when the permit is dropped, whether the submission succeeded or not.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    in_flight: AtomicBool,
}

impl SubmissionGate {
    /// Creates an open gate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_flight: AtomicBool::new(false),
        }
    }

    /// Returns true while a submission holds the gate. Forms render their
    /// submit control disabled in this state.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claims the gate for one submission.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SubmissionPending`] when another submission
    /// already holds it.
    pub fn try_acquire(&self) -> Result<SubmissionPermit<'_>, BoardError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| SubmissionPermit { gate: self })
            .map_err(|_| BoardError::SubmissionPending)
    }
}

/// Proof that the holder may submit. Re-opens the gate on drop.
#[derive(Debug)]
#[must_use = "the gate re-opens as soon as the permit is dropped"]
pub struct SubmissionPermit<'gate> {
    gate: &'gate SubmissionGate,
}

impl Drop for SubmissionPermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}
