//! Application telemetry events and sinks.
//!
//! Carrier Board runs as a local tool, so telemetry is opt-in and never
//! leaves the machine: events are written to stderr as JSON lines when
//! `--telemetry` is set and dropped otherwise.

use std::io;

use serde::{Deserialize, Serialize};

/// What kind of record a submission created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    /// A trucker review.
    Review,
    /// A company response to a review.
    Response,
}

/// A structured telemetry event emitted by Carrier Board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A page snapshot was fetched from the backend.
    ListingFetched {
        /// Page that requested the snapshot (e.g. `rankings`).
        page: String,
        /// Companies in the snapshot.
        companies: usize,
        /// Reviews in the snapshot.
        reviews: usize,
    },
    /// The backend accepted a submission.
    SubmissionCompleted {
        /// What was submitted.
        kind: SubmissionKind,
        /// Company the submission concerns.
        company_id: String,
    },
    /// A submission failed locally or was rejected by the backend.
    SubmissionFailed {
        /// What was being submitted.
        kind: SubmissionKind,
        /// Error text describing the failure.
        reason: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
