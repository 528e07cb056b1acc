//! Review and response submission.
//!
//! A submission passes through four stages: the viewer's capability is
//! checked, the draft is validated, the form's [`SubmissionGate`] is
//! claimed, and the request is posted. After the backend accepts it the
//! company is refetched so the caller can show its recomputed aggregate.

mod draft;
mod gate;
mod service;

pub use draft::{
    MAX_RESPONSE_CHARS, MAX_TITLE_CHARS, MIN_RESPONSE_CHARS, ResponseDraft, ReviewDraft,
    ValidationError,
};
pub use gate::{SubmissionGate, SubmissionPermit};
pub use service::{ResponseSubmitter, ReviewSubmitter, SubmittedResponse, SubmittedReview};
