//! Review and response submission against the backend.

use crate::access::{AccessContext, Capability};
use crate::api::{BoardError, CompanyDetail, CompanyGateway, ReviewGateway};
use crate::model::{CompanyId, CompanyResponse, Review};
use crate::telemetry::{SubmissionKind, TelemetryEvent, TelemetrySink};

use super::draft::{ResponseDraft, ReviewDraft};
use super::gate::SubmissionGate;

/// A published review together with the company as refetched afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedReview {
    /// The review as stored by the backend.
    pub review: Review,
    /// The company with its recomputed aggregate, when the refetch succeeded.
    pub company: Option<CompanyDetail>,
}

/// A posted company response together with the refetched company.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedResponse {
    /// The response as stored by the backend.
    pub response: CompanyResponse,
    /// The company as refetched after posting, when the refetch succeeded.
    pub company: Option<CompanyDetail>,
}

/// Shared dependencies of both submitters.
struct Submission<'a, Companies>
where
    Companies: CompanyGateway,
{
    companies: &'a Companies,
    access: &'a AccessContext,
    gate: &'a SubmissionGate,
    telemetry: &'a dyn TelemetrySink,
}

impl<Companies> Submission<'_, Companies>
where
    Companies: CompanyGateway,
{
    fn fail(&self, kind: SubmissionKind, error: BoardError) -> BoardError {
        tracing::warn!(?kind, %error, "submission failed");
        self.telemetry.record(TelemetryEvent::SubmissionFailed {
            kind,
            reason: error.to_string(),
        });
        error
    }

    async fn complete(&self, kind: SubmissionKind, company_id: &CompanyId) -> Option<CompanyDetail> {
        self.telemetry.record(TelemetryEvent::SubmissionCompleted {
            kind,
            company_id: company_id.to_string(),
        });
        match self.companies.company(company_id).await {
            Ok(detail) => Some(detail),
            Err(error) => {
                tracing::warn!(%company_id, %error, "could not refresh company after submission");
                None
            }
        }
    }
}

/// Submits trucker reviews.
pub struct ReviewSubmitter<'a, Companies, Reviews>
where
    Companies: CompanyGateway,
    Reviews: ReviewGateway,
{
    shared: Submission<'a, Companies>,
    reviews: &'a Reviews,
}

impl<'a, Companies, Reviews> ReviewSubmitter<'a, Companies, Reviews>
where
    Companies: CompanyGateway,
    Reviews: ReviewGateway,
{
    /// Creates a submitter acting for the viewer in `access`.
    #[must_use]
    pub const fn new(
        companies: &'a Companies,
        reviews: &'a Reviews,
        access: &'a AccessContext,
        gate: &'a SubmissionGate,
        telemetry: &'a dyn TelemetrySink,
    ) -> Self {
        Self {
            shared: Submission {
                companies,
                access,
                gate,
                telemetry,
            },
            reviews,
        }
    }

    /// Checks access, validates the draft, posts it, and refetches the
    /// company so the caller can show the updated aggregate.
    ///
    /// # Errors
    ///
    /// Returns `AccessDenied` for non-truckers, `Validation` for an invalid
    /// draft, `SubmissionPending` while another submission holds the gate,
    /// and any gateway error from the POST. Nothing is sent unless access
    /// and validation pass.
    pub async fn submit(&self, draft: &ReviewDraft) -> Result<SubmittedReview, BoardError> {
        let kind = SubmissionKind::Review;
        let body = self
            .shared
            .access
            .check(&Capability::SubmitReview)
            .map_err(BoardError::from)
            .and_then(|()| draft.validate().map_err(BoardError::from))
            .map_err(|error| self.shared.fail(kind, error))?;

        let permit = self
            .shared
            .gate
            .try_acquire()
            .map_err(|error| self.shared.fail(kind, error))?;
        let posted = self.reviews.submit_review(&body).await;
        drop(permit);

        let review = posted.map_err(|error| self.shared.fail(kind, error))?;
        let company = self.shared.complete(kind, &review.company_id).await;
        Ok(SubmittedReview { review, company })
    }
}

/// Submits company responses to reviews.
pub struct ResponseSubmitter<'a, Companies, Reviews>
where
    Companies: CompanyGateway,
    Reviews: ReviewGateway,
{
    shared: Submission<'a, Companies>,
    reviews: &'a Reviews,
}

impl<'a, Companies, Reviews> ResponseSubmitter<'a, Companies, Reviews>
where
    Companies: CompanyGateway,
    Reviews: ReviewGateway,
{
    /// Creates a submitter acting for the viewer in `access`.
    #[must_use]
    pub const fn new(
        companies: &'a Companies,
        reviews: &'a Reviews,
        access: &'a AccessContext,
        gate: &'a SubmissionGate,
        telemetry: &'a dyn TelemetrySink,
    ) -> Self {
        Self {
            shared: Submission {
                companies,
                access,
                gate,
                telemetry,
            },
            reviews,
        }
    }

    /// Responds to `review` as the viewer's company.
    ///
    /// `review` is the caller's current snapshot; a snapshot that already
    /// carries a response is refused without contacting the backend.
    ///
    /// # Errors
    ///
    /// Returns `AccessDenied`, `AlreadyResponded`, `Validation`,
    /// `SubmissionPending`, or any gateway error from the POST (including
    /// the backend's 409 when another response won the race).
    pub async fn respond(
        &self,
        review: &Review,
        draft: &ResponseDraft,
    ) -> Result<SubmittedResponse, BoardError> {
        let kind = SubmissionKind::Response;
        let body = self
            .shared
            .access
            .check(&Capability::RespondToReview {
                company_id: &review.company_id,
            })
            .map_err(BoardError::from)
            .and_then(|()| {
                if review.has_response() {
                    Err(BoardError::AlreadyResponded)
                } else {
                    draft.validate().map_err(BoardError::from)
                }
            })
            .map_err(|error| self.shared.fail(kind, error))?;

        let permit = self
            .shared
            .gate
            .try_acquire()
            .map_err(|error| self.shared.fail(kind, error))?;
        let posted = self.reviews.respond(&review.id, &body).await;
        drop(permit);

        let response = posted.map_err(|error| self.shared.fail(kind, error))?;
        let company = self.shared.complete(kind, &review.company_id).await;
        Ok(SubmittedResponse { response, company })
    }
}
