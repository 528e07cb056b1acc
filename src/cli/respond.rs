//! Posts a company response to a review from a JSON draft file.

use std::io::{self, Write};

use carrier_board::api::{BoardError, CompanyGateway, ReviewGateway};
use carrier_board::submission::{ResponseDraft, ResponseSubmitter, SubmissionGate};
use carrier_board::telemetry::TelemetrySink;
use carrier_board::CarrierBoardConfig;

use super::output::write_submitted_response;
use super::{build_gateway, read_draft, telemetry_sink};

/// Responds to the configured review.
///
/// # Errors
///
/// Returns [`BoardError::AccessDenied`] unless the viewer represents the
/// reviewed company, [`BoardError::AlreadyResponded`] when the review has a
/// response, [`BoardError::Validation`] for an invalid draft, and any
/// gateway error.
pub async fn run(config: &CarrierBoardConfig) -> Result<(), BoardError> {
    let gateway = build_gateway(config)?;
    let telemetry = telemetry_sink(config);
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, telemetry.as_ref(), &mut stdout).await
}

/// Responds to the configured review using the provided gateway.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway<G, W>(
    config: &CarrierBoardConfig,
    gateway: &G,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
) -> Result<(), BoardError>
where
    G: CompanyGateway + ReviewGateway,
    W: Write,
{
    let access = config.access_context()?;
    let review_id = config.require_respond_to()?;
    let draft: ResponseDraft = read_draft(&config.require_draft_path()?)?;
    let gate = SubmissionGate::new();

    let review = gateway.review(&review_id).await?;
    let submitted = ResponseSubmitter::new(gateway, gateway, &access, &gate, telemetry)
        .respond(&review, &draft)
        .await?;
    write_submitted_response(writer, &submitted)
}
