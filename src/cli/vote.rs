//! Marks a review as helpful.

use std::io::{self, Write};

use carrier_board::api::{BoardError, ReviewGateway};
use carrier_board::CarrierBoardConfig;

use super::build_gateway;
use super::output::write_helpful_vote;

/// Records a helpful vote for the configured review.
///
/// # Errors
///
/// Returns [`BoardError::Configuration`] when no review is selected and any
/// gateway error from the vote.
pub async fn run(config: &CarrierBoardConfig) -> Result<(), BoardError> {
    let gateway = build_gateway(config)?;
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, &mut stdout).await
}

/// Records a helpful vote using the provided gateway.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway<G, W>(
    config: &CarrierBoardConfig,
    gateway: &G,
    writer: &mut W,
) -> Result<(), BoardError>
where
    G: ReviewGateway,
    W: Write,
{
    let review_id = config.require_vote_target()?;
    let helpful_count = gateway.vote_helpful(&review_id).await?;
    write_helpful_vote(writer, &review_id, helpful_count)
}
