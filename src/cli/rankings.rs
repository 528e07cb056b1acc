//! Ranking board: worst rated, best rated, and most reviewed companies.

use std::io::{self, Write};

use carrier_board::api::{BoardError, BoardIntake, CompanyGateway, ReviewGateway};
use carrier_board::listing::{RANKING_LIMIT, RankingBoard};
use carrier_board::render::write_ranking_board;
use carrier_board::telemetry::{TelemetryEvent, TelemetrySink};
use carrier_board::CarrierBoardConfig;

use super::output::write_fetch_failure;
use super::{build_gateway, telemetry_sink};

/// Shows the ranking board.
///
/// # Errors
///
/// Returns [`BoardError::Configuration`] for an unknown ranking kind and
/// [`BoardError::Io`] if writing fails. Backend failures are rendered, not
/// returned.
pub async fn run(config: &CarrierBoardConfig) -> Result<(), BoardError> {
    let gateway = build_gateway(config)?;
    let telemetry = telemetry_sink(config);
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, telemetry.as_ref(), &mut stdout).await
}

/// Shows the ranking board using the provided gateway.
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
    let kinds = config.ranking_kinds()?;
    let query = config.listing_query()?;

    let companies = match BoardIntake::new(gateway, gateway).companies(&query).await {
        Ok(companies) => companies,
        Err(error) => {
            tracing::warn!(%error, "ranking fetch failed");
            write_fetch_failure(writer, &error)?;
            Vec::new()
        }
    };
    telemetry.record(TelemetryEvent::ListingFetched {
        page: "rankings".to_owned(),
        companies: companies.len(),
        reviews: 0,
    });

    let board = RankingBoard::build(&companies, RANKING_LIMIT);
    write_ranking_board(writer, &board, &kinds)
}
