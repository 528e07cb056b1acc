//! Company directory search, the default page.

use std::io::{self, Write};

use carrier_board::api::{BoardError, BoardIntake, CompanyGateway, ReviewGateway};
use carrier_board::listing::{RankingBoard, RankingKind, filter_companies};
use carrier_board::render::{write_ranking_board, write_search_results};
use carrier_board::telemetry::{TelemetryEvent, TelemetrySink};
use carrier_board::CarrierBoardConfig;

use super::output::{io_error, write_fetch_failure};
use super::{build_gateway, telemetry_sink};

const SIDEBAR_LIMIT: usize = 5;
const SIDEBAR: [RankingKind; 2] = [RankingKind::Worst, RankingKind::Best];

/// Searches the company directory.
///
/// # Errors
///
/// Returns [`BoardError::Configuration`] for invalid search criteria and
/// [`BoardError::Io`] if writing fails. Backend failures are rendered, not
/// returned.
pub async fn run(config: &CarrierBoardConfig) -> Result<(), BoardError> {
    let gateway = build_gateway(config)?;
    let telemetry = telemetry_sink(config);
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, telemetry.as_ref(), &mut stdout).await
}

/// Searches the company directory using the provided gateway.
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
    let filter = config.company_filter()?;
    let query = config.listing_query()?;

    let companies = match BoardIntake::new(gateway, gateway).companies(&query).await {
        Ok(companies) => companies,
        Err(error) => {
            tracing::warn!(%error, "company search fetch failed");
            write_fetch_failure(writer, &error)?;
            Vec::new()
        }
    };
    telemetry.record(TelemetryEvent::ListingFetched {
        page: "search".to_owned(),
        companies: companies.len(),
        reviews: 0,
    });

    let matches = filter_companies(&companies, &filter);
    write_search_results(writer, &filter.query, &matches)?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    let sidebar = RankingBoard::build(&companies, SIDEBAR_LIMIT);
    write_ranking_board(writer, &sidebar, &SIDEBAR)
}
