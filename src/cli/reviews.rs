//! Review browsing across companies.

use std::collections::BTreeMap;
use std::io::{self, Write};

use carrier_board::api::{BoardError, BoardIntake, BoardSnapshot, CompanyGateway, ReviewGateway};
use carrier_board::listing::{
    RankingBoard, RankingKind, ReviewSummary, filter_reviews, sort_reviews,
};
use carrier_board::model::CompanyId;
use carrier_board::render::{write_board_summary, write_ranking_board, write_review_listing};
use carrier_board::telemetry::{TelemetryEvent, TelemetrySink};
use carrier_board::CarrierBoardConfig;

use super::output::{io_error, write_fetch_failure};
use super::{build_gateway, telemetry_sink};

const EXCERPT_WIDTH: usize = 160;
const SIDEBAR_LIMIT: usize = 3;
const SIDEBAR: [RankingKind; 2] = [RankingKind::Worst, RankingKind::Best];

/// Shows the review listing.
///
/// # Errors
///
/// Returns [`BoardError::Configuration`] for invalid criteria and
/// [`BoardError::Io`] if writing fails. Backend failures are rendered, not
/// returned.
pub async fn run(config: &CarrierBoardConfig) -> Result<(), BoardError> {
    let gateway = build_gateway(config)?;
    let telemetry = telemetry_sink(config);
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, telemetry.as_ref(), &mut stdout).await
}

/// Shows the review listing using the provided gateway.
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
    let criteria = config.review_criteria()?;
    let sort_key = config.review_sort()?;
    let query = config.listing_query()?;

    let snapshot = match BoardIntake::new(gateway, gateway).load(&query).await {
        Ok(snapshot) => snapshot,
        Err(error) => {
            tracing::warn!(%error, "review listing fetch failed");
            write_fetch_failure(writer, &error)?;
            BoardSnapshot::default()
        }
    };
    telemetry.record(TelemetryEvent::ListingFetched {
        page: "reviews".to_owned(),
        companies: snapshot.companies.len(),
        reviews: snapshot.reviews.len(),
    });

    let summary = ReviewSummary::from_reviews(&snapshot.reviews);
    write_board_summary(writer, &summary, snapshot.companies.len())?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    let sidebar = RankingBoard::build(&snapshot.companies, SIDEBAR_LIMIT);
    write_ranking_board(writer, &sidebar, &SIDEBAR)?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    let mut listed = filter_reviews(&snapshot.reviews, &criteria);
    sort_reviews(&mut listed, sort_key);
    let names: BTreeMap<&CompanyId, &str> = snapshot
        .companies
        .iter()
        .map(|company| (&company.id, company.legal_name.as_str()))
        .collect();

    write_review_listing(writer, &listed, criteria.view_mode, &names, EXCERPT_WIDTH)
}
