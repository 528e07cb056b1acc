//! Company profile: details, stats, and the company's reviews.

use std::io::{self, Write};

use carrier_board::api::{BoardError, CompanyGateway, CompanyProfileIntake, ReviewGateway};
use carrier_board::listing::{filter_reviews, sort_reviews};
use carrier_board::render::write_company_profile;
use carrier_board::telemetry::{TelemetryEvent, TelemetrySink};
use carrier_board::CarrierBoardConfig;

use super::{build_gateway, read_template, telemetry_sink};

/// Shows one company's profile.
///
/// # Errors
///
/// Returns [`BoardError::Configuration`] for invalid criteria or a broken
/// template, any gateway error from loading the company, and
/// [`BoardError::Io`] if writing fails.
pub async fn run(config: &CarrierBoardConfig) -> Result<(), BoardError> {
    let gateway = build_gateway(config)?;
    let telemetry = telemetry_sink(config);
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, telemetry.as_ref(), &mut stdout).await
}

/// Shows one company's profile using the provided gateway.
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
    let company_id = config.require_company_id()?;
    let criteria = config.review_criteria()?;
    let sort_key = config.review_sort()?;
    let query = config.listing_query()?;
    let template = read_template(config.template.as_deref())?;

    let mut profile = CompanyProfileIntake::new(gateway, gateway)
        .load(&company_id, &query)
        .await?;
    telemetry.record(TelemetryEvent::ListingFetched {
        page: "company_profile".to_owned(),
        companies: 1,
        reviews: profile.reviews.len(),
    });

    let mut listed: Vec<_> = filter_reviews(&profile.reviews, &criteria)
        .into_iter()
        .cloned()
        .collect();
    sort_reviews(&mut listed, sort_key);
    profile.reviews = listed;

    write_company_profile(writer, &profile, template.as_deref())
}
