//! DOT and MC registry lookups.

use std::io::{self, Write};

use carrier_board::api::{BoardError, VerificationGateway};
use carrier_board::render::write_verification;
use carrier_board::CarrierBoardConfig;

use super::build_gateway;

/// Verifies the configured DOT or MC number.
///
/// # Errors
///
/// Returns [`BoardError::InvalidIdentifier`] for a non-numeric number and any
/// gateway error from the lookup.
pub async fn run(config: &CarrierBoardConfig) -> Result<(), BoardError> {
    let gateway = build_gateway(config)?;
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, &mut stdout).await
}

/// Verifies the configured number using the provided gateway.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway<G, W>(
    config: &CarrierBoardConfig,
    gateway: &G,
    writer: &mut W,
) -> Result<(), BoardError>
where
    G: VerificationGateway,
    W: Write,
{
    let number = config.registry_number()?;
    let result = gateway.verify(&number).await?;
    write_verification(writer, &number, &result)
}

#[cfg(test)]
mod tests {
    use carrier_board::api::{BoardError, VerificationResult};
    use carrier_board::CarrierBoardConfig;

    use super::run_with_gateway;
    use crate::cli::test_utils::StubGateway;

    #[tokio::test]
    async fn verified_number_shows_company() {
        let config = CarrierBoardConfig {
            verify_mc: Some("MC-12345".to_owned()),
            ..Default::default()
        };
        let gateway = StubGateway {
            verification: Ok(VerificationResult {
                verified: true,
                dot_number: None,
                mc_number: Some("12345".to_owned()),
                company_name: Some("C.H. Robinson Worldwide".to_owned()),
                status: Some("AUTHORIZED".to_owned()),
                message: String::new(),
            }),
            ..StubGateway::default()
        };
        let mut buffer = Vec::new();

        run_with_gateway(&config, &gateway, &mut buffer)
            .await
            .expect("verification should succeed");

        assert_eq!(
            String::from_utf8(buffer).expect("output should be valid UTF-8"),
            "MC 12345: verified\n  Company: C.H. Robinson Worldwide\n  Status: AUTHORIZED\n"
        );
    }

    #[tokio::test]
    async fn non_numeric_number_is_rejected_locally() {
        let config = CarrierBoardConfig {
            verify_dot: Some("12a45".to_owned()),
            ..Default::default()
        };
        let mut buffer = Vec::new();

        let result = run_with_gateway(&config, &StubGateway::default(), &mut buffer).await;

        assert!(matches!(result, Err(BoardError::InvalidIdentifier { .. })));
    }
}
