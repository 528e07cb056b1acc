//! Carrier Board CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use carrier_board::api::BoardError;
use carrier_board::{CarrierBoardConfig, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{}", error.user_message()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BoardError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::SubmitReview => cli::submit_review::run(&config).await,
        OperationMode::RespondToReview => cli::respond::run(&config).await,
        OperationMode::VoteHelpful => cli::vote::run(&config).await,
        OperationMode::VerifyDot | OperationMode::VerifyMc => cli::verify::run(&config).await,
        OperationMode::Rankings => cli::rankings::run(&config).await,
        OperationMode::Reviews => cli::reviews::run(&config).await,
        OperationMode::CompanyProfile => cli::company_profile::run(&config).await,
        OperationMode::Search => cli::search::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`BoardError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CarrierBoardConfig, BoardError> {
    CarrierBoardConfig::load().map_err(|error| BoardError::Configuration {
        message: error.to_string(),
    })
}
