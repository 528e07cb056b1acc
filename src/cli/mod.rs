//! CLI page handlers.
//!
//! Each page has a `run` entry point that talks to the configured backend
//! and a `run_with_gateway` variant that accepts any gateway, used by the
//! tests:
//! - [`search`]: company directory search (the default page)
//! - [`rankings`]: worst, best, and most reviewed companies
//! - [`reviews`]: review browsing with view modes and sorting
//! - [`company_profile`]: one company with its reviews
//! - [`submit_review`]: post a trucker review from a draft file
//! - [`respond`]: post a company response from a draft file
//! - [`vote`]: mark a review helpful
//! - [`verify`]: DOT and MC registry lookups
//!
//! Output formatting utilities are in [`output`].

use std::fs;
use std::path::Path;

use carrier_board::api::{BoardError, HttpBackendGateway};
use carrier_board::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use carrier_board::CarrierBoardConfig;
use serde::de::DeserializeOwned;

pub mod company_profile;
pub mod output;
pub mod rankings;
pub mod respond;
pub mod reviews;
pub mod search;
pub mod submit_review;
pub mod verify;
pub mod vote;

#[cfg(test)]
pub mod test_utils;

/// Builds the HTTP gateway for the configured backend.
///
/// # Errors
///
/// Returns [`BoardError::InvalidBaseUrl`] for a malformed `api_base_url` and
/// [`BoardError::Configuration`] if the HTTP client cannot be built.
pub fn build_gateway(config: &CarrierBoardConfig) -> Result<HttpBackendGateway, BoardError> {
    HttpBackendGateway::new(config.backend_url()?, config.request_timeout())
}

/// Returns the stderr JSONL sink when `--telemetry` is set.
pub fn telemetry_sink(config: &CarrierBoardConfig) -> Box<dyn TelemetrySink> {
    if config.telemetry {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    }
}

/// Reads a JSON draft file.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if the file cannot be read and
/// [`BoardError::Configuration`] if it is not a valid draft.
pub fn read_draft<T: DeserializeOwned>(path: &Path) -> Result<T, BoardError> {
    let raw = fs::read_to_string(path).map_err(|error| BoardError::Io {
        message: format!("failed to read draft {}: {error}", path.display()),
    })?;
    serde_json::from_str(&raw).map_err(|error| BoardError::Configuration {
        message: format!("invalid draft {}: {error}", path.display()),
    })
}

/// Reads an optional profile template file.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if a configured template cannot be read.
pub fn read_template(path: Option<&str>) -> Result<Option<String>, BoardError> {
    path.map(|template| {
        fs::read_to_string(template).map_err(|error| BoardError::Io {
            message: format!("failed to read template {template}: {error}"),
        })
    })
    .transpose()
}
