//! `reqwest` client construction for the HTTP gateway.

use std::time::Duration;

use reqwest::Client;

use crate::api::error::BoardError;

/// Builds the shared HTTP client. Without a timeout the client waits for
/// the backend indefinitely.
///
/// # Errors
///
/// Returns `BoardError::Configuration` when the TLS backend or client
/// settings cannot be initialised.
pub(super) fn build_http_client(timeout: Option<Duration>) -> Result<Client, BoardError> {
    let builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    let configured = match timeout {
        Some(duration) => builder.timeout(duration),
        None => builder,
    };
    configured
        .build()
        .map_err(|error| BoardError::Configuration {
            message: format!("failed to configure backend HTTP client: {error}"),
        })
}
