//! Error types exposed by the backend gateway and the workflows built on it.

use thiserror::Error;

/// Errors surfaced while validating input or communicating with the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Networking failed while calling the backend.
    #[error("network error during {operation}: {message}")]
    Network {
        /// Action that was attempted, phrased for "Failed to ..." messages.
        operation: String,
        /// Transport-level error detail.
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("{operation} failed with status {status}{}", format_detail(detail.as_deref()))]
    Rejected {
        /// Action that was attempted.
        operation: String,
        /// HTTP status code returned by the backend.
        status: u16,
        /// The backend's `detail` message, when it sent one.
        detail: Option<String>,
    },

    /// A success response could not be decoded.
    #[error("{operation} returned an unreadable response: {message}")]
    Decode {
        /// Action that was attempted.
        operation: String,
        /// Decoder error detail.
        message: String,
    },

    /// A draft failed client-side validation; nothing was sent.
    #[error("{message}")]
    Validation {
        /// Inline message shown next to the form.
        message: String,
    },

    /// The viewer lacks the capability for the requested action.
    #[error("{message}")]
    AccessDenied {
        /// Explanation shown to the viewer.
        message: String,
    },

    /// Another submission from this form is still in flight.
    #[error("a submission is already in progress")]
    SubmissionPending,

    /// The review already carries a company response.
    #[error("this review already has a company response")]
    AlreadyResponded,

    /// The backend base URL could not be used.
    #[error("backend URL is invalid: {message}")]
    InvalidBaseUrl {
        /// Parser or validation detail.
        message: String,
    },

    /// Listing parameters were out of range.
    #[error("invalid listing parameters: {message}")]
    InvalidListing {
        /// Description of the invalid parameter.
        message: String,
    },

    /// A record identifier or registry number was malformed.
    #[error("invalid identifier: {message}")]
    InvalidIdentifier {
        /// Description of the malformed value.
        message: String,
    },

    /// Configuration could not be loaded or was inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl BoardError {
    /// Returns the text shown to the user for this failure.
    ///
    /// Backend rejections surface the backend's `detail` verbatim; transport
    /// failures and detail-less rejections fall back to a generic retry hint.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { operation, .. }
            | Self::Decode { operation, .. }
            | Self::Rejected {
                operation,
                detail: None,
                ..
            } => format!("Failed to {operation}. Please try again."),
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Validation { message } | Self::AccessDenied { message } => message.clone(),
            _ => self.to_string(),
        }
    }

    /// Returns true for errors raised before any request was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        !matches!(
            self,
            Self::Network { .. } | Self::Rejected { .. } | Self::Decode { .. }
        )
    }
}

fn format_detail(detail: Option<&str>) -> String {
    detail.map_or_else(String::new, |text| format!(": {text}"))
}
