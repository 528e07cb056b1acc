//! Listing aggregation over fetched company and review snapshots.
//!
//! Every page of the platform derives its view from the same small set of
//! pure operations: ranking companies, filtering and sorting reviews, and
//! searching companies. Each page supplies only its own criteria.
//!
//! All sorts here are stable. Ties keep the relative order of the input so
//! that re-rendering the same snapshot always produces the same output.

mod ranking;
mod reviews;
mod search;
mod summary;

pub use ranking::{
    MIN_REVIEWS_FOR_RANKING, RANKING_LIMIT, RankDirection, RankingBoard, RankingKind,
    rank_by_review_count, rank_companies,
};
pub use reviews::{ReviewCriteria, ReviewSortKey, ViewMode, filter_reviews, sort_reviews};
pub use search::{CompanyFilter, RatingBand, filter_companies, search_companies};
pub use summary::ReviewSummary;

use thiserror::Error;

use crate::api::BoardError;

/// Failure to parse a listing option from its command-line spelling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {option} '{value}' (expected one of: {expected})")]
pub struct ParseListingError {
    option: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseListingError {
    pub(crate) fn new(option: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            option,
            value: value.to_owned(),
            expected,
        }
    }
}

impl From<ParseListingError> for BoardError {
    fn from(error: ParseListingError) -> Self {
        Self::Configuration {
            message: error.to_string(),
        }
    }
}

/// Normalises a command-line spelling: trims, lowercases, and maps `-` to `_`.
pub(crate) fn normalise_option(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

#[cfg(test)]
pub(crate) mod test_support;
