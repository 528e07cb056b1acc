//! Validated backend base URL and endpoint construction.

use std::fmt;

use url::Url;

use crate::model::{CompanyId, ReviewId};

use super::error::BoardError;
use super::models::RegistryNumber;
use super::query::ListingQuery;

/// Backend base URL used when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Base URL of the review backend. Endpoints live under `/api` beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUrl(Url);

impl BackendUrl {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidBaseUrl`] when the value does not parse,
    /// is not HTTP(S), or cannot carry a path.
    pub fn parse(raw: &str) -> Result<Self, BoardError> {
        let url = Url::parse(raw.trim()).map_err(|error| BoardError::InvalidBaseUrl {
            message: format!("{raw}: {error}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BoardError::InvalidBaseUrl {
                message: format!("{raw}: scheme must be http or https"),
            });
        }
        if url.cannot_be_a_base() {
            return Err(BoardError::InvalidBaseUrl {
                message: format!("{raw}: URL cannot carry a path"),
            });
        }
        Ok(Self(url))
    }

    /// Returns the underlying URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// `GET /api/companies?limit=N`
    #[must_use]
    pub fn companies(&self, query: &ListingQuery) -> Url {
        let mut url = self.endpoint(&["companies"]);
        url.query_pairs_mut()
            .append_pair("limit", &query.limit().to_string());
        url
    }

    /// `GET /api/companies/{id}`
    #[must_use]
    pub fn company(&self, id: &CompanyId) -> Url {
        self.endpoint(&["companies", id.as_str()])
    }

    /// `GET /api/reviews?[company_id=X&]limit=N`
    #[must_use]
    pub fn reviews(&self, query: &ListingQuery) -> Url {
        let mut url = self.endpoint(&["reviews"]);
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(company_id) = query.company_id() {
                pairs.append_pair("company_id", company_id.as_str());
            }
            pairs.append_pair("limit", &query.limit().to_string());
        }
        url
    }

    /// `POST /api/reviews`
    #[must_use]
    pub fn submit_review(&self) -> Url {
        self.endpoint(&["reviews"])
    }

    /// `GET /api/reviews/{id}`
    #[must_use]
    pub fn review(&self, id: &ReviewId) -> Url {
        self.endpoint(&["reviews", id.as_str()])
    }

    /// `POST /api/reviews/{id}/respond`
    #[must_use]
    pub fn respond(&self, id: &ReviewId) -> Url {
        self.endpoint(&["reviews", id.as_str(), "respond"])
    }

    /// `POST /api/reviews/{id}/vote?vote_type=helpful`
    #[must_use]
    pub fn helpful_vote(&self, id: &ReviewId) -> Url {
        let mut url = self.endpoint(&["reviews", id.as_str(), "vote"]);
        url.query_pairs_mut().append_pair("vote_type", "helpful");
        url
    }

    /// `GET /api/verify/{dot|mc}/{number}`
    #[must_use]
    pub fn verify(&self, number: &RegistryNumber) -> Url {
        self.endpoint(&["verify", number.kind_segment(), number.digits()])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }
}

impl fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
