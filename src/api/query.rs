//! Parameters for the list endpoints.

use crate::model::CompanyId;

use super::error::BoardError;

/// Largest `limit` the backend accepts on list endpoints.
pub const MAX_FETCH_LIMIT: u8 = 100;

/// Parameters for `GET /api/companies` and `GET /api/reviews`.
///
/// The client fetches one page of up to `limit` records and filters
/// client-side; there is no pagination protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    limit: u8,
    company_id: Option<CompanyId>,
}

impl ListingQuery {
    /// Creates a query after checking `limit` is within `1..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidListing`] when `limit` is out of range.
    pub fn new(limit: u8, company_id: Option<CompanyId>) -> Result<Self, BoardError> {
        if limit == 0 || limit > MAX_FETCH_LIMIT {
            return Err(BoardError::InvalidListing {
                message: format!("limit must be between 1 and {MAX_FETCH_LIMIT}, got {limit}"),
            });
        }
        Ok(Self { limit, company_id })
    }

    /// Returns a copy scoped to one company's reviews.
    #[must_use]
    pub fn for_company(&self, company_id: CompanyId) -> Self {
        Self {
            limit: self.limit,
            company_id: Some(company_id),
        }
    }

    /// Maximum records to fetch.
    #[must_use]
    pub const fn limit(&self) -> u8 {
        self.limit
    }

    /// Company scope for review listings.
    #[must_use]
    pub const fn company_id(&self) -> Option<&CompanyId> {
        self.company_id.as_ref()
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            limit: MAX_FETCH_LIMIT,
            company_id: None,
        }
    }
}
