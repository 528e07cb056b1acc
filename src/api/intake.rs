//! High-level intake facades that assemble page snapshots for the CLI.

use crate::model::{Company, CompanyId, Review};

use super::error::BoardError;
use super::gateway::{CompanyGateway, ReviewGateway};
use super::models::CompanyDetail;
use super::query::ListingQuery;

/// Everything the company profile page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    /// The company with its backend-computed stats.
    pub detail: CompanyDetail,
    /// Reviews of the company, in backend order.
    pub reviews: Vec<Review>,
}

/// Loads a company and its reviews concurrently.
pub struct CompanyProfileIntake<'client, Companies, Reviews>
where
    Companies: CompanyGateway,
    Reviews: ReviewGateway,
{
    companies: &'client Companies,
    reviews: &'client Reviews,
}

impl<'client, Companies, Reviews> CompanyProfileIntake<'client, Companies, Reviews>
where
    Companies: CompanyGateway,
    Reviews: ReviewGateway,
{
    /// Create a new intake facade using the provided gateways.
    #[must_use]
    pub const fn new(companies: &'client Companies, reviews: &'client Reviews) -> Self {
        Self { companies, reviews }
    }

    /// Load the profile for `company_id`.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from either fetch.
    pub async fn load(
        &self,
        company_id: &CompanyId,
        query: &ListingQuery,
    ) -> Result<CompanyProfile, BoardError> {
        let scoped = query.for_company(company_id.clone());
        let (detail, reviews) = tokio::try_join!(
            self.companies.company(company_id),
            self.reviews.list_reviews(&scoped),
        )?;
        Ok(CompanyProfile { detail, reviews })
    }
}

/// Companies and reviews fetched for the browsing pages.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardSnapshot {
    /// Companies in backend order.
    pub companies: Vec<Company>,
    /// Reviews in backend order.
    pub reviews: Vec<Review>,
}

/// Loads the snapshots the search, review, and ranking pages work from.
pub struct BoardIntake<'client, Companies, Reviews>
where
    Companies: CompanyGateway,
    Reviews: ReviewGateway,
{
    companies: &'client Companies,
    reviews: &'client Reviews,
}

impl<'client, Companies, Reviews> BoardIntake<'client, Companies, Reviews>
where
    Companies: CompanyGateway,
    Reviews: ReviewGateway,
{
    /// Create a new intake facade using the provided gateways.
    #[must_use]
    pub const fn new(companies: &'client Companies, reviews: &'client Reviews) -> Self {
        Self { companies, reviews }
    }

    /// Load companies only.
    ///
    /// # Errors
    ///
    /// Propagates any gateway failure.
    pub async fn companies(&self, query: &ListingQuery) -> Result<Vec<Company>, BoardError> {
        self.companies.list_companies(query).await
    }

    /// Load companies and reviews concurrently.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from either fetch.
    pub async fn load(&self, query: &ListingQuery) -> Result<BoardSnapshot, BoardError> {
        let (companies, reviews) = tokio::try_join!(
            self.companies.list_companies(query),
            self.reviews.list_reviews(query),
        )?;
        Ok(BoardSnapshot { companies, reviews })
    }
}
