//! Gateways for talking to the review backend over REST.
//!
//! Each backend resource gets its own trait so callers depend only on what
//! they use and tests can substitute mocks. [`HttpBackendGateway`] implements
//! all of them with `reqwest`.

mod client;
mod error_mapping;
mod rest;

pub use rest::HttpBackendGateway;

use async_trait::async_trait;

use crate::api::error::BoardError;
use crate::api::models::{
    CompanyDetail, NewCompanyResponse, NewReview, RegistryNumber, VerificationResult,
};
use crate::api::query::ListingQuery;
use crate::model::{Company, CompanyId, CompanyResponse, Review, ReviewId};

/// Gateway for company listings and detail.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyGateway: Send + Sync {
    /// Fetch up to `query.limit()` companies with their aggregate ratings.
    async fn list_companies(&self, query: &ListingQuery) -> Result<Vec<Company>, BoardError>;

    /// Fetch one company with its review statistics.
    async fn company(&self, id: &CompanyId) -> Result<CompanyDetail, BoardError>;
}

/// Gateway for reading and mutating reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch reviews, optionally scoped to one company.
    async fn list_reviews(&self, query: &ListingQuery) -> Result<Vec<Review>, BoardError>;

    /// Fetch a single review.
    async fn review(&self, id: &ReviewId) -> Result<Review, BoardError>;

    /// Publish a new review and return it as stored.
    async fn submit_review(&self, review: &NewReview) -> Result<Review, BoardError>;

    /// Attach a company response to a review.
    async fn respond(
        &self,
        id: &ReviewId,
        response: &NewCompanyResponse,
    ) -> Result<CompanyResponse, BoardError>;

    /// Record a helpful vote and return the updated count.
    async fn vote_helpful(&self, id: &ReviewId) -> Result<u32, BoardError>;
}

/// Gateway for federal registry lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationGateway: Send + Sync {
    /// Look up a DOT or MC number.
    async fn verify(&self, number: &RegistryNumber) -> Result<VerificationResult, BoardError>;
}
