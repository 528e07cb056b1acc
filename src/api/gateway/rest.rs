//! `reqwest` implementation of the backend gateways.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::backend_url::BackendUrl;
use crate::api::error::BoardError;
use crate::api::models::{
    CompaniesEnvelope, CompanyDetail, NewCompanyResponse, NewReview, RegistryKind,
    RegistryNumber, ReviewsEnvelope, SubmittedResponseEnvelope, SubmittedReviewEnvelope,
    VerificationResult, VoteEnvelope,
};
use crate::api::query::ListingQuery;
use crate::model::{Company, CompanyId, CompanyResponse, Review, ReviewId};

use super::client::build_http_client;
use super::error_mapping::{map_http_error, map_transport_error};
use super::{CompanyGateway, ReviewGateway, VerificationGateway};

/// Gateway that talks to the backend's REST API.
#[derive(Debug, Clone)]
pub struct HttpBackendGateway {
    client: Client,
    base: BackendUrl,
}

impl HttpBackendGateway {
    /// Creates a gateway for the given backend.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Configuration` when the HTTP client cannot be
    /// built.
    pub fn new(base: BackendUrl, timeout: Option<Duration>) -> Result<Self, BoardError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base,
        })
    }

    /// Returns the backend this gateway targets.
    #[must_use]
    pub const fn base(&self) -> &BackendUrl {
        &self.base
    }

    async fn get<T>(&self, operation: &str, url: Url) -> Result<T, BoardError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(operation, %url, "GET");
        self.execute(operation, self.client.get(url)).await
    }

    async fn post<B, T>(&self, operation: &str, url: Url, body: Option<&B>) -> Result<T, BoardError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(operation, %url, "POST");
        let request = self.client.post(url);
        let with_body = match body {
            Some(payload) => request.json(payload),
            None => request,
        };
        self.execute(operation, with_body).await
    }

    async fn execute<T>(&self, operation: &str, request: RequestBuilder) -> Result<T, BoardError>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = map_http_error(operation, status, &body);
            tracing::warn!(operation, status = status.as_u16(), %error, "backend rejected request");
            return Err(error);
        }
        response
            .json::<T>()
            .await
            .map_err(|error| map_transport_error(operation, &error))
    }
}

#[async_trait]
impl CompanyGateway for HttpBackendGateway {
    async fn list_companies(&self, query: &ListingQuery) -> Result<Vec<Company>, BoardError> {
        let envelope: CompaniesEnvelope =
            self.get("load companies", self.base.companies(query)).await?;
        Ok(envelope.companies)
    }

    async fn company(&self, id: &CompanyId) -> Result<CompanyDetail, BoardError> {
        self.get("load company", self.base.company(id)).await
    }
}

#[async_trait]
impl ReviewGateway for HttpBackendGateway {
    async fn list_reviews(&self, query: &ListingQuery) -> Result<Vec<Review>, BoardError> {
        let envelope: ReviewsEnvelope = self.get("load reviews", self.base.reviews(query)).await?;
        Ok(envelope.reviews)
    }

    async fn review(&self, id: &ReviewId) -> Result<Review, BoardError> {
        self.get("load review", self.base.review(id)).await
    }

    async fn submit_review(&self, review: &NewReview) -> Result<Review, BoardError> {
        let envelope: SubmittedReviewEnvelope = self
            .post("submit review", self.base.submit_review(), Some(review))
            .await?;
        Ok(envelope.review)
    }

    async fn respond(
        &self,
        id: &ReviewId,
        response: &NewCompanyResponse,
    ) -> Result<CompanyResponse, BoardError> {
        let envelope: SubmittedResponseEnvelope = self
            .post("submit response", self.base.respond(id), Some(response))
            .await?;
        Ok(envelope.response)
    }

    async fn vote_helpful(&self, id: &ReviewId) -> Result<u32, BoardError> {
        let envelope: VoteEnvelope = self
            .post::<(), _>("record vote", self.base.helpful_vote(id), None)
            .await?;
        Ok(envelope.helpful_count)
    }
}

#[async_trait]
impl VerificationGateway for HttpBackendGateway {
    async fn verify(&self, number: &RegistryNumber) -> Result<VerificationResult, BoardError> {
        let operation = match number.kind() {
            RegistryKind::Dot => "verify DOT number",
            RegistryKind::Mc => "verify MC number",
        };
        self.get(operation, self.base.verify(number)).await
    }
}
