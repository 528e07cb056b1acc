//! Shared test utilities for CLI tests.

use std::sync::Mutex;

use async_trait::async_trait;
use carrier_board::api::{
    BoardError, CompanyDetail, CompanyGateway, ListingQuery, NewCompanyResponse, NewReview,
    RegistryNumber, ReviewGateway, VerificationGateway, VerificationResult,
};
use carrier_board::model::{
    Company, CompanyId, CompanyResponse, EntityType, Review, ReviewId, SubRatings, Timestamp,
};
use carrier_board::telemetry::{TelemetryEvent, TelemetrySink};

/// A gateway serving canned snapshots and capturing every mutation.
pub struct StubGateway {
    /// Companies returned by `list_companies` (and looked up by `company`).
    pub companies: Result<Vec<Company>, BoardError>,
    /// Reviews returned by `list_reviews` (and looked up by `review`).
    pub reviews: Result<Vec<Review>, BoardError>,
    /// Response to return from `verify`.
    pub verification: Result<VerificationResult, BoardError>,
    /// Listing queries received.
    pub queries: Mutex<Vec<ListingQuery>>,
    /// Review bodies posted.
    pub submitted: Mutex<Vec<NewReview>>,
    /// Responses posted, with the review they answer.
    pub responses: Mutex<Vec<(ReviewId, NewCompanyResponse)>>,
    /// Reviews voted helpful.
    pub votes: Mutex<Vec<ReviewId>>,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            companies: Ok(Vec::new()),
            reviews: Ok(Vec::new()),
            verification: Err(not_found("verify DOT number")),
            queries: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
            responses: Mutex::new(Vec::new()),
            votes: Mutex::new(Vec::new()),
        }
    }
}

impl StubGateway {
    /// Creates a gateway serving `companies` and `reviews`.
    pub fn with_snapshot(companies: Vec<Company>, reviews: Vec<Review>) -> Self {
        Self {
            companies: Ok(companies),
            reviews: Ok(reviews),
            ..Self::default()
        }
    }

    /// Creates a gateway whose listings fail with `error`.
    pub fn failing(error: BoardError) -> Self {
        Self {
            companies: Err(error.clone()),
            reviews: Err(error),
            ..Self::default()
        }
    }
}

fn not_found(operation: &str) -> BoardError {
    BoardError::Rejected {
        operation: operation.to_owned(),
        status: 404,
        detail: Some("Not found".to_owned()),
    }
}

#[async_trait]
impl CompanyGateway for StubGateway {
    async fn list_companies(&self, query: &ListingQuery) -> Result<Vec<Company>, BoardError> {
        self.queries
            .lock()
            .expect("queries mutex should be available")
            .push(query.clone());
        self.companies.clone()
    }

    async fn company(&self, id: &CompanyId) -> Result<CompanyDetail, BoardError> {
        self.companies
            .clone()?
            .into_iter()
            .find(|company| &company.id == id)
            .map(|company| CompanyDetail {
                company,
                stats: None,
            })
            .ok_or_else(|| not_found("load company"))
    }
}

#[async_trait]
impl ReviewGateway for StubGateway {
    async fn list_reviews(&self, query: &ListingQuery) -> Result<Vec<Review>, BoardError> {
        self.queries
            .lock()
            .expect("queries mutex should be available")
            .push(query.clone());
        let reviews = self.reviews.clone()?;
        Ok(match query.company_id() {
            Some(company_id) => reviews
                .into_iter()
                .filter(|review| &review.company_id == company_id)
                .collect(),
            None => reviews,
        })
    }

    async fn review(&self, id: &ReviewId) -> Result<Review, BoardError> {
        self.reviews
            .clone()?
            .into_iter()
            .find(|review| &review.id == id)
            .ok_or_else(|| not_found("load review"))
    }

    async fn submit_review(&self, review: &NewReview) -> Result<Review, BoardError> {
        self.submitted
            .lock()
            .expect("submitted mutex should be available")
            .push(review.clone());
        Ok(Review {
            id: ReviewId::new("review-new").expect("valid id"),
            trucker_name: "Test Trucker".to_owned(),
            company_id: review.company_id.clone(),
            overall_rating: review.overall_rating,
            title: review.title.clone(),
            content: review.content.clone(),
            ratings: review.ratings,
            payment_speed: review.payment_speed,
            days_to_payment: review.days_to_payment,
            would_work_again: review.would_work_again,
            issues_reported: review.issues_reported.clone(),
            helpful_count: 0,
            created_at: timestamp("2024-03-01T12:00:00Z"),
            company_response: None,
        })
    }

    async fn respond(
        &self,
        id: &ReviewId,
        response: &NewCompanyResponse,
    ) -> Result<CompanyResponse, BoardError> {
        self.responses
            .lock()
            .expect("responses mutex should be available")
            .push((id.clone(), response.clone()));
        Ok(CompanyResponse {
            responder_name: response.responder_name.clone(),
            responder_title: response.responder_title.clone(),
            content: response.content.clone(),
            created_at: Some(timestamp("2024-03-02T12:00:00Z")),
        })
    }

    async fn vote_helpful(&self, id: &ReviewId) -> Result<u32, BoardError> {
        let mut votes = self.votes.lock().expect("votes mutex should be available");
        votes.push(id.clone());
        Ok(u32::try_from(votes.len()).expect("vote count fits in u32"))
    }
}

#[async_trait]
impl VerificationGateway for StubGateway {
    async fn verify(&self, _number: &RegistryNumber) -> Result<VerificationResult, BoardError> {
        self.verification.clone()
    }
}

/// Sink that keeps events in memory for assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingSink {
    /// Drains the recorded events.
    pub fn take(&self) -> Vec<TelemetryEvent> {
        self.events
            .lock()
            .expect("events mutex should be available")
            .drain(..)
            .collect()
    }
}

impl TelemetrySink for RecordingSink {
    fn record(&self, event: TelemetryEvent) {
        self.events
            .lock()
            .expect("events mutex should be available")
            .push(event);
    }
}

/// Parses a fixture timestamp.
pub fn timestamp(raw: &str) -> Timestamp {
    Timestamp::parse(raw).expect("fixture timestamp should parse")
}

/// Builds a broker with the given aggregate rating and review count.
pub fn company(id: &str, name: &str, rating: f64, review_count: u32) -> Company {
    Company {
        id: CompanyId::new(id).expect("valid id"),
        legal_name: name.to_owned(),
        dba_name: None,
        entity_type: EntityType::Broker,
        mc_number: None,
        dot_number: None,
        phone: None,
        physical_city: None,
        physical_state: None,
        overall_rating: rating,
        review_count,
        ratings: SubRatings::default(),
    }
}

/// Builds a review of `company_id`.
pub fn review(id: &str, company_id: &str, rating: u8, created_at: &str) -> Review {
    Review {
        id: ReviewId::new(id).expect("valid id"),
        trucker_name: "Mike Driver".to_owned(),
        company_id: CompanyId::new(company_id).expect("valid id"),
        overall_rating: rating,
        title: format!("Review {id}"),
        content: "Hauled a load for them.".to_owned(),
        ratings: SubRatings::default(),
        payment_speed: None,
        days_to_payment: None,
        would_work_again: None,
        issues_reported: Vec::new(),
        helpful_count: 0,
        created_at: timestamp(created_at),
        company_response: None,
    }
}

/// Returns the company names listed under a ranking heading, in order.
pub fn sidebar_names<'a>(output: &'a str, heading: &str) -> Vec<&'a str> {
    output
        .lines()
        .skip_while(|line| *line != heading)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(". "))
        .map(|(_, rest)| rest.split("  ").next().unwrap_or_default().trim())
        .collect()
}
