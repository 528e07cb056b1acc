//! Typed access to the review backend's REST API.
//!
//! This module wraps `reqwest` behind per-resource gateway traits, validates
//! base URLs, listing parameters and registry numbers before any request is
//! sent, and maps HTTP failures into [`BoardError`] so that callers can show
//! the backend's own message where it sent one.

pub mod backend_url;
pub mod error;
pub mod gateway;
pub mod intake;
pub mod models;
pub mod query;

pub use backend_url::{BackendUrl, DEFAULT_BACKEND_URL};
pub use error::BoardError;
pub use gateway::{CompanyGateway, HttpBackendGateway, ReviewGateway, VerificationGateway};
pub use intake::{BoardIntake, BoardSnapshot, CompanyProfile, CompanyProfileIntake};
pub use models::{
    CompanyDetail, NewCompanyResponse, NewReview, RegistryKind, RegistryNumber,
    VerificationResult,
};
pub use query::{ListingQuery, MAX_FETCH_LIMIT};

#[cfg(test)]
pub use gateway::{MockCompanyGateway, MockReviewGateway, MockVerificationGateway};
