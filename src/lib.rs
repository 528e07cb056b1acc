//! Carrier Board library crate: a review board for freight brokers and
//! shippers.
//!
//! Truckers rate the companies they haul for, companies respond, and every
//! page of the board is derived from fetched snapshots by the pure
//! operations in [`listing`]. The backend owns all data and computes every
//! aggregate; this crate wraps its REST API, checks who may do what, and
//! renders the results for a terminal.

pub mod access;
pub mod api;
pub mod config;
pub mod listing;
pub mod model;
pub mod render;
pub mod submission;
pub mod telemetry;

pub use access::{AccessContext, AccessDenied, Capability, Viewer};
pub use api::{
    BackendUrl, BoardError, BoardIntake, CompanyGateway, CompanyProfileIntake,
    HttpBackendGateway, ListingQuery, ReviewGateway, VerificationGateway,
};
pub use config::{CarrierBoardConfig, OperationMode};
pub use model::{Company, CompanyId, Review, ReviewId};
