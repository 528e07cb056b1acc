//! Request bodies, response envelopes, and lookup types for the backend API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{
    Company, CompanyId, CompanyResponse, CompanyStats, PaymentSpeed, Review, SubRatings,
};

use super::error::BoardError;

/// Body of `POST /api/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReview {
    /// Company being reviewed.
    pub company_id: CompanyId,
    /// Overall rating, 1 to 5.
    pub overall_rating: u8,
    /// Review headline.
    pub title: String,
    /// Review body.
    pub content: String,
    /// Optional per-dimension ratings; unset dimensions are omitted.
    #[serde(flatten)]
    pub ratings: SubRatings<u8>,
    /// How the company paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_speed: Option<PaymentSpeed>,
    /// Days between delivery and payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_payment: Option<u32>,
    /// Whether the trucker would haul for the company again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub would_work_again: Option<bool>,
    /// Categorical issues reported.
    pub issues_reported: Vec<String>,
}

/// Body of `POST /api/reviews/{id}/respond`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCompanyResponse {
    /// Response text, 10 to 2000 characters.
    pub content: String,
    /// Name of the person responding.
    pub responder_name: String,
    /// Job title of the responder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_title: Option<String>,
}

/// A company together with the stats the detail endpoint computes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompanyDetail {
    /// The company record.
    pub company: Company,
    /// Review statistics; older backends omit them.
    #[serde(default)]
    pub stats: Option<CompanyStats>,
}

/// Outcome of a DOT or MC lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationResult {
    /// Whether the registry knows the number.
    pub verified: bool,
    /// DOT number looked up, for DOT verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_number: Option<String>,
    /// MC number looked up, for MC verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mc_number: Option<String>,
    /// Registered company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Operating status reported by the registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Human-readable summary.
    #[serde(default)]
    pub message: String,
}

/// Which federal registry a number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
    /// Department of Transportation number.
    Dot,
    /// Motor-carrier docket number.
    Mc,
}

impl RegistryKind {
    /// Returns the display label (`DOT` or `MC`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dot => "DOT",
            Self::Mc => "MC",
        }
    }
}

/// A DOT or MC number that has been checked to contain only digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryNumber {
    kind: RegistryKind,
    digits: String,
}

impl RegistryNumber {
    /// Validates a DOT number.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIdentifier`] unless the value is a
    /// non-empty run of ASCII digits.
    pub fn dot(raw: &str) -> Result<Self, BoardError> {
        Self::new(RegistryKind::Dot, raw)
    }

    /// Validates an MC number. An `MC` prefix is accepted and stripped.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIdentifier`] unless the remaining value
    /// is a non-empty run of ASCII digits.
    pub fn mc(raw: &str) -> Result<Self, BoardError> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix("MC")
            .or_else(|| trimmed.strip_prefix("mc"))
            .map_or(trimmed, |rest| rest.trim_start_matches(['-', '#', ' ']));
        Self::new(RegistryKind::Mc, digits)
    }

    fn new(kind: RegistryKind, raw: &str) -> Result<Self, BoardError> {
        let digits = raw.trim();
        if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(BoardError::InvalidIdentifier {
                message: format!("{} number must contain only digits", kind.label()),
            });
        }
        Ok(Self {
            kind,
            digits: digits.to_owned(),
        })
    }

    /// Returns which registry the number belongs to.
    #[must_use]
    pub const fn kind(&self) -> RegistryKind {
        self.kind
    }

    /// Returns the digits.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub(crate) const fn kind_segment(&self) -> &'static str {
        match self.kind {
            RegistryKind::Dot => "dot",
            RegistryKind::Mc => "mc",
        }
    }
}

impl fmt::Display for RegistryNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.digits)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CompaniesEnvelope {
    pub(super) companies: Vec<Company>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReviewsEnvelope {
    pub(super) reviews: Vec<Review>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SubmittedReviewEnvelope {
    pub(super) review: Review,
}

#[derive(Debug, Deserialize)]
pub(super) struct SubmittedResponseEnvelope {
    pub(super) response: CompanyResponse,
}

#[derive(Debug, Deserialize)]
pub(super) struct VoteEnvelope {
    pub(super) helpful_count: u32,
}
