//! Review and response drafts and their client-side validation.
//!
//! Validation runs before any request is built; a draft that fails it never
//! reaches the backend.

use serde::Deserialize;
use thiserror::Error;

use crate::api::{BoardError, NewCompanyResponse, NewReview};
use crate::model::{CompanyId, PaymentSpeed, RatingDimension, SubRatings};

/// Longest review title the backend stores.
pub const MAX_TITLE_CHARS: usize = 255;
/// Shortest accepted company response.
pub const MIN_RESPONSE_CHARS: usize = 10;
/// Longest accepted company response.
pub const MAX_RESPONSE_CHARS: usize = 2000;

/// Inline form errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No overall rating was chosen.
    #[error("Please select an overall rating")]
    MissingRating,
    /// The overall rating is above 5.
    #[error("Overall rating must be between 1 and 5")]
    RatingOutOfRange,
    /// Title or content is blank.
    #[error("Please fill in title and review content")]
    MissingReviewText,
    /// Title exceeds the stored length.
    #[error("Title must be {MAX_TITLE_CHARS} characters or fewer")]
    TitleTooLong,
    /// A sub-rating is above 5.
    #[error("{} rating must be between 1 and 5", .0.label())]
    SubRatingOutOfRange(RatingDimension),
    /// Response content or responder name is blank.
    #[error("Please fill in all required fields")]
    MissingResponseFields,
    /// Response text is too short or too long.
    #[error(
        "Response must be between {MIN_RESPONSE_CHARS} and {MAX_RESPONSE_CHARS} characters (got {0})"
    )]
    ResponseLength(usize),
}

impl From<ValidationError> for BoardError {
    fn from(error: ValidationError) -> Self {
        Self::Validation {
            message: error.to_string(),
        }
    }
}

/// A review as entered by a trucker, before validation.
///
/// Sub-ratings use 0 for "not rated", matching an untouched star picker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewDraft {
    /// Company being reviewed.
    pub company_id: CompanyId,
    /// Overall rating; 0 means none was chosen.
    #[serde(default)]
    pub overall_rating: u8,
    /// Review headline.
    #[serde(default)]
    pub title: String,
    /// Review body.
    #[serde(default)]
    pub content: String,
    /// Payment rating; 0 means unset.
    #[serde(default)]
    pub payment_rating: u8,
    /// Communication rating; 0 means unset.
    #[serde(default)]
    pub communication_rating: u8,
    /// Professionalism rating; 0 means unset.
    #[serde(default)]
    pub professionalism_rating: u8,
    /// Honesty rating; 0 means unset.
    #[serde(default)]
    pub honesty_rating: u8,
    /// How the company paid.
    #[serde(default)]
    pub payment_speed: Option<PaymentSpeed>,
    /// Days between delivery and payment.
    #[serde(default)]
    pub days_to_payment: Option<u32>,
    /// Whether the trucker would haul for the company again.
    #[serde(default)]
    pub would_work_again: Option<bool>,
    /// Categorical issues such as `rate_changed`.
    #[serde(default)]
    pub issues_reported: Vec<String>,
}

impl ReviewDraft {
    /// Creates an empty draft for a company.
    #[must_use]
    pub const fn new(company_id: CompanyId) -> Self {
        Self {
            company_id,
            overall_rating: 0,
            title: String::new(),
            content: String::new(),
            payment_rating: 0,
            communication_rating: 0,
            professionalism_rating: 0,
            honesty_rating: 0,
            payment_speed: None,
            days_to_payment: None,
            would_work_again: None,
            issues_reported: Vec::new(),
        }
    }

    /// Validates the draft and builds the request body.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking the overall
    /// rating before the text fields.
    pub fn validate(&self) -> Result<NewReview, ValidationError> {
        match self.overall_rating {
            0 => return Err(ValidationError::MissingRating),
            1..=5 => {}
            _ => return Err(ValidationError::RatingOutOfRange),
        }
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(ValidationError::MissingReviewText);
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(ValidationError::TitleTooLong);
        }

        Ok(NewReview {
            company_id: self.company_id.clone(),
            overall_rating: self.overall_rating,
            title: title.to_owned(),
            content: content.to_owned(),
            ratings: SubRatings {
                payment_rating: sub_rating(RatingDimension::Payment, self.payment_rating)?,
                communication_rating: sub_rating(
                    RatingDimension::Communication,
                    self.communication_rating,
                )?,
                professionalism_rating: sub_rating(
                    RatingDimension::Professionalism,
                    self.professionalism_rating,
                )?,
                honesty_rating: sub_rating(RatingDimension::Honesty, self.honesty_rating)?,
            },
            payment_speed: self.payment_speed,
            days_to_payment: self.days_to_payment,
            would_work_again: self.would_work_again,
            issues_reported: self
                .issues_reported
                .iter()
                .map(|issue| issue.trim())
                .filter(|issue| !issue.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        })
    }
}

const fn sub_rating(dimension: RatingDimension, value: u8) -> Result<Option<u8>, ValidationError> {
    match value {
        0 => Ok(None),
        1..=5 => Ok(Some(value)),
        _ => Err(ValidationError::SubRatingOutOfRange(dimension)),
    }
}

/// A company response as entered by a representative, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ResponseDraft {
    /// Response text.
    #[serde(default)]
    pub content: String,
    /// Name of the person responding.
    #[serde(default)]
    pub responder_name: String,
    /// Job title of the responder.
    #[serde(default)]
    pub responder_title: Option<String>,
}

impl ResponseDraft {
    /// Validates the draft and builds the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingResponseFields`] when content or
    /// name is blank, and [`ValidationError::ResponseLength`] when the
    /// trimmed content is outside 10 to 2000 characters.
    pub fn validate(&self) -> Result<NewCompanyResponse, ValidationError> {
        let content = self.content.trim();
        let responder_name = self.responder_name.trim();
        if content.is_empty() || responder_name.is_empty() {
            return Err(ValidationError::MissingResponseFields);
        }
        let length = content.chars().count();
        if !(MIN_RESPONSE_CHARS..=MAX_RESPONSE_CHARS).contains(&length) {
            return Err(ValidationError::ResponseLength(length));
        }

        Ok(NewCompanyResponse {
            content: content.to_owned(),
            responder_name: responder_name.to_owned(),
            responder_title: self
                .responder_title
                .as_deref()
                .map(str::trim)
                .filter(|title| !title.is_empty())
                .map(ToOwned::to_owned),
        })
    }
}
