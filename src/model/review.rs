//! Trucker reviews and the single response a company may attach.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::SubRatings;
use super::ids::{CompanyId, ReviewId};
use super::timestamp::Timestamp;

/// How the company paid for the reviewed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSpeed {
    /// Paid within the agreed terms.
    OnTime,
    /// Paid, but late.
    Late,
    /// Never paid.
    NeverPaid,
}

impl PaymentSpeed {
    /// Returns the wire spelling (e.g. `never_paid`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTime => "on_time",
            Self::Late => "late",
            Self::NeverPaid => "never_paid",
        }
    }

    /// Returns true for late or missing payment.
    #[must_use]
    pub const fn is_issue(self) -> bool {
        matches!(self, Self::Late | Self::NeverPaid)
    }
}

impl fmt::Display for PaymentSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A company's public reply to a review. Text only; it carries no rating.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompanyResponse {
    /// Name of the person responding.
    pub responder_name: String,
    /// Job title of the responder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responder_title: Option<String>,
    /// Response text.
    pub content: String,
    /// When the response was posted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// A trucker's rating and narrative feedback about one company.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Review {
    /// Review identifier.
    pub id: ReviewId,
    /// Display name of the authoring trucker.
    #[serde(default)]
    pub trucker_name: String,
    /// Company the review is about.
    pub company_id: CompanyId,
    /// Overall rating, 1 to 5.
    pub overall_rating: u8,
    /// Review headline.
    pub title: String,
    /// Review body.
    pub content: String,
    /// Optional per-dimension ratings, 1 to 5.
    #[serde(flatten)]
    pub ratings: SubRatings<u8>,
    /// How the company paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_speed: Option<PaymentSpeed>,
    /// Days between delivery and payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_to_payment: Option<u32>,
    /// Whether the trucker would haul for the company again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub would_work_again: Option<bool>,
    /// Categorical issues such as `rate_changed` or `late_payment`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub issues_reported: Vec<String>,
    /// Number of readers who marked the review helpful.
    #[serde(default)]
    pub helpful_count: u32,
    /// When the review was created.
    pub created_at: Timestamp,
    /// The company's response, if one was posted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_response: Option<CompanyResponse>,
}

impl Review {
    /// Returns true when the reviewer reported late or missing payment.
    #[must_use]
    pub fn has_payment_issue(&self) -> bool {
        self.payment_speed.is_some_and(PaymentSpeed::is_issue)
    }

    /// Returns true once a company response has been attached.
    #[must_use]
    pub const fn has_response(&self) -> bool {
        self.company_response.is_some()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{PaymentSpeed, Review};
    use crate::model::RatingDimension;

    fn backend_review() -> serde_json::Value {
        json!({
            "id": "review-2",
            "trucker_id": "trucker-2",
            "trucker_name": "Mike Driver",
            "company_id": "company-1",
            "overall_rating": 2,
            "title": "Rate changed after delivery",
            "content": "Agreed on $2000, they tried to pay $1600.",
            "payment_rating": 1,
            "communication_rating": 2,
            "professionalism_rating": 1,
            "honesty_rating": 1,
            "payment_speed": "late",
            "days_to_payment": 60,
            "load_date": "2024-02-01",
            "would_work_again": false,
            "issues_reported": ["rate_changed", "late_payment"],
            "status": "published",
            "helpful_count": 12,
            "created_at": "2024-02-03T09:15:00.000001",
            "company_response": {
                "content": "We apologize for the confusion.",
                "responder_name": "Jane Smith",
                "responder_title": "Operations Manager"
            }
        })
    }

    #[rstest]
    fn deserialises_backend_review_and_ignores_unknown_fields() {
        let review: Review =
            serde_json::from_value(backend_review()).expect("review should deserialise");

        assert_eq!(review.payment_speed, Some(PaymentSpeed::Late));
        assert!(review.has_payment_issue());
        assert_eq!(review.ratings.get(RatingDimension::Payment), Some(1));
        assert_eq!(review.issues_reported.len(), 2);
        let response = review
            .company_response
            .expect("company response should be present");
        assert_eq!(response.responder_title.as_deref(), Some("Operations Manager"));
        assert!(response.created_at.is_none());
    }

    #[rstest]
    fn null_issues_become_empty_list() {
        let mut payload = backend_review();
        payload["issues_reported"] = serde_json::Value::Null;
        payload["company_response"] = serde_json::Value::Null;

        let review: Review = serde_json::from_value(payload).expect("review should deserialise");

        assert!(review.issues_reported.is_empty());
        assert!(!review.has_response());
    }

    #[rstest]
    #[case::on_time(PaymentSpeed::OnTime, false)]
    #[case::late(PaymentSpeed::Late, true)]
    #[case::never_paid(PaymentSpeed::NeverPaid, true)]
    fn payment_issue_classification(#[case] speed: PaymentSpeed, #[case] expected: bool) {
        assert_eq!(speed.is_issue(), expected);
    }
}
