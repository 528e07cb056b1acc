//! Domain records supplied by the Carrier Board backend.
//!
//! Companies and reviews are owned by the backend; the client only holds
//! read-only snapshots for the duration of one operation. Everything here
//! deserialises directly from the backend's JSON payloads.

mod company;
mod ids;
mod review;
mod timestamp;

pub use company::{Company, CompanyStats, EntityType, RatingDistribution};
pub use ids::{CompanyId, ReviewId};
pub use review::{CompanyResponse, PaymentSpeed, Review};
pub use timestamp::Timestamp;

use serde::{Deserialize, Serialize};

/// The four optional rating dimensions shared by companies and reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingDimension {
    /// How reliably and promptly the company pays.
    Payment,
    /// Responsiveness and clarity.
    Communication,
    /// Conduct during the load.
    Professionalism,
    /// Whether agreed rates and terms were honoured.
    Honesty,
}

impl RatingDimension {
    /// All dimensions in display order.
    pub const ALL: [Self; 4] = [
        Self::Payment,
        Self::Communication,
        Self::Professionalism,
        Self::Honesty,
    ];

    /// Returns the label shown next to the rating.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Payment => "Payment",
            Self::Communication => "Communication",
            Self::Professionalism => "Professionalism",
            Self::Honesty => "Honesty",
        }
    }
}

/// A sub-rating value that distinguishes "not rated" from a real score.
///
/// The rating scale's floor is 1, so zero is treated the same as an absent
/// value.
pub trait SubRating: Copy {
    /// Returns true when the value carries a real rating.
    fn is_rated(self) -> bool;
}

impl SubRating for u8 {
    fn is_rated(self) -> bool {
        self > 0
    }
}

impl SubRating for f64 {
    fn is_rated(self) -> bool {
        self > 0.0
    }
}

/// Optional sub-ratings along the four rating dimensions.
///
/// Reviews carry integer ratings (`SubRatings<u8>`); companies carry the
/// backend-computed averages (`SubRatings<f64>`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct SubRatings<T> {
    /// Payment rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_rating: Option<T>,
    /// Communication rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_rating: Option<T>,
    /// Professionalism rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professionalism_rating: Option<T>,
    /// Honesty rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honesty_rating: Option<T>,
}

impl<T: SubRating> SubRatings<T> {
    /// Returns the rating for one dimension, or `None` when it was not rated.
    #[must_use]
    pub fn get(&self, dimension: RatingDimension) -> Option<T> {
        let value = match dimension {
            RatingDimension::Payment => self.payment_rating,
            RatingDimension::Communication => self.communication_rating,
            RatingDimension::Professionalism => self.professionalism_rating,
            RatingDimension::Honesty => self.honesty_rating,
        };
        value.filter(|rating| rating.is_rated())
    }

    /// Returns the rated dimensions in display order, skipping absent ones.
    #[must_use]
    pub fn rated(&self) -> Vec<(RatingDimension, T)> {
        RatingDimension::ALL
            .into_iter()
            .filter_map(|dimension| self.get(dimension).map(|value| (dimension, value)))
            .collect()
    }

    /// Returns true when at least one dimension carries a rating.
    #[must_use]
    pub fn any_rated(&self) -> bool {
        RatingDimension::ALL
            .into_iter()
            .any(|dimension| self.get(dimension).is_some())
    }
}
