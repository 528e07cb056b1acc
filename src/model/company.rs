//! Companies being rated and the stats the backend computes for them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::BoardError;

use super::SubRatings;
use super::ids::CompanyId;

/// Classification of a rated company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// Freight broker.
    Broker,
    /// Shipper.
    Shipper,
    /// Freight forwarder.
    FreightForwarder,
}

impl EntityType {
    /// Returns the wire spelling (e.g. `FREIGHT_FORWARDER`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Broker => "BROKER",
            Self::Shipper => "SHIPPER",
            Self::FreightForwarder => "FREIGHT_FORWARDER",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace(['-', ' '], "_").as_str() {
            "BROKER" => Ok(Self::Broker),
            "SHIPPER" => Ok(Self::Shipper),
            "FREIGHT_FORWARDER" => Ok(Self::FreightForwarder),
            _ => Err(BoardError::Configuration {
                message: format!(
                    "unknown entity type '{s}' (expected broker, shipper, or freight-forwarder)"
                ),
            }),
        }
    }
}

/// A broker, shipper, or freight forwarder with its aggregate ratings.
///
/// `overall_rating` and the sub-ratings are backend-computed aggregates; the
/// client never derives them and refetches after a mutation instead.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Company {
    /// Company identifier.
    pub id: CompanyId,
    /// Registered legal name.
    pub legal_name: String,
    /// "Doing business as" name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dba_name: Option<String>,
    /// Entity classification.
    pub entity_type: EntityType,
    /// Motor-carrier number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mc_number: Option<String>,
    /// Federal DOT number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_number: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// City of the physical address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_city: Option<String>,
    /// State of the physical address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_state: Option<String>,
    /// Aggregate overall rating, 0.0 to 5.0.
    #[serde(default)]
    pub overall_rating: f64,
    /// Number of published reviews.
    #[serde(default)]
    pub review_count: u32,
    /// Aggregate sub-ratings; absent when no review rated that dimension.
    #[serde(flatten)]
    pub ratings: SubRatings<f64>,
}

impl Company {
    /// Returns the city and state joined for display, when either is known.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match (self.physical_city.as_deref(), self.physical_state.as_deref()) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            (Some(single), None) | (None, Some(single)) => Some(single.to_owned()),
            (None, None) => None,
        }
    }
}

/// Per-star review counts, as reported by the company detail endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct RatingDistribution {
    /// Five-star reviews.
    #[serde(rename = "5_star", default)]
    pub five_star: u32,
    /// Four-star reviews.
    #[serde(rename = "4_star", default)]
    pub four_star: u32,
    /// Three-star reviews.
    #[serde(rename = "3_star", default)]
    pub three_star: u32,
    /// Two-star reviews.
    #[serde(rename = "2_star", default)]
    pub two_star: u32,
    /// One-star reviews.
    #[serde(rename = "1_star", default)]
    pub one_star: u32,
}

impl RatingDistribution {
    /// Returns the count for a star value (1 to 5); other values yield 0.
    #[must_use]
    pub const fn count_for(&self, stars: u8) -> u32 {
        match stars {
            5 => self.five_star,
            4 => self.four_star,
            3 => self.three_star,
            2 => self.two_star,
            1 => self.one_star,
            _ => 0,
        }
    }

    /// Increments the count for a star value; other values are ignored.
    pub const fn record(&mut self, stars: u8) {
        let slot = match stars {
            5 => &mut self.five_star,
            4 => &mut self.four_star,
            3 => &mut self.three_star,
            2 => &mut self.two_star,
            1 => &mut self.one_star,
            _ => return,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Detailed statistics returned alongside a single company.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct CompanyStats {
    /// Published reviews considered by the stats.
    #[serde(default)]
    pub total_reviews: u32,
    /// Average overall rating.
    #[serde(default)]
    pub average_rating: f64,
    /// Count of reviews per star value.
    #[serde(default)]
    pub rating_distribution: RatingDistribution,
    /// Share of reviewers who would work with the company again, 0 to 100.
    #[serde(default)]
    pub would_work_again_percent: f64,
    /// Issues most frequently reported by reviewers.
    #[serde(default)]
    pub common_issues: Vec<String>,
}
