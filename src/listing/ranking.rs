//! Best, worst, and most-reviewed company rankings.
//!
//! Rankings only consider companies with enough reviews to be meaningful.
//! The eligibility gate runs before sorting and truncation, so a company
//! without enough signal never occupies a slot, even when its unrated 0.0
//! would otherwise sort to the bottom of the worst list.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::model::Company;

use super::{ParseListingError, normalise_option};

/// Maximum number of entries in any ranking ("Top 25").
pub const RANKING_LIMIT: usize = 25;

/// Minimum `review_count` a company needs before it can be ranked.
pub const MIN_REVIEWS_FOR_RANKING: u32 = 2;

/// Sort direction over `overall_rating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDirection {
    /// Lowest rated first.
    Ascending,
    /// Highest rated first.
    #[default]
    Descending,
}

/// Which of the three ranking lists to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingKind {
    /// Lowest rated eligible companies.
    #[default]
    Worst,
    /// Highest rated eligible companies.
    Best,
    /// Eligible companies with the most reviews.
    MostReviewed,
}

impl RankingKind {
    /// Returns the heading used when rendering this list.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Worst => "Worst rated",
            Self::Best => "Best rated",
            Self::MostReviewed => "Most reviewed",
        }
    }
}

impl FromStr for RankingKind {
    type Err = ParseListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_option(s).as_str() {
            "worst" | "bad" => Ok(Self::Worst),
            "best" | "good" => Ok(Self::Best),
            "most_reviewed" | "reviewed" => Ok(Self::MostReviewed),
            _ => Err(ParseListingError::new(
                "ranking",
                s,
                "worst, best, most-reviewed",
            )),
        }
    }
}

/// Ranks eligible companies by `overall_rating`.
///
/// Companies with fewer than `min_review_count` reviews are excluded before
/// sorting. The result holds at most [`RANKING_LIMIT`] entries; equal ratings
/// keep their input order.
///
/// # Examples
///
/// ```
/// use carrier_board::listing::{RankDirection, rank_companies};
///
/// let ranked = rank_companies(&[], RankDirection::Descending, 2);
/// assert!(ranked.is_empty());
/// ```
#[must_use]
pub fn rank_companies(
    companies: &[Company],
    direction: RankDirection,
    min_review_count: u32,
) -> Vec<&Company> {
    let mut eligible = eligible(companies, min_review_count);
    eligible.sort_by(|a, b| match direction {
        RankDirection::Ascending => compare_ratings(a, b),
        RankDirection::Descending => compare_ratings(b, a),
    });
    eligible.truncate(RANKING_LIMIT);
    eligible
}

/// Ranks eligible companies by `review_count`, most reviewed first.
///
/// Applies the same eligibility gate and limit as [`rank_companies`].
#[must_use]
pub fn rank_by_review_count(companies: &[Company], min_review_count: u32) -> Vec<&Company> {
    let mut eligible = eligible(companies, min_review_count);
    eligible.sort_by(|a, b| b.review_count.cmp(&a.review_count));
    eligible.truncate(RANKING_LIMIT);
    eligible
}

fn eligible(companies: &[Company], min_review_count: u32) -> Vec<&Company> {
    companies
        .iter()
        .filter(|company| company.review_count >= min_review_count)
        .collect()
}

fn compare_ratings(a: &Company, b: &Company) -> Ordering {
    a.overall_rating.total_cmp(&b.overall_rating)
}

/// The three ranking lists shown together on the rankings page and, in
/// shortened form, in the search and review page sidebars.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingBoard<'a> {
    /// Lowest rated first.
    pub worst: Vec<&'a Company>,
    /// Highest rated first.
    pub best: Vec<&'a Company>,
    /// Most reviewed first.
    pub most_reviewed: Vec<&'a Company>,
}

impl<'a> RankingBoard<'a> {
    /// Builds all three lists with the default eligibility threshold, each
    /// truncated to `min(limit, RANKING_LIMIT)` entries.
    #[must_use]
    pub fn build(companies: &'a [Company], limit: usize) -> Self {
        let keep = limit.min(RANKING_LIMIT);
        let mut worst = rank_companies(
            companies,
            RankDirection::Ascending,
            MIN_REVIEWS_FOR_RANKING,
        );
        let mut best = rank_companies(
            companies,
            RankDirection::Descending,
            MIN_REVIEWS_FOR_RANKING,
        );
        let mut most_reviewed = rank_by_review_count(companies, MIN_REVIEWS_FOR_RANKING);
        worst.truncate(keep);
        best.truncate(keep);
        most_reviewed.truncate(keep);
        Self {
            worst,
            best,
            most_reviewed,
        }
    }

    /// Returns the list for one ranking kind.
    #[must_use]
    pub fn list(&self, kind: RankingKind) -> &[&'a Company] {
        match kind {
            RankingKind::Worst => &self.worst,
            RankingKind::Best => &self.best,
            RankingKind::MostReviewed => &self.most_reviewed,
        }
    }
}
