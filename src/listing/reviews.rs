//! Review filtering and sorting for the review browsing and profile pages.

use std::borrow::Borrow;
use std::str::FromStr;

use crate::model::{CompanyId, Review};

use super::{ParseListingError, normalise_option};

/// Named filter preset applied to a review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// No preset filter.
    #[default]
    All,
    /// Overall rating of 4 or more.
    Positive,
    /// Overall rating of 2 or less.
    Negative,
    /// Payment was late or never arrived.
    PaymentIssue,
}

impl ViewMode {
    /// Returns true when the review belongs to this view.
    #[must_use]
    pub fn admits(self, review: &Review) -> bool {
        match self {
            Self::All => true,
            Self::Positive => review.overall_rating >= 4,
            Self::Negative => review.overall_rating <= 2,
            Self::PaymentIssue => review.has_payment_issue(),
        }
    }

    /// Returns a human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All reviews",
            Self::Positive => "Showing positive reviews (4-5 stars)",
            Self::Negative => "Showing negative reviews (1-2 stars)",
            Self::PaymentIssue => "Showing payment issues",
        }
    }
}

impl FromStr for ViewMode {
    type Err = ParseListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_option(s).as_str() {
            "all" => Ok(Self::All),
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "payment_issue" | "payment_issues" | "warning" => Ok(Self::PaymentIssue),
            _ => Err(ParseListingError::new(
                "view mode",
                s,
                "all, positive, negative, payment-issue",
            )),
        }
    }
}

/// Criteria for [`filter_reviews`]. All active criteria must hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewCriteria {
    /// Only reviews of this company.
    pub company_id: Option<CompanyId>,
    /// Inclusive lower bound on `overall_rating`; `None` or 0 disables it.
    pub min_rating: Option<u8>,
    /// Preset view filter.
    pub view_mode: ViewMode,
}

impl ReviewCriteria {
    /// Returns true when the review satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, review: &Review) -> bool {
        let company_matches = self
            .company_id
            .as_ref()
            .is_none_or(|company_id| review.company_id == *company_id);
        let rating_matches = self
            .min_rating
            .is_none_or(|minimum| review.overall_rating >= minimum);

        company_matches && rating_matches && self.view_mode.admits(review)
    }
}

/// Returns the reviews that satisfy `criteria`, preserving input order.
///
/// Accepts any iterator of review references, so an already-filtered listing
/// can be filtered again; doing so with the same criteria is a no-op.
#[must_use]
pub fn filter_reviews<'a, I>(reviews: I, criteria: &ReviewCriteria) -> Vec<&'a Review>
where
    I: IntoIterator<Item = &'a Review>,
{
    reviews
        .into_iter()
        .filter(|review| criteria.matches(review))
        .collect()
}

/// Sort order for a review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSortKey {
    /// Newest first.
    #[default]
    Recent,
    /// Lowest overall rating first.
    RatingAscending,
    /// Highest overall rating first.
    RatingDescending,
    /// Most helpful votes first.
    HelpfulDescending,
}

impl FromStr for ReviewSortKey {
    type Err = ParseListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_option(s).as_str() {
            "recent" => Ok(Self::Recent),
            "rating_ascending" | "rating_asc" | "rating_low" => Ok(Self::RatingAscending),
            "rating_descending" | "rating_desc" | "rating_high" => Ok(Self::RatingDescending),
            "helpful_descending" | "helpful" => Ok(Self::HelpfulDescending),
            _ => Err(ParseListingError::new(
                "sort key",
                s,
                "recent, rating-ascending, rating-descending, helpful",
            )),
        }
    }
}

/// Sorts reviews in place. The sort is stable: ties keep their current
/// relative order.
pub fn sort_reviews<R: Borrow<Review>>(reviews: &mut [R], key: ReviewSortKey) {
    reviews.sort_by(|left, right| {
        let (a, b): (&Review, &Review) = (left.borrow(), right.borrow());
        match key {
            ReviewSortKey::Recent => b.created_at.cmp(&a.created_at),
            ReviewSortKey::RatingAscending => a.overall_rating.cmp(&b.overall_rating),
            ReviewSortKey::RatingDescending => b.overall_rating.cmp(&a.overall_rating),
            ReviewSortKey::HelpfulDescending => b.helpful_count.cmp(&a.helpful_count),
        }
    });
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::listing::test_support::{created_on, make_review, review_ids, with_payment};
    use crate::model::PaymentSpeed;

    #[fixture]
    fn rated() -> Vec<Review> {
        [5, 1, 3, 2, 4]
            .into_iter()
            .enumerate()
            .map(|(index, rating)| make_review(&format!("r{index}"), "company-1", rating))
            .collect()
    }

    fn ratings(reviews: &[&Review]) -> Vec<u8> {
        reviews.iter().map(|review| review.overall_rating).collect()
    }

    #[rstest]
    fn positive_mode_keeps_four_and_five_in_input_order(rated: Vec<Review>) {
        let criteria = ReviewCriteria {
            view_mode: ViewMode::Positive,
            ..ReviewCriteria::default()
        };

        let filtered = filter_reviews(&rated, &criteria);

        assert_eq!(ratings(&filtered), vec![5, 4]);
    }

    #[rstest]
    fn negative_mode_keeps_two_or_less(rated: Vec<Review>) {
        let criteria = ReviewCriteria {
            view_mode: ViewMode::Negative,
            ..ReviewCriteria::default()
        };

        assert_eq!(ratings(&filter_reviews(&rated, &criteria)), vec![1, 2]);
    }

    #[rstest]
    #[case::never_paid(PaymentSpeed::NeverPaid, true)]
    #[case::late(PaymentSpeed::Late, true)]
    #[case::on_time(PaymentSpeed::OnTime, false)]
    fn payment_issue_mode_checks_payment_speed(
        #[case] speed: PaymentSpeed,
        #[case] included: bool,
    ) {
        let reviews = vec![with_payment(make_review("r", "company-1", 3), speed)];
        let criteria = ReviewCriteria {
            view_mode: ViewMode::PaymentIssue,
            ..ReviewCriteria::default()
        };

        assert_eq!(filter_reviews(&reviews, &criteria).len(), usize::from(included));
    }

    #[rstest]
    fn payment_issue_mode_excludes_reviews_without_payment_data() {
        let reviews = vec![make_review("r", "company-1", 1)];
        let criteria = ReviewCriteria {
            view_mode: ViewMode::PaymentIssue,
            ..ReviewCriteria::default()
        };

        assert!(filter_reviews(&reviews, &criteria).is_empty());
    }

    #[rstest]
    fn criteria_combine_with_logical_and() {
        let reviews = vec![
            make_review("a", "company-1", 5),
            make_review("b", "company-2", 5),
            make_review("c", "company-1", 3),
            make_review("d", "company-1", 4),
        ];
        let criteria = ReviewCriteria {
            company_id: Some(CompanyId::new("company-1").expect("valid id")),
            min_rating: Some(4),
            view_mode: ViewMode::All,
        };

        assert_eq!(review_ids(filter_reviews(&reviews, &criteria)), vec!["a", "d"]);
    }

    #[rstest]
    fn zero_minimum_rating_disables_the_bound(rated: Vec<Review>) {
        let criteria = ReviewCriteria {
            min_rating: Some(0),
            ..ReviewCriteria::default()
        };

        assert_eq!(filter_reviews(&rated, &criteria).len(), rated.len());
    }

    #[rstest]
    #[case::all(ViewMode::All)]
    #[case::positive(ViewMode::Positive)]
    #[case::negative(ViewMode::Negative)]
    #[case::payment(ViewMode::PaymentIssue)]
    fn filtering_is_idempotent(rated: Vec<Review>, #[case] view_mode: ViewMode) {
        let criteria = ReviewCriteria {
            min_rating: Some(2),
            view_mode,
            ..ReviewCriteria::default()
        };

        let once = filter_reviews(&rated, &criteria);
        let twice = filter_reviews(once.iter().copied(), &criteria);

        assert_eq!(once, twice);
    }

    #[rstest]
    fn recent_sorts_newest_first() {
        let mut reviews = vec![
            created_on(make_review("old", "c", 3), "2024-01-01T00:00:00Z"),
            created_on(make_review("new", "c", 3), "2024-03-01T00:00:00Z"),
            created_on(make_review("mid", "c", 3), "2024-02-01T00:00:00"),
        ];

        sort_reviews(&mut reviews, ReviewSortKey::Recent);

        assert_eq!(review_ids(&reviews), vec!["new", "mid", "old"]);
    }

    #[rstest]
    fn rating_sorts_are_stable(rated: Vec<Review>) {
        let mut reviews = rated;
        reviews.push(make_review("tie", "company-1", 5));

        let mut descending: Vec<&Review> = reviews.iter().collect();
        sort_reviews(&mut descending, ReviewSortKey::RatingDescending);
        assert_eq!(
            review_ids(descending),
            vec!["r0", "tie", "r4", "r2", "r3", "r1"]
        );

        let mut ascending: Vec<&Review> = reviews.iter().collect();
        sort_reviews(&mut ascending, ReviewSortKey::RatingAscending);
        assert_eq!(
            review_ids(ascending),
            vec!["r1", "r3", "r2", "r4", "r0", "tie"]
        );
    }

    #[rstest]
    fn helpful_sort_orders_by_votes() {
        let mut reviews: Vec<Review> = [3_u32, 12, 0, 12]
            .into_iter()
            .enumerate()
            .map(|(index, votes)| Review {
                helpful_count: votes,
                ..make_review(&format!("h{index}"), "c", 3)
            })
            .collect();

        sort_reviews(&mut reviews, ReviewSortKey::HelpfulDescending);

        assert_eq!(review_ids(&reviews), vec!["h1", "h3", "h0", "h2"]);
    }

    #[rstest]
    #[case::legacy_warning("warning", ViewMode::PaymentIssue)]
    #[case::kebab("payment-issue", ViewMode::PaymentIssue)]
    #[case::positive("Positive", ViewMode::Positive)]
    fn view_mode_parses(#[case] raw: &str, #[case] expected: ViewMode) {
        assert_eq!(raw.parse::<ViewMode>().ok(), Some(expected));
    }

    #[rstest]
    #[case::legacy_low("rating_low", ReviewSortKey::RatingAscending)]
    #[case::legacy_high("rating_high", ReviewSortKey::RatingDescending)]
    #[case::helpful("helpful", ReviewSortKey::HelpfulDescending)]
    #[case::recent("recent", ReviewSortKey::Recent)]
    fn sort_key_parses(#[case] raw: &str, #[case] expected: ReviewSortKey) {
        assert_eq!(raw.parse::<ReviewSortKey>().ok(), Some(expected));
    }

    #[rstest]
    fn unknown_sort_key_reports_expected_values() {
        let error = "oldest"
            .parse::<ReviewSortKey>()
            .expect_err("unknown key should fail");
        assert!(error.to_string().contains("rating-ascending"));
    }
}
