use crate::model::{RatingDistribution, Review};

/// Counts over a filtered review listing, shown above the review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewSummary {
    /// Reviews in the listing.
    pub total: usize,
    /// Reviewers who said they would work with the company again.
    pub would_work_again: usize,
    /// Reviews reporting late or missing payment.
    pub payment_issues: usize,
    /// Reviews per overall star value.
    pub distribution: RatingDistribution,
}

impl ReviewSummary {
    /// Tallies a review listing.
    #[must_use]
    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        reviews
            .into_iter()
            .fold(Self::default(), |mut summary, review| {
                summary.total += 1;
                if review.would_work_again == Some(true) {
                    summary.would_work_again += 1;
                }
                if review.has_payment_issue() {
                    summary.payment_issues += 1;
                }
                summary.distribution.record(review.overall_rating);
                summary
            })
    }

    /// Share of reviewers who would work again, as a whole percentage.
    /// Returns `None` for an empty listing.
    #[must_use]
    pub fn would_work_again_percent(&self) -> Option<u32> {
        self.would_work_again
            .saturating_mul(100)
            .checked_div(self.total)
            .and_then(|percent| u32::try_from(percent).ok())
    }
}
