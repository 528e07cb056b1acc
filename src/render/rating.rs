//! Rating and badge formatting shared by every page.

use crate::model::{PaymentSpeed, RatingDimension, SubRatings};

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Formats a rating to exactly one decimal place (`4.0`, `2.5`).
#[must_use]
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Renders five star cells, filling star `n` when `rating >= n`.
///
/// ```
/// use carrier_board::render::star_bar;
///
/// assert_eq!(star_bar(3.5), "★★★☆☆");
/// ```
#[must_use]
pub fn star_bar(rating: f64) -> String {
    (1..=5_u8)
        .map(|star| {
            if rating >= f64::from(star) {
                FILLED_STAR
            } else {
                EMPTY_STAR
            }
        })
        .collect()
}

/// Detailed rating lines for a company's aggregate sub-ratings
/// (`Payment: 2.0/5`). Dimensions without a rating are left out.
#[must_use]
pub fn company_rating_lines(ratings: &SubRatings<f64>) -> Vec<String> {
    ratings
        .rated()
        .into_iter()
        .map(|(dimension, value)| detail_line(dimension, &format_rating(value)))
        .collect()
}

/// Detailed rating lines for one review's sub-ratings (`Payment: 3/5`).
/// Dimensions without a rating are left out.
#[must_use]
pub fn review_rating_lines(ratings: &SubRatings<u8>) -> Vec<String> {
    ratings
        .rated()
        .into_iter()
        .map(|(dimension, value)| detail_line(dimension, &value.to_string()))
        .collect()
}

fn detail_line(dimension: RatingDimension, value: &str) -> String {
    format!("{}: {value}/5", dimension.label())
}

/// Badge text for a payment experience.
#[must_use]
pub const fn payment_badge(speed: PaymentSpeed) -> &'static str {
    match speed {
        PaymentSpeed::OnTime => "ON TIME",
        PaymentSpeed::Late => "LATE",
        PaymentSpeed::NeverPaid => "NEVER PAID",
    }
}

/// Text for the would-work-again indicator.
#[must_use]
pub const fn work_again_label(would_work_again: bool) -> &'static str {
    if would_work_again {
        "✓ Would work again"
    } else {
        "✗ Would not work again"
    }
}
