//! Company profile page rendered through a Jinja2-compatible template.
//!
//! A built-in template is used unless the caller supplies one. Custom
//! templates see these variables:
//!
//! - `company`: `name`, `dba_name`, `entity_type`, `mc_number`,
//!   `dot_number`, `phone`, `location`, `rating`, `stars`, `review_count`,
//!   and `rating_lines` (only the rated dimensions)
//! - `stats`: `total_reviews`, `would_work_again_percent`, `common_issues`,
//!   and `distribution` (five-star first); absent when the backend sent none
//! - `reviews`: list with `title`, `rating`, `stars`, `author`, `date`,
//!   `content`, `rating_lines`, `payment`, `work_again`, `issues`,
//!   `helpful_count`, and an optional `response`
//! - `empty_message`: text for a company with no reviews
//! - `generated_at`: render timestamp (ISO 8601)

use std::io::Write;

use chrono::Utc;
use minijinja::{Environment, context};
use serde::Serialize;

use crate::api::{BoardError, CompanyProfile};
use crate::model::{Company, CompanyStats, Review};

use super::rating::{
    company_rating_lines, format_rating, payment_badge, review_rating_lines, star_bar,
    work_again_label,
};

/// Empty-state text for a company without reviews.
pub const NO_REVIEWS_MESSAGE: &str = "No reviews yet. Be the first to review!";

const BUILTIN_TEMPLATE: &str = "\
{{ company.name }}{% if company.dba_name %} (DBA: {{ company.dba_name }}){% endif %}
{{ company.entity_type }}{% if company.mc_number %} · MC# {{ company.mc_number }}{% endif %}\
{% if company.dot_number %} · DOT# {{ company.dot_number }}{% endif %}\
{% if company.location %} · {{ company.location }}{% endif %}
{% if company.phone %}Phone: {{ company.phone }}
{% endif %}\
{{ company.stars }} {{ company.rating }} ({{ company.review_count }} reviews)
{% for line in company.rating_lines %}  {{ line }}
{% endfor %}\
{% if stats %}Would work again: {{ stats.would_work_again_percent }}%
{% for bucket in stats.distribution %}  {{ bucket.stars }}★ {{ bucket.count }}
{% endfor %}\
{% if stats.common_issues %}Common issues: {{ stats.common_issues | join(\", \") }}
{% endif %}{% endif %}
Reviews
{% for review in reviews %}
{{ review.stars }} {{ review.rating }}/5  {{ review.title }}
  by {{ review.author }} on {{ review.date }}
  {{ review.content }}
{% for line in review.rating_lines %}    {{ line }}
{% endfor %}\
{% if review.payment %}  Payment: {{ review.payment }}
{% endif %}\
{% if review.work_again %}  {{ review.work_again }}
{% endif %}\
{% if review.issues %}  Issues: {{ review.issues | join(\", \") }}
{% endif %}\
{% if review.response %}  Response from {{ review.response.responder }}:
    {{ review.response.content }}
{% endif %}\
  Helpful ({{ review.helpful_count }})
{% else %}
{{ empty_message }}
{% endfor %}";

#[derive(Debug, Serialize)]
struct TemplateCompany {
    name: String,
    dba_name: String,
    entity_type: &'static str,
    mc_number: String,
    dot_number: String,
    phone: String,
    location: String,
    rating: String,
    stars: String,
    review_count: u32,
    rating_lines: Vec<String>,
}

impl From<&Company> for TemplateCompany {
    fn from(company: &Company) -> Self {
        Self {
            name: company.legal_name.clone(),
            dba_name: company.dba_name.clone().unwrap_or_default(),
            entity_type: company.entity_type.as_str(),
            mc_number: company.mc_number.clone().unwrap_or_default(),
            dot_number: company.dot_number.clone().unwrap_or_default(),
            phone: company.phone.clone().unwrap_or_default(),
            location: company.location().unwrap_or_default(),
            rating: format_rating(company.overall_rating),
            stars: star_bar(company.overall_rating),
            review_count: company.review_count,
            rating_lines: company_rating_lines(&company.ratings),
        }
    }
}

#[derive(Debug, Serialize)]
struct StarBucket {
    stars: u8,
    count: u32,
}

#[derive(Debug, Serialize)]
struct TemplateStats {
    total_reviews: u32,
    would_work_again_percent: String,
    common_issues: Vec<String>,
    distribution: Vec<StarBucket>,
}

impl From<&CompanyStats> for TemplateStats {
    fn from(stats: &CompanyStats) -> Self {
        Self {
            total_reviews: stats.total_reviews,
            would_work_again_percent: format!("{:.0}", stats.would_work_again_percent),
            common_issues: stats.common_issues.clone(),
            distribution: (1..=5_u8)
                .rev()
                .map(|stars| StarBucket {
                    stars,
                    count: stats.rating_distribution.count_for(stars),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TemplateResponse {
    responder: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct TemplateReview {
    title: String,
    rating: u8,
    stars: String,
    author: String,
    date: String,
    content: String,
    rating_lines: Vec<String>,
    payment: String,
    work_again: String,
    issues: Vec<String>,
    helpful_count: u32,
    response: Option<TemplateResponse>,
}

impl From<&Review> for TemplateReview {
    fn from(review: &Review) -> Self {
        let payment = match (review.payment_speed, review.days_to_payment) {
            (Some(speed), Some(days)) => format!("{} ({days} days)", payment_badge(speed)),
            (Some(speed), None) => payment_badge(speed).to_owned(),
            (None, Some(days)) => format!("{days} days"),
            (None, None) => String::new(),
        };
        Self {
            title: review.title.clone(),
            rating: review.overall_rating,
            stars: star_bar(f64::from(review.overall_rating)),
            author: review.trucker_name.clone(),
            date: review.created_at.date_label(),
            content: review.content.clone(),
            rating_lines: review_rating_lines(&review.ratings),
            payment,
            work_again: review
                .would_work_again
                .map(work_again_label)
                .unwrap_or_default()
                .to_owned(),
            issues: review.issues_reported.clone(),
            helpful_count: review.helpful_count,
            response: review.company_response.as_ref().map(|response| TemplateResponse {
                responder: response.responder_title.as_deref().map_or_else(
                    || response.responder_name.clone(),
                    |title| format!("{}, {title}", response.responder_name),
                ),
                content: response.content.clone(),
            }),
        }
    }
}

/// Writes a company profile page.
///
/// `template_content` replaces the built-in layout when supplied.
///
/// # Errors
///
/// Returns [`BoardError::Configuration`] if the template has syntax errors or
/// fails to render. Returns [`BoardError::Io`] if writing fails.
pub fn write_company_profile<W: Write>(
    writer: &mut W,
    profile: &CompanyProfile,
    template_content: Option<&str>,
) -> Result<(), BoardError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);
    env.add_template("profile", template_content.unwrap_or(BUILTIN_TEMPLATE))
        .map_err(|e| BoardError::Configuration {
            message: format!("invalid template syntax: {e}"),
        })?;

    let reviews: Vec<TemplateReview> = profile.reviews.iter().map(TemplateReview::from).collect();
    let ctx = context! {
        company => TemplateCompany::from(&profile.detail.company),
        stats => profile.detail.stats.as_ref().map(TemplateStats::from),
        reviews => reviews,
        empty_message => NO_REVIEWS_MESSAGE,
        generated_at => Utc::now().to_rfc3339(),
    };

    let tmpl = env.get_template("profile").map_err(|e| BoardError::Io {
        message: format!("failed to retrieve template: {e}"),
    })?;
    let output = tmpl.render(ctx).map_err(|e| BoardError::Configuration {
        message: format!("template rendering failed: {e}"),
    })?;

    writer
        .write_all(output.as_bytes())
        .map_err(|e| BoardError::Io {
            message: format!("failed to write profile: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::api::CompanyDetail;
    use crate::listing::test_support::{make_company, make_review, with_payment};
    use crate::model::{PaymentSpeed, RatingDistribution, SubRatings};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn render(profile: &CompanyProfile, template: Option<&str>) -> Result<String, BoardError> {
        let mut buffer = Vec::new();
        write_company_profile(&mut buffer, profile, template)?;
        String::from_utf8(buffer).map_err(|e| BoardError::Io {
            message: format!("invalid UTF-8 output: {e}"),
        })
    }

    #[fixture]
    fn profile() -> CompanyProfile {
        let company = Company {
            mc_number: Some("12345".to_owned()),
            ratings: SubRatings {
                payment_rating: Some(2.0),
                ..SubRatings::default()
            },
            ..make_company("company-1", 2.0, 2)
        };
        let review = Review {
            days_to_payment: Some(60),
            issues_reported: vec!["rate_changed".to_owned()],
            ..with_payment(make_review("r1", "company-1", 2), PaymentSpeed::Late)
        };
        CompanyProfile {
            detail: CompanyDetail {
                company,
                stats: Some(CompanyStats {
                    total_reviews: 1,
                    average_rating: 2.0,
                    rating_distribution: RatingDistribution {
                        two_star: 1,
                        ..RatingDistribution::default()
                    },
                    would_work_again_percent: 0.0,
                    common_issues: vec!["rate_changed".to_owned()],
                }),
            },
            reviews: vec![review],
        }
    }

    #[rstest]
    fn builtin_template_lists_company_and_reviews(profile: CompanyProfile) -> TestResult {
        let output = render(&profile, None)?;

        assert!(output.starts_with("Company company-1\nBROKER · MC# 12345\n"));
        assert!(output.contains("★★☆☆☆ 2.0 (2 reviews)"));
        assert!(output.contains("  Payment: 2.0/5\n"));
        assert!(output.contains("  2★ 1\n"));
        assert!(output.contains("Payment: LATE (60 days)"));
        assert!(output.contains("Issues: rate_changed"));
        assert!(!output.contains(NO_REVIEWS_MESSAGE));
        Ok(())
    }

    #[rstest]
    fn builtin_template_never_shows_absent_ratings_as_zero(profile: CompanyProfile) -> TestResult {
        let output = render(&profile, None)?;

        assert!(!output.contains("Communication"));
        assert!(!output.contains("0.0/5"));
        Ok(())
    }

    #[rstest]
    fn empty_review_list_shows_invitation(mut profile: CompanyProfile) -> TestResult {
        profile.reviews.clear();
        profile.detail.stats = None;

        let output = render(&profile, None)?;

        assert!(output.contains(NO_REVIEWS_MESSAGE));
        assert!(!output.contains("Would work again"));
        Ok(())
    }

    #[rstest]
    fn custom_template_receives_context(profile: CompanyProfile) -> TestResult {
        let template = "{{ company.name }}|{{ reviews | length }}|{{ reviews[0].payment }}";

        let output = render(&profile, Some(template))?;

        assert_eq!(output, "Company company-1|1|LATE (60 days)");
        Ok(())
    }

    #[rstest]
    fn invalid_template_is_configuration_error(profile: CompanyProfile) {
        let result = render(&profile, Some("{% for x in %}"));

        assert!(matches!(result, Err(BoardError::Configuration { .. })));
    }
}
