//! Company search for the landing page.

use std::str::FromStr;

use crate::model::{Company, EntityType};

use super::{ParseListingError, normalise_option};

/// Returns companies whose legal name, DBA name, MC number, or DOT number
/// contains `query`, ignoring case. Input order is preserved.
///
/// An empty query matches every company. Any other query, whitespace
/// included, is matched as-is. Absent fields never match.
#[must_use]
pub fn search_companies<'a>(companies: &'a [Company], query: &str) -> Vec<&'a Company> {
    let needle = query.to_lowercase();
    companies
        .iter()
        .filter(|company| matches_query(company, &needle))
        .collect()
}

fn matches_query(company: &Company, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        Some(company.legal_name.as_str()),
        company.dba_name.as_deref(),
        company.mc_number.as_deref(),
        company.dot_number.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Coarse rating bucket offered as a search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    /// Rated 4.0 or higher.
    High,
    /// Rated from 2.5 up to, but excluding, 4.0.
    Medium,
    /// Rated below 2.5.
    Low,
}

impl RatingBand {
    /// Returns true when `rating` falls inside the band.
    #[must_use]
    pub fn contains(self, rating: f64) -> bool {
        match self {
            Self::High => rating >= 4.0,
            Self::Medium => (2.5..4.0).contains(&rating),
            Self::Low => rating < 2.5,
        }
    }
}

impl FromStr for RatingBand {
    type Err = ParseListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_option(s).as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseListingError::new("rating band", s, "high, medium, low")),
        }
    }
}

/// Search page filters. Unset fields do not constrain the result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompanyFilter {
    /// Free-text query passed to [`search_companies`].
    pub query: String,
    /// Restricts results to one entity type.
    pub entity_type: Option<EntityType>,
    /// Restricts results to one rating band.
    pub rating_band: Option<RatingBand>,
}

/// Applies a [`CompanyFilter`] and orders the matches by `overall_rating`,
/// highest first. Equal ratings keep their input order.
#[must_use]
pub fn filter_companies<'a>(companies: &'a [Company], filter: &CompanyFilter) -> Vec<&'a Company> {
    let mut matches: Vec<&Company> = search_companies(companies, &filter.query)
        .into_iter()
        .filter(|company| {
            filter
                .entity_type
                .is_none_or(|entity_type| company.entity_type == entity_type)
        })
        .filter(|company| {
            filter
                .rating_band
                .is_none_or(|band| band.contains(company.overall_rating))
        })
        .collect();
    matches.sort_by(|a, b| b.overall_rating.total_cmp(&a.overall_rating));
    matches
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::listing::test_support::{company_ids, make_company};

    #[fixture]
    fn directory() -> Vec<Company> {
        vec![
            Company {
                legal_name: "C.H. Robinson Worldwide".to_owned(),
                mc_number: Some("12345".to_owned()),
                dot_number: Some("123456".to_owned()),
                ..make_company("robinson", 3.2, 12)
            },
            Company {
                legal_name: "Hub Group Trucking".to_owned(),
                dba_name: Some("Robbie Freight".to_owned()),
                mc_number: Some("99887".to_owned()),
                entity_type: EntityType::Shipper,
                ..make_company("hub", 4.6, 3)
            },
            Company {
                legal_name: "Acme Logistics".to_owned(),
                dot_number: Some("555123".to_owned()),
                entity_type: EntityType::FreightForwarder,
                ..make_company("acme", 1.9, 7)
            },
        ]
    }

    #[rstest]
    #[case::legal_name_case_insensitive("ROBINSON", vec!["robinson"])]
    #[case::dba_name("robbie", vec!["hub"])]
    #[case::mc_number("9988", vec!["hub"])]
    #[case::dot_number("5551", vec!["acme"])]
    #[case::shared_digits("123", vec!["robinson", "acme"])]
    #[case::no_match("nonexistent", vec![])]
    fn search_matches_any_identifying_field(
        directory: Vec<Company>,
        #[case] query: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(company_ids(search_companies(&directory, query)), expected);
    }

    #[rstest]
    fn empty_query_returns_every_company_in_order(directory: Vec<Company>) {
        assert_eq!(
            company_ids(search_companies(&directory, "")),
            vec!["robinson", "hub", "acme"]
        );
    }

    #[rstest]
    #[case::single_space(" ", vec!["robinson", "hub", "acme"])]
    #[case::double_space("  ", vec![])]
    #[case::padded_name(" group ", vec!["hub"])]
    #[case::leading_space(" robinson", vec!["robinson"])]
    fn whitespace_is_part_of_the_query(
        directory: Vec<Company>,
        #[case] query: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(company_ids(search_companies(&directory, query)), expected);
    }

    #[rstest]
    #[case::high_floor(4.0, RatingBand::High, true)]
    #[case::medium_ceiling(3.99, RatingBand::Medium, true)]
    #[case::medium_floor(2.5, RatingBand::Medium, true)]
    #[case::low_ceiling(2.49, RatingBand::Low, true)]
    #[case::high_excludes_medium(3.9, RatingBand::High, false)]
    #[case::low_excludes_medium(2.5, RatingBand::Low, false)]
    fn rating_band_boundaries(#[case] rating: f64, #[case] band: RatingBand, #[case] inside: bool) {
        assert_eq!(band.contains(rating), inside);
    }

    #[rstest]
    fn filter_orders_matches_by_rating(directory: Vec<Company>) {
        let filter = CompanyFilter::default();

        assert_eq!(
            company_ids(filter_companies(&directory, &filter)),
            vec!["hub", "robinson", "acme"]
        );
    }

    #[rstest]
    fn filter_combines_entity_type_and_band(directory: Vec<Company>) {
        let filter = CompanyFilter {
            query: String::new(),
            entity_type: Some(EntityType::Broker),
            rating_band: Some(RatingBand::Medium),
        };

        assert_eq!(
            company_ids(filter_companies(&directory, &filter)),
            vec!["robinson"]
        );
    }

    #[rstest]
    fn filter_does_not_apply_the_ranking_gate() {
        let companies = vec![make_company("fresh", 0.0, 0)];

        let found = filter_companies(&companies, &CompanyFilter::default());

        assert_eq!(company_ids(found), vec!["fresh"]);
    }
}
