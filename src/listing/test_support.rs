//! Builders for company and review fixtures used across listing tests.

use crate::model::{
    Company, CompanyId, EntityType, PaymentSpeed, Review, ReviewId, SubRatings, Timestamp,
};

pub(crate) fn make_company(id: &str, rating: f64, review_count: u32) -> Company {
    Company {
        id: CompanyId::new(id).expect("company id should be valid"),
        legal_name: format!("Company {id}"),
        dba_name: None,
        entity_type: EntityType::Broker,
        mc_number: None,
        dot_number: None,
        phone: None,
        physical_city: None,
        physical_state: None,
        overall_rating: rating,
        review_count,
        ratings: SubRatings::default(),
    }
}

pub(crate) fn make_review(id: &str, company: &str, rating: u8) -> Review {
    Review {
        id: ReviewId::new(id).expect("review id should be valid"),
        trucker_name: "Test Trucker".to_owned(),
        company_id: CompanyId::new(company).expect("company id should be valid"),
        overall_rating: rating,
        title: format!("Review {id}"),
        content: "Hauled a load.".to_owned(),
        ratings: SubRatings::default(),
        payment_speed: None,
        days_to_payment: None,
        would_work_again: None,
        issues_reported: Vec::new(),
        helpful_count: 0,
        created_at: Timestamp::parse("2024-01-01T00:00:00Z").expect("timestamp should parse"),
        company_response: None,
    }
}

pub(crate) fn with_payment(review: Review, speed: PaymentSpeed) -> Review {
    Review {
        payment_speed: Some(speed),
        ..review
    }
}

pub(crate) fn created_on(review: Review, raw: &str) -> Review {
    Review {
        created_at: Timestamp::parse(raw).expect("timestamp should parse"),
        ..review
    }
}

pub(crate) fn company_ids<'a>(companies: impl IntoIterator<Item = &'a Company>) -> Vec<String> {
    companies
        .into_iter()
        .map(|company| company.id.as_str().to_owned())
        .collect()
}

pub(crate) fn review_ids<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Vec<String> {
    reviews
        .into_iter()
        .map(|review| review.id.as_str().to_owned())
        .collect()
}
