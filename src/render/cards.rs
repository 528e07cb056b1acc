//! Plain-text cards and listings written to any `io::Write`.

use std::collections::BTreeMap;
use std::io::Write;

use crate::api::{BoardError, RegistryNumber, VerificationResult};
use crate::listing::{RankingBoard, RankingKind, ReviewSummary, ViewMode};
use crate::model::{Company, CompanyId, CompanyResponse, Review};

use super::io_error;
use super::rating::{
    company_rating_lines, format_rating, payment_badge, review_rating_lines, star_bar,
    work_again_label,
};
use super::text_truncate::{excerpt, truncate_to_display_width_with_ellipsis};

const NAME_COLUMN_WIDTH: usize = 40;

/// Writes a company summary: names, identifiers, location, and ratings.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if writing fails.
pub fn write_company_card<W: Write>(writer: &mut W, company: &Company) -> Result<(), BoardError> {
    writeln!(writer, "{}", company.legal_name).map_err(|e| io_error(&e))?;
    if let Some(dba) = company.dba_name.as_deref() {
        writeln!(writer, "  DBA: {dba}").map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "  {}", identity_line(company)).map_err(|e| io_error(&e))?;
    if let Some(phone) = company.phone.as_deref() {
        writeln!(writer, "  Phone: {phone}").map_err(|e| io_error(&e))?;
    }
    writeln!(
        writer,
        "  {} {} ({} reviews)",
        star_bar(company.overall_rating),
        format_rating(company.overall_rating),
        company.review_count
    )
    .map_err(|e| io_error(&e))?;
    for line in company_rating_lines(&company.ratings) {
        writeln!(writer, "    {line}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn identity_line(company: &Company) -> String {
    let mut parts = vec![company.entity_type.to_string()];
    if let Some(mc) = company.mc_number.as_deref() {
        parts.push(format!("MC# {mc}"));
    }
    if let Some(dot) = company.dot_number.as_deref() {
        parts.push(format!("DOT# {dot}"));
    }
    if let Some(location) = company.location() {
        parts.push(location);
    }
    parts.join(" · ")
}

/// Writes the search page: matching companies, or the empty state.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if writing fails.
pub fn write_search_results<W: Write>(
    writer: &mut W,
    query: &str,
    companies: &[&Company],
) -> Result<(), BoardError> {
    let heading = if query.is_empty() {
        "All companies".to_owned()
    } else {
        format!("Results for \"{query}\"")
    };
    writeln!(writer, "{heading} ({} found)", companies.len()).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    if companies.is_empty() {
        writeln!(writer, "No companies found").map_err(|e| io_error(&e))?;
        return Ok(());
    }
    for company in companies {
        write_company_card(writer, company)?;
        writeln!(writer).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes one numbered ranking list.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if writing fails.
pub fn write_ranking_list<W: Write>(
    writer: &mut W,
    kind: RankingKind,
    companies: &[&Company],
) -> Result<(), BoardError> {
    writeln!(writer, "{}", kind.heading()).map_err(|e| io_error(&e))?;
    if companies.is_empty() {
        writeln!(writer, "  No companies have enough reviews yet").map_err(|e| io_error(&e))?;
        return Ok(());
    }
    for (position, company) in companies.iter().enumerate() {
        let name = truncate_to_display_width_with_ellipsis(&company.legal_name, NAME_COLUMN_WIDTH);
        writeln!(
            writer,
            "  {rank:>2}. {name:<width$} {rating} {stars} ({count} reviews)",
            rank = position + 1,
            width = NAME_COLUMN_WIDTH,
            rating = format_rating(company.overall_rating),
            stars = star_bar(company.overall_rating),
            count = company.review_count,
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the selected lists of a ranking board, separated by blank lines.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if writing fails.
pub fn write_ranking_board<W: Write>(
    writer: &mut W,
    board: &RankingBoard<'_>,
    kinds: &[RankingKind],
) -> Result<(), BoardError> {
    for (index, kind) in kinds.iter().enumerate() {
        if index > 0 {
            writeln!(writer).map_err(|e| io_error(&e))?;
        }
        write_ranking_list(writer, *kind, board.list(*kind))?;
    }
    Ok(())
}

/// Writes one review. `company_name` is shown on pages that mix companies;
/// `excerpt_width` of 0 prints the full content.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if writing fails.
pub fn write_review_card<W: Write>(
    writer: &mut W,
    review: &Review,
    company_name: Option<&str>,
    excerpt_width: usize,
) -> Result<(), BoardError> {
    writeln!(
        writer,
        "{} {}/5  {}",
        star_bar(f64::from(review.overall_rating)),
        review.overall_rating,
        review.title
    )
    .map_err(|e| io_error(&e))?;
    let byline = company_name.map_or_else(
        || format!("  by {} on {}", review.trucker_name, review.created_at.date_label()),
        |name| {
            format!(
                "  by {} on {} about {name}",
                review.trucker_name,
                review.created_at.date_label()
            )
        },
    );
    writeln!(writer, "{byline}").map_err(|e| io_error(&e))?;
    writeln!(writer, "  {}", excerpt(&review.content, excerpt_width)).map_err(|e| io_error(&e))?;
    for line in review_rating_lines(&review.ratings) {
        writeln!(writer, "    {line}").map_err(|e| io_error(&e))?;
    }
    if let Some(line) = payment_line(review) {
        writeln!(writer, "  {line}").map_err(|e| io_error(&e))?;
    }
    if let Some(again) = review.would_work_again {
        writeln!(writer, "  {}", work_again_label(again)).map_err(|e| io_error(&e))?;
    }
    if !review.issues_reported.is_empty() {
        writeln!(writer, "  Issues: {}", review.issues_reported.join(", "))
            .map_err(|e| io_error(&e))?;
    }
    if let Some(response) = review.company_response.as_ref() {
        write_company_response(writer, response)?;
    }
    writeln!(writer, "  Helpful ({})", review.helpful_count).map_err(|e| io_error(&e))?;
    Ok(())
}

fn payment_line(review: &Review) -> Option<String> {
    match (review.payment_speed, review.days_to_payment) {
        (Some(speed), Some(days)) => Some(format!("Payment: {} ({days} days)", payment_badge(speed))),
        (Some(speed), None) => Some(format!("Payment: {}", payment_badge(speed))),
        (None, Some(days)) => Some(format!("Payment: {days} days")),
        (None, None) => None,
    }
}

/// Writes a company response block, indented under its review.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if writing fails.
pub fn write_company_response<W: Write>(
    writer: &mut W,
    response: &CompanyResponse,
) -> Result<(), BoardError> {
    let responder = response.responder_title.as_deref().map_or_else(
        || response.responder_name.clone(),
        |title| format!("{}, {title}", response.responder_name),
    );
    writeln!(writer, "  Response from {responder}:").map_err(|e| io_error(&e))?;
    writeln!(writer, "    {}", excerpt(&response.content, 0)).map_err(|e| io_error(&e))
}

/// Writes the headline counts of the review browsing page.
///
/// `summary` covers every fetched review, not just the filtered listing, so
/// the counts stay put while the viewer switches views.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if writing fails.
pub fn write_board_summary<W: Write>(
    writer: &mut W,
    summary: &ReviewSummary,
    companies_rated: usize,
) -> Result<(), BoardError> {
    let work_again = summary
        .would_work_again_percent()
        .map_or_else(|| "n/a".to_owned(), |percent| format!("{percent}%"));
    writeln!(
        writer,
        "{} reviews · {companies_rated} companies rated · {} payment issues · would work again: {work_again}",
        summary.total, summary.payment_issues
    )
    .map_err(|e| io_error(&e))?;
    let distribution: Vec<String> = (1..=5_u8)
        .rev()
        .map(|stars| format!("{stars}★ {}", summary.distribution.count_for(stars)))
        .collect();
    writeln!(writer, "{}", distribution.join("  ")).map_err(|e| io_error(&e))
}

/// Writes a filtered review listing: the view label, its size, then each
/// review.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if writing fails.
pub fn write_review_listing<W: Write>(
    writer: &mut W,
    reviews: &[&Review],
    view_mode: ViewMode,
    company_names: &BTreeMap<&CompanyId, &str>,
    excerpt_width: usize,
) -> Result<(), BoardError> {
    writeln!(writer, "{}", view_mode.label()).map_err(|e| io_error(&e))?;
    let noun = if reviews.len() == 1 { "review" } else { "reviews" };
    writeln!(writer, "{} {noun}", reviews.len()).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    if reviews.is_empty() {
        writeln!(writer, "No reviews match your filters").map_err(|e| io_error(&e))?;
        return Ok(());
    }
    for review in reviews {
        let name = company_names.get(&review.company_id).copied();
        write_review_card(writer, review, name, excerpt_width)?;
        writeln!(writer).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the outcome of a DOT or MC lookup.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if writing fails.
pub fn write_verification<W: Write>(
    writer: &mut W,
    number: &RegistryNumber,
    result: &VerificationResult,
) -> Result<(), BoardError> {
    let verdict = if result.verified {
        "verified"
    } else {
        "not verified"
    };
    writeln!(writer, "{number}: {verdict}").map_err(|e| io_error(&e))?;
    if let Some(name) = result.company_name.as_deref() {
        writeln!(writer, "  Company: {name}").map_err(|e| io_error(&e))?;
    }
    if let Some(status) = result.status.as_deref() {
        writeln!(writer, "  Status: {status}").map_err(|e| io_error(&e))?;
    }
    if !result.message.is_empty() {
        writeln!(writer, "  {}", result.message).map_err(|e| io_error(&e))?;
    }
    Ok(())
}
