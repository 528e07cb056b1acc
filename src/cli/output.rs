//! Output formatting utilities for CLI operations.

use std::io::Write;

use carrier_board::api::BoardError;
use carrier_board::model::{Company, ReviewId};
use carrier_board::render::{write_company_card, write_company_response};
use carrier_board::submission::{SubmittedResponse, SubmittedReview};

/// Writes the user-facing message for a failed page fetch.
pub fn write_fetch_failure<W: Write>(writer: &mut W, error: &BoardError) -> Result<(), BoardError> {
    writeln!(writer, "{}", error.user_message()).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Writes the confirmation shown after a review is accepted.
pub fn write_submitted_review<W: Write>(
    writer: &mut W,
    submitted: &SubmittedReview,
) -> Result<(), BoardError> {
    writeln!(
        writer,
        "Review submitted: {} ({}/5)",
        submitted.review.title, submitted.review.overall_rating
    )
    .map_err(|e| io_error(&e))?;
    write_refreshed_company(writer, submitted.company.as_ref().map(|detail| &detail.company))
}

/// Writes the confirmation shown after a response is accepted.
pub fn write_submitted_response<W: Write>(
    writer: &mut W,
    submitted: &SubmittedResponse,
) -> Result<(), BoardError> {
    writeln!(writer, "Response submitted").map_err(|e| io_error(&e))?;
    write_company_response(writer, &submitted.response)?;
    write_refreshed_company(writer, submitted.company.as_ref().map(|detail| &detail.company))
}

fn write_refreshed_company<W: Write>(
    writer: &mut W,
    company: Option<&Company>,
) -> Result<(), BoardError> {
    match company {
        Some(refreshed) => {
            writeln!(writer).map_err(|e| io_error(&e))?;
            write_company_card(writer, refreshed)
        }
        None => writeln!(writer, "Updated ratings will appear shortly.").map_err(|e| io_error(&e)),
    }
}

/// Writes the helpful-vote confirmation.
pub fn write_helpful_vote<W: Write>(
    writer: &mut W,
    review_id: &ReviewId,
    helpful_count: u32,
) -> Result<(), BoardError> {
    writeln!(
        writer,
        "Marked review {review_id} helpful ({helpful_count} found this helpful)"
    )
    .map_err(|e| io_error(&e))
}

pub(crate) fn io_error(error: &std::io::Error) -> BoardError {
    BoardError::Io {
        message: error.to_string(),
    }
}
