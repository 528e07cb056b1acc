//! Terminal rendering for the board's pages.
//!
//! Every writer targets any [`std::io::Write`] so output can be captured in
//! tests. Absent sub-ratings are omitted, never printed as zero.

mod cards;
mod profile;
mod rating;
mod text_truncate;

pub use cards::{
    write_board_summary, write_company_card, write_company_response, write_ranking_board,
    write_ranking_list, write_review_card, write_review_listing, write_search_results,
    write_verification,
};
pub use profile::{NO_REVIEWS_MESSAGE, write_company_profile};
pub use rating::{
    company_rating_lines, format_rating, payment_badge, review_rating_lines, star_bar,
    work_again_label,
};

use crate::api::BoardError;

fn io_error(error: &std::io::Error) -> BoardError {
    BoardError::Io {
        message: format!("failed to write output: {error}"),
    }
}
