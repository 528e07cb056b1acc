//! Application configuration loaded from CLI, environment, and files.
//!
//! Values merge with ortho-config's layered approach, lowest to highest:
//!
//! 1. **Defaults** – built-in application defaults
//! 2. **Configuration file** – `.carrier-board.toml` in the current
//!    directory, home directory, or XDG config directory
//! 3. **Environment variables** – `CARRIER_BOARD_API_BASE_URL` and friends
//! 4. **Command-line arguments** – `--search`, `--rankings`, and so on
//!
//! # Configuration File
//!
//! ```toml
//! api_base_url = "http://localhost:8000"
//! fetch_limit = 50
//! viewer = "company"
//! viewer_company_id = "company-1"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::access::{AccessContext, Viewer};
use crate::api::{
    BackendUrl, BoardError, DEFAULT_BACKEND_URL, ListingQuery, MAX_FETCH_LIMIT, RegistryNumber,
};
use crate::listing::{
    CompanyFilter, RankingKind, RatingBand, ReviewCriteria, ReviewSortKey, ViewMode,
};
use crate::model::{CompanyId, EntityType, ReviewId};

/// Page selected by the configured options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Submit the review in the draft file.
    SubmitReview,
    /// Respond to a review with the response in the draft file.
    RespondToReview,
    /// Mark a review helpful.
    VoteHelpful,
    /// Look up a DOT number.
    VerifyDot,
    /// Look up an MC number.
    VerifyMc,
    /// Show the ranking board.
    Rankings,
    /// Browse reviews across companies.
    Reviews,
    /// Show one company's profile.
    CompanyProfile,
    /// Search the company directory. Used when nothing else is selected.
    Search,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use carrier_board::CarrierBoardConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CarrierBoardConfig::load().expect("failed to load configuration");
/// let base = config.backend_url().expect("invalid backend URL");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CARRIER_BOARD",
    discovery(
        dotfile_name = ".carrier-board.toml",
        config_file_name = "carrier-board.toml",
        app_name = "carrier-board"
    )
)]
pub struct CarrierBoardConfig {
    /// Backend base URL. Defaults to `http://localhost:8000`.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-a <URL>`
    /// - Environment: `CARRIER_BOARD_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: Option<String>,

    /// Maximum records fetched per listing request, 1 to 100.
    #[ortho_config()]
    pub fetch_limit: u8,

    /// Per-request timeout in seconds. Unset means no timeout.
    #[ortho_config()]
    pub request_timeout_seconds: Option<u64>,

    /// Search the company directory for this text.
    #[ortho_config(cli_short = 's')]
    pub search: Option<String>,

    /// Show the profile of this company.
    #[ortho_config(cli_short = 'c')]
    pub company_id: Option<String>,

    /// Shows the ranking board.
    ///
    /// Note: `CARRIER_BOARD_RANKINGS` is not read because `ortho_config`
    /// does not load boolean values from the environment.
    #[ortho_config(cli_short = 'R')]
    pub rankings: bool,

    /// Browses reviews across all companies.
    #[ortho_config()]
    pub reviews: bool,

    /// Verify a DOT number against the federal registry.
    #[ortho_config()]
    pub verify_dot: Option<String>,

    /// Verify an MC number against the federal registry.
    #[ortho_config()]
    pub verify_mc: Option<String>,

    /// Submits the review described by the `draft` file.
    #[ortho_config()]
    pub submit_review: bool,

    /// Respond to this review with the response described by the `draft`
    /// file.
    #[ortho_config()]
    pub respond_to: Option<String>,

    /// Mark this review as helpful.
    #[ortho_config()]
    pub vote_helpful: Option<String>,

    /// Restrict search results to `broker`, `shipper`, or
    /// `freight-forwarder`.
    #[ortho_config()]
    pub entity_type: Option<String>,

    /// Restrict search results to a `high`, `medium`, or `low` rating band.
    #[ortho_config()]
    pub rating_band: Option<String>,

    /// Minimum overall rating for listed reviews.
    #[ortho_config()]
    pub min_rating: Option<u8>,

    /// Review view: `all`, `positive`, `negative`, or `payment-issue`.
    #[ortho_config()]
    pub view_mode: Option<String>,

    /// Review order: `recent`, `rating-asc`, `rating-desc`, or `helpful`.
    #[ortho_config()]
    pub sort: Option<String>,

    /// Show only one ranking list: `worst`, `best`, or `most-reviewed`.
    #[ortho_config()]
    pub ranking: Option<String>,

    /// Viewer role: `anonymous`, `trucker`, or `company`.
    #[ortho_config()]
    pub viewer: Option<String>,

    /// Company represented by a `company` viewer.
    #[ortho_config()]
    pub viewer_company_id: Option<String>,

    /// JSON file holding a review or response draft.
    #[ortho_config(cli_short = 'd')]
    pub draft: Option<String>,

    /// Jinja2 template file replacing the built-in company profile layout.
    #[ortho_config()]
    pub template: Option<String>,

    /// Emits structured telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for CarrierBoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            fetch_limit: MAX_FETCH_LIMIT,
            request_timeout_seconds: None,
            search: None,
            company_id: None,
            rankings: false,
            reviews: false,
            verify_dot: None,
            verify_mc: None,
            submit_review: false,
            respond_to: None,
            vote_helpful: None,
            entity_type: None,
            rating_band: None,
            min_rating: None,
            view_mode: None,
            sort: None,
            ranking: None,
            viewer: None,
            viewer_company_id: None,
            draft: None,
            template: None,
            telemetry: false,
        }
    }
}

impl CarrierBoardConfig {
    /// Determines the page to show.
    ///
    /// Mutations win over lookups, lookups over browsing pages, and the
    /// company search is shown when nothing else is selected.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.submit_review {
            OperationMode::SubmitReview
        } else if self.respond_to.is_some() {
            OperationMode::RespondToReview
        } else if self.vote_helpful.is_some() {
            OperationMode::VoteHelpful
        } else if self.verify_dot.is_some() {
            OperationMode::VerifyDot
        } else if self.verify_mc.is_some() {
            OperationMode::VerifyMc
        } else if self.rankings {
            OperationMode::Rankings
        } else if self.reviews {
            OperationMode::Reviews
        } else if self.company_id.is_some() {
            OperationMode::CompanyProfile
        } else {
            OperationMode::Search
        }
    }

    /// Returns the validated backend base URL.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidBaseUrl`] when `api_base_url` is not an
    /// absolute HTTP(S) URL.
    pub fn backend_url(&self) -> Result<BackendUrl, BoardError> {
        BackendUrl::parse(self.api_base_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL))
    }

    /// Returns the per-request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs)
    }

    /// Returns the unscoped listing query for browsing pages.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidListing`] when `fetch_limit` is outside
    /// 1 to 100.
    pub fn listing_query(&self) -> Result<ListingQuery, BoardError> {
        ListingQuery::new(self.fetch_limit, None)
    }

    /// Builds the viewer's access context.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] for an unknown viewer role and
    /// [`BoardError::InvalidIdentifier`] for a blank `viewer_company_id`.
    pub fn access_context(&self) -> Result<AccessContext, BoardError> {
        let viewer = match self.viewer.as_deref() {
            Some(raw) => raw.parse::<Viewer>()?,
            None => Viewer::default(),
        };
        let resolved = match viewer {
            Viewer::CompanyRepresentative { .. } => Viewer::CompanyRepresentative {
                company_id: self
                    .viewer_company_id
                    .as_deref()
                    .map(CompanyId::new)
                    .transpose()?,
            },
            other => other,
        };
        Ok(AccessContext::new(resolved))
    }

    /// Returns the company whose profile was requested.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] when no company is selected, or
    /// [`BoardError::InvalidIdentifier`] when the value is blank.
    pub fn require_company_id(&self) -> Result<CompanyId, BoardError> {
        let raw = self
            .company_id
            .as_deref()
            .ok_or_else(|| BoardError::Configuration {
                message: "company ID is required (use --company-id or -c)".to_owned(),
            })?;
        CompanyId::new(raw)
    }

    /// Returns the review to respond to.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] when `respond_to` is unset.
    pub fn require_respond_to(&self) -> Result<ReviewId, BoardError> {
        Self::require_review_id(self.respond_to.as_deref(), "--respond-to")
    }

    /// Returns the review to vote for.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] when `vote_helpful` is unset.
    pub fn require_vote_target(&self) -> Result<ReviewId, BoardError> {
        Self::require_review_id(self.vote_helpful.as_deref(), "--vote-helpful")
    }

    fn require_review_id(raw: Option<&str>, flag: &str) -> Result<ReviewId, BoardError> {
        raw.map_or_else(
            || {
                Err(BoardError::Configuration {
                    message: format!("review ID is required (use {flag})"),
                })
            },
            ReviewId::new,
        )
    }

    /// Returns the draft file path.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] when no draft is configured.
    pub fn require_draft_path(&self) -> Result<PathBuf, BoardError> {
        self.draft
            .as_deref()
            .map(PathBuf::from)
            .ok_or_else(|| BoardError::Configuration {
                message: "a draft file is required (use --draft or -d)".to_owned(),
            })
    }

    /// Returns the registry number to verify, DOT taking precedence over MC.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] when neither number is set and
    /// [`BoardError::InvalidIdentifier`] when the number is not numeric.
    pub fn registry_number(&self) -> Result<RegistryNumber, BoardError> {
        match (self.verify_dot.as_deref(), self.verify_mc.as_deref()) {
            (Some(dot), _) => RegistryNumber::dot(dot),
            (None, Some(mc)) => RegistryNumber::mc(mc),
            (None, None) => Err(BoardError::Configuration {
                message: "a DOT or MC number is required (use --verify-dot or --verify-mc)"
                    .to_owned(),
            }),
        }
    }

    /// Builds the company search filter from `search`, `entity_type`, and
    /// `rating_band`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] for unknown entity types or
    /// rating bands.
    pub fn company_filter(&self) -> Result<CompanyFilter, BoardError> {
        Ok(CompanyFilter {
            query: self.search.clone().unwrap_or_default(),
            entity_type: self
                .entity_type
                .as_deref()
                .map(str::parse::<EntityType>)
                .transpose()?,
            rating_band: self
                .rating_band
                .as_deref()
                .map(str::parse::<RatingBand>)
                .transpose()?,
        })
    }

    /// Builds review criteria for the browsing page, scoped to `company_id`
    /// when one is set.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] for an unknown view mode or a
    /// minimum rating above 5.
    pub fn review_criteria(&self) -> Result<ReviewCriteria, BoardError> {
        if let Some(min) = self.min_rating.filter(|min| *min > 5) {
            return Err(BoardError::Configuration {
                message: format!("minimum rating must be between 0 and 5 (got {min})"),
            });
        }
        Ok(ReviewCriteria {
            company_id: self.company_id.as_deref().map(CompanyId::new).transpose()?,
            min_rating: self.min_rating,
            view_mode: self
                .view_mode
                .as_deref()
                .map(str::parse::<ViewMode>)
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Returns the configured review order, most recent first by default.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] for an unknown sort key.
    pub fn review_sort(&self) -> Result<ReviewSortKey, BoardError> {
        Ok(self
            .sort
            .as_deref()
            .map(str::parse::<ReviewSortKey>)
            .transpose()?
            .unwrap_or_default())
    }

    /// Returns the ranking lists to show: the selected one, or all three.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] for an unknown ranking kind.
    pub fn ranking_kinds(&self) -> Result<Vec<RankingKind>, BoardError> {
        match self.ranking.as_deref() {
            Some(raw) => Ok(vec![raw.parse::<RankingKind>()?]),
            None => Ok(vec![
                RankingKind::Worst,
                RankingKind::Best,
                RankingKind::MostReviewed,
            ]),
        }
    }
}

#[cfg(test)]
mod tests;
