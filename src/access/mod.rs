//! Viewer identity and capability checks.
//!
//! Who may submit a review or respond to one is decided here, against an
//! [`AccessContext`] supplied from configuration. Views never toggle the
//! viewer themselves.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::api::BoardError;
use crate::model::CompanyId;

/// The person using the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Viewer {
    /// Not signed in.
    #[default]
    Anonymous,
    /// A trucker, who may review companies.
    Trucker,
    /// A broker or shipper representative, who may respond to reviews.
    CompanyRepresentative {
        /// The represented company. `None` means any company.
        company_id: Option<CompanyId>,
    },
}

impl Viewer {
    /// Returns the short role name used in configuration.
    #[must_use]
    pub const fn role(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Trucker => "trucker",
            Self::CompanyRepresentative { .. } => "company",
        }
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role())
    }
}

impl FromStr for Viewer {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "anonymous" | "guest" => Ok(Self::Anonymous),
            "trucker" => Ok(Self::Trucker),
            "company" | "broker" | "shipper" => {
                Ok(Self::CompanyRepresentative { company_id: None })
            }
            _ => Err(BoardError::Configuration {
                message: format!("unknown viewer '{s}' (expected anonymous, trucker, or company)"),
            }),
        }
    }
}

/// An action gated by the viewer's role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability<'a> {
    /// Submit a review of any company.
    SubmitReview,
    /// Respond to a review of the given company.
    RespondToReview {
        /// Company the review is about.
        company_id: &'a CompanyId,
    },
}

/// A refused capability check, carrying the explanation shown to the viewer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessDenied {
    /// Anonymous viewers are asked to sign up first.
    #[error("Sign up as a trucker to leave reviews.")]
    SignUpToReview,
    /// Company representatives cannot rate companies.
    #[error("Brokers and shippers cannot leave ratings. Only truckers can review companies.")]
    CompaniesCannotRate,
    /// Only company representatives may respond.
    #[error("Only company representatives can respond to reviews.")]
    NotARepresentative,
    /// A scoped representative tried to respond for another company.
    #[error("You can only respond to reviews of {own}.")]
    OtherCompany {
        /// The company the viewer represents.
        own: CompanyId,
    },
}

impl From<AccessDenied> for BoardError {
    fn from(denied: AccessDenied) -> Self {
        Self::AccessDenied {
            message: denied.to_string(),
        }
    }
}

/// The viewer on whose behalf an operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessContext {
    viewer: Viewer,
}

impl AccessContext {
    /// Wraps a viewer identity.
    #[must_use]
    pub const fn new(viewer: Viewer) -> Self {
        Self { viewer }
    }

    /// Returns the viewer.
    #[must_use]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Checks whether the viewer holds `capability`.
    ///
    /// # Errors
    ///
    /// Returns the matching [`AccessDenied`] reason when it does not.
    pub fn check(&self, capability: &Capability<'_>) -> Result<(), AccessDenied> {
        match (capability, &self.viewer) {
            (Capability::SubmitReview, Viewer::Trucker) => Ok(()),
            (Capability::SubmitReview, Viewer::Anonymous) => Err(AccessDenied::SignUpToReview),
            (Capability::SubmitReview, Viewer::CompanyRepresentative { .. }) => {
                Err(AccessDenied::CompaniesCannotRate)
            }
            (
                Capability::RespondToReview { company_id },
                Viewer::CompanyRepresentative { company_id: own },
            ) => match own {
                Some(own_id) if own_id != *company_id => Err(AccessDenied::OtherCompany {
                    own: own_id.clone(),
                }),
                _ => Ok(()),
            },
            (Capability::RespondToReview { .. }, Viewer::Anonymous | Viewer::Trucker) => {
                Err(AccessDenied::NotARepresentative)
            }
        }
    }

    /// Returns true when [`Self::check`] would succeed.
    #[must_use]
    pub fn allows(&self, capability: &Capability<'_>) -> bool {
        self.check(capability).is_ok()
    }
}
