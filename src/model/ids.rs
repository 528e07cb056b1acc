//! Identifier wrappers for backend records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::BoardError;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Validates that the identifier is non-blank and trims whitespace.
            ///
            /// # Errors
            ///
            /// Returns [`BoardError::InvalidIdentifier`] when the value is
            /// blank.
            pub fn new(value: impl AsRef<str>) -> Result<Self, BoardError> {
                let trimmed = value.as_ref().trim();
                if trimmed.is_empty() {
                    return Err(BoardError::InvalidIdentifier {
                        message: concat!($kind, " id must not be blank").to_owned(),
                    });
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Borrow the identifier value.
            #[must_use]
            pub const fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

record_id!(
    /// Company identifier wrapper to avoid stringly typed parameters.
    CompanyId,
    "company"
);

record_id!(
    /// Review identifier wrapper to prevent mix-ups with company ids.
    ReviewId,
    "review"
);
