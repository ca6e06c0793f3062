//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for every name field
const MAX_NAME_LENGTH: usize = 200;

macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new validated name.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::Validation` if the name is empty after
            /// trimming or exceeds 200 characters.
            pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
                let name = name.into();
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::validation(concat!(
                        $label,
                        " name cannot be empty"
                    )));
                }
                if trimmed.chars().count() > MAX_NAME_LENGTH {
                    return Err(DomainError::validation(format!(
                        "{} name cannot exceed {} characters",
                        $label, MAX_NAME_LENGTH
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> String {
                name.0
            }
        }
    };
}

define_name!(
    /// A validated character name (non-empty, <=200 chars, trimmed)
    CharacterName,
    "Character"
);
define_name!(
    /// A validated pet name (non-empty, <=200 chars, trimmed)
    PetName,
    "Pet"
);
define_name!(
    /// A validated item name (non-empty, <=200 chars, trimmed)
    ItemName,
    "Item"
);
define_name!(
    /// A validated weapon name (non-empty, <=200 chars, trimmed)
    WeaponName,
    "Weapon"
);
