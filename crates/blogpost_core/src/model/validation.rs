//! Input validation shared by create/update shapes.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const FULLNAME_MIN_CHARS: usize = 2;
pub const FULLNAME_MAX_CHARS: usize = 255;

/// Malformed or missing caller input, detected before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `fullname` length (in characters) is outside `2..=255`.
    FullnameLength { chars: usize },
    EmptyTitle,
    EmptyBody,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullnameLength { chars } => write!(
                f,
                "fullname must be {FULLNAME_MIN_CHARS}..={FULLNAME_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyTitle => write!(f, "content.title must not be empty"),
            Self::EmptyBody => write!(f, "content.body must not be empty"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_fullname(fullname: &str) -> Result<(), ValidationError> {
    let chars = fullname.chars().count();
    if !(FULLNAME_MIN_CHARS..=FULLNAME_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::FullnameLength { chars });
    }
    Ok(())
}
