//! Domain model for the study catalog.
//!
//! # Responsibility
//! - Define the canonical `Language` and `Topic` records.
//! - Provide field-level validation used by every write path.
//!
//! # Invariants
//! - Record ids are stable and never reused.
//! - Titles are non-blank; repositories must call `validate()` before
//!   persisting.

pub mod language;
pub mod topic;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for language/topic records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Language title is empty or whitespace-only.
    BlankLanguageTitle,
    /// Topic title is empty or whitespace-only.
    BlankTopicTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankLanguageTitle => write!(f, "language title must not be blank"),
            Self::BlankTopicTitle => write!(f, "topic title must not be blank"),
        }
    }
}

impl Error for ValidationError {}
