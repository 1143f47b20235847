//! Language domain record.
//!
//! # Invariants
//! - `id` is stable and never reused for another language.
//! - `title` is the user-facing lookup key; comparisons are exact and
//!   case-sensitive.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a language record.
pub type LanguageId = Uuid;

/// A named subject of study, owner of zero or more topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Stable id used by topics as their foreign key.
    pub id: LanguageId,
    /// Unique display title. Mutable via rename, id stays fixed.
    pub title: String,
}

impl Language {
    /// Creates a language with a freshly generated stable id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a language with a caller-provided id.
    ///
    /// Used by read paths reconstructing persisted rows.
    pub fn with_id(id: LanguageId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Checks record-level invariants before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankLanguageTitle);
        }
        Ok(())
    }
}
