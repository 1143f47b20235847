//! Topic domain record and request payload.
//!
//! # Responsibility
//! - Define the topic record scoped to exactly one language.
//! - Define the decoded request payload used by create/update operations.
//!
//! # Invariants
//! - `id` is stable and never reused for another topic.
//! - `language_id` references an existing language, except transiently while
//!   a language delete is cascading.
//! - `closed` starts as `false` unless the caller says otherwise.

use crate::model::language::LanguageId;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a topic record.
pub type TopicId = Uuid;

/// A unit of learning content belonging to one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Stable id, immutable once assigned.
    pub id: TopicId,
    /// Owning language. Never mutated by topic updates.
    pub language_id: LanguageId,
    /// Display title, unique within the owning language at creation time.
    pub title: String,
    /// Completion status: `false` = active, `true` = done.
    pub closed: bool,
}

impl Topic {
    /// Creates an active topic with a freshly generated stable id.
    pub fn new(language_id: LanguageId, title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), language_id, title)
    }

    /// Creates an active topic with a caller-provided id.
    pub fn with_id(id: TopicId, language_id: LanguageId, title: impl Into<String>) -> Self {
        Self {
            id,
            language_id,
            title: title.into(),
            closed: false,
        }
    }

    /// Checks record-level invariants before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTopicTitle);
        }
        Ok(())
    }
}

/// Decoded request payload for topic create/update operations.
///
/// The transport layer hands this in already parsed; `closed` defaults to
/// `false` when the payload omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDraft {
    pub title: String,
    #[serde(default)]
    pub closed: bool,
}

impl TopicDraft {
    /// Creates an active (not closed) draft.
    pub fn active(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            closed: false,
        }
    }
}
