//! Language use-case service.
//!
//! # Responsibility
//! - Provide create/rename/lookup/list/delete entry points for languages.
//! - Enforce title uniqueness on creation and drive the topic cascade on
//!   deletion.
//!
//! # Invariants
//! - No two languages share a title; `add_language` rejects collisions.
//! - `delete_language` removes the language first, then its topics, as a
//!   compensating second step (not a two-table transaction). Hosts serving
//!   requests concurrently must serialize calls across both stores.

use crate::model::language::{Language, LanguageId};
use crate::repo::language_repo::LanguageRepository;
use crate::repo::topic_repo::TopicRepository;
use crate::repo::RepoError;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from language use-case operations.
#[derive(Debug)]
pub enum LanguageServiceError {
    /// A language with this exact title already exists.
    TitleTaken(String),
    /// No language matches the given title.
    TitleNotFound(String),
    /// No language matches the given id.
    LanguageNotFound(LanguageId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Write succeeded but the read-back found nothing.
    InconsistentState(&'static str),
}

impl Display for LanguageServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleTaken(title) => write!(f, "language title already in use: `{title}`"),
            Self::TitleNotFound(title) => write!(f, "language not found: `{title}`"),
            Self::LanguageNotFound(id) => write!(f, "language not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent language state: {details}")
            }
        }
    }
}

impl Error for LanguageServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for LanguageServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::LanguageNotFound(id) => Self::LanguageNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Language service facade over the two repositories.
///
/// Needs the topic repository only to cascade on delete.
pub struct LanguageService<L: LanguageRepository, T: TopicRepository> {
    languages: L,
    topics: T,
}

impl<L: LanguageRepository, T: TopicRepository> LanguageService<L, T> {
    /// Creates a service using the provided repository implementations.
    pub fn new(languages: L, topics: T) -> Self {
        Self { languages, topics }
    }

    /// Creates a language with a fresh id.
    ///
    /// # Contract
    /// - Rejects an exact-title collision with `TitleTaken`.
    pub fn add_language(&self, title: &str) -> Result<Language, LanguageServiceError> {
        if self.languages.find_language_by_title(title)?.is_some() {
            return Err(LanguageServiceError::TitleTaken(title.to_string()));
        }

        let language = Language::new(title);
        self.languages.create_language(&language)?;
        Ok(language)
    }

    /// Renames the language currently titled `old_title`.
    ///
    /// # Contract
    /// - `TitleNotFound` when `old_title` does not resolve.
    /// - The new title is NOT checked against other languages; renaming onto
    ///   an existing title silently duplicates it. Known upstream behavior,
    ///   kept as-is.
    pub fn rename_language(
        &self,
        old_title: &str,
        new_title: &str,
    ) -> Result<Language, LanguageServiceError> {
        let found = self
            .languages
            .find_language_by_title(old_title)?
            .ok_or_else(|| LanguageServiceError::TitleNotFound(old_title.to_string()))?;

        self.languages.rename_language(found.id, new_title)?;
        self.languages
            .get_language(found.id)?
            .ok_or(LanguageServiceError::InconsistentState(
                "renamed language not found in read-back",
            ))
    }

    /// Finds the single language with an exactly matching title.
    pub fn find_language(&self, title: &str) -> Result<Language, LanguageServiceError> {
        self.languages
            .find_language_by_title(title)?
            .ok_or_else(|| LanguageServiceError::TitleNotFound(title.to_string()))
    }

    /// Returns every stored language.
    pub fn list_languages(&self) -> Result<Vec<Language>, LanguageServiceError> {
        Ok(self.languages.list_languages()?)
    }

    /// Deletes one language by id and cascades to its topics.
    ///
    /// Returns the removed record. The cascade runs after the language row
    /// is gone and cannot fail on an empty topic set.
    pub fn delete_language(&self, id: LanguageId) -> Result<Language, LanguageServiceError> {
        let found = self
            .languages
            .get_language(id)?
            .ok_or(LanguageServiceError::LanguageNotFound(id))?;

        self.languages.delete_language(found.id)?;
        let removed_topics = self.topics.delete_topics_for_language(found.id)?;
        debug!(
            "event=language_cascade module=service status=ok language_id={} topics_removed={removed_topics}",
            found.id
        );

        Ok(found)
    }
}
