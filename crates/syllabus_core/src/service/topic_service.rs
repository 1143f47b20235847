//! Topic use-case service.
//!
//! # Responsibility
//! - Provide create/update/status/delete/list entry points for topics.
//! - Resolve user-supplied language titles to ids before every id-keyed
//!   operation.
//!
//! # Invariants
//! - Per-language title uniqueness is checked at creation time.
//! - `language_id` never changes after creation; updates touch title and
//!   status only.

use crate::model::language::Language;
use crate::model::topic::{Topic, TopicDraft, TopicId};
use crate::repo::language_repo::LanguageRepository;
use crate::repo::topic_repo::TopicRepository;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from topic use-case operations.
#[derive(Debug)]
pub enum TopicServiceError {
    /// No language matches the given title.
    LanguageNotFound(String),
    /// No topic matches the given id.
    TopicNotFound(TopicId),
    /// The language already owns a topic with this title.
    TitleTaken {
        language_title: String,
        title: String,
    },
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Write succeeded but the read-back found nothing.
    InconsistentState(&'static str),
}

impl Display for TopicServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LanguageNotFound(title) => write!(f, "language not found: `{title}`"),
            Self::TopicNotFound(id) => write!(f, "topic not found: {id}"),
            Self::TitleTaken {
                language_title,
                title,
            } => write!(
                f,
                "topic title already in use under language `{language_title}`: `{title}`"
            ),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent topic state: {details}"),
        }
    }
}

impl Error for TopicServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TopicServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::TopicNotFound(id) => Self::TopicNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Topic service facade over the two repositories.
///
/// Holds the language repository for the resolve-then-operate step; topics
/// themselves never carry language titles.
pub struct TopicService<L: LanguageRepository, T: TopicRepository> {
    languages: L,
    topics: T,
}

impl<L: LanguageRepository, T: TopicRepository> TopicService<L, T> {
    /// Creates a service using the provided repository implementations.
    pub fn new(languages: L, topics: T) -> Self {
        Self { languages, topics }
    }

    /// Creates a topic under the language titled `language_title`.
    ///
    /// # Contract
    /// - `LanguageNotFound` when the title does not resolve.
    /// - `TitleTaken` when the resolved language already owns a topic with
    ///   the draft's title.
    /// - The draft's `closed` value is honored, not forced to `false`.
    pub fn add_topic(
        &self,
        language_title: &str,
        draft: &TopicDraft,
    ) -> Result<Topic, TopicServiceError> {
        let language = self.resolve_language(language_title)?;

        if self
            .topics
            .find_topic_by_title(language.id, &draft.title)?
            .is_some()
        {
            return Err(TopicServiceError::TitleTaken {
                language_title: language.title,
                title: draft.title.clone(),
            });
        }

        let mut topic = Topic::new(language.id, draft.title.as_str());
        topic.closed = draft.closed;
        self.topics.create_topic(&topic)?;
        Ok(topic)
    }

    /// Overwrites title and status of an existing topic.
    ///
    /// # Contract
    /// - `TopicNotFound` when `id` does not resolve.
    /// - `language_id` is left unchanged.
    /// - The new title is NOT re-checked against sibling topics; updating
    ///   onto an existing sibling title silently duplicates it. Known
    ///   upstream behavior, kept as-is.
    pub fn update_topic(
        &self,
        id: TopicId,
        draft: &TopicDraft,
    ) -> Result<Topic, TopicServiceError> {
        self.topics.update_topic(id, &draft.title, draft.closed)?;
        self.read_back(id, "updated topic not found in read-back")
    }

    /// Overwrites only the status of an existing topic.
    pub fn set_topic_status(&self, id: TopicId, closed: bool) -> Result<Topic, TopicServiceError> {
        self.topics.set_topic_closed(id, closed)?;
        self.read_back(id, "status-updated topic not found in read-back")
    }

    /// Deletes one topic by id and returns the removed record.
    pub fn delete_topic(&self, id: TopicId) -> Result<Topic, TopicServiceError> {
        let found = self
            .topics
            .get_topic(id)?
            .ok_or(TopicServiceError::TopicNotFound(id))?;

        self.topics.delete_topic(found.id)?;
        Ok(found)
    }

    /// Lists all topics of the language titled `language_title`.
    pub fn list_topics_for_language(
        &self,
        language_title: &str,
    ) -> Result<Vec<Topic>, TopicServiceError> {
        let language = self.resolve_language(language_title)?;
        Ok(self.topics.list_topics_for_language(language.id)?)
    }

    /// Lists all topics with the given status across languages.
    ///
    /// Only topics whose language currently exists are included.
    pub fn list_topics_by_status(&self, closed: bool) -> Result<Vec<Topic>, TopicServiceError> {
        Ok(self.topics.list_topics_by_status(closed)?)
    }

    fn resolve_language(&self, language_title: &str) -> Result<Language, TopicServiceError> {
        self.languages
            .find_language_by_title(language_title)?
            .ok_or_else(|| TopicServiceError::LanguageNotFound(language_title.to_string()))
    }

    fn read_back(&self, id: TopicId, details: &'static str) -> Result<Topic, TopicServiceError> {
        self.topics
            .get_topic(id)?
            .ok_or(TopicServiceError::InconsistentState(details))
    }
}
