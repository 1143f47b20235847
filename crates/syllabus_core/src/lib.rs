//! Core domain logic for Syllabus, a local study-tracker for programming
//! languages and their learning topics.
//! This crate is the single source of truth for catalog invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod stats;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::language::{Language, LanguageId};
pub use model::topic::{Topic, TopicDraft, TopicId};
pub use model::ValidationError;
pub use repo::language_repo::{LanguageRepository, SqliteLanguageRepository};
pub use repo::topic_repo::{SqliteTopicRepository, TopicRepository};
pub use repo::{RepoError, RepoResult};
pub use search::title::{search_topics, SearchError, SearchResult};
pub use service::language_service::{LanguageService, LanguageServiceError};
pub use service::topic_service::{TopicService, TopicServiceError};
pub use stats::{language_statistics, LanguageStat};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
