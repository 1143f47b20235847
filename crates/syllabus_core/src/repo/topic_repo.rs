//! Topic repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide id-keyed CRUD plus the fixed query surface over `topics`.
//! - Own the cascade primitive that removes every topic of one language.
//!
//! # Invariants
//! - `language_id` is written at creation and never changed by updates.
//! - Per-language title uniqueness is NOT enforced here; that is a service
//!   concern applied at creation time only.
//! - Status listing joins through `languages`, so a row with a dangling
//!   `language_id` never surfaces there.

use crate::model::language::LanguageId;
use crate::model::topic::{Topic, TopicId};
use crate::model::ValidationError;
use crate::repo::{ensure_schema_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const TOPIC_SELECT_SQL: &str = "SELECT id, language_id, title, closed FROM topics";

/// Repository interface for topic records.
pub trait TopicRepository {
    /// Inserts one topic and returns its stable id.
    fn create_topic(&self, topic: &Topic) -> RepoResult<TopicId>;
    /// Overwrites title and status of an existing topic.
    fn update_topic(&self, id: TopicId, title: &str, closed: bool) -> RepoResult<()>;
    /// Overwrites only the status of an existing topic.
    fn set_topic_closed(&self, id: TopicId, closed: bool) -> RepoResult<()>;
    /// Gets one topic by id.
    fn get_topic(&self, id: TopicId) -> RepoResult<Option<Topic>>;
    /// Finds a topic with an exactly matching title under one language.
    fn find_topic_by_title(
        &self,
        language_id: LanguageId,
        title: &str,
    ) -> RepoResult<Option<Topic>>;
    /// Returns all topics owned by one language.
    fn list_topics_for_language(&self, language_id: LanguageId) -> RepoResult<Vec<Topic>>;
    /// Returns all topics with the given status whose language still exists.
    fn list_topics_by_status(&self, closed: bool) -> RepoResult<Vec<Topic>>;
    /// Removes one topic by id.
    fn delete_topic(&self, id: TopicId) -> RepoResult<()>;
    /// Removes every topic owned by one language; returns the removed count.
    ///
    /// A no-op (count 0) when the language owns nothing.
    fn delete_topics_for_language(&self, language_id: LanguageId) -> RepoResult<usize>;
}

/// SQLite-backed topic repository.
pub struct SqliteTopicRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTopicRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TopicRepository for SqliteTopicRepository<'_> {
    fn create_topic(&self, topic: &Topic) -> RepoResult<TopicId> {
        topic.validate()?;

        self.conn.execute(
            "INSERT INTO topics (id, language_id, title, closed)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                topic.id.to_string(),
                topic.language_id.to_string(),
                topic.title.as_str(),
                bool_to_int(topic.closed),
            ],
        )?;

        Ok(topic.id)
    }

    fn update_topic(&self, id: TopicId, title: &str, closed: bool) -> RepoResult<()> {
        if title.trim().is_empty() {
            return Err(ValidationError::BlankTopicTitle.into());
        }

        let changed = self.conn.execute(
            "UPDATE topics
             SET
                title = ?1,
                closed = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?3;",
            params![title, bool_to_int(closed), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::TopicNotFound(id));
        }

        Ok(())
    }

    fn set_topic_closed(&self, id: TopicId, closed: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE topics
             SET
                closed = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![bool_to_int(closed), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::TopicNotFound(id));
        }

        Ok(())
    }

    fn get_topic(&self, id: TopicId) -> RepoResult<Option<Topic>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TOPIC_SELECT_SQL} WHERE id = ?1;"))?;

        stmt.query_row([id.to_string()], |row| Ok(parse_topic_row(row)))
            .optional()?
            .transpose()
    }

    fn find_topic_by_title(
        &self,
        language_id: LanguageId,
        title: &str,
    ) -> RepoResult<Option<Topic>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TOPIC_SELECT_SQL} WHERE language_id = ?1 AND title = ?2 LIMIT 1;"
        ))?;

        stmt.query_row(params![language_id.to_string(), title], |row| {
            Ok(parse_topic_row(row))
        })
        .optional()?
        .transpose()
    }

    fn list_topics_for_language(&self, language_id: LanguageId) -> RepoResult<Vec<Topic>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TOPIC_SELECT_SQL} WHERE language_id = ?1 ORDER BY title ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([language_id.to_string()])?;
        collect_topic_rows(&mut rows)
    }

    fn list_topics_by_status(&self, closed: bool) -> RepoResult<Vec<Topic>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.id, t.language_id, t.title, t.closed
             FROM topics t
             INNER JOIN languages l ON l.id = t.language_id
             WHERE t.closed = ?1
             ORDER BY t.title ASC, t.id ASC;",
        )?;

        let mut rows = stmt.query([bool_to_int(closed)])?;
        collect_topic_rows(&mut rows)
    }

    fn delete_topic(&self, id: TopicId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM topics WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::TopicNotFound(id));
        }

        Ok(())
    }

    fn delete_topics_for_language(&self, language_id: LanguageId) -> RepoResult<usize> {
        let removed = self.conn.execute(
            "DELETE FROM topics WHERE language_id = ?1;",
            [language_id.to_string()],
        )?;

        Ok(removed)
    }
}

fn collect_topic_rows(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<Topic>> {
    let mut topics = Vec::new();
    while let Some(row) = rows.next()? {
        topics.push(parse_topic_row(row)?);
    }
    Ok(topics)
}

fn parse_topic_row(row: &Row<'_>) -> RepoResult<Topic> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid id value `{id_text}` in topics.id")))?;

    let language_text: String = row.get("language_id")?;
    let language_id = Uuid::parse_str(&language_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid id value `{language_text}` in topics.language_id"
        ))
    })?;

    let closed = match row.get::<_, i64>("closed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid closed value `{other}` in topics.closed"
            )));
        }
    };

    let mut topic = Topic::with_id(id, language_id, row.get::<_, String>("title")?);
    topic.closed = closed;
    topic.validate()?;
    Ok(topic)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
