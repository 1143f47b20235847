//! Language repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide id- and title-keyed access to the `languages` table.
//! - Detect semantic not-found conditions from zero-row writes.
//!
//! # Invariants
//! - Title lookups are exact and case-sensitive (BINARY collation).
//! - Uniqueness of titles is NOT enforced here; that is a service concern.

use crate::model::language::{Language, LanguageId};
use crate::model::ValidationError;
use crate::repo::{ensure_schema_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const LANGUAGE_SELECT_SQL: &str = "SELECT id, title FROM languages";

/// Repository interface for language records.
pub trait LanguageRepository {
    /// Inserts one language and returns its stable id.
    fn create_language(&self, language: &Language) -> RepoResult<LanguageId>;
    /// Replaces the title of an existing language, id unchanged.
    fn rename_language(&self, id: LanguageId, new_title: &str) -> RepoResult<()>;
    /// Gets one language by id.
    fn get_language(&self, id: LanguageId) -> RepoResult<Option<Language>>;
    /// Finds the language with an exactly matching title.
    fn find_language_by_title(&self, title: &str) -> RepoResult<Option<Language>>;
    /// Returns every stored language.
    fn list_languages(&self) -> RepoResult<Vec<Language>>;
    /// Removes one language by id. Owned topics are untouched here.
    fn delete_language(&self, id: LanguageId) -> RepoResult<()>;
}

/// SQLite-backed language repository.
pub struct SqliteLanguageRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLanguageRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl LanguageRepository for SqliteLanguageRepository<'_> {
    fn create_language(&self, language: &Language) -> RepoResult<LanguageId> {
        language.validate()?;

        self.conn.execute(
            "INSERT INTO languages (id, title) VALUES (?1, ?2);",
            params![language.id.to_string(), language.title.as_str()],
        )?;

        Ok(language.id)
    }

    fn rename_language(&self, id: LanguageId, new_title: &str) -> RepoResult<()> {
        if new_title.trim().is_empty() {
            return Err(ValidationError::BlankLanguageTitle.into());
        }

        let changed = self.conn.execute(
            "UPDATE languages
             SET
                title = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![new_title, id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::LanguageNotFound(id));
        }

        Ok(())
    }

    fn get_language(&self, id: LanguageId) -> RepoResult<Option<Language>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LANGUAGE_SELECT_SQL} WHERE id = ?1;"))?;

        stmt.query_row([id.to_string()], |row| Ok(parse_language_row(row)))
            .optional()?
            .transpose()
    }

    fn find_language_by_title(&self, title: &str) -> RepoResult<Option<Language>> {
        let mut stmt = self.conn.prepare(&format!(
            "{LANGUAGE_SELECT_SQL} WHERE title = ?1 LIMIT 1;"
        ))?;

        stmt.query_row([title], |row| Ok(parse_language_row(row)))
            .optional()?
            .transpose()
    }

    fn list_languages(&self) -> RepoResult<Vec<Language>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LANGUAGE_SELECT_SQL} ORDER BY title ASC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut languages = Vec::new();
        while let Some(row) = rows.next()? {
            languages.push(parse_language_row(row)?);
        }

        Ok(languages)
    }

    fn delete_language(&self, id: LanguageId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM languages WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::LanguageNotFound(id));
        }

        Ok(())
    }
}

fn parse_language_row(row: &Row<'_>) -> RepoResult<Language> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid id value `{id_text}` in languages.id"))
    })?;

    let language = Language::with_id(id, row.get::<_, String>("title")?);
    language.validate()?;
    Ok(language)
}
