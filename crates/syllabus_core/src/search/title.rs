//! Case-insensitive substring search over topic titles.
//!
//! # Invariants
//! - An empty or whitespace-only needle matches every topic.
//! - `%`, `_` and `\` in the needle match literally.
//! - Result ordering is deterministic: `title ASC, id ASC`.

use crate::db::DbError;
use crate::model::topic::Topic;
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for DB interaction and result decoding.
#[derive(Debug)]
pub enum SearchError {
    Db(DbError),
    InvalidData(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid search row: {message}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for SearchError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SearchError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Returns every topic whose title contains `needle`, ignoring case.
///
/// Case folding is ASCII-only (SQLite `LIKE` semantics). An empty needle
/// matches every stored topic.
pub fn search_topics(conn: &Connection, needle: &str) -> SearchResult<Vec<Topic>> {
    let mut stmt = conn.prepare(
        "SELECT id, language_id, title, closed
         FROM topics
         WHERE title LIKE '%' || ?1 || '%' ESCAPE '\\'
         ORDER BY title ASC, id ASC;",
    )?;

    let mut rows = stmt.query([escape_like_needle(needle)])?;
    let mut topics = Vec::new();
    while let Some(row) = rows.next()? {
        topics.push(parse_topic_row(row)?);
    }

    Ok(topics)
}

/// Escapes `LIKE` metacharacters so the needle is matched literally.
fn escape_like_needle(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn parse_topic_row(row: &Row<'_>) -> SearchResult<Topic> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| SearchError::InvalidData(format!("invalid id `{id_text}`")))?;

    let language_text: String = row.get("language_id")?;
    let language_id = Uuid::parse_str(&language_text)
        .map_err(|_| SearchError::InvalidData(format!("invalid language id `{language_text}`")))?;

    let closed = match row.get::<_, i64>("closed")? {
        0 => false,
        1 => true,
        other => {
            return Err(SearchError::InvalidData(format!(
                "invalid closed value `{other}`"
            )));
        }
    };

    let mut topic = Topic::with_id(id, language_id, row.get::<_, String>("title")?);
    topic.closed = closed;
    Ok(topic)
}

#[cfg(test)]
mod tests {
    use super::escape_like_needle;

    #[test]
    fn escape_handles_like_metacharacters() {
        assert_eq!(escape_like_needle("50%"), "50\\%");
        assert_eq!(escape_like_needle("a_b"), "a\\_b");
        assert_eq!(escape_like_needle("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like_needle("plain"), "plain");
    }

    #[test]
    fn escape_keeps_empty_needle_empty() {
        assert_eq!(escape_like_needle(""), "");
    }
}
