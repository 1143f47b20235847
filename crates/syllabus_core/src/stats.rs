//! Per-language aggregation.
//!
//! # Responsibility
//! - Count topics per language for the statistics view.
//!
//! # Invariants
//! - Every stored language appears exactly once, zero counts included.

use crate::db::DbResult;
use rusqlite::Connection;
use serde::Serialize;

/// One statistics row: a language title and its topic count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageStat {
    pub title: String,
    pub topics: u64,
}

/// Returns one `{title, topics}` entry per stored language.
///
/// Languages without topics report a count of zero. Ordering is
/// deterministic: `title ASC`.
pub fn language_statistics(conn: &Connection) -> DbResult<Vec<LanguageStat>> {
    let mut stmt = conn.prepare(
        "SELECT l.title AS title, COUNT(t.id) AS topics
         FROM languages l
         LEFT JOIN topics t ON t.language_id = l.id
         GROUP BY l.id
         ORDER BY l.title ASC, l.id ASC;",
    )?;

    let mut rows = stmt.query([])?;
    let mut stats = Vec::new();
    while let Some(row) = rows.next()? {
        stats.push(LanguageStat {
            title: row.get("title")?,
            topics: row.get::<_, i64>("topics")? as u64,
        });
    }

    Ok(stats)
}
