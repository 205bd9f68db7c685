//! SQLite-backed `Store` implementation.
//!
//! Holds groups, snippets, and history entries in three tables. No policy
//! lives here: retention, pagination, and truncation are applied by the
//! menu layer at read time.

use crate::interface::{
    ClipTrayError, ClipTrayResult, GroupId, HistoryId, SnippetId, Store,
};
use crate::models::{Group, HistoryEntry, Snippet};
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

impl From<DatabaseError> for ClipTrayError {
    fn from(err: DatabaseError) -> Self {
        ClipTrayError::Store(err.to_string())
    }
}

impl From<rusqlite::Error> for ClipTrayError {
    fn from(err: rusqlite::Error) -> Self {
        DatabaseError::from(err).into()
    }
}

/// Parse timestamp string from database to DateTime<Utc>
fn parse_db_timestamp(timestamp_str: &str) -> DateTime<Utc> {
    chrono::NaiveDateTime::parse_from_str(timestamp_str, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(timestamp_str, "%Y-%m-%d %H:%M:%S"))
        .map(|dt| Utc.from_utc_datetime(&dt))
        .unwrap_or_else(|_| Utc::now())
}

fn format_db_timestamp(unix: i64) -> String {
    let timestamp = Utc.timestamp_opt(unix, 0).single().unwrap_or_else(Utc::now);
    timestamp.format("%Y-%m-%d %H:%M:%S%.f").to_string()
}

/// Thread-safe database wrapper
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> DatabaseResult<Self> {
        let conn = Connection::open(path)?;

        // Memory optimization: WAL mode + mmap for faster reads
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA mmap_size=67108864;
            PRAGMA cache_size=-32000;
        ",
        )?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.setup_schema()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> DatabaseResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.setup_schema()?;
        Ok(db)
    }

    /// Set up the database schema
    fn setup_schema(&self) -> DatabaseResult<()> {
        let conn = self.conn.lock();

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS groups (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS snippets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                groupId INTEGER NOT NULL,
                name TEXT,
                content TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS histories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content TEXT NOT NULL,
                createdAt DATETIME NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_snippets_groupId ON snippets(groupId)",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_histories_createdAt ON histories(createdAt)",
            [],
        )?;

        Ok(())
    }

    /// Get the database size in bytes
    pub fn database_size(&self) -> DatabaseResult<i64> {
        let conn = self.conn.lock();
        let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
        let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;
        Ok(page_count * page_size)
    }

    /// Convert a database row to a Group
    fn row_to_group(row: &rusqlite::Row) -> rusqlite::Result<Group> {
        Ok(Group {
            id: GroupId(row.get("id")?),
            name: row.get("name")?,
        })
    }

    /// Convert a database row to a Snippet
    fn row_to_snippet(row: &rusqlite::Row) -> rusqlite::Result<Snippet> {
        Ok(Snippet {
            id: Some(SnippetId(row.get("id")?)),
            group_id: GroupId(row.get("groupId")?),
            name: row.get("name")?,
            content: row.get("content")?,
        })
    }

    /// Convert a database row to a HistoryEntry
    fn row_to_history(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
        let timestamp_str: String = row.get("createdAt")?;
        Ok(HistoryEntry {
            id: Some(HistoryId(row.get("id")?)),
            content: row.get("content")?,
            created_at_unix: parse_db_timestamp(&timestamp_str).timestamp(),
        })
    }
}

impl Store for Database {
    fn load_groups(&self) -> ClipTrayResult<Vec<Group>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT id, name FROM groups ORDER BY id ASC")?;
        let groups = stmt
            .query_map([], Self::row_to_group)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(groups)
    }

    fn add_group(&self, name: &str) -> ClipTrayResult<Group> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClipTrayError::InvalidInput(
                "group name must not be empty".into(),
            ));
        }
        let conn = self.conn.lock();
        conn.execute("INSERT INTO groups (name) VALUES (?1)", params![name])?;
        Ok(Group {
            id: GroupId(conn.last_insert_rowid()),
            name: name.to_string(),
        })
    }

    fn rename_group(&self, id: GroupId, new_name: &str) -> ClipTrayResult<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(ClipTrayError::InvalidInput(
                "group name must not be empty".into(),
            ));
        }
        let conn = self.conn.lock();
        // Zero rows updated means the group is already gone; that is a no-op.
        conn.execute(
            "UPDATE groups SET name = ?1 WHERE id = ?2",
            params![new_name, id.0],
        )?;
        Ok(())
    }

    fn delete_group(&self, id: GroupId) -> ClipTrayResult<()> {
        let conn = self.conn.lock();
        // Cascade: snippets first, then the group row. Both statements
        // tolerate the group already being gone.
        conn.execute("DELETE FROM snippets WHERE groupId = ?1", params![id.0])?;
        conn.execute("DELETE FROM groups WHERE id = ?1", params![id.0])?;
        Ok(())
    }

    fn load_histories(&self) -> ClipTrayResult<Vec<HistoryEntry>> {
        let conn = self.conn.lock();
        // id DESC breaks ties between captures in the same second so views
        // keep insertion order.
        let mut stmt = conn.prepare(
            "SELECT id, content, createdAt FROM histories ORDER BY createdAt DESC, id DESC",
        )?;
        let histories = stmt
            .query_map([], Self::row_to_history)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(histories)
    }

    fn save_history(&self, entry: &HistoryEntry) -> ClipTrayResult<HistoryId> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO histories (content, createdAt) VALUES (?1, ?2)",
            params![entry.content, format_db_timestamp(entry.created_at_unix)],
        )?;
        Ok(HistoryId(conn.last_insert_rowid()))
    }

    fn delete_history(&self, id: HistoryId) -> ClipTrayResult<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM histories WHERE id = ?1", params![id.0])?;
        Ok(())
    }

    fn delete_all_histories(&self) -> ClipTrayResult<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM histories", [])?;
        Ok(())
    }

    fn load_history_of_id(&self, id: HistoryId) -> ClipTrayResult<Option<HistoryEntry>> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare("SELECT id, content, createdAt FROM histories WHERE id = ?1 LIMIT 1")?;
        match stmt.query_row(params![id.0], Self::row_to_history) {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn load_snippets_in_group(&self, group: GroupId) -> ClipTrayResult<Vec<Snippet>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, groupId, name, content FROM snippets WHERE groupId = ?1 ORDER BY id ASC",
        )?;
        let snippets = stmt
            .query_map(params![group.0], Self::row_to_snippet)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(snippets)
    }

    fn load_snippet_of_id(&self, id: SnippetId) -> ClipTrayResult<Option<Snippet>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare("SELECT id, groupId, name, content FROM snippets WHERE id = ?1 LIMIT 1")?;
        match stmt.query_row(params![id.0], Self::row_to_snippet) {
            Ok(snippet) => Ok(Some(snippet)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn add_snippet(&self, snippet: &Snippet) -> ClipTrayResult<SnippetId> {
        let conn = self.conn.lock();
        // A snippet must belong to an existing group at time of creation.
        let group_exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM groups WHERE id = ?1)",
            params![snippet.group_id.0],
            |row| row.get(0),
        )?;
        if !group_exists {
            return Err(ClipTrayError::InvalidInput(format!(
                "group {} does not exist",
                snippet.group_id.0
            )));
        }
        conn.execute(
            "INSERT INTO snippets (groupId, name, content) VALUES (?1, ?2, ?3)",
            params![snippet.group_id.0, snippet.name, snippet.content],
        )?;
        Ok(SnippetId(conn.last_insert_rowid()))
    }

    fn update_snippet(&self, snippet: &Snippet) -> ClipTrayResult<()> {
        let Some(id) = snippet.id else {
            return Err(ClipTrayError::InvalidInput(
                "cannot update a snippet that was never saved".into(),
            ));
        };
        let conn = self.conn.lock();
        // Updating a snippet deleted elsewhere is a no-op.
        conn.execute(
            "UPDATE snippets SET groupId = ?1, name = ?2, content = ?3 WHERE id = ?4",
            params![snippet.group_id.0, snippet.name, snippet.content, id.0],
        )?;
        Ok(())
    }

    fn delete_snippet(&self, id: SnippetId) -> ClipTrayResult<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM snippets WHERE id = ?1", params![id.0])?;
        Ok(())
    }
}
