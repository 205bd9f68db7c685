//! Domain records and text normalization.

use serde::{Deserialize, Serialize};

use crate::interface::{GroupId, HistoryId, SnippetId};

// ─────────────────────────────────────────────────────────────────────────────
// RECORDS
// ─────────────────────────────────────────────────────────────────────────────

/// A named container for snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

/// A user-curated, durable text entry belonging to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// `None` until the store has persisted it.
    pub id: Option<SnippetId>,
    pub group_id: GroupId,
    pub name: Option<String>,
    pub content: String,
}

impl Snippet {
    pub fn new(group_id: GroupId, name: Option<String>, content: String) -> Self {
        Self {
            id: None,
            group_id,
            name,
            content,
        }
    }
}

/// A single captured clipboard snapshot, read-only after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// `None` until the store has persisted it.
    pub id: Option<HistoryId>,
    /// Raw clipboard text, stored verbatim (no trimming).
    pub content: String,
    pub created_at_unix: i64,
}

impl HistoryEntry {
    /// Create an entry for a clipboard capture, stamped with the current time.
    pub fn capture(content: String) -> Self {
        Self {
            id: None,
            content,
            created_at_unix: chrono::Utc::now().timestamp(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TEXT NORMALIZATION
// ─────────────────────────────────────────────────────────────────────────────

/// Marker appended to truncated menu titles.
pub const TITLE_ELLIPSIS: char = '…';

/// The substring up to (not including) the first line break, or the whole
/// string if there is none. Callers trim first.
pub fn first_line(text: &str) -> &str {
    match text.find(['\n', '\r']) {
        Some(pos) => &text[..pos],
        None => text,
    }
}

/// Truncate `text` to at most `max_len` characters, appending the ellipsis
/// marker when anything was cut. Counts chars, not bytes, so multi-byte
/// content never gets split mid scalar.
pub fn truncate_title(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let mut truncated: String = text.chars().take(max_len).collect();
        truncated.push(TITLE_ELLIPSIS);
        truncated
    } else {
        text.to_string()
    }
}
