//! Public interface of the cliptray core.
//!
//! Everything the host shell (tray rendering, dialogs, the clipboard hook)
//! consumes lives here: id newtypes, the derived menu description types,
//! the settings record, the error type, and the `Store` trait the rest of
//! the crate is written against.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Group, HistoryEntry, Snippet};

// ═══════════════════════════════════════════════════════════════════════════════
// IDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Opaque id of a snippet group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub i64);

/// Opaque id of a durable snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnippetId(pub i64);

/// Opaque id of a captured history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryId(pub i64);

/// Typed back-reference from a menu entry to the record it represents.
///
/// Click dispatch in the host shell pattern-matches on this instead of
/// carrying an untyped handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuRef {
    History { id: HistoryId },
    Snippet { id: SnippetId },
}

// ═══════════════════════════════════════════════════════════════════════════════
// MENU DESCRIPTION (derived, recomputed on every build)
// ═══════════════════════════════════════════════════════════════════════════════

/// A single clickable leaf: numbered, truncated label + back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    pub reference: MenuRef,
}

/// A contiguous, size-capped slice of an ordered list of entries.
///
/// The label covers the absolute 1-based range (e.g. `"16 - 30"`); numbering
/// inside `entries` restarts at 1 on every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuPage {
    pub label: String,
    pub entries: Vec<MenuEntry>,
}

/// Contents of a group node: listed flat when the snippet count fits in one
/// page, split into sub-pages otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupItems {
    Flat { entries: Vec<MenuEntry> },
    Paged { pages: Vec<MenuPage> },
}

/// One top-level node per snippet group. Empty groups are still shown so the
/// user sees they exist, but are marked non-interactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNode {
    pub id: GroupId,
    pub name: String,
    pub enabled: bool,
    pub items: GroupItems,
}

/// Fixed action entries at the bottom of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    EditSnippets,
    Settings,
    DeleteAllHistories,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuNode {
    Page { page: MenuPage },
    Group { group: GroupNode },
    Action { action: MenuAction },
    Separator,
}

/// The full presented structure, in display order:
/// history pages, separator (only when groups exist), group nodes,
/// separator, edit/settings/delete-all actions, separator, exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDescription {
    pub nodes: Vec<MenuNode>,
}

impl MenuDescription {
    /// History section pages, in order.
    pub fn history_pages(&self) -> impl Iterator<Item = &MenuPage> {
        self.nodes.iter().filter_map(|node| match node {
            MenuNode::Page { page } => Some(page),
            _ => None,
        })
    }

    /// Group nodes, in order.
    pub fn group_nodes(&self) -> impl Iterator<Item = &GroupNode> {
        self.nodes.iter().filter_map(|node| match node {
            MenuNode::Group { group } => Some(group),
            _ => None,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SETTINGS
// ═══════════════════════════════════════════════════════════════════════════════

/// Live user settings, passed explicitly into every menu build so runtime
/// changes take effect without restart and tests can pin arbitrary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSettings {
    /// Maximum number of most-recent history entries shown in views.
    /// Older entries stay in the store until the user bulk-deletes.
    pub max_count: usize,
    /// Maximum title length in characters before truncation.
    pub max_menu_title: usize,
    /// Items per page, and the flat-vs-paged threshold for groups.
    pub items_per_group: usize,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            max_count: 100,
            max_menu_title: 40,
            items_per_group: 15,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ERROR TYPE
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum ClipTrayError {
    /// A store CRUD call failed (I/O, SQLite fault). Surfaced to the
    /// triggering user action; swallowed and logged on the capture path.
    #[error("store error: {0}")]
    Store(String),
    /// Non-positive page size or similar configuration fault, rejected at
    /// the partitioner boundary.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ClipTrayResult<T> = Result<T, ClipTrayError>;

// ═══════════════════════════════════════════════════════════════════════════════
// STORE
// ═══════════════════════════════════════════════════════════════════════════════

/// Narrow CRUD interface to durable storage. No policy lives here: retention,
/// pagination, and truncation are all applied by the callers.
///
/// Id-based lookups report absence as `Ok(None)` and id-based mutations of a
/// missing record are no-ops, because the menu the user clicked may be stale
/// relative to a concurrent external mutation.
pub trait Store: Send + Sync {
    fn load_groups(&self) -> ClipTrayResult<Vec<Group>>;
    /// Adds a group with the trimmed `name`; empty names are rejected.
    fn add_group(&self, name: &str) -> ClipTrayResult<Group>;
    fn rename_group(&self, id: GroupId, new_name: &str) -> ClipTrayResult<()>;
    /// Deletes the group and all snippets in it.
    fn delete_group(&self, id: GroupId) -> ClipTrayResult<()>;

    /// All history entries, most-recent-first.
    fn load_histories(&self) -> ClipTrayResult<Vec<HistoryEntry>>;
    fn save_history(&self, entry: &HistoryEntry) -> ClipTrayResult<HistoryId>;
    fn delete_history(&self, id: HistoryId) -> ClipTrayResult<()>;
    fn delete_all_histories(&self) -> ClipTrayResult<()>;
    fn load_history_of_id(&self, id: HistoryId) -> ClipTrayResult<Option<HistoryEntry>>;

    fn load_snippets_in_group(&self, group: GroupId) -> ClipTrayResult<Vec<Snippet>>;
    fn load_snippet_of_id(&self, id: SnippetId) -> ClipTrayResult<Option<Snippet>>;
    /// Adds a snippet; the owning group must exist at time of creation.
    fn add_snippet(&self, snippet: &Snippet) -> ClipTrayResult<SnippetId>;
    fn update_snippet(&self, snippet: &Snippet) -> ClipTrayResult<()>;
    fn delete_snippet(&self, id: SnippetId) -> ClipTrayResult<()>;
}
