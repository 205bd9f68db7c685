//! cliptray-core: business logic for a tray clipboard-history manager.
//!
//! The host shell owns window rendering, dialogs, tray icon plumbing, and
//! the OS clipboard hook; this crate owns the policy behind them.
//!
//! # Architecture
//! - `interface`: public types, settings, errors, and the `Store` trait
//! - `models`: domain records (Group, Snippet, HistoryEntry) and text normalization
//! - `database`: SQLite-backed `Store` implementation
//! - `capture`: clipboard-change capture controller
//! - `menu`: menu partitioning, assembly, and click resolution

mod capture;
mod database;
pub mod demo_data;
mod interface;
mod menu;
mod models;

pub use capture::{CaptureController, CaptureOptions};
pub use database::{Database, DatabaseError};
pub use interface::*;
pub use menu::{build_menu, partition, resolve_entry};
pub use models::{first_line, truncate_title, Group, HistoryEntry, Snippet, TITLE_ELLIPSIS};
