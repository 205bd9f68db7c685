//! Tests for menu assembly against a real in-memory store.
//!
//! Covers the assembled node ordering (history pages, separators, group
//! nodes, fixed actions), the flat-vs-paged group threshold, read-time
//! retention, rebuild idempotence, and click resolution.

use cliptray_core::{
    build_menu, demo_data, resolve_entry, ClipTrayError, Database, GroupItems, HistoryEntry,
    HistoryId, MenuAction, MenuNode, MenuRef, MenuSettings, Snippet, SnippetId, Store,
};

fn settings(max_count: usize, max_menu_title: usize, items_per_group: usize) -> MenuSettings {
    MenuSettings {
        max_count,
        max_menu_title,
        items_per_group,
    }
}

/// Save `n` history entries with strictly increasing timestamps, so
/// "item n" is the most recent.
fn seed_histories(db: &Database, n: usize) {
    let base = 1_700_000_000;
    for i in 1..=n {
        let entry = HistoryEntry {
            id: None,
            content: format!("item {i}"),
            created_at_unix: base + i as i64,
        };
        db.save_history(&entry).unwrap();
    }
}

fn add_snippets(db: &Database, group_name: &str, n: usize) {
    let group = db.add_group(group_name).unwrap();
    for i in 1..=n {
        db.add_snippet(&Snippet::new(group.id, None, format!("snippet {i}")))
            .unwrap();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HISTORY SECTION
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn history_is_paginated_most_recent_first() {
    let db = Database::open_in_memory().unwrap();
    seed_histories(&db, 25);

    let menu = build_menu(&db, &settings(100, 40, 10)).unwrap();
    let pages: Vec<_> = menu.history_pages().collect();

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].label, "1 - 10");
    assert_eq!(pages[1].label, "11 - 20");
    assert_eq!(pages[2].label, "21 - 25");
    assert_eq!(pages[0].entries[0].label, "1. item 25");
    assert_eq!(pages[2].entries.len(), 5);
    assert_eq!(pages[2].entries[4].label, "5. item 1");
}

#[test]
fn retention_cap_applies_at_read_time_only() {
    let db = Database::open_in_memory().unwrap();
    seed_histories(&db, 25);

    let menu = build_menu(&db, &settings(5, 40, 10)).unwrap();
    let pages: Vec<_> = menu.history_pages().collect();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].label, "1 - 5");
    assert_eq!(pages[0].entries.len(), 5);

    // Older entries stay in the store; the cap only bounds the view.
    assert_eq!(db.load_histories().unwrap().len(), 25);
}

#[test]
fn raising_the_cap_between_builds_widens_the_view() {
    let db = Database::open_in_memory().unwrap();
    seed_histories(&db, 25);

    let narrow = build_menu(&db, &settings(5, 40, 10)).unwrap();
    let wide = build_menu(&db, &settings(100, 40, 10)).unwrap();
    assert_eq!(narrow.history_pages().count(), 1);
    assert_eq!(wide.history_pages().count(), 3);
}

#[test]
fn long_titles_are_truncated_to_first_line() {
    let db = Database::open_in_memory().unwrap();
    db.save_history(&HistoryEntry {
        id: None,
        content: "  abcdefghij klmnop\ntail line".to_string(),
        created_at_unix: 1_700_000_000,
    })
    .unwrap();

    let menu = build_menu(&db, &settings(100, 10, 10)).unwrap();
    let pages: Vec<_> = menu.history_pages().collect();
    assert_eq!(pages[0].entries[0].label, "1. abcdefghij…");
}

// ─────────────────────────────────────────────────────────────────────────────
// GROUP NODES
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_group_is_present_but_disabled() {
    let db = Database::open_in_memory().unwrap();
    db.add_group("Empty").unwrap();

    let menu = build_menu(&db, &settings(100, 40, 10)).unwrap();
    let groups: Vec<_> = menu.group_nodes().collect();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Empty");
    assert!(!groups[0].enabled);
    assert!(matches!(&groups[0].items, GroupItems::Flat { entries } if entries.is_empty()));
}

#[test]
fn group_at_threshold_is_flat_one_over_is_paged() {
    let db = Database::open_in_memory().unwrap();
    add_snippets(&db, "AtThreshold", 10);
    add_snippets(&db, "OverThreshold", 11);

    let menu = build_menu(&db, &settings(100, 40, 10)).unwrap();
    let groups: Vec<_> = menu.group_nodes().collect();

    assert!(groups[0].enabled);
    match &groups[0].items {
        GroupItems::Flat { entries } => {
            assert_eq!(entries.len(), 10);
            assert_eq!(entries[0].label, "1. snippet 1");
            assert_eq!(entries[9].label, "10. snippet 10");
        }
        GroupItems::Paged { .. } => panic!("group at threshold must be flat"),
    }

    match &groups[1].items {
        GroupItems::Paged { pages } => {
            assert_eq!(pages.len(), 2);
            assert_eq!(pages[0].label, "1 - 10");
            assert_eq!(pages[1].label, "11 - 11");
            assert_eq!(pages[1].entries.len(), 1);
        }
        GroupItems::Flat { .. } => panic!("group over threshold must be paged"),
    }
}

#[test]
fn group_entries_reference_snippets() {
    let db = Database::open_in_memory().unwrap();
    let group = db.add_group("Git").unwrap();
    let id = db
        .add_snippet(&Snippet::new(
            group.id,
            Some("amend".to_string()),
            "git commit --amend".to_string(),
        ))
        .unwrap();

    let menu = build_menu(&db, &settings(100, 40, 10)).unwrap();
    let groups: Vec<_> = menu.group_nodes().collect();
    let GroupItems::Flat { entries } = &groups[0].items else {
        panic!("expected flat group");
    };
    assert_eq!(entries[0].reference, MenuRef::Snippet { id });
}

// ─────────────────────────────────────────────────────────────────────────────
// STRUCTURE
// ─────────────────────────────────────────────────────────────────────────────

fn node_shape(node: &MenuNode) -> &'static str {
    match node {
        MenuNode::Page { .. } => "page",
        MenuNode::Group { .. } => "group",
        MenuNode::Separator => "separator",
        MenuNode::Action { .. } => "action",
    }
}

#[test]
fn node_ordering_with_groups() {
    let db = Database::open_in_memory().unwrap();
    seed_histories(&db, 3);
    add_snippets(&db, "Git", 2);

    let menu = build_menu(&db, &settings(100, 40, 10)).unwrap();
    let shapes: Vec<_> = menu.nodes.iter().map(node_shape).collect();
    assert_eq!(
        shapes,
        vec![
            "page",
            "separator",
            "group",
            "separator",
            "action",
            "action",
            "action",
            "separator",
            "action",
        ]
    );

    let actions: Vec<MenuAction> = menu
        .nodes
        .iter()
        .filter_map(|node| match node {
            MenuNode::Action { action } => Some(*action),
            _ => None,
        })
        .collect();
    assert_eq!(
        actions,
        vec![
            MenuAction::EditSnippets,
            MenuAction::Settings,
            MenuAction::DeleteAllHistories,
            MenuAction::Exit,
        ]
    );
}

#[test]
fn no_group_separator_when_there_are_no_groups() {
    let db = Database::open_in_memory().unwrap();
    seed_histories(&db, 3);

    let menu = build_menu(&db, &settings(100, 40, 10)).unwrap();
    let shapes: Vec<_> = menu.nodes.iter().map(node_shape).collect();
    assert_eq!(
        shapes,
        vec![
            "page",
            "separator",
            "action",
            "action",
            "action",
            "separator",
            "action",
        ]
    );
}

#[test]
fn rebuild_without_mutation_is_idempotent() {
    let db = Database::open_in_memory().unwrap();
    demo_data::seed_at(&db, 1_700_000_000).unwrap();

    let cfg = settings(100, 40, 10);
    let first = build_menu(&db, &cfg).unwrap();
    let second = build_menu(&db, &cfg).unwrap();
    assert_eq!(first, second);
}

#[test]
fn zero_items_per_group_is_a_configuration_fault() {
    let db = Database::open_in_memory().unwrap();
    seed_histories(&db, 3);

    let result = build_menu(&db, &settings(100, 40, 0));
    assert!(matches!(result, Err(ClipTrayError::InvalidConfig(_))));
}

#[test]
fn demo_seed_builds_expected_groups() {
    let db = Database::open_in_memory().unwrap();
    demo_data::seed_at(&db, 1_700_000_000).unwrap();

    let menu = build_menu(&db, &MenuSettings::default()).unwrap();
    let groups: Vec<_> = menu.group_nodes().collect();
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Git", "Email", "Scratch"]);
    assert!(groups[0].enabled);
    assert!(!groups[2].enabled, "empty demo group must be disabled");
}

// ─────────────────────────────────────────────────────────────────────────────
// CLICK RESOLUTION
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn resolve_history_entry_returns_content() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .save_history(&HistoryEntry::capture("hello".to_string()))
        .unwrap();

    let content = resolve_entry(&db, MenuRef::History { id }).unwrap();
    assert_eq!(content.as_deref(), Some("hello"));
}

#[test]
fn resolve_snippet_entry_returns_content() {
    let db = Database::open_in_memory().unwrap();
    let group = db.add_group("Git").unwrap();
    let id = db
        .add_snippet(&Snippet::new(group.id, None, "git status".to_string()))
        .unwrap();

    let content = resolve_entry(&db, MenuRef::Snippet { id }).unwrap();
    assert_eq!(content.as_deref(), Some("git status"));
}

#[test]
fn resolve_stale_id_is_none_not_an_error() {
    let db = Database::open_in_memory().unwrap();
    let history = resolve_entry(
        &db,
        MenuRef::History {
            id: HistoryId(9999),
        },
    )
    .unwrap();
    let snippet = resolve_entry(
        &db,
        MenuRef::Snippet {
            id: SnippetId(9999),
        },
    )
    .unwrap();
    assert!(history.is_none());
    assert!(snippet.is_none());
}

#[test]
fn resolve_whitespace_only_content_is_none() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .save_history(&HistoryEntry::capture("  \n\t ".to_string()))
        .unwrap();

    let content = resolve_entry(&db, MenuRef::History { id }).unwrap();
    assert!(content.is_none());
}
