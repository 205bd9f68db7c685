//! Menu partitioning and assembly.
//!
//! `partition` is the pure core: it folds an ordered list of items into
//! immutable, size-capped pages. `build_menu` composes partitioned history
//! with one node per snippet group and the fixed action entries into the
//! final presented structure. Both take their limits as explicit arguments
//! so live settings changes apply on the next build and tests can pin any
//! configuration.

use crate::interface::{
    ClipTrayError, ClipTrayResult, GroupItems, GroupNode, MenuAction, MenuDescription, MenuEntry,
    MenuNode, MenuPage, MenuRef, MenuSettings, Store,
};
use crate::models::{first_line, truncate_title};

/// Display title for one item: first line of the trimmed content, truncated.
fn leaf_title(content: &str, title_max_len: usize) -> String {
    truncate_title(first_line(content.trim()), title_max_len)
}

// ─────────────────────────────────────────────────────────────────────────────
// PARTITIONER
// ─────────────────────────────────────────────────────────────────────────────

/// Partition an ordered list of `(back-reference, content)` items into pages.
///
/// Only the first `min(items.len(), global_cap)` items are considered. Every
/// non-final page holds exactly `page_size` entries; page labels cover the
/// absolute 1-based range (`"16 - 30"`) while entry numbering restarts at 1
/// on each page.
///
/// `page_size == 0` is a configuration fault and is rejected rather than
/// left to divide by zero. `global_cap == 0` yields no pages at all.
pub fn partition(
    items: &[(MenuRef, &str)],
    page_size: usize,
    global_cap: usize,
    title_max_len: usize,
) -> ClipTrayResult<Vec<MenuPage>> {
    if page_size == 0 {
        return Err(ClipTrayError::InvalidConfig(
            "items per page must be positive".into(),
        ));
    }

    let total = items.len().min(global_cap);
    let pages = items[..total]
        .chunks(page_size)
        .enumerate()
        .map(|(page_idx, chunk)| {
            let lower = page_idx * page_size + 1;
            let upper = page_idx * page_size + chunk.len();
            MenuPage {
                label: format!("{lower} - {upper}"),
                entries: chunk
                    .iter()
                    .enumerate()
                    .map(|(pos_in_page, (reference, content))| MenuEntry {
                        label: format!(
                            "{}. {}",
                            pos_in_page + 1,
                            leaf_title(content, title_max_len)
                        ),
                        reference: *reference,
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(pages)
}

/// Numbered entries without a page wrapper, for groups that fit in one page.
fn flat_entries(items: &[(MenuRef, &str)], title_max_len: usize) -> Vec<MenuEntry> {
    items
        .iter()
        .enumerate()
        .map(|(i, (reference, content))| MenuEntry {
            label: format!("{}. {}", i + 1, leaf_title(content, title_max_len)),
            reference: *reference,
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// ASSEMBLER
// ─────────────────────────────────────────────────────────────────────────────

/// Build the full menu description from a fresh read of the store.
///
/// Node order: history pages, separator (only when at least one group
/// exists), one node per group, separator, the edit-snippets / settings /
/// delete-all-histories actions, separator, exit. Rebuilds are not
/// incremental; the partitioner's cost is linear in the bounded `max_count`.
pub fn build_menu(store: &dyn Store, settings: &MenuSettings) -> ClipTrayResult<MenuDescription> {
    let histories = store.load_histories()?;
    let history_items: Vec<(MenuRef, &str)> = histories
        .iter()
        .filter_map(|h| h.id.map(|id| (MenuRef::History { id }, h.content.as_str())))
        .collect();
    let history_pages = partition(
        &history_items,
        settings.items_per_group,
        settings.max_count,
        settings.max_menu_title,
    )?;

    let mut nodes: Vec<MenuNode> = history_pages
        .into_iter()
        .map(|page| MenuNode::Page { page })
        .collect();

    let groups = store.load_groups()?;
    if !groups.is_empty() {
        nodes.push(MenuNode::Separator);
    }
    for group in groups {
        let snippets = store.load_snippets_in_group(group.id)?;
        let snippet_items: Vec<(MenuRef, &str)> = snippets
            .iter()
            .filter_map(|s| s.id.map(|id| (MenuRef::Snippet { id }, s.content.as_str())))
            .collect();

        let items = if snippet_items.len() > settings.items_per_group {
            GroupItems::Paged {
                pages: partition(
                    &snippet_items,
                    settings.items_per_group,
                    settings.max_count,
                    settings.max_menu_title,
                )?,
            }
        } else {
            GroupItems::Flat {
                entries: flat_entries(&snippet_items, settings.max_menu_title),
            }
        };

        nodes.push(MenuNode::Group {
            group: GroupNode {
                id: group.id,
                name: group.name,
                enabled: !snippet_items.is_empty(),
                items,
            },
        });
    }

    nodes.push(MenuNode::Separator);
    nodes.push(MenuNode::Action {
        action: MenuAction::EditSnippets,
    });
    nodes.push(MenuNode::Action {
        action: MenuAction::Settings,
    });
    nodes.push(MenuNode::Action {
        action: MenuAction::DeleteAllHistories,
    });
    nodes.push(MenuNode::Separator);
    nodes.push(MenuNode::Action {
        action: MenuAction::Exit,
    });

    Ok(MenuDescription { nodes })
}

// ─────────────────────────────────────────────────────────────────────────────
// CLICK RESOLUTION
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve a clicked menu entry to pasteable content.
///
/// Returns `Ok(None)` for stale ids (the record was deleted after the menu
/// was built) and for content that is empty after trim; both are treated as
/// a silent no-op by the caller.
pub fn resolve_entry(store: &dyn Store, reference: MenuRef) -> ClipTrayResult<Option<String>> {
    let content = match reference {
        MenuRef::History { id } => store.load_history_of_id(id)?.map(|h| h.content),
        MenuRef::Snippet { id } => store.load_snippet_of_id(id)?.map(|s| s.content),
    };
    Ok(content.filter(|c| !c.trim().is_empty()))
}
