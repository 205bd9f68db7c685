//! Shared demo data for the demo generator binary and integration tests.

use crate::interface::{ClipTrayResult, Store};
use crate::models::{HistoryEntry, Snippet};

pub struct DemoHistory {
    pub content: &'static str,
    /// Relative offset in seconds from "now" (negative means in the past)
    pub offset: i64,
}

pub const DEMO_HISTORY: &[DemoHistory] = &[
    DemoHistory {
        content: "Apartment walkthrough notes: 437 Riverside Dr #12, hardwood floors, south-facing windows, $2850/mo, contact Marcus Realty about lease terms...",
        offset: -7 * 24 * 60 * 60,
    },
    DemoHistory {
        content: "https://docs.rs/rusqlite/latest/rusqlite/",
        offset: -3600,
    },
    DemoHistory {
        content: r#"grep -rn "TODO\|FIXME" ./src"#,
        offset: -3500,
    },
    DemoHistory {
        content: "border-radius: 8px;",
        offset: -3400,
    },
    DemoHistory {
        content: "Meeting moved to 14:30 tomorrow, same room.\nBring the Q3 figures.",
        offset: -3300,
    },
    DemoHistory {
        content: "derive_key_from_password(salt: Data, iterations: Int) -> Data { ... }",
        offset: -3200,
    },
    DemoHistory {
        content: "return fetchData().then(res => res.json()).catch(handleError)",
        offset: -3100,
    },
    DemoHistory {
        content: "README.md",
        offset: -3000,
    },
    DemoHistory {
        content: "1 Infinite Loop, Cupertino, CA 95014",
        offset: -2900,
    },
    DemoHistory {
        content: "select count(*) from histories where createdAt > date('now', '-1 day');",
        offset: -2800,
    },
    DemoHistory {
        content: "ssh deploy@staging.internal -p 2222",
        offset: -2700,
    },
    DemoHistory {
        content: "The quick brown fox jumps over the lazy dog, then keeps running well past any reasonable menu title length to demonstrate truncation.",
        offset: -2600,
    },
    DemoHistory {
        content: "cargo test -- --nocapture",
        offset: -2500,
    },
    DemoHistory {
        content: "#7C3AED",
        offset: -2400,
    },
    DemoHistory {
        content: "tar -xzvf release-2026-08.tar.gz",
        offset: -2300,
    },
    DemoHistory {
        content: "fn main() {\n    println!(\"hello\");\n}",
        offset: -2200,
    },
    DemoHistory {
        content: "invoice-2026-0831.pdf",
        offset: -2100,
    },
    DemoHistory {
        content: "docker compose up -d --build",
        offset: -2000,
    },
    DemoHistory {
        content: "en0: flags=8863<UP,BROADCAST,SMART,RUNNING,SIMPLEX,MULTICAST> mtu 1500",
        offset: -1900,
    },
    DemoHistory {
        content: "Don't forget: renew the TLS cert before the 15th",
        offset: -1800,
    },
];

pub struct DemoSnippet {
    pub name: Option<&'static str>,
    pub content: &'static str,
}

pub struct DemoGroup {
    pub name: &'static str,
    pub snippets: &'static [DemoSnippet],
}

pub const DEMO_GROUPS: &[DemoGroup] = &[
    DemoGroup {
        name: "Git",
        snippets: &[
            DemoSnippet {
                name: Some("amend"),
                content: "git commit --amend --no-edit",
            },
            DemoSnippet {
                name: Some("undo last"),
                content: "git reset --soft HEAD~1",
            },
            DemoSnippet {
                name: None,
                content: "git log --oneline --graph --decorate -20",
            },
            DemoSnippet {
                name: Some("prune branches"),
                content: "git fetch --prune && git branch --merged | grep -v main | xargs git branch -d",
            },
        ],
    },
    DemoGroup {
        name: "Email",
        snippets: &[
            DemoSnippet {
                name: Some("signature"),
                content: "Best regards,\nAlex Rivera\nPlatform Engineering",
            },
            DemoSnippet {
                name: Some("out of office"),
                content: "I'm out of office until Monday with limited access to email.",
            },
        ],
    },
    // Intentionally empty: shows up disabled in the assembled menu.
    DemoGroup {
        name: "Scratch",
        snippets: &[],
    },
];

/// Seed the store with the demo tables, anchored at the current time.
pub fn seed(store: &dyn Store) -> ClipTrayResult<()> {
    seed_at(store, chrono::Utc::now().timestamp())
}

/// Seed the store with the demo tables, anchored at `now` (unix seconds).
pub fn seed_at(store: &dyn Store, now: i64) -> ClipTrayResult<()> {
    for item in DEMO_HISTORY {
        let entry = HistoryEntry {
            id: None,
            content: item.content.to_string(),
            created_at_unix: now + item.offset,
        };
        store.save_history(&entry)?;
    }

    for demo_group in DEMO_GROUPS {
        let group = store.add_group(demo_group.name)?;
        for s in demo_group.snippets {
            store.add_snippet(&Snippet::new(
                group.id,
                s.name.map(str::to_string),
                s.content.to_string(),
            ))?;
        }
    }

    Ok(())
}
