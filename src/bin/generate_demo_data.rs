//! Demo database generator.
//!
//! Seeds a SQLite database with demo history, groups, and snippets, then
//! prints the assembled tray menu as JSON so the structure can be eyeballed
//! without a host shell.

use anyhow::{Context, Result};
use clap::Parser;
use rand::RngExt;

use cliptray_core::demo_data;
use cliptray_core::{build_menu, Database, MenuSettings};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the SQLite database to create or reuse
    #[arg(short, long, default_value = "DemoData.sqlite")]
    db_path: String,

    /// History retention cap
    #[arg(long, default_value_t = 100)]
    max_count: usize,

    /// Menu title truncation length, in characters
    #[arg(long, default_value_t = 40)]
    max_menu_title: usize,

    /// Items per page, and the flat-vs-paged threshold for groups
    #[arg(long, default_value_t = 15)]
    items_per_group: usize,

    /// Shift the demo timeline by a random amount (up to one hour back)
    #[arg(long)]
    jitter: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let db = Database::open(&args.db_path)
        .with_context(|| format!("failed to open database at {}", args.db_path))?;

    if args.jitter {
        let now = chrono::Utc::now().timestamp() - rand::rng().random_range(0..3600i64);
        demo_data::seed_at(&db, now).context("failed to seed demo data")?;
    } else {
        demo_data::seed(&db).context("failed to seed demo data")?;
    }

    let settings = MenuSettings {
        max_count: args.max_count,
        max_menu_title: args.max_menu_title,
        items_per_group: args.items_per_group,
    };
    let menu = build_menu(&db, &settings).context("failed to build menu")?;

    println!("{}", serde_json::to_string_pretty(&menu)?);
    Ok(())
}
