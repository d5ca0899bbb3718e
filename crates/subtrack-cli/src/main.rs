//! SubTrack CLI - Subscription renewal and spend analytics
//!
//! Usage:
//!   subtrack dashboard --window 30          Filtered stats and chart series
//!   subtrack list --search net --sort amount Search and sort the listing
//!   subtrack categories                      Show filter options
//!
//! All commands read a JSON snapshot of subscription records (see --file)
//! and derive everything fresh; nothing is persisted.

mod cli;
mod commands;


use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use subtrack_core::{parse_instant, CycleFilter, FilterCriteria, RenewalWindow, SortKey};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    // The engine never reads a clock; the CLI supplies "now" (or a pinned
    // override for reproducible output).
    let now = match cli.now.as_deref() {
        Some(raw) => parse_instant(raw)?,
        None => Utc::now(),
    };

    let subs = commands::load_snapshot(&cli.file)?;

    match cli.command {
        Commands::Dashboard {
            window,
            category,
            cycle,
            json,
        } => {
            let criteria = FilterCriteria::new()
                .window(window.parse::<RenewalWindow>().map_err(|e| anyhow::anyhow!(e))?)
                .category(category.as_deref())
                .cycle(CycleFilter::parse(&cycle));
            commands::cmd_dashboard(&subs, &criteria, now, json)
        }
        Commands::List {
            search,
            category,
            cycle,
            sort,
        } => {
            let criteria = FilterCriteria::new()
                .search(search.as_deref())
                .category(category.as_deref())
                .cycle(CycleFilter::parse(&cycle))
                .sort_key(SortKey::parse(&sort));
            commands::cmd_list(&subs, &criteria, now)
        }
        Commands::Categories => commands::cmd_categories(&subs),
    }
}
