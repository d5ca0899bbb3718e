//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SubTrack - subscription renewal and spend analytics
#[derive(Parser)]
#[command(name = "subtrack")]
#[command(about = "Renewal countdowns and spend analytics for your subscriptions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the subscriptions snapshot (JSON array of records)
    #[arg(long, default_value = "subscriptions.json", global = true)]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the reference instant for all time math
    /// (RFC 3339 or YYYY-MM-DD; defaults to the current time)
    ///
    /// Every time-sensitive computation takes "now" as an explicit input,
    /// so pinning it makes output fully reproducible.
    #[arg(long, global = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show dashboard analytics (stat cards, chart series, filtered list)
    Dashboard {
        /// Renewal window in days: all, 30, 90, 180, 365
        #[arg(long, default_value = "all")]
        window: String,

        /// Category filter ("all" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Billing cycle filter: all, weekly, monthly, quarterly, half_yearly, yearly
        #[arg(long, default_value = "all")]
        cycle: String,

        /// Emit the chart series as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// List subscriptions with search and sorting
    List {
        /// Case-insensitive substring match against service names
        #[arg(short, long)]
        search: Option<String>,

        /// Category filter ("all" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Billing cycle filter: all, weekly, monthly, quarterly, half_yearly, yearly
        #[arg(long, default_value = "all")]
        cycle: String,

        /// Sort key: renewal, amount (anything else keeps snapshot order)
        #[arg(long, default_value = "renewal")]
        sort: String,
    },

    /// List the distinct categories present in the snapshot
    Categories,
}
