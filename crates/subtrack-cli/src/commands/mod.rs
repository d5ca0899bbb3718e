//! CLI command implementations
//!
//! Commands are organized by display surface:
//! - `dashboard` - Stat cards, chart series, and the filtered list
//! - `list` - Subscriptions page listing with search and sorting
//! - `categories` - Filter option listing

pub mod categories;
pub mod dashboard;
pub mod list;

// Re-export command functions for main.rs
pub use categories::*;
pub use dashboard::*;
pub use list::*;

use std::path::Path;

use anyhow::{Context, Result};
use subtrack_core::models::{self, Subscription};
use tracing::debug;

/// Load a subscriptions snapshot from a JSON file.
///
/// The snapshot is the handoff from whatever owns persistence; records
/// with malformed renewal dates are rejected here, before any analytics
/// run.
pub fn load_snapshot(path: &Path) -> Result<Vec<Subscription>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
    let subs = models::from_json_snapshot(&raw)
        .with_context(|| format!("Invalid snapshot in {}", path.display()))?;
    debug!("Loaded {} subscriptions from {}", subs.len(), path.display());
    Ok(subs)
}

/// Truncate a string to a maximum number of characters, adding "..." if
/// truncated. Cuts on char boundaries so multi-byte names are safe.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Human label for a days-left value ("Due" once it slips)
pub fn days_left_label(days_left: i64) -> String {
    if days_left <= 0 {
        "Due".to_string()
    } else if days_left == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days_left)
    }
}
