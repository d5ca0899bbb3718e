//! Subscription listing command implementation

use anyhow::Result;
use chrono::{DateTime, Utc};
use subtrack_core::{subscriptions_view, FilterCriteria, Subscription, UrgencyBand};

use super::{days_left_label, truncate};

pub fn cmd_list(subs: &[Subscription], criteria: &FilterCriteria, now: DateTime<Utc>) -> Result<()> {
    let rows = subscriptions_view(subs, criteria, now);

    if rows.is_empty() {
        println!("No subscriptions found");
        return Ok(());
    }

    println!();
    println!("📋 Subscriptions ({})", rows.len());
    println!("   ─────────────────────────────────────────────────────────────");

    for row in rows {
        let band_icon = match row.band {
            UrgencyBand::Due => "🔴",
            UrgencyBand::Critical => "🟠",
            UrgencyBand::Warning => "🟡",
            UrgencyBand::Normal => "🟢",
        };
        let sub = &row.subscription;

        println!(
            "   {} {:20} │ {:>8.2}/{:<11} │ {:14} │ {:>8}",
            band_icon,
            truncate(&sub.name, 20),
            sub.amount,
            sub.billing_cycle,
            truncate(sub.category_label(), 14),
            days_left_label(row.days_left)
        );
    }

    Ok(())
}
