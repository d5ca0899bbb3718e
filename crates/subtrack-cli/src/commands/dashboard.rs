//! Dashboard command implementation

use anyhow::Result;
use chrono::{DateTime, Utc};
use subtrack_core::{dashboard_view, FilterCriteria, Subscription};

use super::{days_left_label, truncate};

pub fn cmd_dashboard(
    subs: &[Subscription],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let view = dashboard_view(subs, criteria, now);

    if json {
        let out = serde_json::json!({
            "stats": view.stats,
            "spend_by_service": view.spend_by_service,
            "spend_by_category": view.spend_by_category,
            "renewal_timeline": view.renewal_timeline,
            "categories": view.categories,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("📊 Dashboard");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Active subscriptions: {:<6} Monthly spend: {:.2}",
        view.stats.total_subscriptions, view.stats.monthly_spend
    );
    println!(
        "   Upcoming renewals:    {:<6} Alerts enabled: {}",
        view.stats.upcoming_renewals, view.stats.alerts_enabled
    );

    if view.subscriptions.is_empty() {
        println!();
        println!("   No subscriptions match the selected filters");
        return Ok(());
    }

    println!();
    println!("   💸 Spend by Service");
    for entry in &view.spend_by_service {
        println!("   {:24} │ {:>10.2}", truncate(&entry.name, 24), entry.amount);
    }

    println!();
    println!("   🗂  Spend by Category");
    for entry in &view.spend_by_category {
        println!("   {:24} │ {:>10.2}", truncate(&entry.name, 24), entry.value);
    }

    println!();
    println!("   📅 Renewal Timeline");
    for point in &view.renewal_timeline {
        println!(
            "   {:24} │ {:>9}",
            truncate(&point.name, 24),
            days_left_label(point.days_left)
        );
    }

    Ok(())
}
