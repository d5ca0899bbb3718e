//! Dashboard summary statistics
//!
//! Headline numbers for the dashboard stat cards. These are derived fresh
//! from the snapshot on every call, like everything else in the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Subscription;
use crate::renewal;

/// Renewals within this many days count as "upcoming"
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Headline dashboard numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_subscriptions: usize,
    /// Total spend normalized to a monthly figure across billing cycles
    pub monthly_spend: f64,
    /// Renewals due within the next week, overdue included
    pub upcoming_renewals: usize,
    /// Subscriptions with alerts turned on
    pub alerts_enabled: usize,
}

/// Compute summary stats over a collection.
pub fn summarize(subs: &[Subscription], now: DateTime<Utc>) -> SummaryStats {
    let monthly_spend = subs
        .iter()
        .map(|s| s.amount * s.billing_cycle.renewals_per_month())
        .sum();

    let upcoming_renewals = subs
        .iter()
        .filter(|s| renewal::days_until(s.next_renewal_date, now) <= UPCOMING_WINDOW_DAYS)
        .count();

    let alerts_enabled = subs.iter().filter(|s| s.alerts_enabled).count();

    let stats = SummaryStats {
        total_subscriptions: subs.len(),
        monthly_spend,
        upcoming_renewals,
        alerts_enabled,
    };

    debug!(
        "Summary: {} subscriptions, {:.2}/mo, {} upcoming, {} with alerts",
        stats.total_subscriptions, stats.monthly_spend, stats.upcoming_renewals, stats.alerts_enabled
    );

    stats
}
