//! View facades composing the engine for the two display surfaces
//!
//! The dashboard view filters (never sorts) and derives chart series plus
//! summary stats; the subscriptions view adds free-text search and an
//! explicit sort. Both annotate each row with days-left and urgency so
//! the renderer never recomputes time math.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::categories;
use crate::charts::{self, CategorySpend, ServiceSpend, TimelinePoint};
use crate::filter::FilterCriteria;
use crate::models::{SortKey, Subscription};
use crate::renewal::{self, UrgencyBand};
use crate::sort;
use crate::summary::{self, SummaryStats};

/// A subscription annotated with display-facing renewal state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionView {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub days_left: i64,
    pub band: UrgencyBand,
}

/// Everything the dashboard renders in one pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub stats: SummaryStats,
    /// Filtered rows in snapshot order (the dashboard never sorts)
    pub subscriptions: Vec<SubscriptionView>,
    pub spend_by_service: Vec<ServiceSpend>,
    pub spend_by_category: Vec<CategorySpend>,
    pub renewal_timeline: Vec<TimelinePoint>,
    /// Filter options derived from the unfiltered snapshot
    pub categories: Vec<String>,
}

fn annotate(subs: Vec<Subscription>, now: DateTime<Utc>) -> Vec<SubscriptionView> {
    subs.into_iter()
        .map(|subscription| {
            let days_left = renewal::days_until(subscription.next_renewal_date, now);
            SubscriptionView {
                subscription,
                days_left,
                band: UrgencyBand::for_days_left(days_left),
            }
        })
        .collect()
}

/// Build the dashboard view: filter by window/category/cycle, then derive
/// stats and the three chart series over the filtered rows.
///
/// Search and sort are subscriptions-view concerns and are ignored here;
/// category options come from the raw snapshot so narrowing a filter never
/// shrinks the selector.
pub fn dashboard_view(
    subs: &[Subscription],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> DashboardView {
    let criteria = FilterCriteria {
        search: None,
        sort_key: SortKey::Unsorted,
        ..criteria.clone()
    };
    let filtered = criteria.filter(subs, now);

    DashboardView {
        stats: summary::summarize(&filtered, now),
        spend_by_service: charts::spend_by_service(&filtered),
        spend_by_category: charts::spend_by_category(&filtered),
        renewal_timeline: charts::renewal_timeline(&filtered, now),
        categories: categories::distinct_categories(subs),
        subscriptions: annotate(filtered, now),
    }
}

/// Build the subscriptions view: filter (search included), sort by the
/// criteria's sort key, and annotate each row.
pub fn subscriptions_view(
    subs: &[Subscription],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<SubscriptionView> {
    let filtered = criteria.filter(subs, now);
    let sorted = sort::sort_subscriptions(filtered, criteria.sort_key);
    annotate(sorted, now)
}
