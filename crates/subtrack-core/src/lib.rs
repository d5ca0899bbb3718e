//! SubTrack Core Library
//!
//! Pure analytics engine for the SubTrack subscription tracker:
//! - Renewal date arithmetic and urgency banding
//! - Predicate-based filtering by renewal window, category, billing cycle, and search
//! - Stable sorting by renewal date or amount
//! - Chart-ready aggregation series (spend by service/category, renewal timeline)
//! - Category index for building filter option lists
//! - Dashboard summary statistics
//!
//! Every operation is a deterministic function over its arguments plus an
//! explicitly supplied "now" instant. The engine performs no I/O, holds no
//! state between calls, and never mutates its input records.

pub mod categories;
pub mod charts;
pub mod error;
pub mod filter;
pub mod models;
pub mod renewal;
pub mod sort;
pub mod summary;
pub mod views;

pub use categories::distinct_categories;
pub use charts::{
    renewal_timeline, spend_by_category, spend_by_service, CategorySpend, ServiceSpend,
    TimelinePoint,
};
pub use error::{Error, Result};
pub use filter::FilterCriteria;
pub use models::{BillingCycle, CycleFilter, RenewalWindow, SortKey, Subscription};
pub use renewal::{days_until, parse_instant, UrgencyBand};
pub use sort::sort_subscriptions;
pub use summary::{summarize, SummaryStats};
pub use views::{dashboard_view, subscriptions_view, DashboardView, SubscriptionView};
