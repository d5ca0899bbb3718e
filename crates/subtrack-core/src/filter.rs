//! Filter criteria builder for subscription collections
//!
//! This module provides a builder pattern for constructing the combined
//! window/category/cycle/search predicate used by both the dashboard and
//! subscriptions views. Filtering is order-preserving: the result is a
//! subsequence of the input.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{CycleFilter, RenewalWindow, SortKey, Subscription};
use crate::renewal;

/// Caller-constructed filter criteria, immutable per invocation.
///
/// All active tests are ANDed. The default value (everything "all",
/// no search, no sort) is the identity filter.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Upper bound on days-until-renewal; overdue items are never excluded
    pub window: RenewalWindow,
    /// Exact category match; `None` means every category
    pub category: Option<String>,
    pub cycle: CycleFilter,
    /// Case-insensitive substring match against the service name
    /// (subscriptions view only)
    pub search: Option<String>,
    /// Sort applied after filtering (subscriptions view only)
    pub sort_key: SortKey,
}

impl FilterCriteria {
    /// Create the identity criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the renewal window
    pub fn window(mut self, window: RenewalWindow) -> Self {
        self.window = window;
        self
    }

    /// Set the category filter ("all" and blank both mean no filter).
    ///
    /// The sentinel is matched exactly: categories are case-sensitive
    /// everywhere, so a real category named "All" stays selectable.
    pub fn category(mut self, category: Option<&str>) -> Self {
        self.category = category
            .filter(|c| !c.is_empty() && *c != "all")
            .map(String::from);
        self
    }

    /// Set the billing-cycle filter
    pub fn cycle(mut self, cycle: CycleFilter) -> Self {
        self.cycle = cycle;
        self
    }

    /// Set the search text (blank means no search)
    pub fn search(mut self, search: Option<&str>) -> Self {
        self.search = search.filter(|s| !s.trim().is_empty()).map(String::from);
        self
    }

    /// Set the sort key
    pub fn sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Whether a single subscription passes every active test.
    pub fn matches(&self, sub: &Subscription, now: DateTime<Utc>) -> bool {
        // Window test: only an upper bound is enforced. Overdue items
        // (days_left <= 0) always pass a bounded window - renewals that
        // already slipped must stay visible.
        if let RenewalWindow::Days(bound) = self.window {
            if renewal::days_until(sub.next_renewal_date, now) > bound {
                return false;
            }
        }

        // Category test: exact, case-sensitive. A subscription without a
        // category never matches a specific category filter.
        if let Some(category) = &self.category {
            match sub.category.as_deref() {
                Some(c) if c == category => {}
                _ => return false,
            }
        }

        // Billing-cycle test (unrecognized selections match nothing)
        if !self.cycle.matches(sub.billing_cycle) {
            return false;
        }

        // Search test: case-insensitive substring against the name
        if let Some(search) = &self.search {
            if !sub.name.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }

        true
    }

    /// Filter a collection, preserving input order.
    ///
    /// Deterministic and idempotent: same inputs give the same subsequence,
    /// and filtering an already-filtered result is a no-op.
    pub fn filter(&self, subs: &[Subscription], now: DateTime<Utc>) -> Vec<Subscription> {
        let filtered: Vec<Subscription> = subs
            .iter()
            .filter(|s| self.matches(s, now))
            .cloned()
            .collect();

        debug!(
            "Filter kept {} of {} subscriptions (window={}, category={:?}, cycle={})",
            filtered.len(),
            subs.len(),
            self.window,
            self.category,
            self.cycle
        );

        filtered
    }
}
