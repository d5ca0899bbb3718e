//! Chart-ready aggregation series
//!
//! Three independent projections over an already-filtered collection.
//! Each is a pure map/group-by; grouping keeps first-seen order so chart
//! legends and colors stay deterministic across renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Subscription;
use crate::renewal;

/// One bar of the per-service spend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSpend {
    pub name: String,
    pub amount: f64,
}

/// One slice of the per-category spend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub name: String,
    pub value: f64,
}

/// One point of the renewal timeline series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub name: String,
    pub days_left: i64,
}

/// Per-service amounts, one entry per subscription in input order.
///
/// A direct projection rather than a reduction - duplicate service names
/// stay as separate bars.
pub fn spend_by_service(subs: &[Subscription]) -> Vec<ServiceSpend> {
    subs.iter()
        .map(|s| ServiceSpend {
            name: s.name.clone(),
            amount: s.amount,
        })
        .collect()
}

/// Per-category totals, grouped in first-seen order.
///
/// Subscriptions without a category land in "Other". The sum over all
/// groups equals the sum of amounts over the input.
pub fn spend_by_category(subs: &[Subscription]) -> Vec<CategorySpend> {
    let mut series: Vec<CategorySpend> = Vec::new();
    for sub in subs {
        let key = sub.category_label();
        match series.iter_mut().find(|entry| entry.name == key) {
            Some(entry) => entry.value += sub.amount,
            None => series.push(CategorySpend {
                name: key.to_string(),
                value: sub.amount,
            }),
        }
    }
    series
}

/// Days-remaining per service, one entry per subscription in input order.
pub fn renewal_timeline(subs: &[Subscription], now: DateTime<Utc>) -> Vec<TimelinePoint> {
    subs.iter()
        .map(|s| TimelinePoint {
            name: s.name.clone(),
            days_left: renewal::days_until(s.next_renewal_date, now),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillingCycle;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()
    }

    fn sub(name: &str, category: Option<&str>, amount: f64, days_out: i64) -> Subscription {
        Subscription {
            id: 0,
            name: name.to_string(),
            category: category.map(String::from),
            amount,
            billing_cycle: BillingCycle::Monthly,
            next_renewal_date: now() + Duration::days(days_out),
            alerts_enabled: true,
            remind_before_days: 3,
        }
    }

    #[test]
    fn test_spend_by_service_is_a_projection() {
        let subs = vec![
            sub("Netflix", Some("Entertainment"), 500.0, 2),
            sub("AWS", Some("Cloud"), 1200.0, 40),
            sub("Netflix", Some("Entertainment"), 300.0, 10),
        ];
        let series = spend_by_service(&subs);
        // One entry per subscription, order preserved, no merging
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].name, "Netflix");
        assert_eq!(series[0].amount, 500.0);
        assert_eq!(series[2].amount, 300.0);
    }

    #[test]
    fn test_spend_by_category_first_seen_order() {
        let subs = vec![
            sub("Netflix", Some("Entertainment"), 500.0, 2),
            sub("AWS", Some("Cloud"), 1200.0, 40),
            sub("Hulu", Some("Entertainment"), 200.0, 5),
        ];
        let series = spend_by_category(&subs);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Entertainment");
        assert_eq!(series[0].value, 700.0);
        assert_eq!(series[1].name, "Cloud");
        assert_eq!(series[1].value, 1200.0);
    }

    #[test]
    fn test_spend_by_category_other_fallback() {
        let subs = vec![
            sub("Domain", None, 99.0, 300),
            sub("VPN", Some(""), 50.0, 20),
            sub("Netflix", Some("Entertainment"), 500.0, 2),
        ];
        let series = spend_by_category(&subs);
        assert_eq!(series[0].name, "Other");
        assert_eq!(series[0].value, 149.0);
        assert_eq!(series[1].name, "Entertainment");
    }

    #[test]
    fn test_spend_by_category_conserves_total() {
        let subs = vec![
            sub("A", Some("X"), 10.5, 1),
            sub("B", Some("Y"), 20.25, 2),
            sub("C", None, 5.0, 3),
            sub("D", Some("X"), 4.25, 4),
        ];
        let direct: f64 = subs.iter().map(|s| s.amount).sum();
        let grouped: f64 = spend_by_category(&subs).iter().map(|e| e.value).sum();
        assert!((direct - grouped).abs() < 1e-9);
    }

    #[test]
    fn test_renewal_timeline_order_and_values() {
        let subs = vec![
            sub("Netflix", None, 500.0, 2),
            sub("Domain", None, 99.0, -5),
        ];
        let series = renewal_timeline(&subs, now());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Netflix");
        assert_eq!(series[0].days_left, 2);
        assert_eq!(series[1].days_left, -5);
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        assert!(spend_by_service(&[]).is_empty());
        assert!(spend_by_category(&[]).is_empty());
        assert!(renewal_timeline(&[], now()).is_empty());
    }
}
