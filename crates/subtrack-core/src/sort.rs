//! Total-order comparators for subscription collections

use crate::models::{SortKey, Subscription};

/// Sort a collection by the given key, returning a new ordering.
///
/// Both comparators are stable: ties keep their input relative order.
/// [`SortKey::Unsorted`] is the identity.
pub fn sort_subscriptions(mut subs: Vec<Subscription>, key: SortKey) -> Vec<Subscription> {
    match key {
        // Highest spend first; total_cmp gives a total order over f64
        SortKey::Amount => subs.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        // Soonest first; past-due items sort to the front since their
        // instant is earliest
        SortKey::RenewalDate => subs.sort_by_key(|s| s.next_renewal_date),
        SortKey::Unsorted => {}
    }
    subs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillingCycle;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()
    }

    fn sub(id: i64, name: &str, amount: f64, days_out: i64) -> Subscription {
        Subscription {
            id,
            name: name.to_string(),
            category: None,
            amount,
            billing_cycle: BillingCycle::Monthly,
            next_renewal_date: now() + Duration::days(days_out),
            alerts_enabled: true,
            remind_before_days: 3,
        }
    }

    #[test]
    fn test_sort_by_amount_descending() {
        let subs = vec![
            sub(1, "Low", 100.0, 5),
            sub(2, "High", 900.0, 10),
            sub(3, "Mid", 400.0, 1),
        ];
        let sorted = sort_subscriptions(subs, SortKey::Amount);
        let names: Vec<&str> = sorted.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_amount_ties_keep_input_order() {
        let subs = vec![
            sub(1, "First", 100.0, 5),
            sub(2, "Second", 100.0, 10),
            sub(3, "Third", 100.0, 1),
        ];
        let sorted = sort_subscriptions(subs, SortKey::Amount);
        let ids: Vec<i64> = sorted.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_renewal_date_ascending() {
        let subs = vec![
            sub(1, "Later", 100.0, 30),
            sub(2, "Overdue", 200.0, -5),
            sub(3, "Soon", 300.0, 2),
        ];
        let sorted = sort_subscriptions(subs, SortKey::RenewalDate);
        let names: Vec<&str> = sorted.iter().map(|s| s.name.as_str()).collect();
        // Past-due sorts first: its instant is earliest
        assert_eq!(names, vec!["Overdue", "Soon", "Later"]);
    }

    #[test]
    fn test_unsorted_is_identity() {
        let subs = vec![sub(3, "C", 1.0, 3), sub(1, "A", 3.0, 1), sub(2, "B", 2.0, 2)];
        let sorted = sort_subscriptions(subs, SortKey::Unsorted);
        let ids: Vec<i64> = sorted.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_does_not_drop_elements() {
        let subs = vec![sub(1, "A", 1.0, 1), sub(2, "B", 2.0, 2)];
        assert_eq!(sort_subscriptions(subs, SortKey::Amount).len(), 2);
    }
}
