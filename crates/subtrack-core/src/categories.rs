//! Category index for building filter option lists

use crate::models::Subscription;

/// Sentinel option meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Distinct categories present in a collection, in first-seen order,
/// prefixed with the `"all"` sentinel.
///
/// Blank and absent categories are skipped; the synthetic "Other" label
/// used by aggregation is never offered as a filter option.
pub fn distinct_categories(subs: &[Subscription]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for sub in subs {
        if let Some(category) = sub.category.as_deref() {
            if category.trim().is_empty() {
                continue;
            }
            if !options.iter().any(|c| c == category) {
                options.push(category.to_string());
            }
        }
    }
    options
}
