//! Domain models for SubTrack

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::renewal;

/// A recurring subscription, owned by the caller.
///
/// Records are produced by the surrounding application (storage/API layer)
/// and handed to the engine as an immutable snapshot. The engine never
/// mutates them and performs no business-rule validation beyond requiring
/// a parseable renewal date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    /// Display name of the service
    pub name: String,
    /// Optional label; absent means "Other" for aggregation purposes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Spend per billing cycle, in a fixed currency unit
    pub amount: f64,
    pub billing_cycle: BillingCycle,
    /// Instant after which the subscription is considered due
    #[serde(deserialize_with = "renewal::deserialize_instant")]
    pub next_renewal_date: DateTime<Utc>,
    #[serde(default = "default_alerts_enabled")]
    pub alerts_enabled: bool,
    /// By convention one of 1, 3, 7 - not enforced here
    #[serde(default = "default_remind_before_days")]
    pub remind_before_days: u32,
}

fn default_alerts_enabled() -> bool {
    true
}

fn default_remind_before_days() -> u32 {
    3
}

impl Subscription {
    /// Category label used for grouping. Absent or blank categories
    /// fall back to "Other".
    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or("Other")
    }
}

/// Parse a JSON snapshot (array of subscription records) into owned models.
///
/// This is the handoff point from the external storage/API collaborator;
/// records with unparseable renewal dates are rejected here rather than
/// propagating into the date arithmetic.
pub fn from_json_snapshot(json: &str) -> Result<Vec<Subscription>> {
    let subs: Vec<Subscription> = serde_json::from_str(json)?;
    Ok(subs)
}

/// Subscription billing cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Weekly,
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::HalfYearly => "half_yearly",
            Self::Yearly => "yearly",
        }
    }

    /// Renewals per month, for normalizing per-cycle amounts into a
    /// monthly spend figure
    pub fn renewals_per_month(&self) -> f64 {
        match self {
            Self::Weekly => 52.0 / 12.0,
            Self::Monthly => 1.0,
            Self::Quarterly => 1.0 / 3.0,
            Self::HalfYearly => 1.0 / 6.0,
            Self::Yearly => 1.0 / 12.0,
        }
    }
}

impl std::str::FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "half_yearly" | "halfyearly" => Ok(Self::HalfYearly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(format!("Unknown billing cycle: {}", s)),
        }
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Upper bound on days-until-renewal used by the filter engine.
///
/// Bounded windows never exclude overdue subscriptions: only an upper
/// bound is enforced, so items already past due stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenewalWindow {
    /// No bound ("all time")
    #[default]
    All,
    /// Inclusive upper bound in days; one of 30, 90, 180, 365
    Days(i64),
}

impl std::str::FromStr for RenewalWindow {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "30" => Ok(Self::Days(30)),
            "90" => Ok(Self::Days(90)),
            "180" => Ok(Self::Days(180)),
            "365" => Ok(Self::Days(365)),
            _ => Err(format!(
                "Unknown renewal window: {} (expected all, 30, 90, 180, or 365)",
                s
            )),
        }
    }
}

impl std::fmt::Display for RenewalWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Days(d) => write!(f, "{}", d),
        }
    }
}

/// Billing-cycle filter selection.
///
/// Unlike [`BillingCycle`] parsing, this never fails: an unrecognized
/// value is kept and simply matches no subscription, mirroring how the
/// UI treats a stale selector value as a no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CycleFilter {
    /// Match every billing cycle
    #[default]
    All,
    /// Match exactly one billing cycle
    Only(BillingCycle),
    /// Unrecognized selection; matches nothing
    Unrecognized(String),
}

impl CycleFilter {
    /// Parse a selector value. Never fails.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        match s.parse::<BillingCycle>() {
            Ok(cycle) => Self::Only(cycle),
            Err(_) => Self::Unrecognized(s.to_string()),
        }
    }

    pub fn matches(&self, cycle: BillingCycle) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == cycle,
            Self::Unrecognized(_) => false,
        }
    }
}

impl std::fmt::Display for CycleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(c) => write!(f, "{}", c),
            Self::Unrecognized(s) => write!(f, "{}", s),
        }
    }
}

/// Sort key for subscription listings.
///
/// An unrecognized key falls back to [`SortKey::Unsorted`] (input order
/// preserved), matching the dashboard view which filters but never sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by next renewal date (soonest first)
    RenewalDate,
    /// Descending by amount (highest spend first)
    Amount,
    /// Identity - keep input order
    #[default]
    Unsorted,
}

impl SortKey {
    /// Parse a selector value. Never fails; unknown keys mean "no sort".
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "renewal" | "renewal_date" | "renewaldate" => Self::RenewalDate,
            "amount" => Self::Amount,
            _ => Self::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RenewalDate => "renewal",
            Self::Amount => "amount",
            Self::Unsorted => "none",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
