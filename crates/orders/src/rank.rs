//! Status-priority weights and the multi-key comparison.

use core::cmp::Ordering;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockline_core::DomainError;

use crate::unified::UnifiedOrder;

/// Weight assigned to a status string absent from the table; the table's
/// middle value.
pub const DEFAULT_STATUS_WEIGHT: u8 = 5;

/// Fixed status-priority table, higher = more urgent/actionable.
///
/// Lookup is case-insensitive; unrecognized statuses land in the middle
/// rather than erroring.
pub fn status_weight(status: &str) -> u8 {
    match status.trim().to_ascii_lowercase().as_str() {
        "overdue" => 9,
        "exception" => 8,
        "pending" | "pending approval" => 7,
        "draft" => 6,
        "ordered" | "confirmed" => 5,
        "shipped" => 4,
        "in transit" => 3,
        "delivered" => 2,
        "received" => 1,
        "cancelled" | "canceled" => 0,
        _ => DEFAULT_STATUS_WEIGHT,
    }
}

/// Which unified-order field drives the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    OrderDate,
    Status,
    Vendor,
    Eta,
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "order-date" | "order_date" | "date" => Ok(SortKey::OrderDate),
            "status" => Ok(SortKey::Status),
            "vendor" | "vendor-name" | "vendor_name" => Ok(SortKey::Vendor),
            "eta" => Ok(SortKey::Eta),
            other => Err(DomainError::validation(format!("unknown sort key: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(DomainError::validation(format!(
                "unknown sort direction: {other}"
            ))),
        }
    }
}

// Missing dates compare as the latest possible instant. The fallback does
// not change with direction; under Descending such records surface first.
fn date_or_max(date: Option<DateTime<Utc>>) -> DateTime<Utc> {
    date.unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Ascending comparison for one sort key; direction is applied by the
/// caller as a uniform sign inversion.
pub(crate) fn compare(a: &UnifiedOrder, b: &UnifiedOrder, key: SortKey) -> Ordering {
    match key {
        SortKey::Status => status_weight(&a.status).cmp(&status_weight(&b.status)),
        SortKey::Vendor => a.vendor.cmp(&b.vendor),
        SortKey::OrderDate => date_or_max(a.order_date).cmp(&date_or_max(b.order_date)),
        SortKey::Eta => date_or_max(a.eta()).cmp(&date_or_max(b.eta())),
    }
}
