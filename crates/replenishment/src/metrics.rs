//! Replenishment metrics report and urgency classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockline_core::Sku;

/// How soon a SKU must be reordered, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Critical,
    Soon,
    Ok,
    Good,
}

impl Urgency {
    /// Map an upstream reorder-status label to an urgency bucket.
    ///
    /// Unrecognized labels classify as `Good`, matching the defaulting rule
    /// used everywhere else in the analyzer.
    pub fn from_status_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "OUT_OF_STOCK" | "CRITICAL" => Urgency::Critical,
            "REORDER_NOW" => Urgency::Soon,
            "REORDER_SOON" => Urgency::Ok,
            _ => Urgency::Good,
        }
    }

    /// Classify from the purchase-deadline offset (days of stock minus lead
    /// time). Must agree with [`Urgency::from_status_label`] whenever the
    /// upstream label was derived from the same thresholds.
    pub fn from_deadline_days(deadline_days: i64) -> Self {
        if deadline_days <= 0 {
            Urgency::Critical
        } else if deadline_days <= 7 {
            Urgency::Soon
        } else if deadline_days <= 30 {
            Urgency::Ok
        } else {
            Urgency::Good
        }
    }
}

/// Per-build consumption of a SKU.
///
/// A SKU is either consumed into assemblies at some measured average rate,
/// or it is purchased outlet stock that is never built into anything. The
/// two cases are kept distinct; the sentinel is never coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BuildConsumption {
    /// Average units consumed per assembly build.
    Average(f64),
    /// Purchased outlet stock, not consumed into an assembly.
    PurchasedStock,
}

/// Derived replenishment report for one catalog item. Not persisted;
/// recomputed from the snapshot on every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentMetrics {
    pub sku: Sku,
    pub name: String,
    /// Current on-hand quantity.
    pub remaining: f64,
    pub on_order: f64,
    pub sold_last30_days: f64,
    /// 90-day units sold, passed through unmodified.
    pub sold_last90_days: f64,
    /// Units consumed/sold per day.
    pub daily_velocity: f64,
    /// Projected days until depletion; 999 when velocity is zero.
    pub days_of_stock_left: i64,
    pub supplier_lead_time_days: i64,
    /// Days of stock left minus lead time. Non-positive means already
    /// past due.
    pub purchase_deadline_days: i64,
    /// Latest calendar date to place the order; `None` when overdue.
    pub purchase_again_by: Option<NaiveDate>,
    pub urgency: Urgency,
    /// Never less than the supplied MOQ.
    pub recommended_reorder_qty: i64,
    pub build_consumption: BuildConsumption,
}
