//! The replenishment calculation itself.
//!
//! A defensive calculator: absent numeric inputs become zero or a named
//! default, and no combination of sparse fields produces an error or a
//! panic. Precomputed figures on the snapshot (velocity, days of stock)
//! always win over rederiving them here, including an explicit zero.

use chrono::{Days, NaiveDate, Utc};

use crate::metrics::{BuildConsumption, ReplenishmentMetrics, Urgency};
use crate::snapshot::ItemSnapshot;

/// Supplier lead time assumed when the snapshot carries none.
pub const DEFAULT_LEAD_TIME_DAYS: i64 = 26;

/// Fixed safety buffer added to lead time when sizing a reorder.
pub const SAFETY_BUFFER_DAYS: i64 = 14;

/// "Effectively infinite" days of stock, reported when nothing is selling.
pub const STOCK_DAYS_SENTINEL: i64 = 999;

/// Analyze a snapshot against the current calendar date.
pub fn analyze(snapshot: &ItemSnapshot) -> ReplenishmentMetrics {
    analyze_at(snapshot, Utc::now().date_naive())
}

/// Analyze a snapshot against an explicit `today`, keeping the computation
/// pure for callers that replay history or pin dates in tests.
pub fn analyze_at(snapshot: &ItemSnapshot, today: NaiveDate) -> ReplenishmentMetrics {
    let item = snapshot.resolve();

    let remaining = item.on_hand.unwrap_or(0.0);
    let on_order = item.on_order.unwrap_or(0.0);
    let sold_30 = item.sold_30_day.unwrap_or(0.0);
    let sold_90 = item.sold_90_day.unwrap_or(0.0);

    // Precomputed velocity wins, explicit zero included.
    let daily_velocity = item.velocity.unwrap_or(sold_30 / 30.0);

    let days_of_stock_left = match item.days_of_stock {
        Some(days) => days,
        None if daily_velocity > 0.0 => (remaining / daily_velocity).floor() as i64,
        None => STOCK_DAYS_SENTINEL,
    };

    let supplier_lead_time_days = item.lead_time_days.unwrap_or(DEFAULT_LEAD_TIME_DAYS);
    let purchase_deadline_days = days_of_stock_left.saturating_sub(supplier_lead_time_days);

    // Non-positive deadline means order now; no date is offered.
    let purchase_again_by = if purchase_deadline_days > 0 {
        today.checked_add_days(Days::new(purchase_deadline_days as u64))
    } else {
        None
    };

    let urgency = match item.status_label.as_deref() {
        Some(label) => Urgency::from_status_label(label),
        None => Urgency::from_deadline_days(purchase_deadline_days),
    };

    let moq = item.moq.unwrap_or(0.0);
    let demand_over_horizon =
        daily_velocity * (supplier_lead_time_days.saturating_add(SAFETY_BUFFER_DAYS)) as f64;
    // Ceil after the max so a fractional MOQ rounds up instead of being
    // truncated below the minimum the vendor will accept.
    let recommended_reorder_qty = moq.max(demand_over_horizon.ceil()).ceil() as i64;

    let build_consumption = match item.avg_build_consumption {
        Some(avg) => BuildConsumption::Average(avg),
        None => BuildConsumption::PurchasedStock,
    };

    ReplenishmentMetrics {
        sku: item.sku,
        name: item.name,
        remaining,
        on_order,
        sold_last30_days: sold_30,
        sold_last90_days: sold_90,
        daily_velocity,
        days_of_stock_left,
        supplier_lead_time_days,
        purchase_deadline_days,
        purchase_again_by,
        urgency,
        recommended_reorder_qty,
        build_consumption,
    }
}
