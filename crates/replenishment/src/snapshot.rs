//! Catalog item snapshot and legacy-field resolution.
//!
//! Snapshots arrive from the inventory-history provider under two naming
//! conventions at once: the current camelCase API shape and a legacy
//! snake_case shape that older sync jobs still populate. Both conventions
//! may be present on the same record. Resolution is one explicit step
//! (`ItemSnapshot::resolve`) so the analyzer math never has to know about
//! the compatibility shim: per field, a populated legacy value wins over
//! the modern one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockline_core::Sku;

/// Raw catalog item snapshot, as fetched from the inventory-history provider.
///
/// Every quantity/rate field is optional in the wire shape; the analyzer
/// defaults what is absent instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    pub sku: Sku,
    #[serde(default)]
    pub name: String,

    // Modern camelCase fields.
    #[serde(default)]
    pub quantity_on_hand: Option<f64>,
    #[serde(default)]
    pub quantity_on_order: Option<f64>,
    #[serde(default)]
    pub reorder_minimum: Option<f64>,
    #[serde(default)]
    pub sold_last30_days: Option<f64>,
    #[serde(default)]
    pub sold_last90_days: Option<f64>,
    #[serde(default)]
    pub daily_velocity: Option<f64>,
    #[serde(default)]
    pub days_of_stock_left: Option<i64>,
    #[serde(default)]
    pub reorder_status: Option<String>,
    #[serde(default)]
    pub supplier_lead_time_days: Option<i64>,
    #[serde(default)]
    pub last_received_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub avg_build_consumption: Option<f64>,

    // Legacy snake_case fields, still written by the older sync jobs.
    #[serde(default, rename = "qty_on_hand")]
    pub legacy_qty_on_hand: Option<f64>,
    #[serde(default, rename = "qty_on_order")]
    pub legacy_qty_on_order: Option<f64>,
    #[serde(default, rename = "moq")]
    pub legacy_moq: Option<f64>,
    #[serde(default, rename = "sold_30_day")]
    pub legacy_sold_30_day: Option<f64>,
    #[serde(default, rename = "sold_90_day")]
    pub legacy_sold_90_day: Option<f64>,
    #[serde(default, rename = "velocity")]
    pub legacy_velocity: Option<f64>,
    #[serde(default, rename = "days_of_stock")]
    pub legacy_days_of_stock: Option<i64>,
    #[serde(default, rename = "reorder_status")]
    pub legacy_reorder_status: Option<String>,
    #[serde(default, rename = "lead_time_days")]
    pub legacy_lead_time_days: Option<i64>,
    #[serde(default, rename = "last_received")]
    pub legacy_last_received: Option<DateTime<Utc>>,
    #[serde(default, rename = "avg_build_consumption")]
    pub legacy_avg_build_consumption: Option<f64>,
}

impl ItemSnapshot {
    /// Minimal snapshot with every optional field absent.
    pub fn bare(sku: Sku, name: impl Into<String>) -> Self {
        Self {
            sku,
            name: name.into(),
            quantity_on_hand: None,
            quantity_on_order: None,
            reorder_minimum: None,
            sold_last30_days: None,
            sold_last90_days: None,
            daily_velocity: None,
            days_of_stock_left: None,
            reorder_status: None,
            supplier_lead_time_days: None,
            last_received_at: None,
            avg_build_consumption: None,
            legacy_qty_on_hand: None,
            legacy_qty_on_order: None,
            legacy_moq: None,
            legacy_sold_30_day: None,
            legacy_sold_90_day: None,
            legacy_velocity: None,
            legacy_days_of_stock: None,
            legacy_reorder_status: None,
            legacy_lead_time_days: None,
            legacy_last_received: None,
            legacy_avg_build_consumption: None,
        }
    }

    /// Collapse the two naming conventions into one value per field.
    ///
    /// Invariant: a populated legacy field is authoritative and is never
    /// silently dropped in favor of the modern one.
    pub fn resolve(&self) -> ResolvedItem {
        ResolvedItem {
            sku: self.sku.clone(),
            name: self.name.clone(),
            on_hand: prefer_legacy(&self.legacy_qty_on_hand, &self.quantity_on_hand),
            on_order: prefer_legacy(&self.legacy_qty_on_order, &self.quantity_on_order),
            moq: prefer_legacy(&self.legacy_moq, &self.reorder_minimum),
            sold_30_day: prefer_legacy(&self.legacy_sold_30_day, &self.sold_last30_days),
            sold_90_day: prefer_legacy(&self.legacy_sold_90_day, &self.sold_last90_days),
            velocity: prefer_legacy(&self.legacy_velocity, &self.daily_velocity),
            days_of_stock: prefer_legacy(&self.legacy_days_of_stock, &self.days_of_stock_left),
            status_label: prefer_legacy(&self.legacy_reorder_status, &self.reorder_status),
            lead_time_days: prefer_legacy(
                &self.legacy_lead_time_days,
                &self.supplier_lead_time_days,
            ),
            last_received: prefer_legacy(&self.legacy_last_received, &self.last_received_at),
            avg_build_consumption: prefer_legacy(
                &self.legacy_avg_build_consumption,
                &self.avg_build_consumption,
            ),
        }
    }
}

/// One value per logical field, naming convention already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedItem {
    pub sku: Sku,
    pub name: String,
    pub on_hand: Option<f64>,
    pub on_order: Option<f64>,
    pub moq: Option<f64>,
    pub sold_30_day: Option<f64>,
    pub sold_90_day: Option<f64>,
    pub velocity: Option<f64>,
    pub days_of_stock: Option<i64>,
    pub status_label: Option<String>,
    pub lead_time_days: Option<i64>,
    pub last_received: Option<DateTime<Utc>>,
    pub avg_build_consumption: Option<f64>,
}

fn prefer_legacy<T: Clone>(legacy: &Option<T>, modern: &Option<T>) -> Option<T> {
    legacy.clone().or_else(|| modern.clone())
}
