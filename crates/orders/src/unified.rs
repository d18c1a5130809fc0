//! The unified order record and per-source normalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::carrier;
use crate::source::{ExternalOrder, InternalOrder, OrderSource, SourceRecord};

/// One purchase order, regardless of which system it came from.
///
/// Constructed fresh on every reconciliation pass and never mutated in
/// place; a change in either source collection means a full recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedOrder {
    pub id: String,
    pub order_number: String,
    pub vendor: String,
    /// Free text, stored as given; comparisons lowercase it.
    pub status: String,
    pub order_date: Option<DateTime<Utc>>,
    pub expected_date: Option<DateTime<Utc>>,
    pub tracking_number: Option<String>,
    pub tracking_carrier: Option<String>,
    pub tracking_status: Option<String>,
    pub tracking_url: Option<String>,
    pub tracking_eta: Option<DateTime<Utc>>,
    pub total: f64,
    pub line_count: u32,
    pub source: OrderSource,
    pub source_record: SourceRecord,
}

impl UnifiedOrder {
    /// Effective ETA: tracking-derived when available, else the generically
    /// expected date.
    pub fn eta(&self) -> Option<DateTime<Utc>> {
        self.tracking_eta.or(self.expected_date)
    }

    /// Map an internal-system record into the unified shape.
    ///
    /// Returns `None` (and logs) for records without an identifier; no
    /// unified record with a null id ever reaches the output.
    pub fn from_internal(order: &InternalOrder) -> Option<Self> {
        let Some(id) = order.id else {
            tracing::warn!("skipping internal order without id");
            return None;
        };
        let id = id.to_string();
        let order_number = order
            .order_number
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| id[..8].to_string());

        Some(Self {
            order_number,
            vendor: order.vendor_name.clone().unwrap_or_default(),
            status: order.status.clone().unwrap_or_default(),
            order_date: order.order_date,
            expected_date: order.expected_date,
            tracking_number: order.tracking_number.clone(),
            tracking_carrier: order.tracking_carrier.clone(),
            tracking_status: order.tracking_status.clone(),
            tracking_url: carrier::tracking_url(
                order.tracking_number.as_deref(),
                order.tracking_carrier.as_deref(),
            ),
            tracking_eta: order.tracking_eta,
            total: order.total.unwrap_or(0.0),
            line_count: order.items.len() as u32,
            source: OrderSource::Internal,
            source_record: SourceRecord::Internal(order.clone()),
            id,
        })
    }

    /// Map an external-API record into the unified shape.
    ///
    /// The dropshippo exclusion happens before this is called; here only the
    /// missing-identifier skip applies.
    pub fn from_external(order: &ExternalOrder) -> Option<Self> {
        let Some(id) = order.id.clone().filter(|i| !i.is_empty()) else {
            tracing::warn!("skipping external order without id");
            return None;
        };
        let tracking = order.tracking.as_ref();
        let tracking_number = tracking.and_then(|t| t.number.clone());
        let tracking_carrier = tracking.and_then(|t| t.carrier.clone());

        Some(Self {
            order_number: order.po_number.clone().unwrap_or_else(|| id.clone()),
            vendor: order.supplier_name.clone().unwrap_or_default(),
            status: order.po_status.clone().unwrap_or_default(),
            order_date: order.created_date,
            expected_date: order.expected_arrival,
            tracking_url: carrier::tracking_url(
                tracking_number.as_deref(),
                tracking_carrier.as_deref(),
            ),
            tracking_number,
            tracking_carrier,
            tracking_status: tracking.and_then(|t| t.status.clone()),
            tracking_eta: tracking.and_then(|t| t.estimated_delivery),
            total: order.po_total.unwrap_or(0.0),
            line_count: order.line_count.unwrap_or(0),
            source: OrderSource::External,
            source_record: SourceRecord::External(order.clone()),
            id,
        })
    }
}
