//! Raw purchase-order shapes from the two upstream systems.
//!
//! The internal order system speaks camelCase and identifies orders by UUID;
//! the external inventory-management API speaks snake_case, uses opaque
//! string ids, and nests tracking data under its own object. Both shapes are
//! kept verbatim here; `unified` maps them into one record before any
//! ranking logic runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockline_core::Sku;

/// One line on an internal purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalLineItem {
    pub sku: Sku,
    pub quantity: i64,
}

/// Purchase order as stored by the internal order system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalOrder {
    /// Absent on records that failed ingestion; such records are skipped.
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expected_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub tracking_carrier: Option<String>,
    #[serde(default)]
    pub tracking_status: Option<String>,
    #[serde(default)]
    pub tracking_eta: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub items: Vec<InternalLineItem>,
}

/// Tracking block as returned by the external API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalTracking {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub estimated_delivery: Option<DateTime<Utc>>,
}

/// Purchase order as returned by the external inventory-management API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalOrder {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub po_number: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub po_status: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expected_arrival: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tracking: Option<ExternalTracking>,
    #[serde(default)]
    pub po_total: Option<f64>,
    #[serde(default)]
    pub line_count: Option<u32>,
}

impl ExternalOrder {
    /// Known non-purchasable synthetic record type; excluded from
    /// reconciliation before unification.
    pub fn is_synthetic(&self) -> bool {
        self.po_number
            .as_deref()
            .is_some_and(|n| n.to_ascii_lowercase().contains("dropshippo"))
    }
}

/// Which upstream system a unified record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSource {
    Internal,
    External,
}

impl core::fmt::Display for OrderSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderSource::Internal => f.write_str("internal"),
            OrderSource::External => f.write_str("external"),
        }
    }
}

/// The originating record, carried on each unified order for callers that
/// need source-specific detail.
///
/// Adjacently tagged: every `InternalOrder` field is defaulted, so an
/// untagged representation would swallow external records on the way back
/// in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", content = "record", rename_all = "lowercase")]
pub enum SourceRecord {
    Internal(InternalOrder),
    External(ExternalOrder),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropshippo_detection_is_case_insensitive() {
        let order = ExternalOrder {
            id: Some("x1".into()),
            po_number: Some("DropShippo-4471".into()),
            supplier_name: None,
            po_status: None,
            created_date: None,
            expected_arrival: None,
            tracking: None,
            po_total: None,
            line_count: None,
        };
        assert!(order.is_synthetic());
    }

    #[test]
    fn regular_po_number_is_not_synthetic() {
        let order = ExternalOrder {
            id: Some("x1".into()),
            po_number: Some("PO-1001".into()),
            supplier_name: None,
            po_status: None,
            created_date: None,
            expected_arrival: None,
            tracking: None,
            po_total: None,
            line_count: None,
        };
        assert!(!order.is_synthetic());
        assert!(!ExternalOrder {
            po_number: None,
            ..order
        }
        .is_synthetic());
    }

    #[test]
    fn source_record_round_trips_without_variant_confusion() {
        let external = SourceRecord::External(ExternalOrder {
            id: Some("ext-9".into()),
            po_number: Some("PO-9".into()),
            supplier_name: None,
            po_status: None,
            created_date: None,
            expected_arrival: None,
            tracking: None,
            po_total: None,
            line_count: None,
        });

        let json = serde_json::to_string(&external).unwrap();
        let back: SourceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, external);
        assert!(matches!(back, SourceRecord::External(_)));
    }

    #[test]
    fn source_tag_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderSource::Internal).unwrap(),
            "\"internal\""
        );
        assert_eq!(
            serde_json::to_string(&OrderSource::External).unwrap(),
            "\"external\""
        );
    }
}
