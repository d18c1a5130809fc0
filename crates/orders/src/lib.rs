//! Order reconciliation & ranking engine.
//!
//! Merges purchase-order records from two differently-shaped sources (the
//! internal order system and the external inventory-management API) into one
//! unified, deterministically ordered view, with carrier-aware tracking URL
//! derivation and status-priority ranking. Implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod carrier;
pub mod engine;
pub mod rank;
pub mod source;
pub mod unified;

pub use carrier::tracking_url;
pub use engine::reconcile;
pub use rank::{status_weight, SortDirection, SortKey, DEFAULT_STATUS_WEIGHT};
pub use source::{
    ExternalOrder, ExternalTracking, InternalLineItem, InternalOrder, OrderSource, SourceRecord,
};
pub use unified::UnifiedOrder;
