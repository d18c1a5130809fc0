//! Replenishment analyzer: catalog item snapshot in, reorder metrics out.
//!
//! This crate contains the stockout-risk calculations, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). The analyzer is
//! total: any structurally valid snapshot produces a metrics report, with
//! missing numeric fields defaulted rather than rejected.

pub mod analyzer;
pub mod metrics;
pub mod snapshot;

pub use analyzer::{
    analyze, analyze_at, DEFAULT_LEAD_TIME_DAYS, SAFETY_BUFFER_DAYS, STOCK_DAYS_SENTINEL,
};
pub use metrics::{BuildConsumption, ReplenishmentMetrics, Urgency};
pub use snapshot::{ItemSnapshot, ResolvedItem};
