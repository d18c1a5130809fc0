//! Reconciliation entry point: normalize both sources, then rank.

use crate::rank::{self, SortDirection, SortKey};
use crate::source::{ExternalOrder, InternalOrder};
use crate::unified::UnifiedOrder;

/// Merge both source collections into one ordered view.
///
/// Pure and deterministic: identical inputs with identical sort parameters
/// always yield the identical sequence, ties included (the sort is stable
/// over the normalization order: internal records first, then external,
/// each in input order).
pub fn reconcile(
    internal: &[InternalOrder],
    external: &[ExternalOrder],
    key: SortKey,
    direction: SortDirection,
) -> Vec<UnifiedOrder> {
    let mut unified: Vec<UnifiedOrder> = Vec::with_capacity(internal.len() + external.len());

    unified.extend(internal.iter().filter_map(UnifiedOrder::from_internal));
    unified.extend(external.iter().filter_map(|order| {
        if order.is_synthetic() {
            tracing::debug!(po_number = ?order.po_number, "dropping synthetic record");
            return None;
        }
        UnifiedOrder::from_external(order)
    }));

    unified.sort_by(|a, b| {
        let ordering = rank::compare(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    unified
}
