//! `stockline-core` — shared domain primitives.
//!
//! This crate contains **pure domain** building blocks (no infrastructure
//! concerns): the domain error model and the SKU identifier type shared by
//! the replenishment and order-reconciliation crates.

pub mod error;
pub mod sku;

pub use error::{DomainError, DomainResult};
pub use sku::Sku;
