//! Inventory-control metrics engine.
//!
//! This crate turns SKU base records into decision metrics (reorder point,
//! economic order quantity, total cost), applies what-if scenarios, and rolls
//! results up per class. Everything here is deterministic, side-effect free
//! domain logic (no IO, no storage): callers pass a snapshot slice and get new
//! vectors back.

pub mod metrics;
pub mod scenario;
pub mod sku;
pub mod summary;

pub use metrics::{DAYS_PER_YEAR, DerivedMetrics, NumericFault, SkuMetrics, compute_metrics};
pub use scenario::{Scenario, apply_scenario};
pub use sku::SkuRecord;
pub use summary::{ClassSummary, aggregate_by_class};
