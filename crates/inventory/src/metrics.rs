//! Metrics engine: reorder point, annual demand, EOQ and total cost per SKU.
//!
//! Formulas (all `f64`):
//! - `rop = avg_daily_demand * lead_time_days + safety_stock`
//! - `annual_demand = avg_daily_demand * 365`
//! - `eoq = sqrt(2 * annual_demand * order_cost / holding_cost)`
//! - `total_cost = eoq / 2 * holding_cost + annual_demand / eoq * order_cost`
//!
//! Numeric faults are contained per record. A zero holding cost divides by
//! zero, a negative radicand (e.g. negative order cost) takes the square root
//! of a negative number, and zero demand gives a zero EOQ that the total-cost
//! term divides by. In every case the offending record carries the resulting
//! NaN/infinite values; nothing is clamped and the rest of the batch is
//! computed normally. Use [`SkuMetrics::numeric_fault`] to classify them.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use invopt_core::ValueObject;

use crate::sku::SkuRecord;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Fields derived from a record's base fields. Never entered by users and
/// never stored apart from the inputs they were computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub rop: f64,
    pub annual_demand: f64,
    pub eoq: f64,
    pub total_cost: f64,
}

impl ValueObject for DerivedMetrics {}

impl DerivedMetrics {
    pub fn compute(record: &SkuRecord) -> Self {
        let rop = record.avg_daily_demand * record.lead_time_days + record.safety_stock;
        let annual_demand = record.avg_daily_demand * DAYS_PER_YEAR;
        let eoq = eoq_radicand(annual_demand, record).sqrt();
        let total_cost =
            eoq / 2.0 * record.holding_cost + annual_demand / eoq * record.order_cost;

        Self {
            rop,
            annual_demand,
            eoq,
            total_cost,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.rop.is_finite()
            && self.annual_demand.is_finite()
            && self.eoq.is_finite()
            && self.total_cost.is_finite()
    }
}

fn eoq_radicand(annual_demand: f64, record: &SkuRecord) -> f64 {
    2.0 * annual_demand * record.order_cost / record.holding_cost
}

/// Why a record's derived metrics are not usable numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericFault {
    /// `holding_cost <= 0`: EOQ divides by zero (or goes negative).
    NonPositiveHoldingCost,
    /// The EOQ radicand is negative, so `eoq` is NaN.
    NegativeRadicand,
    /// `eoq == 0` (e.g. zero demand), so the ordering-cost term divides by zero.
    ZeroEoq,
    /// Some input was already NaN or infinite.
    NonFiniteInput,
}

/// A SKU record augmented with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuMetrics {
    #[serde(flatten)]
    pub record: SkuRecord,
    #[serde(flatten)]
    pub derived: DerivedMetrics,
}

impl SkuMetrics {
    pub fn compute(record: SkuRecord) -> Self {
        let derived = DerivedMetrics::compute(&record);
        Self { record, derived }
    }

    /// Classify a non-finite result; `None` when every derived field is finite.
    pub fn numeric_fault(&self) -> Option<NumericFault> {
        let record = &self.record;
        if record.holding_cost <= 0.0 {
            return Some(NumericFault::NonPositiveHoldingCost);
        }
        if eoq_radicand(self.derived.annual_demand, record) < 0.0 {
            return Some(NumericFault::NegativeRadicand);
        }
        if self.derived.eoq == 0.0 {
            return Some(NumericFault::ZeroEoq);
        }
        if !self.derived.is_finite() {
            return Some(NumericFault::NonFiniteInput);
        }
        None
    }
}

impl AsRef<SkuRecord> for SkuMetrics {
    fn as_ref(&self) -> &SkuRecord {
        &self.record
    }
}

/// Compute derived metrics for every record, preserving order.
///
/// Accepts plain records or previously augmented [`SkuMetrics`]; any existing
/// derived values are ignored and recomputed from the base fields. Records are
/// independent of each other, and a numeric fault on one record never affects
/// another (see the module docs).
pub fn compute_metrics<R: AsRef<SkuRecord>>(records: &[R]) -> Vec<SkuMetrics> {
    let metrics: Vec<SkuMetrics> = records
        .iter()
        .map(|r| SkuMetrics::compute(r.as_ref().clone()))
        .collect();

    for m in &metrics {
        if let Some(fault) = m.numeric_fault() {
            warn!(sku = %m.record.label, ?fault, "non-finite inventory metrics");
        }
    }
    debug!(records = metrics.len(), "computed inventory metrics");

    metrics
}
