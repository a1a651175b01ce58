use serde::{Deserialize, Serialize};

use invopt_core::{Entity, SkuClass, SkuLabel};

/// One inventory item: identity plus the five user-entered base fields.
///
/// Base fields are plain `f64`s and are not range-checked here; the metrics
/// engine documents what happens for zero or negative inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuRecord {
    pub label: SkuLabel,
    /// Units per day.
    pub avg_daily_demand: f64,
    pub lead_time_days: f64,
    /// Units.
    pub safety_stock: f64,
    /// Currency per order.
    pub order_cost: f64,
    /// Currency per unit per year.
    pub holding_cost: f64,
}

impl SkuRecord {
    pub fn class(&self) -> SkuClass {
        self.label.class()
    }
}

impl Entity for SkuRecord {
    type Id = SkuLabel;

    fn id(&self) -> &Self::Id {
        &self.label
    }
}

impl AsRef<SkuRecord> for SkuRecord {
    fn as_ref(&self) -> &SkuRecord {
        self
    }
}
