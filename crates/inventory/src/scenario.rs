//! What-if scenarios: perturb base fields on a copy, then recompute metrics.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use invopt_core::DomainError;

use crate::metrics::{SkuMetrics, compute_metrics};
use crate::sku::SkuRecord;

/// Demand multiplier for the high-demand scenarios (+20%).
pub const HIGH_DEMAND_FACTOR: f64 = 1.2;

/// Extra lead time for the supply-delay scenarios.
pub const SUPPLY_DELAY_DAYS: f64 = 3.0;

/// Closed set of scenarios.
///
/// Parsing from text is strict: an unknown label is an
/// [`DomainError::InvalidScenario`], never a silent fall-back to the base case.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    #[default]
    BaseCase,
    HighDemand,
    SupplyDelay,
    HighDemandSupplyDelay,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::BaseCase,
        Scenario::HighDemand,
        Scenario::SupplyDelay,
        Scenario::HighDemandSupplyDelay,
    ];

    /// Human-facing label, as shown in scenario pickers and chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::BaseCase => "Base Case",
            Scenario::HighDemand => "High Demand (+20%)",
            Scenario::SupplyDelay => "Supply Delay (+3 days)",
            Scenario::HighDemandSupplyDelay => "High Demand + Supply Delay",
        }
    }

    /// Short machine-facing name (CLI flags, JSON).
    pub fn slug(&self) -> &'static str {
        match self {
            Scenario::BaseCase => "base-case",
            Scenario::HighDemand => "high-demand",
            Scenario::SupplyDelay => "supply-delay",
            Scenario::HighDemandSupplyDelay => "high-demand-supply-delay",
        }
    }

    fn raises_demand(&self) -> bool {
        matches!(self, Scenario::HighDemand | Scenario::HighDemandSupplyDelay)
    }

    fn delays_supply(&self) -> bool {
        matches!(self, Scenario::SupplyDelay | Scenario::HighDemandSupplyDelay)
    }

    /// Return a perturbed copy of `record`; the original is left untouched.
    pub fn perturb(&self, record: &SkuRecord) -> SkuRecord {
        let mut out = record.clone();
        if self.raises_demand() {
            out.avg_daily_demand *= HIGH_DEMAND_FACTOR;
        }
        if self.delays_supply() {
            out.lead_time_days += SUPPLY_DELAY_DAYS;
        }
        out
    }
}

impl core::fmt::Display for Scenario {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scenario {
    type Err = DomainError;

    /// Accepts either the display label or the slug, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Scenario::ALL
            .into_iter()
            .find(|sc| {
                sc.label().eq_ignore_ascii_case(wanted) || sc.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DomainError::invalid_scenario(wanted))
    }
}

/// Apply `scenario` to an independent copy of `records` and compute metrics.
///
/// The caller's slice is only borrowed immutably, so back-to-back scenarios
/// are always derived from the same stored base fields.
pub fn apply_scenario<R: AsRef<SkuRecord>>(records: &[R], scenario: Scenario) -> Vec<SkuMetrics> {
    debug!(scenario = scenario.slug(), records = records.len(), "applying scenario");
    let perturbed: Vec<SkuRecord> = records
        .iter()
        .map(|r| scenario.perturb(r.as_ref()))
        .collect();
    compute_metrics(&perturbed)
}
