//! Command-line arguments and environment configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use invopt_core::{SkuClass, SkuLabel, SkuNumber};
use invopt_inventory::{Scenario, SkuRecord};

/// Default location of the CSV file backing the SKU table.
pub const DEFAULT_DATA_FILE: &str = "inventory_data.csv";

#[derive(Parser, Debug)]
#[command(name = "invopt")]
#[command(about = "Inventory optimization: reorder points and economic order quantities per SKU")]
#[command(version)]
pub struct Cli {
    /// CSV file holding the SKU table between runs (created on first save)
    #[arg(long, global = true, env = "INVOPT_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show metrics, ROP-vs-EOQ points and the class summary under a scenario
    View {
        /// Scenario label or slug (see `invopt scenarios`)
        #[arg(short, long, default_value = "base-case")]
        scenario: Scenario,

        /// Emit the report as JSON instead of text tables
        #[arg(long)]
        json: bool,
    },

    /// Add a new SKU
    Add(NewSku),

    /// Update an existing SKU; omitted fields keep their current value
    Update {
        /// SKU label, e.g. "A 101"
        sku: SkuLabel,

        #[command(flatten)]
        patch: SkuPatch,
    },

    /// Delete an SKU
    Delete {
        /// SKU label, e.g. "A 101"
        sku: SkuLabel,
    },

    /// Replace the SKU table with a .csv or .xlsx file
    Import {
        file: PathBuf,
    },

    /// Write the SKU table with base-case metrics to a .csv or .xlsx file
    Export {
        file: PathBuf,
    },

    /// List the available scenarios
    Scenarios,
}

/// Fields for a new SKU; numeric defaults mirror the add form's minimums.
#[derive(Args, Debug)]
pub struct NewSku {
    /// Product class (A, B, C or D)
    #[arg(long)]
    pub class: SkuClass,

    /// SKU number within the class, e.g. 101
    #[arg(long)]
    pub number: SkuNumber,

    /// Average daily demand (units/day)
    #[arg(long, default_value_t = 1.0)]
    pub demand: f64,

    /// Lead time (days)
    #[arg(long, default_value_t = 1.0)]
    pub lead_time: f64,

    /// Safety stock (units)
    #[arg(long, default_value_t = 1.0)]
    pub safety_stock: f64,

    /// Cost per order
    #[arg(long, default_value_t = 1.0)]
    pub order_cost: f64,

    /// Holding cost per unit per year
    #[arg(long, default_value_t = 0.1)]
    pub holding_cost: f64,
}

impl NewSku {
    pub fn into_record(self) -> SkuRecord {
        SkuRecord {
            label: SkuLabel::new(self.class, self.number),
            avg_daily_demand: self.demand,
            lead_time_days: self.lead_time,
            safety_stock: self.safety_stock,
            order_cost: self.order_cost,
            holding_cost: self.holding_cost,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct SkuPatch {
    #[arg(long)]
    pub class: Option<SkuClass>,
    #[arg(long)]
    pub number: Option<SkuNumber>,
    #[arg(long)]
    pub demand: Option<f64>,
    #[arg(long)]
    pub lead_time: Option<f64>,
    #[arg(long)]
    pub safety_stock: Option<f64>,
    #[arg(long)]
    pub order_cost: Option<f64>,
    #[arg(long)]
    pub holding_cost: Option<f64>,
}

impl SkuPatch {
    /// Build the edited record; class and number come from the record's own
    /// fields, never from splitting its display label.
    pub fn apply(self, current: &SkuRecord) -> SkuRecord {
        let class = self.class.unwrap_or(current.label.class());
        let number = self.number.unwrap_or_else(|| current.label.number().clone());
        SkuRecord {
            label: SkuLabel::new(class, number),
            avg_daily_demand: self.demand.unwrap_or(current.avg_daily_demand),
            lead_time_days: self.lead_time.unwrap_or(current.lead_time_days),
            safety_stock: self.safety_stock.unwrap_or(current.safety_stock),
            order_cost: self.order_cost.unwrap_or(current.order_cost),
            holding_cost: self.holding_cost.unwrap_or(current.holding_cost),
        }
    }
}
