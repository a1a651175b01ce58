//! Scenario report: metrics table, ROP-vs-EOQ chart series, class summary.

use std::io::{self, Write};

use serde::Serialize;

use invopt_inventory::{
    ClassSummary, NumericFault, Scenario, SkuMetrics, SkuRecord, aggregate_by_class,
    apply_scenario,
};

/// One labelled point of the ROP (x) vs EOQ (y) scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub sku: String,
    pub rop: f64,
    pub eoq: f64,
}

/// Everything the "view" screen shows for one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub title: String,
    pub skus: Vec<SkuMetrics>,
    pub chart: Vec<ChartPoint>,
    pub summary: Vec<ClassSummary>,
}

impl ScenarioReport {
    pub fn build(records: &[SkuRecord], scenario: Scenario) -> Self {
        let skus = apply_scenario(records, scenario);
        let chart = skus
            .iter()
            .map(|m| ChartPoint {
                sku: m.record.label.to_string(),
                rop: m.derived.rop,
                eoq: m.derived.eoq,
            })
            .collect();
        let summary = aggregate_by_class(&skus);

        Self {
            scenario,
            title: format!("ROP vs EOQ - {scenario}"),
            skus,
            chart,
            summary,
        }
    }

    fn faults(&self) -> Vec<(&SkuMetrics, NumericFault)> {
        self.skus
            .iter()
            .filter_map(|m| m.numeric_fault().map(|f| (m, f)))
            .collect()
    }
}

pub fn write_json<W: Write>(out: &mut W, report: &ScenarioReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

pub fn write_text<W: Write>(out: &mut W, report: &ScenarioReport) -> io::Result<()> {
    writeln!(out, "Scenario Analysis for SKUs ({})", report.scenario)?;
    writeln!(
        out,
        "{:<10} {:<5} {:>10} {:>9} {:>10} {:>10} {:>8} {:>10} {:>12} {:>10} {:>12}",
        "SKU", "Class", "Demand", "Lead", "Safety", "OrderCost", "Holding", "ROP", "AnnualDem",
        "EOQ", "TotalCost"
    )?;
    for m in &report.skus {
        let r = &m.record;
        let d = &m.derived;
        writeln!(
            out,
            "{:<10} {:<5} {:>10.2} {:>9.2} {:>10.2} {:>10.2} {:>8.2} {:>10.2} {:>12.2} {:>10.2} {:>12.2}",
            r.label.to_string(),
            r.class().as_str(),
            r.avg_daily_demand,
            r.lead_time_days,
            r.safety_stock,
            r.order_cost,
            r.holding_cost,
            d.rop,
            d.annual_demand,
            d.eoq,
            d.total_cost,
        )?;
    }

    let faults = report.faults();
    if !faults.is_empty() {
        writeln!(out)?;
        for (m, fault) in faults {
            writeln!(out, "warning: {} has non-finite metrics ({fault:?})", m.record.label)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", report.title)?;
    for p in &report.chart {
        writeln!(out, "  {:<10} ROP {:>10.2}  EOQ {:>10.2}", p.sku, p.rop, p.eoq)?;
    }

    writeln!(out)?;
    writeln!(out, "Class-wise Summary")?;
    writeln!(
        out,
        "{:<5} {:>5} {:>12} {:>12} {:>14}",
        "Class", "SKUs", "ROP", "EOQ", "Total_Cost"
    )?;
    for s in &report.summary {
        writeln!(
            out,
            "{:<5} {:>5} {:>12.2} {:>12.2} {:>14.2}",
            s.class.as_str(),
            s.sku_count,
            s.sum_rop,
            s.sum_eoq,
            s.sum_total_cost
        )?;
    }
    Ok(())
}
