//! Table export: the base table for persistence (CSV), the metrics table for
//! download (CSV or `.xlsx`).

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use invopt_inventory::{SkuMetrics, SkuRecord};

use super::error::ExportError;
use super::import::REQUIRED_COLUMNS;

/// Derived columns appended after the exchange columns on metrics export.
pub const METRIC_COLUMNS: [&str; 4] = ["ROP", "Annual_Demand", "EOQ", "Total_Cost"];

fn base_fields(r: &SkuRecord) -> [String; 7] {
    [
        r.label.to_string(),
        r.class().to_string(),
        r.avg_daily_demand.to_string(),
        r.lead_time_days.to_string(),
        r.safety_stock.to_string(),
        r.order_cost.to_string(),
        r.holding_cost.to_string(),
    ]
}

/// Write base records only (the exchange columns).
pub fn write_records<W: Write>(writer: W, records: &[SkuRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(REQUIRED_COLUMNS)?;
    for r in records {
        writer.write_record(base_fields(r))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write records with their derived metrics.
///
/// Non-finite values are written as `NaN` / `inf` so a faulted record is
/// visible in the file rather than dropped.
pub fn write_metrics<W: Write>(writer: W, metrics: &[SkuMetrics]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(REQUIRED_COLUMNS.iter().chain(METRIC_COLUMNS.iter()))?;
    for m in metrics {
        let d = &m.derived;
        let derived = [d.rop, d.annual_demand, d.eoq, d.total_cost].map(|v| v.to_string());
        writer.write_record(base_fields(&m.record).iter().chain(derived.iter()))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write records with their derived metrics to an `.xlsx` workbook at `path`.
///
/// Same columns as [`write_metrics`], on a single `Sheet1`. Labels and classes
/// are text cells, the rest are numeric cells. Excel has no NaN/inf, so
/// non-finite values become the text `NaN` / `inf`, which re-import reads back.
pub fn write_metrics_xlsx(path: &Path, metrics: &[SkuMetrics]) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in REQUIRED_COLUMNS.iter().chain(METRIC_COLUMNS.iter()).enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, m) in metrics.iter().enumerate() {
        let row = i as u32 + 1;
        let r = &m.record;
        let d = &m.derived;
        sheet.write_string(row, 0, r.label.to_string())?;
        sheet.write_string(row, 1, r.class().as_str())?;
        let values = [
            r.avg_daily_demand,
            r.lead_time_days,
            r.safety_stock,
            r.order_cost,
            r.holding_cost,
            d.rop,
            d.annual_demand,
            d.eoq,
            d.total_cost,
        ];
        for (offset, value) in values.into_iter().enumerate() {
            write_value(sheet, row, 2 + offset as u16, value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn write_value(sheet: &mut Worksheet, row: u32, col: u16, value: f64) -> Result<(), XlsxError> {
    if value.is_finite() {
        sheet.write_number(row, col, value)?;
    } else {
        sheet.write_string(row, col, value.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::import::{import_file, read_csv};
    use crate::store::seed_records;
    use invopt_inventory::compute_metrics;

    #[test]
    fn metrics_export_has_exchange_then_metric_columns() {
        let mut buf = Vec::new();
        write_metrics(&mut buf, &compute_metrics(&seed_records())).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "SKU,Class,Average_Daily_Demand,Lead_Time_Days,Safety_Stock,Order_Cost,Holding_Cost,ROP,Annual_Demand,EOQ,Total_Cost"
        );
        let first: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(first[0], "A 101");
        assert_eq!(first[7], "600");
        assert_eq!(first[8], "18250");
    }

    #[test]
    fn exported_metrics_reimport_as_same_base_records() {
        let records = seed_records();
        let mut buf = Vec::new();
        write_metrics(&mut buf, &compute_metrics(&records)).unwrap();

        let back = read_csv(buf.as_slice()).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn faulted_record_is_exported_with_non_finite_values() {
        let mut records = seed_records();
        records[0].holding_cost = 0.0;
        let mut buf = Vec::new();
        write_metrics(&mut buf, &compute_metrics(&records)).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let row: Vec<&str> = text.lines().nth(1).unwrap().split(',').collect();
        assert_eq!(row[9], "inf");
        assert_eq!(row[10], "NaN");
    }

    #[test]
    fn xlsx_metrics_export_reimports_as_same_base_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory_data.xlsx");
        let records = seed_records();

        write_metrics_xlsx(&path, &compute_metrics(&records)).unwrap();

        assert_eq!(import_file(&path).unwrap(), records);
    }

    #[test]
    fn xlsx_faulted_record_still_reimports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faulted.xlsx");
        let mut records = seed_records();
        records[1].holding_cost = 0.0;

        write_metrics_xlsx(&path, &compute_metrics(&records)).unwrap();

        let back = import_file(&path).unwrap();
        assert_eq!(back, records);
        assert_eq!(back[1].holding_cost, 0.0);
    }
}
