//! Table import: CSV and Excel files into typed SKU records.
//!
//! Both formats are first flattened into a header row plus string rows; the
//! column-existence check and all typing happen once, in [`records_from_table`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{Reader, Xlsx, XlsxError, open_workbook};
use tracing::{debug, info};

use invopt_core::{SkuClass, SkuLabel};
use invopt_inventory::SkuRecord;

use super::error::ImportError;

pub const COL_SKU: &str = "SKU";
pub const COL_CLASS: &str = "Class";
pub const COL_DEMAND: &str = "Average_Daily_Demand";
pub const COL_LEAD_TIME: &str = "Lead_Time_Days";
pub const COL_SAFETY_STOCK: &str = "Safety_Stock";
pub const COL_ORDER_COST: &str = "Order_Cost";
pub const COL_HOLDING_COST: &str = "Holding_Cost";

/// Exchange columns every imported table must carry (order-insensitive).
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_SKU,
    COL_CLASS,
    COL_DEMAND,
    COL_LEAD_TIME,
    COL_SAFETY_STOCK,
    COL_ORDER_COST,
    COL_HOLDING_COST,
];

/// Import a `.csv` or `.xlsx` file, chosen by extension.
pub fn import_file(path: &Path) -> Result<Vec<SkuRecord>, ImportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => {
            let file = File::open(path).map_err(|source| ImportError::Io {
                path: path.display().to_string(),
                source,
            })?;
            read_csv(file)?
        }
        "xlsx" => read_xlsx(path)?,
        _ => return Err(ImportError::UnsupportedFormat(ext)),
    };

    info!(path = %path.display(), records = records.len(), "imported SKU table");
    Ok(records)
}

/// Parse SKU records from CSV text with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<SkuRecord>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    // The csv reader drops empty lines, so keep each record's own line number.
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record
            .position()
            .map_or(rows.len() + 2, |pos| pos.line() as usize);
        rows.push((line, record.iter().map(str::to_string).collect()));
    }

    records_from_table(&headers, rows)
}

/// Parse SKU records from the first worksheet of an `.xlsx` workbook.
pub fn read_xlsx(path: &Path) -> Result<Vec<SkuRecord>, ImportError> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: XlsxError| ImportError::Excel(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ImportError::Excel("workbook has no worksheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ImportError::Excel(e.to_string()))?;

    // The range starts at the first used row, not necessarily sheet row 1.
    let header_line = range.start().map_or(1, |(row, _)| row as usize + 1);
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| ImportError::Excel(format!("worksheet {sheet_name:?} is empty")))?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();
    let body: Vec<(usize, Vec<String>)> = rows
        .enumerate()
        .map(|(i, row)| {
            let cells = row.iter().map(|cell| cell.to_string()).collect();
            (header_line + 1 + i, cells)
        })
        .collect();

    debug!(sheet = %sheet_name, rows = body.len(), "read worksheet");
    records_from_table(&headers, body)
}

/// Positions of the exchange columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    sku: usize,
    class: usize,
    demand: usize,
    lead_time: usize,
    safety_stock: usize,
    order_cost: usize,
    holding_cost: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> Result<Self, ImportError> {
        let mut missing = Vec::new();
        let mut locate = |name: &str| match headers.iter().position(|h| h.trim() == name) {
            Some(i) => i,
            None => {
                missing.push(name.to_string());
                0
            }
        };

        let index = Self {
            sku: locate(COL_SKU),
            class: locate(COL_CLASS),
            demand: locate(COL_DEMAND),
            lead_time: locate(COL_LEAD_TIME),
            safety_stock: locate(COL_SAFETY_STOCK),
            order_cost: locate(COL_ORDER_COST),
            holding_cost: locate(COL_HOLDING_COST),
        };

        if !missing.is_empty() {
            return Err(ImportError::SchemaMismatch {
                expected: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
                missing,
            });
        }
        Ok(index)
    }

    fn parse_row(&self, line: usize, row: &[String]) -> Result<SkuRecord, ImportError> {
        let cell = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");
        let number = |i: usize, column: &str| -> Result<f64, ImportError> {
            let raw = cell(i);
            raw.parse::<f64>().map_err(|_| ImportError::InvalidField {
                row: line,
                column: column.to_string(),
                value: raw.to_string(),
            })
        };

        let class: SkuClass = cell(self.class).parse().map_err(|_| ImportError::InvalidField {
            row: line,
            column: COL_CLASS.to_string(),
            value: cell(self.class).to_string(),
        })?;

        let raw_label = cell(self.sku);
        let label: SkuLabel = raw_label.parse().map_err(|e| ImportError::InvalidLabel {
            row: line,
            value: raw_label.to_string(),
            reason: format!("{e}"),
        })?;
        if label.class() != class {
            return Err(ImportError::InvalidLabel {
                row: line,
                value: raw_label.to_string(),
                reason: format!("label prefix does not match {COL_CLASS} {class}"),
            });
        }

        Ok(SkuRecord {
            label,
            avg_daily_demand: number(self.demand, COL_DEMAND)?,
            lead_time_days: number(self.lead_time, COL_LEAD_TIME)?,
            safety_stock: number(self.safety_stock, COL_SAFETY_STOCK)?,
            order_cost: number(self.order_cost, COL_ORDER_COST)?,
            holding_cost: number(self.holding_cost, COL_HOLDING_COST)?,
        })
    }
}

/// Type a header + rows table into SKU records.
///
/// Each row is paired with its 1-based line (or sheet row) in the source
/// file; that number is what errors report. Extra columns (e.g. previously
/// exported metrics) are ignored. Fully blank rows are skipped.
pub fn records_from_table(
    headers: &[String],
    rows: Vec<(usize, Vec<String>)>,
) -> Result<Vec<SkuRecord>, ImportError> {
    let index = ColumnIndex::resolve(headers)?;

    let mut records = Vec::with_capacity(rows.len());
    for (line, row) in &rows {
        if row.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        records.push(index.parse_row(*line, row)?);
    }
    Ok(records)
}
