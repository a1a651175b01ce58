//! File import/export for the SKU table.
//!
//! Exchange format: a flat table with the columns in [`REQUIRED_COLUMNS`], in
//! any order. Import and metrics export both accept `.csv` and `.xlsx`; the
//! data file backing the store is always CSV.

pub mod error;
pub mod export;
pub mod import;

use std::fs::File;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use invopt_inventory::SkuMetrics;

use crate::store::{InMemoryRecordStore, RecordStore};

pub use error::{ExportError, ImportError};
pub use export::{METRIC_COLUMNS, write_metrics, write_metrics_xlsx, write_records};
pub use import::{REQUIRED_COLUMNS, import_file, read_csv, read_xlsx, records_from_table};

/// Load the working table backed by `path`.
///
/// A missing file starts a fresh session with the seeded SKUs.
pub fn load_store(path: &Path) -> Result<InMemoryRecordStore, ImportError> {
    if !path.exists() {
        info!(path = %path.display(), "no data file yet; starting from seed SKUs");
        return Ok(InMemoryRecordStore::seeded());
    }
    let mut store = InMemoryRecordStore::new();
    store.replace_all(import_file(path)?)?;
    Ok(store)
}

/// Persist the base table to `path` as CSV.
///
/// The table is written to a temporary file next to `path` and then renamed
/// over it, so a failed write leaves the previous file intact.
pub fn save_store(path: &Path, store: &impl RecordStore) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    write_records(&mut tmp, &store.snapshot())?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    info!(path = %path.display(), records = store.len(), "saved SKU table");
    Ok(())
}

/// Write the metrics table (download view) to `path`, as `.xlsx` or CSV
/// depending on the extension.
pub fn export_metrics(path: &Path, metrics: &[SkuMetrics]) -> Result<(), ExportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = File::create(path).map_err(|source| ExportError::Io {
                path: path.display().to_string(),
                source,
            })?;
            write_metrics(file, metrics)?;
        }
        "xlsx" => write_metrics_xlsx(path, metrics)?,
        _ => return Err(ExportError::UnsupportedFormat(ext)),
    }

    info!(path = %path.display(), format = %ext, records = metrics.len(), "exported metrics table");
    Ok(())
}
