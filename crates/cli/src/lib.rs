//! `invopt` command-line front end.
//!
//! Each invocation loads the SKU table from the data file, runs one command,
//! and saves the table back if the command changed it.

pub mod config;
pub mod render;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use invopt_core::DomainError;
use invopt_infra::io::{export_metrics, import_file, load_store, save_store};
use invopt_infra::{InMemoryRecordStore, RecordStore};
use invopt_inventory::{Scenario, compute_metrics};

pub use config::{Cli, Command};
use render::ScenarioReport;

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let data = cli.data.as_path();
    let load = || {
        load_store(data).with_context(|| format!("failed to load SKU table from {}", data.display()))
    };
    let save = |store: &InMemoryRecordStore| {
        save_store(data, store)
            .with_context(|| format!("failed to save SKU table to {}", data.display()))
    };

    match cli.command {
        Command::View { scenario, json } => {
            let store = load()?;
            let report = ScenarioReport::build(&store.snapshot(), scenario);
            if json {
                render::write_json(out, &report)?;
            } else {
                render::write_text(out, &report)?;
            }
        }

        Command::Add(new) => {
            let mut store = load()?;
            let record = new.into_record();
            let label = record.label.clone();
            store.add(record)?;
            save(&store)?;
            writeln!(out, "SKU {label} added successfully!")?;
        }

        Command::Update { sku, patch } => {
            let mut store = load()?;
            let current = store
                .get(&sku)
                .ok_or_else(|| DomainError::not_found(format!("SKU {sku}")))?;
            let updated = patch.apply(current);
            let label = updated.label.clone();
            store.update(&sku, updated)?;
            save(&store)?;
            writeln!(out, "SKU {label} updated successfully!")?;
        }

        Command::Delete { sku } => {
            let mut store = load()?;
            store.delete(&sku)?;
            save(&store)?;
            writeln!(out, "SKU {sku} deleted successfully!")?;
        }

        Command::Import { file } => {
            let records = import_file(&file)
                .with_context(|| format!("failed to import {}", file.display()))?;
            let mut store = InMemoryRecordStore::new();
            store.replace_all(records)?;
            save(&store)?;
            writeln!(out, "Data uploaded successfully! ({} SKUs)", store.len())?;
        }

        Command::Export { file } => {
            let store = load()?;
            export_metrics(&file, &compute_metrics(&store.snapshot()))
                .with_context(|| format!("failed to export to {}", file.display()))?;
            info!(path = %file.display(), "download written");
            writeln!(out, "Exported {} SKUs to {}", store.len(), file.display())?;
        }

        Command::Scenarios => {
            for scenario in Scenario::ALL {
                writeln!(out, "{:<26} {}", scenario.slug(), scenario.label())?;
            }
        }
    }

    Ok(())
}
