//! In-memory SKU record store (the session's working table).

use std::collections::HashSet;

use tracing::info;

use invopt_core::{DomainError, DomainResult, Entity, SkuClass, SkuLabel, SkuNumber};
use invopt_inventory::SkuRecord;

/// Ordered, label-unique collection of SKU records.
///
/// This is the only place SKU-label uniqueness is enforced; the metrics engine
/// accepts whatever snapshot it is given.
pub trait RecordStore {
    /// Copy of the current records in insertion order.
    fn snapshot(&self) -> Vec<SkuRecord>;

    fn get(&self, label: &SkuLabel) -> Option<&SkuRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a new record. Fails with `Conflict` if the label is taken.
    fn add(&mut self, record: SkuRecord) -> DomainResult<()>;

    /// Replace the record currently labelled `label`, keeping its position.
    ///
    /// The replacement may carry a different label (class or number edited),
    /// as long as no *other* record already uses it.
    fn update(&mut self, label: &SkuLabel, record: SkuRecord) -> DomainResult<()>;

    /// Remove and return the record labelled `label`.
    fn delete(&mut self, label: &SkuLabel) -> DomainResult<SkuRecord>;

    /// Swap the whole table (file upload). Rejected if `records` repeats a label.
    fn replace_all(&mut self, records: Vec<SkuRecord>) -> DomainResult<()>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryRecordStore {
    records: Vec<SkuRecord>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the starter SKUs a fresh session opens with.
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
        }
    }

    fn position(&self, label: &SkuLabel) -> Option<usize> {
        self.records.iter().position(|r| r.id() == label)
    }
}

fn seed_record(
    class: SkuClass,
    number: u32,
    [demand, lead, safety, order_cost, holding_cost]: [f64; 5],
) -> SkuRecord {
    SkuRecord {
        label: SkuLabel::new(class, SkuNumber::from(number)),
        avg_daily_demand: demand,
        lead_time_days: lead,
        safety_stock: safety,
        order_cost,
        holding_cost,
    }
}

/// Starter SKUs: `A 101` and `B 101`.
pub fn seed_records() -> Vec<SkuRecord> {
    vec![
        seed_record(SkuClass::A, 101, [50.0, 10.0, 100.0, 200.0, 2.0]),
        seed_record(SkuClass::B, 101, [30.0, 5.0, 50.0, 150.0, 1.5]),
    ]
}

impl RecordStore for InMemoryRecordStore {
    fn snapshot(&self) -> Vec<SkuRecord> {
        self.records.clone()
    }

    fn get(&self, label: &SkuLabel) -> Option<&SkuRecord> {
        self.records.iter().find(|r| r.id() == label)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn add(&mut self, record: SkuRecord) -> DomainResult<()> {
        if self.position(&record.label).is_some() {
            return Err(DomainError::conflict(format!(
                "SKU {} already exists",
                record.label
            )));
        }
        info!(sku = %record.label, "SKU added");
        self.records.push(record);
        Ok(())
    }

    fn update(&mut self, label: &SkuLabel, record: SkuRecord) -> DomainResult<()> {
        let idx = self
            .position(label)
            .ok_or_else(|| DomainError::not_found(format!("SKU {label}")))?;

        if record.label != *label && self.position(&record.label).is_some() {
            return Err(DomainError::conflict(format!(
                "SKU {} already exists",
                record.label
            )));
        }

        info!(sku = %label, new_sku = %record.label, "SKU updated");
        self.records[idx] = record;
        Ok(())
    }

    fn delete(&mut self, label: &SkuLabel) -> DomainResult<SkuRecord> {
        let idx = self
            .position(label)
            .ok_or_else(|| DomainError::not_found(format!("SKU {label}")))?;
        info!(sku = %label, "SKU deleted");
        Ok(self.records.remove(idx))
    }

    fn replace_all(&mut self, records: Vec<SkuRecord>) -> DomainResult<()> {
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(&r.label) {
                return Err(DomainError::conflict(format!(
                    "SKU {} appears more than once",
                    r.label
                )));
            }
        }
        info!(records = records.len(), "record store replaced");
        self.records = records;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> SkuLabel {
        s.parse().unwrap()
    }

    fn sku(s: &str, demand: f64) -> SkuRecord {
        SkuRecord {
            label: label(s),
            avg_daily_demand: demand,
            lead_time_days: 2.0,
            safety_stock: 10.0,
            order_cost: 100.0,
            holding_cost: 1.0,
        }
    }

    #[test]
    fn seeded_store_has_starter_skus() {
        let store = InMemoryRecordStore::seeded();
        assert_eq!(store.len(), 2);
        let labels: Vec<String> = store.snapshot().iter().map(|r| r.label.to_string()).collect();
        assert_eq!(labels, vec!["A 101", "B 101"]);
        assert_eq!(store.get(&label("B 101")).unwrap().holding_cost, 1.5);
    }

    #[test]
    fn add_rejects_duplicate_label() {
        let mut store = InMemoryRecordStore::seeded();
        let err = store.add(sku("A 101", 1.0)).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict error for duplicate SKU"),
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_keeps_position_and_allows_relabel() {
        let mut store = InMemoryRecordStore::new();
        store.add(sku("A 1", 1.0)).unwrap();
        store.add(sku("A 2", 2.0)).unwrap();
        store.add(sku("A 3", 3.0)).unwrap();

        store.update(&label("A 2"), sku("C 20", 20.0)).unwrap();

        let labels: Vec<String> = store.snapshot().iter().map(|r| r.label.to_string()).collect();
        assert_eq!(labels, vec!["A 1", "C 20", "A 3"]);
        assert!(store.get(&label("A 2")).is_none());
    }

    #[test]
    fn update_rejects_relabel_onto_existing_sku() {
        let mut store = InMemoryRecordStore::new();
        store.add(sku("A 1", 1.0)).unwrap();
        store.add(sku("A 2", 2.0)).unwrap();

        let err = store.update(&label("A 2"), sku("A 1", 5.0)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(store.get(&label("A 1")).unwrap().avg_daily_demand, 1.0);
    }

    #[test]
    fn update_and_delete_unknown_label_is_not_found() {
        let mut store = InMemoryRecordStore::seeded();
        assert!(matches!(
            store.update(&label("D 9"), sku("D 9", 1.0)),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(store.delete(&label("D 9")), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn delete_removes_record() {
        let mut store = InMemoryRecordStore::seeded();
        let removed = store.delete(&label("A 101")).unwrap();
        assert_eq!(removed.avg_daily_demand, 50.0);
        assert_eq!(store.len(), 1);
        assert!(store.get(&label("A 101")).is_none());
    }

    #[test]
    fn replace_all_rejects_duplicates_and_keeps_old_table() {
        let mut store = InMemoryRecordStore::seeded();
        let err = store
            .replace_all(vec![sku("C 1", 1.0), sku("C 1", 2.0)])
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(store, InMemoryRecordStore::seeded());

        store.replace_all(vec![sku("C 1", 1.0)]).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn snapshot_is_independent_of_store() {
        let store = InMemoryRecordStore::seeded();
        let mut snap = store.snapshot();
        snap[0].avg_daily_demand = 999.0;
        assert_eq!(store.get(&label("A 101")).unwrap().avg_daily_demand, 50.0);
    }
}
