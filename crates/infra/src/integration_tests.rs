//! Integration tests for the full session pipeline.
//!
//! Tests: File → RecordStore → Scenario/Metrics → ClassSummary → Export
//!
//! Verifies:
//! - Scenario runs read store snapshots and never write back
//! - Store edits are reflected on the next recomputation
//! - Saved tables reload into an identical store

#[cfg(test)]
mod tests {
    use std::fs;

    use invopt_core::{SkuClass, SkuLabel};
    use invopt_inventory::{Scenario, SkuRecord, aggregate_by_class, apply_scenario, compute_metrics};

    use crate::io::{ImportError, export_metrics, import_file, load_store, save_store};
    use crate::store::{InMemoryRecordStore, RecordStore};

    fn label(s: &str) -> SkuLabel {
        s.parse().unwrap()
    }

    #[test]
    fn scenarios_never_write_back_to_store() {
        let store = InMemoryRecordStore::seeded();

        for scenario in Scenario::ALL {
            let _ = apply_scenario(&store.snapshot(), scenario);
        }

        assert_eq!(store, InMemoryRecordStore::seeded());
        assert_eq!(store.get(&label("A 101")).unwrap().avg_daily_demand, 50.0);
    }

    #[test]
    fn edits_are_visible_on_next_recompute() {
        let mut store = InMemoryRecordStore::seeded();
        let before = compute_metrics(&store.snapshot());
        assert_eq!(before[0].derived.rop, 600.0);

        let mut edited = store.get(&label("A 101")).unwrap().clone();
        edited.lead_time_days = 12.0;
        store.update(&label("A 101"), edited).unwrap();

        let after = compute_metrics(&store.snapshot());
        assert_eq!(after[0].derived.rop, 700.0);
    }

    #[test]
    fn class_summary_tracks_store_contents() {
        let mut store = InMemoryRecordStore::seeded();
        store
            .add(SkuRecord {
                label: label("A 102"),
                avg_daily_demand: 10.0,
                lead_time_days: 2.0,
                safety_stock: 5.0,
                order_cost: 100.0,
                holding_cost: 1.0,
            })
            .unwrap();

        let summary = aggregate_by_class(&apply_scenario(&store.snapshot(), Scenario::BaseCase));
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].class, SkuClass::A);
        assert_eq!(summary[0].sku_count, 2);
        assert_eq!(summary[0].sum_rop, 600.0 + 25.0);
        assert_eq!(summary[1].class, SkuClass::B);
    }

    #[test]
    fn save_then_load_round_trips_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory_data.csv");

        let fresh = load_store(&path).unwrap();
        assert_eq!(fresh, InMemoryRecordStore::seeded());

        let mut store = fresh;
        store.delete(&label("B 101")).unwrap();
        save_store(&path, &store).unwrap();

        let reloaded = load_store(&path).unwrap();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn exported_metrics_file_can_be_uploaded_again() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let store = InMemoryRecordStore::seeded();

        export_metrics(&path, &compute_metrics(&store.snapshot())).unwrap();
        let uploaded = import_file(&path).unwrap();

        assert_eq!(uploaded, store.snapshot());
    }

    #[test]
    fn upload_with_duplicate_labels_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dupes.csv");
        fs::write(
            &path,
            "SKU,Class,Average_Daily_Demand,Lead_Time_Days,Safety_Stock,Order_Cost,Holding_Cost\n\
             A 1,A,1,1,1,1,1\n\
             A 1,A,2,2,2,2,2\n",
        )
        .unwrap();

        let err = load_store(&path).unwrap_err();
        assert!(matches!(err, ImportError::Domain(_)));
    }
}
