//! Class-wise roll-up of computed metrics.

use serde::{Deserialize, Serialize};

use invopt_core::SkuClass;

use crate::metrics::SkuMetrics;

/// Summed metrics for one SKU class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub class: SkuClass,
    pub sku_count: usize,
    pub sum_rop: f64,
    pub sum_eoq: f64,
    pub sum_total_cost: f64,
}

impl ClassSummary {
    fn empty(class: SkuClass) -> Self {
        Self {
            class,
            sku_count: 0,
            sum_rop: 0.0,
            sum_eoq: 0.0,
            sum_total_cost: 0.0,
        }
    }

    fn add(&mut self, m: &SkuMetrics) {
        self.sku_count += 1;
        self.sum_rop += m.derived.rop;
        self.sum_eoq += m.derived.eoq;
        self.sum_total_cost += m.derived.total_cost;
    }
}

/// Group metrics by class and sum ROP, EOQ and total cost.
///
/// Groups appear in first-seen order of their class in `metrics`. Non-finite
/// values are not filtered: a NaN record makes its group's sum NaN.
pub fn aggregate_by_class(metrics: &[SkuMetrics]) -> Vec<ClassSummary> {
    let mut groups: Vec<ClassSummary> = Vec::new();
    for m in metrics {
        let class = m.record.class();
        match groups.iter_mut().find(|g| g.class == class) {
            Some(group) => group.add(m),
            None => {
                let mut group = ClassSummary::empty(class);
                group.add(m);
                groups.push(group);
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;
    use crate::metrics::tests::{approx_eq, record};
    use crate::sku::SkuRecord;
    use proptest::prelude::*;

    #[test]
    fn empty_input_gives_empty_summary() {
        assert!(aggregate_by_class(&[]).is_empty());
    }

    #[test]
    fn groups_in_first_seen_order() {
        let metrics = compute_metrics(&[
            record("C 1", 10.0, 1.0, 0.0, 10.0, 1.0),
            record("A 1", 10.0, 1.0, 0.0, 10.0, 1.0),
            record("C 2", 20.0, 2.0, 5.0, 10.0, 1.0),
        ]);
        let summary = aggregate_by_class(&metrics);

        let classes: Vec<SkuClass> = summary.iter().map(|s| s.class).collect();
        assert_eq!(classes, vec![SkuClass::C, SkuClass::A]);
        assert_eq!(summary[0].sku_count, 2);
        assert_eq!(summary[0].sum_rop, 10.0 + 45.0);
        assert!(approx_eq(
            summary[0].sum_eoq,
            metrics[0].derived.eoq + metrics[2].derived.eoq
        ));
    }

    #[test]
    fn single_record_group_equals_record() {
        let metrics = compute_metrics(&[record("B 101", 30.0, 5.0, 50.0, 150.0, 1.5)]);
        let summary = aggregate_by_class(&metrics);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].sku_count, 1);
        assert_eq!(summary[0].sum_rop, metrics[0].derived.rop);
        assert_eq!(summary[0].sum_eoq, metrics[0].derived.eoq);
        assert_eq!(summary[0].sum_total_cost, metrics[0].derived.total_cost);
    }

    #[test]
    fn non_finite_record_poisons_only_its_group() {
        let metrics = compute_metrics(&[
            record("A 1", 10.0, 1.0, 0.0, 10.0, 0.0),
            record("B 1", 10.0, 1.0, 0.0, 10.0, 1.0),
        ]);
        let summary = aggregate_by_class(&metrics);
        assert!(summary[0].sum_total_cost.is_nan());
        assert!(summary[1].sum_total_cost.is_finite());
    }

    fn arb_class() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["A", "B", "C", "D"])
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: each group's sums equal the metrics filtered by class.
        #[test]
        fn sums_match_filtered_metrics(
            rows in prop::collection::vec(
                (arb_class(), 0.1f64..1_000.0, 0.0f64..30.0, 0.0f64..100.0, 1.0f64..500.0, 0.1f64..20.0),
                0..30,
            )
        ) {
            let records: Vec<SkuRecord> = rows
                .into_iter()
                .enumerate()
                .map(|(i, (c, d, l, s, o, h))| record(&format!("{c} {i}"), d, l, s, o, h))
                .collect();
            let metrics = compute_metrics(&records);
            let summary = aggregate_by_class(&metrics);

            let total: usize = summary.iter().map(|g| g.sku_count).sum();
            prop_assert_eq!(total, metrics.len());

            for group in &summary {
                let members: Vec<&SkuMetrics> =
                    metrics.iter().filter(|m| m.record.class() == group.class).collect();
                prop_assert_eq!(group.sku_count, members.len());
                let rop: f64 = members.iter().map(|m| m.derived.rop).sum();
                let eoq: f64 = members.iter().map(|m| m.derived.eoq).sum();
                let cost: f64 = members.iter().map(|m| m.derived.total_cost).sum();
                prop_assert!(approx_eq(group.sum_rop, rop));
                prop_assert!(approx_eq(group.sum_eoq, eoq));
                prop_assert!(approx_eq(group.sum_total_cost, cost));
            }
        }
    }
}
