//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// equal. They are immutable; to "modify" one, build a new value.
///
/// In this workspace the derived metrics of a SKU are a value object: they are
/// recomputed from base fields on every engine run and compared by value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct DerivedMetrics { rop: f64, annual_demand: f64, eoq: f64, total_cost: f64 }
///
/// impl ValueObject for DerivedMetrics {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
