//! Value object trait: equality by value, not identity.
//!
//! Stock parameters, assessments and forecast points are value objects: they
//! are derived from their inputs, compared field by field, and never mutated
//! after creation.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new instance. Two assessments computed from the same record and the
/// same parameters are equal.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct StockParameters {
///     daily_usage: i64,
///     safety_stock: i64,
///     lead_time_days: i64,
/// }
///
/// impl ValueObject for StockParameters {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
