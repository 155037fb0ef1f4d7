//! Replenishment decision logic.
//!
//! This crate contains the reorder rules for inventory locations, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no mail transport).

pub mod batch;
pub mod forecast;
pub mod parameters;
pub mod reorder;

pub use batch::{
    BatchSummary, Partitioned, RowEvaluation, evaluate, evaluate_rows, partition, shortage_of,
};
pub use forecast::{ForecastPoint, next_arrival_date, project, project_average};
pub use parameters::{LocationRecord, RawLocationRow, StockParameters};
pub use reorder::{ReorderAssessment, assess, compute_reorder_point, compute_shortfall};
