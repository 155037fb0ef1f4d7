//! Batch evaluation over many locations.
//!
//! Output order always matches input order so callers can zip results back
//! onto their source rows by position.

use serde::Serialize;

use restock_core::DomainError;

use crate::parameters::{LocationRecord, RawLocationRow, StockParameters};
use crate::reorder::{ReorderAssessment, assess};

/// Evaluate every record against the shared parameters (1:1, order-preserving).
pub fn evaluate(records: &[LocationRecord], parameters: &StockParameters) -> Vec<ReorderAssessment> {
    let assessments: Vec<ReorderAssessment> =
        records.iter().map(|r| assess(r, parameters)).collect();

    tracing::debug!(
        records = records.len(),
        shortages = assessments.iter().filter(|a| a.needs_replenishment()).count(),
        "evaluated location batch"
    );

    assessments
}

/// Locations that need replenishment, in their original relative order.
pub fn shortage_of(assessments: &[ReorderAssessment]) -> Vec<ReorderAssessment> {
    assessments
        .iter()
        .filter(|a| a.needs_replenishment())
        .cloned()
        .collect()
}

/// Assessments split into sufficient and shortage sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partitioned {
    pub sufficient: Vec<ReorderAssessment>,
    pub shortage: Vec<ReorderAssessment>,
}

pub fn partition(assessments: &[ReorderAssessment]) -> Partitioned {
    let (shortage, sufficient): (Vec<_>, Vec<_>) = assessments
        .iter()
        .cloned()
        .partition(|a| a.needs_replenishment());
    Partitioned {
        sufficient,
        shortage,
    }
}

/// Evaluation result for one ingested row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEvaluation {
    /// Zero-based position of the row in the input.
    pub row: usize,
    pub outcome: Result<ReorderAssessment, DomainError>,
}

/// Evaluate raw rows; a malformed row fails on its own and never aborts the batch.
pub fn evaluate_rows(rows: &[RawLocationRow], defaults: &StockParameters) -> Vec<RowEvaluation> {
    rows.iter()
        .enumerate()
        .map(|(row, raw)| {
            let outcome = raw
                .resolve(defaults)
                .map(|(record, parameters)| assess(&record, &parameters));
            if let Err(e) = &outcome {
                tracing::warn!(row, error = %e, "rejected location row");
            }
            RowEvaluation { row, outcome }
        })
        .collect()
}

/// Counters for a completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub evaluated: usize,
    pub sufficient: usize,
    pub shortage: usize,
    pub rejected: usize,
    pub total_shortfall: i64,
}

impl BatchSummary {
    pub fn from_assessments(assessments: &[ReorderAssessment]) -> Self {
        assessments.iter().fold(Self::default(), |mut s, a| {
            s.evaluated += 1;
            if a.needs_replenishment() {
                s.shortage += 1;
                s.total_shortfall = s.total_shortfall.saturating_add(a.shortfall());
            } else {
                s.sufficient += 1;
            }
            s
        })
    }

    pub fn from_rows(rows: &[RowEvaluation]) -> Self {
        let ok: Vec<ReorderAssessment> = rows
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok().cloned())
            .collect();
        Self {
            rejected: rows.len() - ok.len(),
            ..Self::from_assessments(&ok)
        }
    }
}
