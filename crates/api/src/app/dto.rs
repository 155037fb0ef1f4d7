use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use restock_core::DomainError;
use restock_inventory::{
    BatchSummary, ForecastPoint, RawLocationRow, ReorderAssessment, RowEvaluation, StockParameters,
};
use restock_notifications::{DeliveryReport, NotificationBatch};

// -------------------------
// Request DTOs
// -------------------------

/// One input row as sent by a client.
///
/// Cells may be JSON numbers or strings; any other keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LocationRowRequest {
    pub name: Option<JsonValue>,
    pub address: Option<JsonValue>,
    pub current_stock: Option<JsonValue>,
    pub daily_usage: Option<JsonValue>,
    pub safety_stock: Option<JsonValue>,
    pub lead_time_days: Option<JsonValue>,
}

impl From<LocationRowRequest> for RawLocationRow {
    fn from(row: LocationRowRequest) -> Self {
        RawLocationRow {
            name: cell_text(row.name),
            address: cell_text(row.address),
            current_stock: cell_text(row.current_stock),
            daily_usage: cell_text(row.daily_usage),
            safety_stock: cell_text(row.safety_stock),
            lead_time_days: cell_text(row.lead_time_days),
        }
    }
}

fn cell_text(cell: Option<JsonValue>) -> Option<String> {
    match cell? {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub parameters: StockParameters,
    #[serde(default)]
    pub rows: Vec<LocationRowRequest>,
}

/// Either a single `starting_stock` or a set of `rows` whose mean current
/// stock is projected. Exactly one of the two must be given.
#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    pub starting_stock: Option<i64>,
    #[serde(default)]
    pub rows: Vec<LocationRowRequest>,
    pub daily_usage: i64,
    pub safety_stock: i64,
    pub lead_time_days: i64,
    /// Defaults to the lead time.
    pub horizon_days: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SendNotificationsRequest {
    pub parameters: StockParameters,
    #[serde(default)]
    pub rows: Vec<LocationRowRequest>,
    /// Comma-separated addresses.
    pub recipients: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Sufficient,
    Shortage,
    Rejected,
}

#[derive(Debug, Serialize)]
pub struct RowResult {
    pub row: usize,
    pub status: RowStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<ReorderAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<RowEvaluation> for RowResult {
    fn from(eval: RowEvaluation) -> Self {
        match eval.outcome {
            Ok(a) => RowResult {
                row: eval.row,
                status: if a.needs_replenishment() {
                    RowStatus::Shortage
                } else {
                    RowStatus::Sufficient
                },
                assessment: Some(a),
                field: None,
                error: None,
            },
            Err(e) => RowResult::rejected(eval.row, &e),
        }
    }
}

impl RowResult {
    pub fn rejected(row: usize, e: &DomainError) -> Self {
        RowResult {
            row,
            status: RowStatus::Rejected,
            assessment: None,
            field: e.field(),
            error: Some(e.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub results: Vec<RowResult>,
    pub shortage: Vec<ReorderAssessment>,
    pub sufficient: Vec<ReorderAssessment>,
    pub summary: BatchSummary,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub points: Vec<ForecastPoint>,
    /// Number of rows averaged into the starting stock, when projecting rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub averaged_over: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RowResult>,
    pub reorder_point: i64,
    pub next_arrival_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct SendNotificationsResponse {
    pub shortage: Vec<ReorderAssessment>,
    pub rejected: Vec<RowResult>,
    pub batch: NotificationBatch,
    /// Which transport produced `delivery`; `"outbox"` means nothing left the process.
    pub transport: &'static str,
    pub delivery: DeliveryReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_cells_become_text() {
        let req: LocationRowRequest = serde_json::from_value(serde_json::json!({
            "name": "Kobe",
            "current_stock": 150,
            "daily_usage": "40",
            "safety_stock": null,
            "latitude": 34.69
        }))
        .unwrap();

        let raw = RawLocationRow::from(req);
        assert_eq!(raw.name.as_deref(), Some("Kobe"));
        assert_eq!(raw.current_stock.as_deref(), Some("150"));
        assert_eq!(raw.daily_usage.as_deref(), Some("40"));
        assert_eq!(raw.safety_stock, None);
        assert_eq!(raw.lead_time_days, None);
    }
}
