use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use restock_inventory::{
    BatchSummary, RawLocationRow, StockParameters, compute_reorder_point, evaluate_rows,
    next_arrival_date, partition, project, project_average,
};

use crate::app::{dto, errors};

/// Longest forecast the API will render.
const MAX_HORIZON_DAYS: u32 = 3_650;

pub async fn evaluate(Json(body): Json<dto::EvaluateRequest>) -> axum::response::Response {
    if let Err(e) = body.parameters.validate() {
        return errors::domain_error_to_response(e);
    }

    let rows: Vec<RawLocationRow> = body.rows.into_iter().map(RawLocationRow::from).collect();
    let evaluations = evaluate_rows(&rows, &body.parameters);
    let summary = BatchSummary::from_rows(&evaluations);

    let assessed: Vec<_> = evaluations
        .iter()
        .filter_map(|e| e.outcome.as_ref().ok())
        .cloned()
        .collect();
    let split = partition(&assessed);

    tracing::info!(
        rows = summary.evaluated + summary.rejected,
        shortage = summary.shortage,
        rejected = summary.rejected,
        "evaluated replenishment batch"
    );

    (
        StatusCode::OK,
        Json(dto::EvaluateResponse {
            results: evaluations.into_iter().map(dto::RowResult::from).collect(),
            shortage: split.shortage,
            sufficient: split.sufficient,
            summary,
        }),
    )
        .into_response()
}

pub async fn forecast(Json(body): Json<dto::ForecastRequest>) -> axum::response::Response {
    let parameters = match StockParameters::new(body.daily_usage, body.safety_stock, body.lead_time_days) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let horizon = match body.horizon_days {
        Some(h) => h,
        None => u32::try_from(parameters.lead_time_days).unwrap_or(u32::MAX),
    };
    if horizon > MAX_HORIZON_DAYS {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "horizon_too_long",
            format!("horizon_days must be at most {MAX_HORIZON_DAYS}"),
        );
    }

    let (points, averaged_over, rejected) = match (body.starting_stock, body.rows.is_empty()) {
        (Some(_), false) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "conflicting_input",
                "send either starting_stock or rows, not both",
            );
        }
        (None, true) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_input",
                "starting_stock or rows is required",
            );
        }
        (Some(stock), true) => (
            project(stock, parameters.daily_usage, parameters.safety_stock, horizon),
            None,
            Vec::new(),
        ),
        (None, false) => {
            let mut records = Vec::new();
            let mut rejected = Vec::new();
            for (row, req) in body.rows.into_iter().enumerate() {
                match RawLocationRow::from(req).resolve(&parameters) {
                    Ok((record, _)) => records.push(record),
                    Err(e) => rejected.push(dto::RowResult::rejected(row, &e)),
                }
            }
            tracing::debug!(
                locations = records.len(),
                rejected = rejected.len(),
                "projecting average location"
            );
            (
                project_average(&records, &parameters, horizon),
                Some(records.len()),
                rejected,
            )
        }
    };

    (
        StatusCode::OK,
        Json(dto::ForecastResponse {
            points,
            averaged_over,
            rejected,
            reorder_point: compute_reorder_point(
                parameters.daily_usage,
                parameters.safety_stock,
                parameters.lead_time_days,
            ),
            next_arrival_date: next_arrival_date(Utc::now().date_naive(), parameters.lead_time_days),
        }),
    )
        .into_response()
}
