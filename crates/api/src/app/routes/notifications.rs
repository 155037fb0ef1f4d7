use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use restock_inventory::{RawLocationRow, evaluate_rows, shortage_of};
use restock_notifications::DeliveryReport;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Evaluate the rows, then notify the recipients about any shortage.
pub async fn send(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SendNotificationsRequest>,
) -> axum::response::Response {
    if let Err(e) = body.parameters.validate() {
        return errors::domain_error_to_response(e);
    }

    let rows: Vec<RawLocationRow> = body.rows.into_iter().map(RawLocationRow::from).collect();

    let mut assessed = Vec::new();
    let mut rejected = Vec::new();
    for eval in evaluate_rows(&rows, &body.parameters) {
        match eval.outcome {
            Ok(a) => assessed.push(a),
            Err(e) => rejected.push(dto::RowResult::rejected(eval.row, &e)),
        }
    }
    let shortage = shortage_of(&assessed);

    let batch = services.composer.compose(&shortage, &body.recipients);
    if batch.is_empty() {
        tracing::info!(shortage = shortage.len(), "nothing to notify");
        return (
            StatusCode::OK,
            Json(dto::SendNotificationsResponse {
                shortage,
                rejected,
                batch,
                transport: services.transport_name(),
                delivery: DeliveryReport::default(),
            }),
        )
            .into_response();
    }

    // Transports may block on network I/O.
    let worker = services.clone();
    let outgoing = batch.clone();
    let outcomes = match tokio::task::spawn_blocking(move || {
        worker.composer.send(&outgoing, worker.transport.as_ref())
    })
    .await
    {
        Ok(o) => o,
        Err(e) => {
            tracing::error!("notification worker panicked: {e:?}");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "delivery_aborted",
                "notification delivery did not complete",
            );
        }
    };

    (
        StatusCode::OK,
        Json(dto::SendNotificationsResponse {
            shortage,
            rejected,
            batch,
            transport: services.transport_name(),
            delivery: DeliveryReport::from(outcomes),
        }),
    )
        .into_response()
}

pub async fn outbox(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match &services.outbox {
        Some(outbox) => (StatusCode::OK, Json(outbox.messages())).into_response(),
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "outbox is only available with the in-memory transport",
        ),
    }
}
