use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use restock_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        e @ (DomainError::MissingField { .. } | DomainError::InvalidNumber { .. }) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_input", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_error_is_a_bad_request() {
        let errors = [
            DomainError::validation("daily_usage cannot be negative"),
            DomainError::missing("current_stock"),
            DomainError::invalid_number("current_stock", "lots"),
        ];
        for err in errors {
            assert_eq!(domain_error_to_response(err).status(), StatusCode::BAD_REQUEST);
        }
    }
}
