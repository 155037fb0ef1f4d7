use axum::{
    Router,
    routing::{get, post},
};

pub mod notifications;
pub mod replenishment;
pub mod system;

/// Router for every endpoint except `/health`.
pub fn router() -> Router {
    Router::new()
        .nest(
            "/replenishment",
            Router::new()
                .route("/evaluate", post(replenishment::evaluate))
                .route("/forecast", post(replenishment::forecast)),
        )
        .nest(
            "/notifications",
            Router::new()
                .route("/send", post(notifications::send))
                .route("/outbox", get(notifications::outbox)),
        )
}
