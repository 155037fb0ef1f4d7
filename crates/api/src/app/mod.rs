//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: composer and mail transport shared by handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use restock_notifications::OutboxTransport;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router in dev mode (bounded in-memory outbox).
pub fn build_app(config: ApiConfig) -> Router {
    build_app_with(AppServices::with_outbox(
        config.mail,
        OutboxTransport::with_capacity(config.outbox_capacity),
    ))
}

/// Build the router around caller-supplied services (custom transports, tests).
pub fn build_app_with(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(Arc::new(services)))
}
