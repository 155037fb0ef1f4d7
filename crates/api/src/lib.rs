//! HTTP API: a thin presentation layer over the replenishment core.

pub mod app;
pub mod config;
