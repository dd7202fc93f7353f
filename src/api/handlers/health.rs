/*
 * Responsibility
 * - GET /health (liveness probe)
 * - Fixed payload, no I/O, no logging
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Liveness payload. Field order is the serialized key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub message: &'static str,
}

pub const HEALTH_STATUS: HealthStatus = HealthStatus {
    status: "healthy",
    service: "fastapi-backend",
    message: "Workshop test: Service is running!",
};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HEALTH_STATUS))
}
