/*
 * Responsibility
 * - Route table: only GET /health
 * - Fallbacks for unknown paths and unsupported methods
 */
use axum::{Router, routing::get};

use crate::api::handlers::{
    fallback::{method_not_allowed, not_found},
    health::health,
};

pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}
