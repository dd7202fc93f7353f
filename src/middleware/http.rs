//! HTTP-level middleware applied to every route, including fallbacks.
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging (TraceLayer)
//! - Per-request timeout (from `Config`)
//!
//! No body limit: nothing behind this stack reads a request body, so a
//! large-bodied `GET /health` must still reach the handler.

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::{StatusCode, header::HeaderName};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps `router` with the transport layers. `timeout` bounds each request;
/// expiry answers `408 Request Timeout`.
pub fn apply(router: Router, timeout: Duration) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        // Router::layer needs an Infallible service; TimeoutLayer yields BoxError,
        // so every layer error is mapped to a status here.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }))
        // Keep a caller-supplied id, otherwise mint a UUID.
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(TimeoutLayer::new(timeout))
        // Innermost, so the access log sees the request id set above.
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}
