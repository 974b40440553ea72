pub mod dto;
pub mod handlers;

use crate::core::booking::BookingService;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the HTTP surface: booking submission plus its health probe.
pub fn router(service: Arc<BookingService>) -> Router {
    Router::new()
        .route(
            "/book-appointment",
            get(handlers::health_check).post(handlers::submit_booking),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
