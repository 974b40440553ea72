use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::dto::{BookingAcceptedDto, BookingErrorDto, HealthDto};
use crate::core::booking::BookingService;
use crate::domain::model::BookingPayload;
use crate::utils::error::BookingError;

const ACCEPTED_MESSAGE: &str =
    "Booking request received. Our team will confirm your slot shortly.";

/// `POST /book-appointment`. The body is parsed inside the handler so a
/// malformed body follows the generic 500 branch instead of an extractor
/// rejection, and never leaks parser detail to the client.
pub async fn submit_booking(
    State(service): State<Arc<BookingService>>,
    body: String,
) -> Response {
    let payload: BookingPayload = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Unreadable booking payload: {}", e);
            return failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process booking request",
            );
        }
    };

    match service.submit(payload).await {
        Ok(accepted) => (
            StatusCode::OK,
            Json(BookingAcceptedDto {
                success: true,
                message: ACCEPTED_MESSAGE.to_string(),
                whatsapp_link: accepted.whatsapp_link,
                services: accepted.delivery,
            }),
        )
            .into_response(),
        Err(BookingError::ValidationError { message }) => {
            info!("Rejected booking request: {}", message);
            failure(StatusCode::BAD_REQUEST, "Missing required fields")
        }
        Err(e) => {
            error!("Booking orchestration failed: {}", e);
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process booking request",
            )
        }
    }
}

/// `GET /book-appointment`: static liveness payload, no side effects.
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok",
        service: "booking-api",
        timestamp: Utc::now().to_rfc3339(),
    })
}

fn failure(status: StatusCode, error: &str) -> Response {
    (
        status,
        Json(BookingErrorDto {
            success: false,
            error: error.to_string(),
        }),
    )
        .into_response()
}
