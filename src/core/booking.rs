use crate::core::{Booking, BookingPayload, Delivery, Notifier};
use crate::domain::services;
use crate::utils::error::Result;
use chrono::Utc;
use std::sync::Arc;

/// Outcome of an accepted booking: the visitor-facing deep link plus the
/// per-notifier delivery flags.
#[derive(Debug, Clone)]
pub struct BookingAccepted {
    pub whatsapp_link: String,
    pub delivery: Delivery,
}

/// Orchestrates one booking submission: validate, normalize, fan out to
/// both notifiers concurrently, build the WhatsApp handoff link.
pub struct BookingService {
    sheets: Arc<dyn Notifier>,
    email: Arc<dyn Notifier>,
    clinic_whatsapp: String,
}

impl BookingService {
    pub fn new(
        sheets: Arc<dyn Notifier>,
        email: Arc<dyn Notifier>,
        clinic_whatsapp: String,
    ) -> Self {
        Self {
            sheets,
            email,
            clinic_whatsapp,
        }
    }

    /// Process a raw submission. `Err` here is always a validation
    /// rejection; notifier faults are collapsed into the `Delivery` flags
    /// and never fail the booking.
    pub async fn submit(&self, payload: BookingPayload) -> Result<BookingAccepted> {
        let booking = Booking::from_payload(payload, Utc::now())?;
        tracing::info!(
            name = %booking.name,
            source = %booking.source,
            "Processing booking request"
        );

        // All-settle join: each branch swallows its own failure, so neither
        // can cancel or fail the other.
        let (sheets_ok, email_ok) = tokio::join!(
            Self::settle(self.sheets.as_ref(), &booking),
            Self::settle(self.email.as_ref(), &booking),
        );

        let delivery = Delivery {
            google_sheets: sheets_ok,
            email: email_ok,
        };
        tracing::info!(
            google_sheets = sheets_ok,
            email = email_ok,
            "Notifier fan-out settled"
        );

        Ok(BookingAccepted {
            whatsapp_link: services::whatsapp_link(&self.clinic_whatsapp, &booking),
            delivery,
        })
    }

    async fn settle(notifier: &dyn Notifier, booking: &Booking) -> bool {
        match notifier.deliver(booking).await {
            Ok(delivered) => delivered,
            Err(e) => {
                tracing::warn!("{} notifier failed: {}", notifier.name(), e);
                false
            }
        }
    }
}
