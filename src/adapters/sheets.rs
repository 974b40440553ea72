use crate::domain::model::Booking;
use crate::domain::ports::Notifier;
use crate::utils::error::{BookingError, Result};
use reqwest::Client;

/// Appends each booking as a row via a spreadsheet webhook (e.g. a Google
/// Apps Script deployment). The booking is posted as-is in JSON; the script
/// side owns column mapping.
pub struct SheetsNotifier {
    endpoint: Option<String>,
    client: Client,
}

impl SheetsNotifier {
    pub fn new(endpoint: Option<String>, client: Client) -> Self {
        Self { endpoint, client }
    }
}

#[async_trait::async_trait]
impl Notifier for SheetsNotifier {
    fn name(&self) -> &'static str {
        "google-sheets"
    }

    async fn deliver(&self, booking: &Booking) -> Result<bool> {
        let Some(endpoint) = &self.endpoint else {
            tracing::debug!("Sheets endpoint not configured, skipping row append");
            return Ok(false);
        };

        tracing::debug!("Appending booking row via {}", endpoint);
        let response = self.client.post(endpoint).json(booking).send().await?;

        tracing::debug!("Sheets webhook response status: {}", response.status());
        if !response.status().is_success() {
            return Err(BookingError::NotifierError {
                service: self.name().to_string(),
                message: format!("webhook returned {}", response.status()),
            });
        }

        Ok(true)
    }
}
