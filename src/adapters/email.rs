use crate::domain::model::Booking;
use crate::domain::ports::Notifier;
use crate::domain::services;
use crate::utils::error::{BookingError, Result};
use chrono::FixedOffset;
use reqwest::Client;

pub const DEFAULT_API_BASE: &str = "https://api.resend.com";

const FROM_ADDRESS: &str = "Veyra Skin Clinic <bookings@veyraskin.clinic>";

/// Sends a booking summary to the front desk through a transactional email
/// provider (Resend-style `POST {base}/emails` with bearer auth).
pub struct EmailNotifier {
    api_key: Option<String>,
    recipient: String,
    api_base: String,
    client: Client,
}

impl EmailNotifier {
    pub fn new(api_key: Option<String>, recipient: String, client: Client) -> Self {
        Self {
            api_key,
            recipient,
            api_base: DEFAULT_API_BASE.to_string(),
            client,
        }
    }

    /// Override the provider base URL (tests point this at a mock server).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    fn render_html(&self, booking: &Booking) -> String {
        // Front desk reads times in clinic-local IST, not UTC.
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let received = booking
            .submitted_at
            .with_timezone(&ist)
            .format("%d %b %Y, %I:%M %p IST");

        let reply_link = services::whatsapp_link(&booking.contact_number(), booking);

        format!(
            "<h2>New booking request</h2>\
             <p><strong>Name:</strong> {name}</p>\
             <p><strong>Phone:</strong> {code} {phone}</p>\
             <p><strong>Email:</strong> {email}</p>\
             <p><strong>Concerns:</strong> {concerns}</p>\
             <p><strong>Source:</strong> {source}</p>\
             <p><strong>Received:</strong> {received}</p>\
             <p><a href=\"{reply_link}\">Reply on WhatsApp</a></p>",
            name = booking.name,
            code = booking.country_code,
            phone = booking.phone,
            email = booking.email.as_deref().unwrap_or("not provided"),
            concerns = booking.concerns.as_deref().unwrap_or("not specified"),
            source = booking.source,
            received = received,
            reply_link = reply_link,
        )
    }
}

#[async_trait::async_trait]
impl Notifier for EmailNotifier {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn deliver(&self, booking: &Booking) -> Result<bool> {
        let Some(api_key) = &self.api_key else {
            tracing::debug!("Email API key not configured, skipping notification");
            return Ok(false);
        };

        let payload = serde_json::json!({
            "from": FROM_ADDRESS,
            "to": [self.recipient],
            "subject": format!("New booking request from {}", booking.name),
            "html": self.render_html(booking),
        });

        tracing::debug!("Sending booking email to {}", self.recipient);
        let response = self
            .client
            .post(format!("{}/emails", self.api_base))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        tracing::debug!("Email provider response status: {}", response.status());
        if !response.status().is_success() {
            return Err(BookingError::NotifierError {
                service: self.name().to_string(),
                message: format!("provider returned {}", response.status()),
            });
        }

        Ok(true)
    }
}
