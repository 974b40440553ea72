use crate::utils::error::{BookingError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNTRY_CODE: &str = "+91";
pub const DEFAULT_SOURCE: &str = "website";

/// Untrusted booking form body as sent by the site. Every field is optional
/// at the wire level; required-field enforcement happens in
/// [`Booking::from_payload`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub concerns: Option<String>,
    pub source: Option<String>,
}

/// A normalized booking request: trimmed, defaulted and timestamped.
/// `name` and `phone` are guaranteed non-empty by construction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub name: String,
    pub email: Option<String>,
    pub country_code: String,
    pub phone: String,
    pub concerns: Option<String>,
    pub source: String,
    #[serde(rename = "timestamp")]
    pub submitted_at: DateTime<Utc>,
}

impl Booking {
    /// Normalize a raw payload. Rejects before any side effect when `name`
    /// or `phone` is absent or blank after trimming.
    pub fn from_payload(payload: BookingPayload, submitted_at: DateTime<Utc>) -> Result<Self> {
        let name = trim_to_option(payload.name);
        let phone = trim_to_option(payload.phone);

        let (Some(name), Some(phone)) = (name, phone) else {
            return Err(BookingError::ValidationError {
                message: "name and phone are required".to_string(),
            });
        };

        Ok(Self {
            name,
            email: trim_to_option(payload.email),
            country_code: payload
                .country_code
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string()),
            phone,
            concerns: trim_to_option(payload.concerns),
            source: payload
                .source
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            submitted_at,
        })
    }

    /// Visitor's full number with the country code prefix, digits only.
    pub fn contact_number(&self) -> String {
        format!("{}{}", self.country_code, self.phone)
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }
}

fn trim_to_option(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Per-notifier success flags reported back to the client. `false` covers
/// both "integration disabled" and "delivery failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub google_sheets: bool,
    pub email: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, phone: Option<&str>) -> BookingPayload {
        BookingPayload {
            name: name.map(String::from),
            phone: phone.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalization_trims_and_defaults() {
        let raw = BookingPayload {
            name: Some("  Asha K  ".to_string()),
            email: Some(" asha@example.com ".to_string()),
            country_code: None,
            phone: Some(" 9876500000 ".to_string()),
            concerns: Some("  ".to_string()),
            source: None,
        };

        let booking = Booking::from_payload(raw, Utc::now()).unwrap();
        assert_eq!(booking.name, "Asha K");
        assert_eq!(booking.email.as_deref(), Some("asha@example.com"));
        assert_eq!(booking.country_code, DEFAULT_COUNTRY_CODE);
        assert_eq!(booking.phone, "9876500000");
        assert_eq!(booking.concerns, None); // blank concerns collapse to absent
        assert_eq!(booking.source, DEFAULT_SOURCE);
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        assert!(Booking::from_payload(payload(None, Some("987")), Utc::now()).is_err());
        assert!(Booking::from_payload(payload(Some("Asha"), None), Utc::now()).is_err());
        assert!(Booking::from_payload(payload(Some("   "), Some("987")), Utc::now()).is_err());
        assert!(Booking::from_payload(payload(Some("Asha"), Some("\t")), Utc::now()).is_err());
        assert!(Booking::from_payload(BookingPayload::default(), Utc::now()).is_err());
    }

    #[test]
    fn test_contact_number_strips_formatting() {
        let mut raw = payload(Some("Asha"), Some("98120-45670"));
        raw.country_code = Some("+91".to_string());
        let booking = Booking::from_payload(raw, Utc::now()).unwrap();
        assert_eq!(booking.contact_number(), "919812045670");
    }

    #[test]
    fn test_payload_parses_from_partial_json() {
        let raw: BookingPayload =
            serde_json::from_str(r#"{"name":"Asha K","phone":"9876500000"}"#).unwrap();
        assert_eq!(raw.name.as_deref(), Some("Asha K"));
        assert_eq!(raw.email, None);
        assert_eq!(raw.country_code, None);
    }

    #[test]
    fn test_booking_serializes_camel_case() {
        let booking = Booking::from_payload(
            payload(Some("Asha"), Some("987")),
            "2026-08-27T10:00:00Z".parse().unwrap(),
        )
        .unwrap();
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["countryCode"], "+91");
        assert_eq!(json["timestamp"], "2026-08-27T10:00:00Z");
    }
}
