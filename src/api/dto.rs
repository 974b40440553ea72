use crate::domain::model::Delivery;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookingAcceptedDto {
    pub success: bool,
    pub message: String,
    #[serde(rename = "whatsappLink")]
    pub whatsapp_link: String,
    pub services: Delivery,
}

#[derive(Debug, Serialize)]
pub struct BookingErrorDto {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}
