pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{AppConfig, CliConfig};
pub use crate::core::booking::{BookingAccepted, BookingService};
pub use crate::utils::error::{BookingError, Result};
