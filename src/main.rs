use clap::Parser;
use clinic_booking::adapters::{email::EmailNotifier, sheets::SheetsNotifier};
use clinic_booking::utils::{logger, validation::Validate};
use clinic_booking::{api, AppConfig, BookingService, CliConfig};
use std::sync::Arc;
use std::time::Duration;

// Bounds each outbound notifier call so a hanging third-party endpoint
// cannot stall a booking response indefinitely.
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting clinic-booking API");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.apply_env_fallbacks();
    if let Some(bind) = &cli.bind {
        config.server.bind_addr = bind.clone();
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.notifications.sheets_endpoint.is_none() {
        tracing::warn!("Sheets endpoint not configured; bookings will not be logged to the sheet");
    }
    if config.notifications.email_api_key.is_none() {
        tracing::warn!("Email API key not configured; booking emails are disabled");
    }

    let client = reqwest::Client::builder()
        .timeout(OUTBOUND_TIMEOUT)
        .build()?;

    let notifications = &config.notifications;
    let sheets = SheetsNotifier::new(notifications.sheets_endpoint.clone(), client.clone());
    let email = EmailNotifier::new(
        notifications.email_api_key.clone(),
        notifications.notify_email().to_string(),
        client,
    );
    let service = Arc::new(BookingService::new(
        Arc::new(sheets),
        Arc::new(email),
        notifications.clinic_whatsapp().to_string(),
    ));

    let app = api::router(service);
    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    tracing::info!("🚀 Booking API listening on {}", config.server.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
