pub mod app_config;

pub use app_config::{AppConfig, NotificationConfig, ServerConfig};

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "clinic-booking")]
#[command(about = "Booking request API for the clinic website")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Socket address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON for container log collectors
    #[arg(long)]
    pub json_logs: bool,
}
