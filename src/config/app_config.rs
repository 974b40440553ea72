use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
pub const DEFAULT_NOTIFY_EMAIL: &str = "appointments@veyraskin.clinic";
pub const DEFAULT_CLINIC_WHATSAPP: &str = "919812045670";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Spreadsheet-append webhook; unset disables the sheets notifier.
    pub sheets_endpoint: Option<String>,
    /// Transactional email provider key; unset disables the email notifier.
    pub email_api_key: Option<String>,
    pub notify_email: Option<String>,
    pub clinic_whatsapp: Option<String>,
}

impl NotificationConfig {
    pub fn notify_email(&self) -> &str {
        self.notify_email.as_deref().unwrap_or(DEFAULT_NOTIFY_EMAIL)
    }

    pub fn clinic_whatsapp(&self) -> &str {
        self.clinic_whatsapp
            .as_deref()
            .unwrap_or(DEFAULT_CLINIC_WHATSAPP)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string, substituting `${VAR}`
    /// references from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BookingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Fill options still unset after file loading from the process
    /// environment. Called once at startup; request handling never touches
    /// the environment.
    pub fn apply_env_fallbacks(&mut self) {
        let n = &mut self.notifications;
        if n.sheets_endpoint.is_none() {
            n.sheets_endpoint = std::env::var("SHEETS_WEBHOOK_URL").ok();
        }
        if n.email_api_key.is_none() {
            n.email_api_key = std::env::var("EMAIL_API_KEY").ok();
        }
        if n.notify_email.is_none() {
            n.notify_email = std::env::var("NOTIFY_EMAIL").ok();
        }
        if n.clinic_whatsapp.is_none() {
            n.clinic_whatsapp = std::env::var("CLINIC_WHATSAPP").ok();
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.bind_addr", &self.server.bind_addr)?;

        if let Some(endpoint) = &self.notifications.sheets_endpoint {
            validation::validate_url("notifications.sheets_endpoint", endpoint)?;
        }

        validation::validate_non_empty_string(
            "notifications.notify_email",
            self.notifications.notify_email(),
        )?;
        validation::validate_phone_number(
            "notifications.clinic_whatsapp",
            self.notifications.clinic_whatsapp(),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_absent() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.notifications.sheets_endpoint, None);
        assert_eq!(config.notifications.notify_email(), DEFAULT_NOTIFY_EMAIL);
        assert_eq!(
            config.notifications.clinic_whatsapp(),
            DEFAULT_CLINIC_WHATSAPP
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config_parses() {
        let config = AppConfig::from_toml_str(
            r#"
[server]
bind_addr = "127.0.0.1:8080"

[notifications]
sheets_endpoint = "https://script.google.com/macros/s/abc/exec"
email_api_key = "re_test_key"
notify_email = "desk@clinic.test"
clinic_whatsapp = "911234567890"
"#,
        )
        .unwrap();

        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
        assert_eq!(
            config.notifications.sheets_endpoint.as_deref(),
            Some("https://script.google.com/macros/s/abc/exec")
        );
        assert_eq!(config.notifications.notify_email(), "desk@clinic.test");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BOOKING_TEST_SHEETS_URL", "https://example.com/hook");
        let config = AppConfig::from_toml_str(
            r#"
[notifications]
sheets_endpoint = "${BOOKING_TEST_SHEETS_URL}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.notifications.sheets_endpoint.as_deref(),
            Some("https://example.com/hook")
        );
    }

    #[test]
    fn test_unknown_env_var_left_as_is() {
        let config = AppConfig::from_toml_str(
            r#"
[notifications]
email_api_key = "${BOOKING_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.notifications.email_api_key.as_deref(),
            Some("${BOOKING_TEST_UNSET_VAR}")
        );
    }

    #[test]
    fn test_invalid_sheets_endpoint_fails_validation() {
        let config = AppConfig::from_toml_str(
            r#"
[notifications]
sheets_endpoint = "not-a-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind_addr = \"0.0.0.0:9999\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:9999");
    }
}
