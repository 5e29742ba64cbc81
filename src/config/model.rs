//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::contact::submit::STATUS_RESET_DELAY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub support: SupportConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend the contact form posts to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Shared base URL; the contact path is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Sent as a bearer token when set.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    #[serde(default = "default_true")]
    pub use_system_proxy: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            auth_token: None,
            use_system_proxy: true,
        }
    }
}

/// Static details shown on the support card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportConfig {
    #[serde(default = "default_specialist_name")]
    pub specialist_name: String,
    #[serde(default = "default_specialist_title")]
    pub specialist_title: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_messenger_label")]
    pub messenger_label: String,
    #[serde(default = "default_messenger_handle")]
    pub messenger_handle: String,
    #[serde(default = "default_messenger_url")]
    pub messenger_url: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            specialist_name: default_specialist_name(),
            specialist_title: default_specialist_title(),
            email: default_email(),
            phone: default_phone(),
            messenger_label: default_messenger_label(),
            messenger_handle: default_messenger_handle(),
            messenger_url: default_messenger_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// How long a success or error notice stays up, in milliseconds.
    #[serde(default = "default_status_reset_ms")]
    pub status_reset_ms: u64,
}

impl FormConfig {
    pub fn status_reset_delay(&self) -> Duration {
        Duration::from_millis(self.status_reset_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            status_reset_ms: default_status_reset_ms(),
        }
    }
}

/// Diagnostics log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_user_agent() -> String {
    format!("contactdesk/{}", env!("CARGO_PKG_VERSION"))
}
fn default_specialist_name() -> String {
    "NGOBOKA Alain Beni".to_string()
}
fn default_specialist_title() -> String {
    "Support Specialist · Fullstack Developer & BIT Analyst".to_string()
}
fn default_email() -> String {
    "ngobokaben@gmail.com".to_string()
}
fn default_phone() -> String {
    "+250 787 979 333".to_string()
}
fn default_messenger_label() -> String {
    "Facebook Messenger".to_string()
}
fn default_messenger_handle() -> String {
    "ngobokaben".to_string()
}
fn default_messenger_url() -> String {
    "https://www.facebook.com/ngobokaben".to_string()
}
fn default_status_reset_ms() -> u64 {
    STATUS_RESET_DELAY.as_millis() as u64
}
fn default_log_dir() -> String {
    "~/.local/share/contactdesk/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
