use std::{env, time::Duration};

use adfoundry_contact::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DeliverySettings};
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_emailjs_base_url")]
    pub base_url: String,
    #[serde(default = "default_emailjs_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id_admin: String,
    #[serde(default)]
    pub template_id_user: String,
    #[serde(default)]
    pub public_key: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            base_url: default_emailjs_base_url(),
            timeout_secs: default_emailjs_timeout_secs(),
            service_id: String::new(),
            template_id_admin: String::new(),
            template_id_user: String::new(),
            public_key: String::new(),
        }
    }
}

impl EmailJsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn delivery(&self) -> DeliverySettings {
        DeliverySettings {
            service_id: self.service_id.to_owned(),
            template_id_admin: self.template_id_admin.to_owned(),
            template_id_user: self.template_id_user.to_owned(),
            public_key: self.public_key.to_owned(),
        }
    }
}

fn default_emailjs_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_emailjs_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Contact details shown in the footer, the floating buttons and the contact page.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_instagram")]
    pub instagram: String,
    #[serde(default = "default_phone")]
    pub phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: default_contact_email(),
            instagram: default_instagram(),
            phone: default_phone(),
        }
    }
}

impl SiteConfig {
    pub fn instagram_url(&self) -> String {
        format!("https://instagram.com/{}", self.instagram)
    }

    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.phone_digits())
    }

    pub fn phone_url(&self) -> String {
        format!("tel:+{}", self.phone_digits())
    }

    fn phone_digits(&self) -> String {
        self.phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

fn default_contact_email() -> String {
    "theadfoundryinfo@gmail.com".to_string()
}

fn default_instagram() -> String {
    "theadfoundry".to_string()
}

fn default_phone() -> String {
    "+91 9550771823".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. EMAILJS_* environment variables
    /// 2. Environment variables (ADFOUNDRY__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ADFOUNDRY")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("EMAILJS_SERVICE_ID", "emailjs.service_id"),
            ("EMAILJS_TEMPLATE_ID_ADMIN", "emailjs.template_id_admin"),
            ("EMAILJS_TEMPLATE_ID_USER", "emailjs.template_id_user"),
            ("EMAILJS_PUBLIC_KEY", "emailjs.public_key"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.emailjs.timeout_secs == 0 {
            return Err("EmailJS timeout must be at least 1 second".to_string());
        }
        Ok(())
    }
}
