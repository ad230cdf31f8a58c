use std::env;
use std::fmt;

/// Branding strings baked into exported documents and share payloads.
#[derive(Debug, Clone)]
pub struct Branding {
    pub organization: String,
    pub tagline: String,
    pub contact_phone: String,
    /// Base URL prefixed onto record detail routes in share links.
    pub site_url: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            organization: "Tirupati Agencies".to_string(),
            tagline: "Trusted Financial & Property Services".to_string(),
            contact_phone: "9850366753".to_string(),
            site_url: "https://tirupatiagencies.in".to_string(),
        }
    }
}

/// Top-level configuration. Everything has a default; the environment only
/// overrides.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub branding: Branding,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Branding::default();
        let site_url = env::var("APP_SITE_URL").unwrap_or(defaults.site_url);
        if !site_url.starts_with("http://") && !site_url.starts_with("https://") {
            return Err(ConfigError::InvalidSiteUrl(site_url));
        }

        let branding = Branding {
            organization: env::var("APP_ORG_NAME").unwrap_or(defaults.organization),
            tagline: env::var("APP_TAGLINE").unwrap_or(defaults.tagline),
            contact_phone: env::var("APP_CONTACT_PHONE").unwrap_or(defaults.contact_phone),
            site_url,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            branding,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSiteUrl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSiteUrl(value) => {
                write!(f, "APP_SITE_URL must start with http:// or https://, got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ORG_NAME");
        env::remove_var("APP_TAGLINE");
        env::remove_var("APP_CONTACT_PHONE");
        env::remove_var("APP_SITE_URL");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.branding.organization, "Tirupati Agencies");
        assert_eq!(config.branding.contact_phone, "9850366753");
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn rejects_site_url_without_scheme() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SITE_URL", "tirupatiagencies.in");
        let result = AppConfig::load();
        env::remove_var("APP_SITE_URL");
        assert!(matches!(result, Err(ConfigError::InvalidSiteUrl(_))));
    }
}
