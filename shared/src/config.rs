//! # Application Configuration
//!
//! The storefront is a static bundle, so configuration is baked in at
//! build time from environment variables and validated once at start-up.
//!
//! | Variable                  | Default   |
//! |---------------------------|-----------|
//! | `TOPUP_BACKEND_URL`       | unset (purchase history disabled) |
//! | `TOPUP_BACKEND_ANON_KEY`  | unset     |
//! | `TOPUP_REDIRECT_SECONDS`  | `3`       |
//!
//! ```rust,no_run
//! use shared::config::{app_config, init_config, AppConfig};
//!
//! init_config(AppConfig::from_build_env()?)?;
//! let sign_in = &app_config().sign_in_path;
//! # Ok::<(), shared::error::ConfigError>(())
//! ```

use std::sync::OnceLock;

use tracing::info;

use crate::error::ConfigError;
use crate::navigation::{validate_route, DEFAULT_LANDING, SIGN_IN_PATH};
use crate::network::NetworkPolicy;

pub const DEFAULT_REDIRECT_SECONDS: u32 = 3;
const MAX_REDIRECT_SECONDS: u32 = 30;

/// Hosted backend endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project URL, without trailing slash.
    pub url: String,
    /// Public (anon) API key sent with every request.
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim().trim_end_matches('/');
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Backend(format!("url must be http(s), got `{}`", url)));
        }
        if anon_key.trim().is_empty() {
            return Err(ConfigError::Backend("anon key is empty".to_string()));
        }
        Ok(Self {
            url: url.to_string(),
            anon_key: anon_key.trim().to_string(),
        })
    }

    /// REST endpoint for a table.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub policy: NetworkPolicy,
    /// Where guarded views send unauthenticated visitors.
    pub sign_in_path: String,
    /// Landing route after sign-in without a captured target.
    pub default_landing: String,
    /// Countdown before the post-sign-in redirect.
    pub redirect_seconds: u32,
    /// `None` disables purchase history.
    pub backend: Option<BackendConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            policy: NetworkPolicy::base(),
            sign_in_path: SIGN_IN_PATH.to_string(),
            default_landing: DEFAULT_LANDING.to_string(),
            redirect_seconds: DEFAULT_REDIRECT_SECONDS,
            backend: None,
        }
    }
}

impl AppConfig {
    /// Build from raw values; `None` means "use the default".
    pub fn from_values(
        backend_url: Option<&str>,
        backend_anon_key: Option<&str>,
        redirect_seconds: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let backend = match (backend_url, backend_anon_key) {
            (Some(url), Some(key)) => Some(BackendConfig::new(url, key)?),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Backend("anon key is missing".to_string())),
            (None, Some(_)) => return Err(ConfigError::Backend("url is missing".to_string())),
        };

        let redirect_seconds = match redirect_seconds {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "TOPUP_REDIRECT_SECONDS",
                    value: raw.to_string(),
                })?,
            None => DEFAULT_REDIRECT_SECONDS,
        };

        Ok(Self {
            backend,
            redirect_seconds,
            ..Self::default()
        })
    }

    /// Read the variables captured at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("TOPUP_BACKEND_URL"),
            option_env!("TOPUP_BACKEND_ANON_KEY"),
            option_env!("TOPUP_REDIRECT_SECONDS"),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_route(&self.sign_in_path)?;
        validate_route(&self.default_landing)?;
        if self.redirect_seconds > MAX_REDIRECT_SECONDS {
            return Err(ConfigError::Countdown(self.redirect_seconds));
        }
        Ok(())
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Validate and install the global configuration. Call once at start-up.
pub fn init_config(config: AppConfig) -> Result<(), ConfigError> {
    config.validate()?;
    info!(
        backend = config.backend.as_ref().map(|b| b.url.as_str()),
        chains = config.policy.chains().len(),
        "configuration loaded"
    );
    CONFIG.set(config).map_err(|_| ConfigError::AlreadyInitialized)
}

/// The installed configuration, or the defaults if [`init_config`] was never called.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::from_values(None, None, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.sign_in_path, "/auth");
        assert_eq!(config.redirect_seconds, 3);
    }

    #[test]
    fn test_backend_settings() {
        let config = AppConfig::from_values(Some("https://xyz.supabase.co/"), Some(" anon "), Some("5")).unwrap();
        let backend = config.backend.unwrap();
        assert_eq!(backend.url, "https://xyz.supabase.co");
        assert_eq!(backend.anon_key, "anon");
        assert_eq!(backend.table_url("purchases"), "https://xyz.supabase.co/rest/v1/purchases");
        assert_eq!(config.redirect_seconds, 5);
    }

    #[test]
    fn test_rejects_partial_backend() {
        assert!(AppConfig::from_values(Some("https://xyz.supabase.co"), None, None).is_err());
        assert!(AppConfig::from_values(None, Some("key"), None).is_err());
        assert!(AppConfig::from_values(Some("ftp://x"), Some("key"), None).is_err());
        assert!(AppConfig::from_values(None, None, Some("soon")).is_err());
    }

    #[test]
    fn test_validate_bounds() {
        let config = AppConfig {
            redirect_seconds: 31,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Countdown(31)));

        let config = AppConfig {
            sign_in_path: "auth".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
