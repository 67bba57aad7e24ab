use serde::Deserialize;

/// Longest simulated load the dashboard accepts.
pub const MAX_LOAD_DELAY_MS: u32 = 60_000;

const EMBEDDED_CONFIG: &str = include_str!("../dashboard.toml");

/// Dashboard configuration, embedded from `dashboard.toml` at build time.
///
/// Every section and key falls back to its default, so a partial file (or an
/// empty one) is valid.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Parse and validate the configuration embedded in the bundle.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: DashboardConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Semantic validation for settings that are not fully expressible via type checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.theme.validate()?;
        self.loading.validate()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// [app]
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_version")]
    pub version: String,
    #[serde(default = "default_app_tagline")]
    pub tagline: String,
}

fn default_app_name() -> String {
    "TheMachine".into()
}
fn default_app_version() -> String {
    "0.1.0".into()
}
fn default_app_tagline() -> String {
    "Welcome to TheMachine, your unified AI development and orchestration platform.".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            tagline: default_app_tagline(),
        }
    }
}

// ---------------------------------------------------------------------------
// [theme]
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Local storage key holding `"light"` or `"dark"`.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Class toggled on the document root while the dark theme is active.
    #[serde(default = "default_dark_class")]
    pub dark_class: String,
}

fn default_storage_key() -> String {
    "theme".into()
}
fn default_dark_class() -> String {
    "dark".into()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            dark_class: default_dark_class(),
        }
    }
}

impl ThemeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "theme.storage_key must not be empty".to_string(),
            ));
        }
        if self.dark_class.trim().is_empty() || self.dark_class.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "theme.dark_class '{}' must be a single non-empty class name",
                self.dark_class
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// [loading]
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoadingConfig {
    /// Delay before the mock source is polled, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u32,
}

fn default_delay_ms() -> u32 {
    1_000
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl LoadingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delay_ms > MAX_LOAD_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "loading.delay_ms must be <= {MAX_LOAD_DELAY_MS} (got {})",
                self.delay_ms
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// [logging]
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"tm_core=debug,info"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
