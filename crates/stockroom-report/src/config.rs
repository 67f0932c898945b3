//! # Report Configuration
//!
//! How reports look: output format, table style, currency symbol and
//! timestamp format.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOCKROOM_REPORT_FORMAT=json                                       │
//! │     STOCKROOM_TABLE_STYLE=ascii                                        │
//! │     STOCKROOM_CURRENCY_SYMBOL=R$                                       │
//! │     STOCKROOM_TIMESTAMP_FORMAT=%d/%m/%Y %H:%M                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/stockroom/report.toml (Linux)                            │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     table / fancy_grid / "$" / "%Y-%m-%d %H:%M:%S"                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! format = "table"          # table | json
//! style = "fancy_grid"      # fancy_grid | ascii
//! currency_symbol = "R$ "
//! timestamp_format = "%d/%m/%Y %H:%M:%S"
//! show_titles = true
//! ```

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use stockroom_core::Money;

use crate::error::{ReportError, ReportResult};
use crate::renderer::TableStyle;

// =============================================================================
// Report Format
// =============================================================================

/// Output format of the printed reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Human-readable table via the configured renderer.
    #[default]
    Table,
    /// Pretty-printed JSON array of row objects.
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            other => Err(ReportError::InvalidConfig(format!(
                "Unknown report format: '{}'. Valid options: table, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Report Configuration
// =============================================================================

/// Complete report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,

    /// Border style for table output.
    #[serde(default)]
    pub style: TableStyle,

    /// Prefix for prices, e.g. `"$"` or `"R$ "`.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// strftime-style format for movement timestamps (UTC).
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Print a title line above each table.
    #[serde(default = "default_true")]
    pub show_titles: bool,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            format: ReportFormat::default(),
            style: TableStyle::default(),
            currency_symbol: default_currency_symbol(),
            timestamp_format: default_timestamp_format(),
            show_titles: true,
        }
    }
}

impl ReportConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (report.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ReportResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading report config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load report config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ReportResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ReportError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Report config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ReportResult<()> {
        if self.timestamp_format.trim().is_empty() {
            return Err(ReportError::InvalidConfig(
                "timestamp_format must not be empty".into(),
            ));
        }

        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ReportError::InvalidConfig(format!(
                "timestamp_format '{}' is not a valid strftime pattern",
                self.timestamp_format
            )));
        }

        Ok(())
    }

    /// Formats a price with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::Money;
    /// use stockroom_report::ReportConfig;
    ///
    /// let config = ReportConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(200_000)), "$2000.00");
    /// assert_eq!(config.format_currency(Money::from_cents(-550)), "-$5.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.major().abs(),
            amount.minor()
        )
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(format) = lookup("STOCKROOM_REPORT_FORMAT") {
            match format.parse() {
                Ok(parsed) => {
                    debug!(%format, "Overriding report format from environment");
                    self.format = parsed;
                }
                Err(_) => warn!(%format, "Unknown report format in environment"),
            }
        }

        if let Some(style) = lookup("STOCKROOM_TABLE_STYLE") {
            match style.parse() {
                Ok(parsed) => self.style = parsed,
                Err(_) => warn!(%style, "Unknown table style in environment"),
            }
        }

        if let Some(symbol) = lookup("STOCKROOM_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(format) = lookup("STOCKROOM_TIMESTAMP_FORMAT") {
            self.timestamp_format = format;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stockroom", "stockroom")
            .map(|dirs| dirs.config_dir().join("report.toml"))
    }
}
