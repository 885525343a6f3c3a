//! Application configuration management.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
///
/// Every section has defaults, so an empty configuration reproduces the
/// standard salon policy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Snapshot locations.
    #[serde(default)]
    pub data: DataConfig,
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Earnings policy constants.
    #[serde(default)]
    pub earnings: EarningsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where document-store snapshots are read from.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// JSON array of earnings report documents.
    #[serde(default = "default_reports_path")]
    pub reports_path: PathBuf,
    /// JSON array of staff documents.
    #[serde(default = "default_staff_path")]
    pub staff_path: PathBuf,
    /// JSON array of expense documents.
    #[serde(default)]
    pub expenses_path: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            reports_path: default_reports_path(),
            staff_path: default_staff_path(),
            expenses_path: None,
        }
    }
}

fn default_reports_path() -> PathBuf {
    PathBuf::from("data/salon_earnings.json")
}

fn default_staff_path() -> PathBuf {
    PathBuf::from("data/users.json")
}

/// Display configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Currency whose symbol prefixes monetary cells.
    #[serde(default)]
    pub currency: Currency,
}

/// Earnings policy constants.
#[derive(Debug, Clone, Deserialize)]
pub struct EarningsConfig {
    /// Flat surcharge added to revenue per credit card transaction.
    #[serde(default = "default_credit_surcharge")]
    pub credit_surcharge: Decimal,
    /// Share of a technician's period total paid as commission.
    #[serde(default = "default_commission_rate")]
    pub commission_rate: Decimal,
    /// Share of the commission paid by check; the rest is paid in cash.
    #[serde(default = "default_check_share")]
    pub check_share: Decimal,
}

impl Default for EarningsConfig {
    fn default() -> Self {
        Self {
            credit_surcharge: default_credit_surcharge(),
            commission_rate: default_commission_rate(),
            check_share: default_check_share(),
        }
    }
}

fn default_credit_surcharge() -> Decimal {
    Decimal::new(200, 2) // 2.00
}

fn default_commission_rate() -> Decimal {
    Decimal::new(70, 2) // 0.70
}

fn default_check_share() -> Decimal {
    Decimal::new(70, 2) // 0.70
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `SALON__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SALON").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
