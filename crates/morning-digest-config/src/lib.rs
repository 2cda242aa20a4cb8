use morning_digest_engine::{Watchlist, schedule::cron_for_delivery_time};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Delivery slots offered for the morning digest.
pub const DELIVERY_TIMES: [&str; 9] = [
    "05:00", "05:30", "06:00", "06:30", "07:00", "07:30", "08:00", "08:30", "09:00",
];

pub const DEFAULT_DELIVERY_TIME: &str = "07:00";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid delivery time '{0}', expected a half-hour slot from 05:00 to 09:00")]
    InvalidDeliveryTime(String),
}

/// Locally persisted preferences: watchlist, recipient and delivery slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub watchlist: Vec<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_delivery_time")]
    pub delivery_time: String,
}

fn default_delivery_time() -> String {
    DEFAULT_DELIVERY_TIME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            watchlist: Vec::new(),
            email: String::new(),
            delivery_time: default_delivery_time(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Hand-edited files may carry lower-case or repeated tickers
        config.watchlist = Watchlist::from_tickers(&config.watchlist)
            .tickers()
            .to_vec();

        log::info!("Loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config, falling back to defaults when no file exists.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        log::info!("Saved config to {}", config_path.display());
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/morning-digest");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn watchlist(&self) -> Watchlist {
        Watchlist::from_tickers(&self.watchlist)
    }

    pub fn set_watchlist(&mut self, watchlist: &Watchlist) {
        self.watchlist = watchlist.tickers().to_vec();
    }

    /// Sets the delivery slot, rejecting anything not in [`DELIVERY_TIMES`].
    pub fn set_delivery_time(&mut self, time: &str) -> Result<(), ConfigError> {
        if !DELIVERY_TIMES.contains(&time) {
            return Err(ConfigError::InvalidDeliveryTime(time.to_string()));
        }
        self.delivery_time = time.to_string();
        Ok(())
    }

    /// Cron expression the scheduler would use for the delivery slot.
    pub fn delivery_cron(&self) -> Option<String> {
        cron_for_delivery_time(&self.delivery_time)
    }
}
