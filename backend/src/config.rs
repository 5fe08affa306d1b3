use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::indicators::{DEFAULT_MA_PERIOD, DEFAULT_RSI_PERIOD, MAX_PERIOD};
use crate::models::IndicatorParams;

pub const CONFIG_ENV_VAR: &str = "DASHBOARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name} must be between 1 and {max}, got {value}")]
    InvalidPeriod {
        name: &'static str,
        value: usize,
        max: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// JSON price file; the built-in sample is used when unset
    pub dataset_path: Option<PathBuf>,
    pub ma_period: usize,
    pub rsi_period: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            dataset_path: None,
            ma_period: DEFAULT_MA_PERIOD,
            rsi_period: DEFAULT_RSI_PERIOD,
        }
    }
}

impl AppConfig {
    pub fn indicator_params(&self) -> IndicatorParams {
        IndicatorParams {
            ma_period: self.ma_period,
            rsi_period: self.rsi_period,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("ma_period", self.ma_period), ("rsi_period", self.rsi_period)] {
            if value == 0 || value > MAX_PERIOD {
                return Err(ConfigError::InvalidPeriod {
                    name,
                    value,
                    max: MAX_PERIOD,
                });
            }
        }
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Read the file named by `DASHBOARD_CONFIG` (or `config.json`)
/// Falls back to defaults when that file doesn't exist
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    let path = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if !Path::new(&path).exists() {
        tracing::info!("No config file at {}, using defaults", path);
        return Ok(AppConfig::default());
    }

    tracing::info!("Loading config from {}", path);
    load_config(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.dataset_path, None);
        assert_eq!(config.indicator_params(), IndicatorParams::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "rsi_period": 5 }"#).unwrap();
        assert_eq!(config.rsi_period, 5);
        assert_eq!(config.ma_period, 3);
        assert_eq!(config.bind_addr, AppConfig::default().bind_addr);
    }

    #[test]
    fn test_full_config() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "bind_addr": "127.0.0.1:8080",
                "dataset_path": "data/prices.json",
                "ma_period": 5,
                "rsi_period": 7
            }"#,
        )
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.dataset_path, Some(PathBuf::from("data/prices.json")));
        assert_eq!(
            config.indicator_params(),
            IndicatorParams {
                ma_period: 5,
                rsi_period: 7
            }
        );
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(matches!(
            load_config("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            parse_config(r#"{ "ma_period": "three" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = parse_config(r#"{ "ma_period": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPeriod {
                name: "ma_period",
                value: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_period_rejected() {
        let err = parse_config(r#"{ "rsi_period": 201 }"#).unwrap_err();
        assert_eq!(err.to_string(), "rsi_period must be between 1 and 200, got 201");
    }

    #[test]
    fn test_load_config_validates_file() {
        let path = std::env::temp_dir().join(format!("dashboard-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "rsi_period": 0 }"#).unwrap();

        let result = load_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidPeriod { name: "rsi_period", .. })
        ));
    }
}
