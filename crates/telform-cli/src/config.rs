//! Runtime configuration read from the environment (and a `.env` file, if any).

use std::env;

use telform_core::RegionCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Region used for lines that do not name one (`TELFORM_DEFAULT_REGION`).
    pub default_region: Option<RegionCode>,
    /// Tracing filter directive (`TELFORM_LOG`, default "warn").
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_vars(
            env::var("TELFORM_DEFAULT_REGION").ok(),
            env::var("TELFORM_LOG").ok(),
        )
    }

    fn from_vars(region: Option<String>, log_level: Option<String>) -> Result<Self, ConfigError> {
        let default_region = region
            .filter(|r| !r.trim().is_empty())
            .map(|r| parse_region("TELFORM_DEFAULT_REGION", r.trim()))
            .transpose()?;

        Ok(Self {
            default_region,
            log_level: log_level.unwrap_or_else(|| "warn".to_string()),
        })
    }

    /// Command-line flag wins over the environment.
    pub fn with_region(mut self, region: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(region) = region {
            self.default_region = Some(parse_region("--region", region)?);
        }
        Ok(self)
    }
}

fn parse_region(var: &str, value: &str) -> Result<RegionCode, ConfigError> {
    RegionCode::parse(value).map_err(|err| ConfigError::InvalidValue {
        var: var.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_vars() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.default_region, None);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn reads_region_and_log_level() {
        let config = Config::from_vars(Some(" NG ".into()), Some("debug".into())).unwrap();
        assert_eq!(config.default_region, Some(RegionCode::parse("NG").unwrap()));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn blank_region_means_none() {
        let config = Config::from_vars(Some("  ".into()), None).unwrap();
        assert_eq!(config.default_region, None);
    }

    #[test]
    fn malformed_region_is_rejected() {
        let err = Config::from_vars(Some("nigeria".into()), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref var, .. } if var == "TELFORM_DEFAULT_REGION"
        ));
    }

    #[test]
    fn flag_overrides_env() {
        let config = Config::from_vars(Some("NG".into()), None)
            .unwrap()
            .with_region(Some("CM"))
            .unwrap();
        assert_eq!(config.default_region, Some(RegionCode::parse("CM").unwrap()));

        let unchanged = config.clone().with_region(None).unwrap();
        assert_eq!(unchanged, config);
    }

    #[test]
    fn malformed_flag_reports_once_through_anyhow() {
        let err = Config::from_vars(None, None)
            .and_then(|c| c.with_region(Some("ng")))
            .map_err(anyhow::Error::from)
            .unwrap_err();
        let shown = format!("{err:#}");
        assert!(shown.starts_with("invalid value for --region"), "{shown}");
        assert_eq!(shown.matches("--region").count(), 1);
    }
}
