//! Service configuration
//!
//! The analysis window and target station were literals in earlier
//! iterations of this service; they live here so operators can point the
//! API at a different window or station without a rebuild.

use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level service configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub analysis: AnalysisConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Dataset location
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://resources/hawaii.sqlite".to_string(),
        }
    }
}

/// Analysis window parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Observations strictly after this date count as the most recent year
    pub cutoff_date: NaiveDate,
    /// Station with the most observations in the dataset
    pub most_active_station: String,
    /// Last observation date; exclusive end for open-ended ranges, so the
    /// day itself is never included
    pub dataset_end: NaiveDate,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cutoff_date: NaiveDate::from_ymd_opt(2016, 8, 23).expect("valid date"),
            most_active_station: "USC00519281".to_string(),
            dataset_end: NaiveDate::from_ymd_opt(2017, 8, 23).expect("valid date"),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config/default.toml` (optional) with
    /// `CLIMATE__`-prefixed environment overrides on top of coded defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("CLIMATE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dataset_window() {
        let config = AppConfig::default();
        assert_eq!(config.analysis.cutoff_date.to_string(), "2016-08-23");
        assert_eq!(config.analysis.dataset_end.to_string(), "2017-08-23");
        assert_eq!(config.analysis.most_active_station, "USC00519281");
    }
}
