use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Caeli configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CaeliConfig {
    /// CSV input settings.
    #[serde(default)]
    pub io: IoToml,

    /// Index computation settings.
    #[serde(default)]
    pub index: IndexToml,
}

impl CaeliConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_value_column")]
    pub value_column: String,
    #[serde(default)]
    pub pet_column: Option<String>,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            date_column: default_date_column(),
            value_column: default_value_column(),
            pet_column: None,
            date_format: default_date_format(),
        }
    }
}

fn default_date_column() -> String {
    "date".to_string()
}
fn default_value_column() -> String {
    "value".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexToml {
    #[serde(default = "default_aggregation")]
    pub aggregation: usize,
    #[serde(default)]
    pub months: Option<Vec<u8>>,
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,
    #[serde(default = "default_gamma_method")]
    pub gamma_method: String,
    #[serde(default = "default_probability_epsilon")]
    pub probability_epsilon: f64,
}

impl Default for IndexToml {
    fn default() -> Self {
        Self {
            aggregation: default_aggregation(),
            months: None,
            min_samples: default_min_samples(),
            gamma_method: default_gamma_method(),
            probability_epsilon: default_probability_epsilon(),
        }
    }
}

fn default_aggregation() -> usize {
    1
}
fn default_min_samples() -> usize {
    caeli_distribution::DEFAULT_MIN_SAMPLES
}
fn default_gamma_method() -> String {
    "mle".to_string()
}
fn default_probability_epsilon() -> f64 {
    caeli_distribution::DEFAULT_PROBABILITY_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: CaeliConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.io.date_column, "date");
        assert_eq!(cfg.io.value_column, "value");
        assert_eq!(cfg.index.aggregation, 1);
        assert_eq!(cfg.index.min_samples, 4);
        assert_eq!(cfg.index.gamma_method, "mle");
        assert!(cfg.index.months.is_none());
    }

    #[test]
    fn full_file() {
        let cfg: CaeliConfig = toml::from_str(
            r#"
            [io]
            date_column = "time"
            value_column = "pr"
            pet_column = "pet"
            date_format = "%d.%m.%Y"

            [index]
            aggregation = 3
            months = [1, 4, 7, 10]
            min_samples = 10
            gamma_method = "thom"
            probability_epsilon = 1e-9
            "#,
        )
        .unwrap();
        assert_eq!(cfg.io.pet_column.as_deref(), Some("pet"));
        assert_eq!(cfg.index.months, Some(vec![1, 4, 7, 10]));
        assert_eq!(cfg.index.gamma_method, "thom");
    }

    #[test]
    fn unknown_field_rejected() {
        let res: std::result::Result<CaeliConfig, _> =
            toml::from_str("[index]\nscale = 3\n");
        assert!(res.is_err());
    }

    #[test]
    fn load_missing_file_has_context() {
        let err = CaeliConfig::load(Path::new("/nonexistent/caeli.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
