//! Configuration for the pipeline.
//!
//! Uses `figment` for layered configuration: defaults -> config file ->
//! environment -> explicit overrides. The config file is `gemstone.toml` in
//! the working directory unless an explicit path is given.

use crate::error::PipelineError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gemstone.toml";

/// Top-level configuration for the gemstone pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub ingestion: IngestionConfig,
}

/// Configuration for the data-ingestion stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// CSV file the stage reads from.
    #[serde(default = "default_source_data_path")]
    pub source_data_path: PathBuf,
    /// Where the untouched copy of the source lands.
    #[serde(default = "default_raw_data_path")]
    pub raw_data_path: PathBuf,
    /// Where the training subset lands.
    #[serde(default = "default_train_data_path")]
    pub train_data_path: PathBuf,
    /// Where the test subset lands.
    #[serde(default = "default_test_data_path")]
    pub test_data_path: PathBuf,
    /// Fraction of rows routed to the test artifact.
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    /// Seed for the split. Unset means a fresh random partition per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            source_data_path: default_source_data_path(),
            raw_data_path: default_raw_data_path(),
            train_data_path: default_train_data_path(),
            test_data_path: default_test_data_path(),
            test_fraction: default_test_fraction(),
            seed: None,
        }
    }
}

impl IngestionConfig {
    /// Directory holding the raw artifact and the ingestion report.
    pub fn artifact_dir(&self) -> &Path {
        match self.raw_data_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

fn default_source_data_path() -> PathBuf {
    PathBuf::from("notebooks/data/gemstone.csv")
}
fn default_raw_data_path() -> PathBuf {
    PathBuf::from("artifacts/raw.csv")
}
fn default_train_data_path() -> PathBuf {
    PathBuf::from("artifacts/train.csv")
}
fn default_test_data_path() -> PathBuf {
    PathBuf::from("artifacts/test.csv")
}
fn default_test_fraction() -> f64 {
    0.25
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides (passed as argument)
/// 2. Environment variables (prefixed with `GEMSTONE_`, e.g.
///    `GEMSTONE_INGESTION__TEST_FRACTION=0.3`)
/// 3. Config file (`config_file` if given, else `gemstone.toml` when present)
/// 4. Built-in defaults
pub fn load_config(
    config_file: Option<&Path>,
    overrides: Option<&PipelineConfig>,
) -> Result<PipelineConfig, PipelineError> {
    let mut figment = Figment::from(Serialized::defaults(PipelineConfig::default()));

    if let Some(path) = config_file {
        if !path.exists() {
            return Err(PipelineError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        figment = figment.merge(Toml::file(path));
    } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
        figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
    }

    figment = figment.merge(Env::prefixed("GEMSTONE_").split("__"));

    if let Some(overrides) = overrides {
        figment = figment.merge(Serialized::defaults(overrides));
    }

    figment
        .extract()
        .map_err(|e| PipelineError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = IngestionConfig::default();
        assert_eq!(
            config.source_data_path,
            PathBuf::from("notebooks/data/gemstone.csv")
        );
        assert_eq!(config.raw_data_path, PathBuf::from("artifacts/raw.csv"));
        assert_eq!(config.train_data_path, PathBuf::from("artifacts/train.csv"));
        assert_eq!(config.test_data_path, PathBuf::from("artifacts/test.csv"));
        assert_eq!(config.test_fraction, 0.25);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gemstone.toml");
        std::fs::write(&path, "").unwrap();

        let config = load_config(Some(&path), None).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gemstone.toml");
        std::fs::write(
            &path,
            "[ingestion]\nsource_data_path = \"data/other.csv\"\ntest_fraction = 0.3\nseed = 7\n",
        )
        .unwrap();

        let config = load_config(Some(&path), None).unwrap();
        assert_eq!(config.ingestion.source_data_path, PathBuf::from("data/other.csv"));
        assert_eq!(config.ingestion.test_fraction, 0.3);
        assert_eq!(config.ingestion.seed, Some(7));
        // untouched fields keep their defaults
        assert_eq!(
            config.ingestion.raw_data_path,
            PathBuf::from("artifacts/raw.csv")
        );
    }

    #[test]
    fn test_overrides_beat_file_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gemstone.toml");
        std::fs::write(&path, "[ingestion]\ntest_fraction = 0.3\n").unwrap();

        let overrides = PipelineConfig {
            ingestion: IngestionConfig {
                test_fraction: 0.4,
                ..IngestionConfig::default()
            },
        };

        let config = load_config(Some(&path), Some(&overrides)).unwrap();
        assert_eq!(config.ingestion.test_fraction, 0.4);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let err = load_config(Some(Path::new("/no/such/gemstone.toml")), None).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gemstone.toml");
        std::fs::write(&path, "ingestion = { not valid toml").unwrap();

        let err = load_config(Some(&path), None).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_artifact_dir_follows_raw_path() {
        let mut config = IngestionConfig::default();
        assert_eq!(config.artifact_dir(), Path::new("artifacts"));

        config.raw_data_path = PathBuf::from("raw.csv");
        assert_eq!(config.artifact_dir(), Path::new("."));
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = PipelineConfig {
            ingestion: IngestionConfig {
                seed: Some(42),
                ..IngestionConfig::default()
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
