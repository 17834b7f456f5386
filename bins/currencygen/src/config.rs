//! Generator configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Where to read the dataset and where to write the table.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// JSON currency dataset.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    /// Generated Rust source.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("crates/currency/data/currencies.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("crates/currency/src/table.rs")
}

impl GeneratorConfig {
    /// Loads configuration from the optional `config/currencygen` file and
    /// `MONETA_GEN__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/currencygen").required(false))
            .add_source(config::Environment::with_prefix("MONETA_GEN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(
            ["MONETA_GEN__DATASET_PATH", "MONETA_GEN__OUTPUT_PATH"],
            || {
                let config = GeneratorConfig::load().unwrap();
                assert_eq!(config.dataset_path, default_dataset_path());
                assert_eq!(config.output_path, default_output_path());
            },
        );
    }

    #[test]
    fn test_env_override() {
        temp_env::with_vars(
            [
                ("MONETA_GEN__DATASET_PATH", Some("/tmp/currencies.json")),
                ("MONETA_GEN__OUTPUT_PATH", None),
            ],
            || {
                let config = GeneratorConfig::load().unwrap();
                assert_eq!(config.dataset_path, PathBuf::from("/tmp/currencies.json"));
                assert_eq!(config.output_path, default_output_path());
            },
        );
    }
}
