//! Analyst profile: the starting state of the dashboard controls, read from a TOML file.
//!
//! ```toml
//! dataset = "predictions_with_probs.csv"
//! threshold = 0.35
//! account = "Account_205"
//! ```
//!
//! Every key is optional. Command-line flags override whatever the profile says.

use crate::dashboard::accounts::{AccountError, AccountId};
use crate::dataset::DEFAULT_DATASET_PATH;
use crate::session::{SLIDER_DEFAULT, SettingError, ThresholdSetting};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalystConfig {
    pub dataset: PathBuf,
    pub threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read or write analyst profile: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML analyst profile: {0}")]
    TomlParseError(#[from] toml::de::Error),
    #[error("Failed to serialize analyst profile to TOML format: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
    #[error("Invalid threshold: {0}")]
    Setting(#[from] SettingError),
    #[error("Invalid account: {0}")]
    Account(#[from] AccountError),
}

impl Default for AnalystConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET_PATH),
            threshold: SLIDER_DEFAULT,
            account: None,
        }
    }
}

impl AnalystConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let toml_string = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&toml_string)?;
        log::debug!("Loaded analyst profile from '{}': {config:?}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;
        let mut file = BufWriter::new(fs::File::create(path)?);
        file.write_all(toml_string.as_bytes())?;
        Ok(())
    }

    /// Applies command-line overrides on top of the profile.
    pub fn with_overrides(
        mut self,
        dataset: Option<PathBuf>,
        threshold: Option<f64>,
        account: Option<String>,
    ) -> Self {
        if let Some(dataset) = dataset {
            self.dataset = dataset;
        }
        if let Some(threshold) = threshold {
            self.threshold = threshold;
        }
        if account.is_some() {
            self.account = account;
        }
        self
    }

    pub fn setting(&self) -> Result<ThresholdSetting, ConfigError> {
        Ok(ThresholdSetting::new(self.threshold)?)
    }

    pub fn account_id(&self) -> Result<Option<AccountId>, ConfigError> {
        match &self.account {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_profile_uses_defaults() {
        let config: AnalystConfig = toml::from_str("threshold = 0.35").unwrap();
        assert_eq!(config.threshold, 0.35);
        assert_eq!(config.dataset, PathBuf::from("predictions_with_probs.csv"));
        assert_eq!(config.account, None);
        assert_eq!(config.setting().unwrap().value(), 0.35);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<AnalystConfig>("treshold = 0.3").is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analyst.toml");
        let config = AnalystConfig {
            dataset: PathBuf::from("scored.csv"),
            threshold: 0.65,
            account: Some("Account_309".to_string()),
        };
        config.save(&path).unwrap();
        assert_eq!(AnalystConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_profile_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            AnalystConfig::load(&dir.path().join("absent.toml")),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_overrides_win() {
        let config = AnalystConfig::default().with_overrides(
            Some(PathBuf::from("other.csv")),
            Some(0.8),
            Some("Account_101".to_string()),
        );
        assert_eq!(config.dataset, PathBuf::from("other.csv"));
        assert_eq!(config.threshold, 0.8);
        assert_eq!(config.account_id().unwrap(), Some(AccountId::Account101));

        let untouched = AnalystConfig::default().with_overrides(None, None, None);
        assert_eq!(untouched, AnalystConfig::default());
    }

    #[test]
    fn test_invalid_profile_values_surface() {
        let config = AnalystConfig {
            threshold: 0.97,
            account: Some("Account_1".to_string()),
            ..AnalystConfig::default()
        };
        assert!(matches!(
            config.setting(),
            Err(ConfigError::Setting(SettingError::OutOfRange(_)))
        ));
        assert!(matches!(config.account_id(), Err(ConfigError::Account(_))));
    }
}
