use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::adapters::cli::Args;
use crate::error::AtmError;

/// Original account file name, relative to the working directory.
pub const DEFAULT_ACCOUNT_FILE: &str = "text.txt";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AtmConfig {
    pub account_file: PathBuf,
    pub currency_symbol: String,
    /// Show the stored PIN in the login prompt.
    pub pin_hint: bool,
    pub log_level: String,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            account_file: PathBuf::from(DEFAULT_ACCOUNT_FILE),
            currency_symbol: "$".to_string(),
            pin_hint: true,
            log_level: "warn".to_string(),
        }
    }
}

impl AtmConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, AtmError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads `path` if it exists. A missing file means defaults; an unreadable
    /// or invalid one is reported on stderr and defaults are used.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let loaded = std::fs::read_to_string(path)
            .map_err(|e| AtmError::Config(e.to_string()))
            .and_then(|s| Self::from_toml_str(&s));

        match loaded {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} ({}). Using defaults.", e, path.display());
                Self::default()
            }
        }
    }

    /// Command-line flags win over file values.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(account_file) = &args.account_file {
            self.account_file = account_file.clone();
        }
        if let Some(currency) = &args.currency {
            self.currency_symbol = currency.clone();
        }
        if args.no_pin_hint {
            self.pin_hint = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AtmConfig::from_toml_str("currency_symbol = \"€\"\n").unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.account_file, PathBuf::from("text.txt"));
        assert!(config.pin_hint);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_full_file() {
        let config = AtmConfig::from_toml_str(
            r#"
            account_file = "/var/lib/atm/account.txt"
            currency_symbol = "£"
            pin_hint = false
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            AtmConfig {
                account_file: PathBuf::from("/var/lib/atm/account.txt"),
                currency_symbol: "£".to_string(),
                pin_hint: false,
                log_level: "debug".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        assert!(matches!(
            AtmConfig::from_toml_str("pin_hint = \"yes\""),
            Err(AtmError::Config(_))
        ));
        assert!(matches!(
            AtmConfig::from_toml_str("unknown_key = 1"),
            Err(AtmError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("atm_session_no_such_config.toml");
        assert_eq!(AtmConfig::load_or_default(&path), AtmConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let args = Args {
            account_file: Some(PathBuf::from("other.txt")),
            no_pin_hint: true,
            currency: Some("¥".to_string()),
            ..Args::default()
        };

        let config = AtmConfig::default().with_overrides(&args);
        assert_eq!(config.account_file, PathBuf::from("other.txt"));
        assert_eq!(config.currency_symbol, "¥");
        assert!(!config.pin_hint);
    }
}
