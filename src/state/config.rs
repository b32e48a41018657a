//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/xlink-bridge/config.json`
//! - macOS: `~/Library/Application Support/xlink-bridge/config.json`
//! - Windows: `%APPDATA%/xlink-bridge/config.json`
//!
//! The log file `xlink-bridge.log` lives in the same directory.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.theme = ThemeMode::Dark;
//! config.save_to(&AppConfig::config_path()?)?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::domain::BridgeContracts;
use crate::theme::ThemeMode;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "xlink-bridge";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Log file name.
const LOG_FILE: &str = "xlink-bridge.log";

/// Default wallet provider endpoint.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:1248";

const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
const DEFAULT_NETWORK_CHECK_INTERVAL_SECS: u64 = 5;
const DEFAULT_RECEIPT_TIMEOUT_SECS: u64 = 300;

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Every field has a default, so partial or older files still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Wallet provider JSON-RPC endpoint.
    pub rpc_url: String,
    /// Color mode, saved whenever it is toggled.
    pub theme: ThemeMode,
    /// Seconds between balance refreshes.
    pub poll_interval_secs: u64,
    /// Seconds between chain id checks.
    pub network_check_interval_secs: u64,
    /// Seconds to wait for a transaction receipt.
    pub receipt_timeout_secs: u64,
    /// Bridge contract addresses.
    pub contracts: BridgeContracts,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            theme: ThemeMode::default(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            network_check_interval_secs: DEFAULT_NETWORK_CHECK_INTERVAL_SECS,
            receipt_timeout_secs: DEFAULT_RECEIPT_TIMEOUT_SECS,
            contracts: BridgeContracts::default(),
        }
    }
}

impl AppConfig {
    /// Returns the application directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn app_dir() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// See [`Self::app_dir`].
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join(CONFIG_FILE))
    }

    /// Returns the path to the log file.
    ///
    /// # Errors
    ///
    /// See [`Self::app_dir`].
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join(LOG_FILE))
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    // ========================================================================
    // Durations
    // ========================================================================

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    #[must_use]
    pub fn network_check_interval(&self) -> Duration {
        Duration::from_secs(self.network_check_interval_secs.max(1))
    }

    #[must_use]
    pub fn receipt_timeout(&self) -> Duration {
        Duration::from_secs(self.receipt_timeout_secs.max(1))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.rpc_url, "http://127.0.0.1:1248");
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.network_check_interval(), Duration::from_secs(5));
        assert_eq!(config.receipt_timeout(), Duration::from_secs(300));
        assert_eq!(config.contracts, BridgeContracts::default());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AppConfig {
            rpc_url: "http://localhost:8545".to_string(),
            theme: ThemeMode::Dark,
            contracts: BridgeContracts {
                rupaya_bridge: Address::repeat_byte(1),
                bsc_bridge: Address::repeat_byte(2),
            },
            ..AppConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();

        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.poll_interval_secs, 30);
    }

    #[test]
    fn test_zero_intervals_are_clamped() {
        let config = AppConfig {
            poll_interval_secs: 0,
            network_check_interval_secs: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.network_check_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_save_and_load_from_path() {
        let path = std::env::temp_dir().join(format!(
            "xlink-bridge-config-test-{}.json",
            std::process::id()
        ));
        let config = AppConfig {
            theme: ThemeMode::Dark,
            ..AppConfig::default()
        };

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("xlink-bridge-definitely-missing.json");
        assert!(AppConfig::load_from(&path).is_err());
    }
}
