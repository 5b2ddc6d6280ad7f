//! Configuration sources for the routing table.

use crate::domain::KademliaConfig;
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider with hardcoded values.
///
/// Useful for testing and development. For production, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: KademliaConfig,
}

impl StaticConfigProvider {
    /// Create with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified Kademlia config.
    #[must_use]
    pub fn with_config(mut self, config: KademliaConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_kademlia_config(&self) -> KademliaConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Config file loading (requires "toml-config" feature)
// ============================================================================

#[cfg(feature = "toml-config")]
mod toml_config {
    use super::*;
    use crate::domain::ConfigError;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        kademlia: KademliaSection,
    }

    /// The `[kademlia]` table; every key optional.
    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct KademliaSection {
        /// Bucket size
        pub k: Option<usize>,
        /// Staleness window in milliseconds
        pub stale_after_ms: Option<u64>,
        /// Background sweep period in seconds
        pub eviction_interval_secs: Option<u64>,
    }

    impl KademliaSection {
        /// Fill missing keys with defaults and validate.
        pub fn into_config(self) -> Result<KademliaConfig, ConfigError> {
            let config = KademliaConfig {
                k: self.k.unwrap_or(KademliaConfig::DEFAULT_K),
                stale_after_ms: self
                    .stale_after_ms
                    .unwrap_or(KademliaConfig::DEFAULT_STALE_AFTER_MS),
                eviction_interval_secs: self
                    .eviction_interval_secs
                    .unwrap_or(KademliaConfig::DEFAULT_EVICTION_INTERVAL_SECS),
            };
            config.validate()?;
            Ok(config)
        }
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [kademlia]
    /// k = 20
    /// stale_after_ms = 1800000
    /// eviction_interval_secs = 600
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: KademliaConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if file cannot be read, parsed, or holds invalid values.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            Ok(Self {
                config: file.kademlia.into_config()?,
            })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn get_kademlia_config(&self) -> KademliaConfig {
            self.config.clone()
        }
    }
}

#[cfg(feature = "toml-config")]
pub use toml_config::{KademliaSection, TomlConfigProvider};
