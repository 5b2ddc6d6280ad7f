//! # Node Configuration
//!
//! Loaded from an optional TOML file, then overridden from the environment.
//!
//! ```toml
//! [node]
//! agent_id = "agent-7f3a"
//! display_name = "Reviewer Seven"
//! address = "http://10.0.0.7:3000"
//! key_file = "/var/lib/swarm/identity.pem"
//!
//! [kademlia]
//! k = 20
//! stale_after_ms = 1800000
//! eviction_interval_secs = 600
//! ```
//!
//! ## Environment
//!
//! - `SWARM_CONFIG`: path of the TOML file (optional)
//! - `SWARM_AGENT_ID`: overrides `node.agent_id`
//! - `SWARM_DISPLAY_NAME`: overrides `node.display_name`
//! - `SWARM_ADDRESS`: overrides `node.address`
//! - `SWARM_KEY_FILE`: overrides `node.key_file`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use swarm_discovery::adapters::KademliaSection;
use swarm_discovery::{ConfigError, ConfigProvider, KademliaConfig};

/// Agent id used when neither the file nor the environment sets one.
pub const DEFAULT_AGENT_ID: &str = "swarm-node";

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Opaque agent id; its SHA-256 is the node's routing address
    pub agent_id: String,
    /// Human-readable name
    pub display_name: Option<String>,
    /// Reachability hint advertised to peers
    pub address: Option<String>,
    /// PKCS#8 PEM with the agent's identity key. Without one, a fresh
    /// identity is generated for this process only.
    pub key_file: Option<PathBuf>,
    /// Routing table parameters
    pub kademlia: KademliaConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            agent_id: DEFAULT_AGENT_ID.to_string(),
            display_name: None,
            address: None,
            key_file: None,
            kademlia: KademliaConfig::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeFile {
    #[serde(default)]
    node: NodeSection,
    #[serde(default)]
    kademlia: KademliaSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeSection {
    agent_id: Option<String>,
    display_name: Option<String>,
    address: Option<String>,
    key_file: Option<PathBuf>,
}

impl NodeConfig {
    /// Parse a TOML document; missing keys take defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: NodeFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let config = Self {
            agent_id: file
                .node
                .agent_id
                .unwrap_or_else(|| DEFAULT_AGENT_ID.to_string()),
            display_name: file.node.display_name,
            address: file.node.address,
            key_file: file.node.key_file,
            kademlia: file.kademlia.into_config()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// File named by `SWARM_CONFIG` (if any) with environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup("SWARM_CONFIG") {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(agent_id) = lookup("SWARM_AGENT_ID") {
            config.agent_id = agent_id;
        }
        if let Some(name) = lookup("SWARM_DISPLAY_NAME") {
            config.display_name = Some(name);
        }
        if let Some(address) = lookup("SWARM_ADDRESS") {
            config.address = Some(address);
        }
        if let Some(key_file) = lookup("SWARM_KEY_FILE") {
            config.key_file = Some(PathBuf::from(key_file));
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values the node cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agent_id.trim().is_empty() {
            return Err(ConfigError::Invalid("agent_id must not be blank".to_string()));
        }
        self.kademlia.validate()
    }

    /// Background eviction period.
    pub fn eviction_interval(&self) -> Duration {
        Duration::from_secs(self.kademlia.eviction_interval_secs)
    }
}

impl ConfigProvider for NodeConfig {
    fn get_kademlia_config(&self) -> KademliaConfig {
        self.kademlia.clone()
    }
}
