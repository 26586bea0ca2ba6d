//! Configuration for connecting to EVM networks
//!
//! This module provides the network configuration used to deploy contracts
//! over JSON-RPC.
//!
//! # Example Configuration File (deploy.toml)
//!
//! ```toml
//! [network]
//! network = "core-testnet"
//!
//! [rpc]
//! url = "https://rpc.test2.btcs.network"
//!
//! [chain]
//! chain_id = 1114
//! currency_symbol = "CORE"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "deploy.toml";

/// Supported EVM networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    #[default]
    CoreTestnet,
    CoreMainnet,
    Localhost,
}

impl Network {
    /// Get the chain ID of this network
    #[must_use]
    pub const fn chain_id(self) -> u64 {
        match self {
            Self::CoreTestnet => 1114,
            Self::CoreMainnet => 1116,
            Self::Localhost => 31337,
        }
    }

    /// Get the default RPC URL for this network
    #[must_use]
    pub const fn default_rpc_url(self) -> &'static str {
        match self {
            Self::CoreTestnet => "https://rpc.test2.btcs.network",
            Self::CoreMainnet => "https://rpc.coredao.org",
            Self::Localhost => "http://127.0.0.1:8545",
        }
    }

    /// Get the symbol of the native currency, as shown next to balances
    #[must_use]
    pub const fn currency_symbol(self) -> &'static str {
        match self {
            Self::CoreTestnet | Self::CoreMainnet => "CORE",
            Self::Localhost => "ETH",
        }
    }

    /// Get a human-readable network name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CoreTestnet => "Core Testnet",
            Self::CoreMainnet => "Core Mainnet",
            Self::Localhost => "Localhost",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CoreTestnet => write!(f, "core-testnet"),
            Self::CoreMainnet => write!(f, "core-mainnet"),
            Self::Localhost => write!(f, "localhost"),
        }
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core-testnet" => Ok(Self::CoreTestnet),
            "core-mainnet" => Ok(Self::CoreMainnet),
            "localhost" => Ok(Self::Localhost),
            other => Err(ConfigError::UnknownNetwork(other.to_string())),
        }
    }
}

/// RPC connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// RPC URL (e.g., `https://rpc.test2.btcs.network`)
    pub url: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self::for_network(Network::default())
    }
}

impl RpcConfig {
    /// Create RPC config for a specific network with default settings
    #[must_use]
    pub fn for_network(network: Network) -> Self {
        Self {
            url: network.default_rpc_url().to_string(),
        }
    }
}

/// Chain-specific overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChainConfig {
    /// Expected chain ID; the network default is used when absent
    pub chain_id: Option<u64>,
    /// Symbol shown next to native balances
    pub currency_symbol: Option<String>,
}

/// Network configuration wrapper (for TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct NetworkWrapper {
    network: Network,
}

/// Complete deployment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Network selection
    #[serde(default, rename = "network")]
    network_wrapper: NetworkWrapper,
    /// RPC connection settings
    #[serde(default)]
    pub rpc: RpcConfig,
    /// Chain-specific settings
    #[serde(default)]
    pub chain: ChainConfig,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self::core_testnet()
    }
}

impl DeployConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML string
    ///
    /// When the `[rpc]` table is absent, the default URL of the selected
    /// network is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let value: toml::Table = toml::from_str(toml_str)?;
        let has_rpc = value.contains_key("rpc");

        let mut config: Self = toml::Value::Table(value).try_into()?;
        if !has_rpc {
            config.rpc = RpcConfig::for_network(config.network());
        }
        Ok(config)
    }

    /// Serialize configuration to TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml_str = self.to_toml()?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get the network type
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network_wrapper.network
    }

    /// Set the network type, resetting the RPC URL and chain settings to the
    /// network defaults
    pub fn set_network(&mut self, network: Network) {
        self.network_wrapper.network = network;
        self.rpc = RpcConfig::for_network(network);
        self.chain = ChainConfig::default();
    }

    /// Get the RPC URL
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is not a valid URL.
    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.rpc.url).map_err(|e| ConfigError::InvalidRpcUrl {
            url: self.rpc.url.clone(),
            reason: e.to_string(),
        })
    }

    /// Get the expected chain ID
    #[must_use]
    pub fn chain_id(&self) -> u64 {
        self.chain
            .chain_id
            .unwrap_or_else(|| self.network().chain_id())
    }

    /// Get the native currency symbol
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        self.chain
            .currency_symbol
            .as_deref()
            .unwrap_or_else(|| self.network().currency_symbol())
    }

    fn for_network(network: Network) -> Self {
        Self {
            network_wrapper: NetworkWrapper { network },
            rpc: RpcConfig::for_network(network),
            chain: ChainConfig::default(),
        }
    }

    /// Create a default config for Core testnet
    #[must_use]
    pub fn core_testnet() -> Self {
        Self::for_network(Network::CoreTestnet)
    }

    /// Create a default config for Core mainnet
    #[must_use]
    pub fn core_mainnet() -> Self {
        Self::for_network(Network::CoreMainnet)
    }

    /// Create a default config for a local development node
    #[must_use]
    pub fn localhost() -> Self {
        Self::for_network(Network::Localhost)
    }

    /// Set the RPC URL
    #[must_use]
    pub fn with_rpc(mut self, url: &str) -> Self {
        self.rpc.url = url.to_string();
        self
    }

    /// Set the expected chain ID
    #[must_use]
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain.chain_id = Some(chain_id);
        self
    }

    /// Set the currency symbol
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: &str) -> Self {
        self.chain.currency_symbol = Some(symbol.to_string());
        self
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid RPC URL {url}: {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("Unknown network {0}, expected one of core-testnet, core-mainnet, localhost")]
    UnknownNetwork(String),
}
