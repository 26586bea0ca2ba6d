//! estate-deploy - deploys the `RealEstateTokenization` contract to EVM networks
//!
//! This crate resolves a compiled contract from Hardhat build artifacts,
//! submits its creation transaction from a local signer, waits for the
//! deployment to be confirmed, and reads back the contract's public state.
//!
//! # Example
//!
//! ```ignore
//! use estate_deploy::{ArtifactStore, DeployConfig, Deployment, RpcClient};
//!
//! // Connect to Core testnet with a local key
//! let config = DeployConfig::core_testnet();
//! let client = RpcClient::connect(config, private_key.parse()?).await?;
//!
//! // Deploy from ./artifacts and wait for 3 confirmations
//! let report = Deployment::new(&client, ArtifactStore::default()).run().await?;
//! println!("{} at {}", report.contract_name, report.contract_address);
//! ```
//!
//! # Testing Without a Node
//!
//! The driver only talks to the network through the [`ChainClient`] and
//! [`TokenizationView`] traits, so any implementation of them can stand in
//! for a live node.

pub mod artifacts;
pub mod client;
#[cfg(feature = "rpc")]
pub mod config;
pub mod contract;
pub mod deploy;
pub mod error;
#[cfg(feature = "rpc")]
pub mod rpc_client;
pub mod util;

#[cfg(test)]
mod mock_client;
#[cfg(test)]
mod test_fixtures;

// Re-export core types
pub use artifacts::ArtifactStore;
pub use client::{ChainClient, DeploymentReceipt, PendingDeployment, TokenizationView};
pub use contract::ContractFactory;
pub use deploy::{Deployment, DeploymentReport, CONTRACT_NAME, REQUIRED_CONFIRMATIONS};
pub use error::{ArtifactError, ClientError, DeployError, Step};

// Re-export config and RPC client when feature is enabled
#[cfg(feature = "rpc")]
pub use config::{ConfigError, DeployConfig, Network};
#[cfg(feature = "rpc")]
pub use rpc_client::RpcClient;

// Re-export commonly used external types
pub use alloy_primitives;
pub use alloy_primitives::{Address, TxHash, U256};
