//! RPC-based chain client for EVM nodes
//!
//! This module provides an implementation of the `ChainClient` and
//! `TokenizationView` traits on top of an alloy HTTP provider. Transactions
//! are signed locally with the configured private key; nonce, gas and chain
//! ID are filled in by the provider.
//!
//! # Example
//!
//! ```ignore
//! use estate_deploy::{ArtifactStore, DeployConfig, Deployment, RpcClient};
//!
//! let config = DeployConfig::from_file("deploy.toml")?;
//! let signer = std::env::var("PRIVATE_KEY")?.parse()?;
//! let client = RpcClient::connect(config, signer).await?;
//!
//! let report = Deployment::new(&client, ArtifactStore::default()).run().await?;
//! println!("deployed at {}", report.contract_address);
//! ```

use crate::client::{
    ChainClient, ClientResult, DeploymentReceipt, PendingDeployment, TokenizationView,
};
use crate::config::{DeployConfig, Network};
use crate::contract::ContractFactory;
use crate::error::ClientError;
use alloy::network::{Ethereum, EthereumWallet, ReceiptResponse, TransactionBuilder};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::{Address, TxHash, U256};
use tracing::debug;

mod bindings {
    alloy::sol! {
        #[sol(rpc)]
        contract RealEstateTokenization {
            function owner() external view returns (address);
            function propertyCounter() external view returns (uint256);
            function totalValueLocked() external view returns (uint256);
        }
    }
}

use bindings::RealEstateTokenization;

/// RPC client for EVM nodes
///
/// Every call goes straight to the node; failures are reported once and never
/// retried.
#[derive(Clone)]
pub struct RpcClient {
    provider: DynProvider,
    signer: Address,
    config: DeployConfig,
}

impl RpcClient {
    /// Connect to the configured node with a local signer
    ///
    /// # Errors
    ///
    /// Returns an error if the RPC URL is invalid, the node cannot be reached,
    /// or the node serves a different chain than configured.
    pub async fn connect(config: DeployConfig, signer: PrivateKeySigner) -> ClientResult<Self> {
        let url = config
            .rpc_url()
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        let address = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased();

        Self::from_provider(provider, address, config).await
    }

    /// Create a client over an existing provider that signs for `signer`
    ///
    /// # Errors
    ///
    /// Returns an error if the node cannot be reached or serves a different
    /// chain than configured.
    pub async fn from_provider(
        provider: DynProvider,
        signer: Address,
        config: DeployConfig,
    ) -> ClientResult<Self> {
        let client = Self {
            provider,
            signer,
            config,
        };
        client.check_chain_id().await?;
        Ok(client)
    }

    /// Get the network type
    #[must_use]
    pub const fn network(&self) -> Network {
        self.config.network()
    }

    /// Get a reference to the config
    #[must_use]
    pub const fn config(&self) -> &DeployConfig {
        &self.config
    }

    async fn check_chain_id(&self) -> ClientResult<()> {
        let expected = self.config.chain_id();
        let actual = self.provider.get_chain_id().await.map_err(rpc_error)?;
        debug!(expected, actual, "checked chain id");

        if actual == expected {
            Ok(())
        } else {
            Err(ClientError::ChainIdMismatch { expected, actual })
        }
    }

    fn pending(&self, tx_hash: TxHash) -> PendingTransactionBuilder<Ethereum> {
        PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
    }

    fn contract(
        &self,
        address: Address,
    ) -> RealEstateTokenization::RealEstateTokenizationInstance<DynProvider> {
        RealEstateTokenization::new(address, self.provider.clone())
    }
}

fn rpc_error(err: impl std::fmt::Display) -> ClientError {
    ClientError::Rpc(err.to_string())
}

fn call_error(err: impl std::fmt::Display) -> ClientError {
    ClientError::Call(err.to_string())
}

impl ChainClient for RpcClient {
    async fn signer(&self) -> ClientResult<Address> {
        Ok(self.signer)
    }

    async fn balance(&self, account: Address) -> ClientResult<U256> {
        self.provider.get_balance(account).await.map_err(rpc_error)
    }

    async fn deploy(&self, factory: &ContractFactory) -> ClientResult<PendingDeployment> {
        let tx = TransactionRequest::default()
            .with_from(self.signer)
            .with_deploy_code(factory.bytecode().clone());

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(rpc_error)?;
        debug!(tx_hash = %pending.tx_hash(), "submitted creation transaction");

        Ok(PendingDeployment {
            tx_hash: *pending.tx_hash(),
        })
    }

    async fn wait_for_deployment(
        &self,
        pending: &PendingDeployment,
    ) -> ClientResult<DeploymentReceipt> {
        let receipt = self
            .pending(pending.tx_hash)
            .get_receipt()
            .await
            .map_err(|e| ClientError::Pending(e.to_string()))?;

        if !ReceiptResponse::status(&receipt) {
            return Err(ClientError::Reverted(pending.tx_hash));
        }
        let contract_address = ReceiptResponse::contract_address(&receipt)
            .ok_or(ClientError::NoContractCreated(pending.tx_hash))?;

        Ok(DeploymentReceipt {
            contract_address,
            tx_hash: pending.tx_hash,
            block_number: ReceiptResponse::block_number(&receipt),
        })
    }

    async fn wait_for_confirmations(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
    ) -> ClientResult<()> {
        self.pending(tx_hash)
            .with_required_confirmations(confirmations)
            .watch()
            .await
            .map_err(|e| ClientError::Pending(e.to_string()))?;
        Ok(())
    }
}

impl TokenizationView for RpcClient {
    async fn owner(&self, contract: Address) -> ClientResult<Address> {
        self.contract(contract).owner().call().await.map_err(call_error)
    }

    async fn property_counter(&self, contract: Address) -> ClientResult<U256> {
        self.contract(contract)
            .propertyCounter()
            .call()
            .await
            .map_err(call_error)
    }

    async fn total_value_locked(&self, contract: Address) -> ClientResult<U256> {
        self.contract(contract)
            .totalValueLocked()
            .call()
            .await
            .map_err(call_error)
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("signer", &self.signer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
