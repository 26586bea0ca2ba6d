//! Abstract interface for interacting with EVM nodes

use crate::contract::ContractFactory;
use crate::error::ClientError;
use alloy_primitives::{Address, TxHash, U256};

/// Result type for chain client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// A contract-creation transaction that has been submitted but not yet mined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDeployment {
    pub tx_hash: TxHash,
}

/// A mined contract-creation transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub contract_address: Address,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}

/// Abstract interface for interacting with EVM nodes
///
/// This trait lets the deployment driver run against a live network or an
/// in-memory double through the same sequence of calls.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// Get the address of the account that signs deployments
    async fn signer(&self) -> ClientResult<Address>;

    /// Get the native balance of an account, in wei
    async fn balance(&self, account: Address) -> ClientResult<U256>;

    /// Submit a contract-creation transaction for the factory's bytecode
    async fn deploy(&self, factory: &ContractFactory) -> ClientResult<PendingDeployment>;

    /// Wait until the creation transaction is mined
    async fn wait_for_deployment(
        &self,
        pending: &PendingDeployment,
    ) -> ClientResult<DeploymentReceipt>;

    /// Wait until a transaction has the given number of confirmations
    async fn wait_for_confirmations(&self, tx_hash: TxHash, confirmations: u64)
        -> ClientResult<()>;
}

/// Read-only view of a deployed `RealEstateTokenization` contract
#[allow(async_fn_in_trait)]
pub trait TokenizationView {
    /// `owner()`
    async fn owner(&self, contract: Address) -> ClientResult<Address>;

    /// `propertyCounter()`
    async fn property_counter(&self, contract: Address) -> ClientResult<U256>;

    /// `totalValueLocked()`, in wei
    async fn total_value_locked(&self, contract: Address) -> ClientResult<U256>;
}
