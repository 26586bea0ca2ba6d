//! The deployment driver
//!
//! A deployment runs strictly in sequence: resolve the contract factory,
//! resolve the deployer and its balance, submit the creation transaction,
//! wait for it to be mined and confirmed, then read back the contract state.
//! The first failing step ends the run; nothing is retried.
//!
//! Contract details are logged together once all three reads succeed, so a
//! failed read logs none of them.

use crate::artifacts::ArtifactStore;
use crate::client::{ChainClient, TokenizationView};
use crate::error::{DeployError, Step};
use crate::util::format_ether;
use alloy_primitives::{Address, TxHash, U256};
use tracing::{info, instrument};

/// Name of the contract deployed by default
pub const CONTRACT_NAME: &str = "RealEstateTokenization";

/// Confirmations to wait for after the creation transaction is mined
pub const REQUIRED_CONFIRMATIONS: u64 = 3;

/// Default symbol shown next to balances
pub const DEFAULT_CURRENCY_SYMBOL: &str = "CORE";

/// Everything learned from a successful deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReport {
    pub contract_name: String,
    pub deployer: Address,
    pub deployer_balance: U256,
    pub contract_address: Address,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub owner: Address,
    pub property_counter: U256,
    pub total_value_locked: U256,
}

/// One deployment attempt of a contract through a chain client
pub struct Deployment<'a, C> {
    client: &'a C,
    artifacts: ArtifactStore,
    contract_name: String,
    currency_symbol: String,
}

impl<'a, C> Deployment<'a, C>
where
    C: ChainClient + TokenizationView,
{
    /// Create a deployment of [`CONTRACT_NAME`] from the given artifacts
    pub fn new(client: &'a C, artifacts: ArtifactStore) -> Self {
        Self {
            client,
            artifacts,
            contract_name: CONTRACT_NAME.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Deploy a different contract (bare or fully qualified name)
    #[must_use]
    pub fn contract_name(mut self, name: &str) -> Self {
        self.contract_name = name.to_string();
        self
    }

    /// Set the currency symbol used when logging balances
    #[must_use]
    pub fn currency_symbol(mut self, symbol: &str) -> Self {
        self.currency_symbol = symbol.to_string();
        self
    }

    /// Run the deployment
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step, tagged with that step.
    #[instrument(skip_all, fields(contract = %self.contract_name))]
    pub async fn run(self) -> Result<DeploymentReport, DeployError> {
        let client = self.client;
        let factory = self.artifacts.contract_factory(&self.contract_name)?;

        let deployer = client
            .signer()
            .await
            .map_err(|e| DeployError::client(Step::ResolveSigner, e))?;
        info!(%deployer, "Deploying contract with account");

        let deployer_balance = client
            .balance(deployer)
            .await
            .map_err(|e| DeployError::client(Step::QueryBalance, e))?;
        info!(
            balance = %format_ether(deployer_balance),
            currency = %self.currency_symbol,
            "Account balance"
        );

        info!(contract = %factory.name(), "Deploying contract...");
        let pending = client
            .deploy(&factory)
            .await
            .map_err(|e| DeployError::client(Step::SubmitDeployment, e))?;

        let receipt = client
            .wait_for_deployment(&pending)
            .await
            .map_err(|e| DeployError::client(Step::AwaitDeployment, e))?;
        info!(contract = %factory.name(), "✅ Contract deployed successfully");
        info!(address = %receipt.contract_address, "Contract address");
        info!(tx_hash = %receipt.tx_hash, "Transaction hash");
        match receipt.block_number {
            Some(block) => info!(block, "Block number"),
            None => info!("Block number unknown"),
        }

        info!(
            confirmations = REQUIRED_CONFIRMATIONS,
            "Waiting for block confirmations..."
        );
        client
            .wait_for_confirmations(receipt.tx_hash, REQUIRED_CONFIRMATIONS)
            .await
            .map_err(|e| DeployError::client(Step::AwaitConfirmations, e))?;
        info!("✅ Contract confirmed on blockchain");

        let address = receipt.contract_address;
        let owner = client
            .owner(address)
            .await
            .map_err(|e| DeployError::client(Step::ReadOwner, e))?;
        let property_counter = client
            .property_counter(address)
            .await
            .map_err(|e| DeployError::client(Step::ReadPropertyCounter, e))?;
        let total_value_locked = client
            .total_value_locked(address)
            .await
            .map_err(|e| DeployError::client(Step::ReadTotalValueLocked, e))?;

        info!("📋 Contract Details:");
        info!(%owner, "Owner");
        info!(%property_counter, "Property Counter");
        info!(
            total_value_locked = %format_ether(total_value_locked),
            currency = %self.currency_symbol,
            "Total Value Locked"
        );

        Ok(DeploymentReport {
            contract_name: factory.name().to_string(),
            deployer,
            deployer_balance,
            contract_address: address,
            tx_hash: receipt.tx_hash,
            block_number: receipt.block_number,
            owner,
            property_counter,
            total_value_locked,
        })
    }
}
