//! Mock chain client implementation for testing

#![cfg(test)]

use crate::client::{
    ChainClient, ClientResult, DeploymentReceipt, PendingDeployment, TokenizationView,
};
use crate::contract::ContractFactory;
use crate::error::ClientError;
use crate::test_fixtures::{CONTRACT_ADDRESS, DEPLOYER, DEPLOY_TX_HASH};
use alloy_primitives::{Address, TxHash, U256};
use std::sync::{Arc, Mutex};

/// A call made against the mock, in the order it was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Signer,
    Balance(Address),
    Deploy(String),
    WaitForDeployment(TxHash),
    WaitForConfirmations(TxHash, u64),
    Owner(Address),
    PropertyCounter(Address),
    TotalValueLocked(Address),
}

impl MockCall {
    /// Name of the client method this call went through
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Signer => "signer",
            Self::Balance(_) => "balance",
            Self::Deploy(_) => "deploy",
            Self::WaitForDeployment(_) => "wait_for_deployment",
            Self::WaitForConfirmations(..) => "wait_for_confirmations",
            Self::Owner(_) => "owner",
            Self::PropertyCounter(_) => "property_counter",
            Self::TotalValueLocked(_) => "total_value_locked",
        }
    }
}

/// Mock client for testing without a live node
#[derive(Clone)]
pub struct MockClient {
    inner: Arc<Mutex<MockClientInner>>,
}

struct MockClientInner {
    calls: Vec<MockCall>,
    failure: Option<(&'static str, String)>,
    signer: Address,
    balance: U256,
    contract_address: Address,
    tx_hash: TxHash,
    block_number: Option<u64>,
    property_counter: U256,
    total_value_locked: U256,
}

impl MockClient {
    /// Create a new mock client that deploys successfully
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockClientInner {
                calls: Vec::new(),
                failure: None,
                signer: DEPLOYER,
                balance: U256::from(10u64).pow(U256::from(18u64)),
                contract_address: CONTRACT_ADDRESS,
                tx_hash: DEPLOY_TX_HASH,
                block_number: Some(1),
                property_counter: U256::ZERO,
                total_value_locked: U256::ZERO,
            })),
        }
    }

    /// Make the named method fail with the given message
    pub fn fail_on(&self, method: &'static str, message: &str) {
        self.inner.lock().unwrap().failure = Some((method, message.to_string()));
    }

    /// Set the balance reported for the deployer
    pub fn set_balance(&self, balance: U256) {
        self.inner.lock().unwrap().balance = balance;
    }

    /// Set the address the contract gets deployed at
    pub fn set_contract_address(&self, address: Address) {
        self.inner.lock().unwrap().contract_address = address;
    }

    /// Set the block the creation transaction is mined in
    pub fn set_block_number(&self, block_number: Option<u64>) {
        self.inner.lock().unwrap().block_number = block_number;
    }

    /// Set the contract state returned by the view calls
    pub fn set_contract_state(&self, property_counter: U256, total_value_locked: U256) {
        let mut inner = self.inner.lock().unwrap();
        inner.property_counter = property_counter;
        inner.total_value_locked = total_value_locked;
    }

    /// Get all calls made so far
    #[must_use]
    pub fn calls(&self) -> Vec<MockCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Get the method names of all calls made so far
    #[must_use]
    pub fn methods(&self) -> Vec<&'static str> {
        self.calls().iter().map(MockCall::method).collect()
    }

    fn record(&self, call: MockCall) -> ClientResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let method = call.method();
        inner.calls.push(call);

        match &inner.failure {
            Some((failing, message)) if *failing == method => {
                Err(ClientError::Rpc(message.clone()))
            }
            _ => Ok(()),
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainClient for MockClient {
    async fn signer(&self) -> ClientResult<Address> {
        self.record(MockCall::Signer)?;
        Ok(self.inner.lock().unwrap().signer)
    }

    async fn balance(&self, account: Address) -> ClientResult<U256> {
        self.record(MockCall::Balance(account))?;
        Ok(self.inner.lock().unwrap().balance)
    }

    async fn deploy(&self, factory: &ContractFactory) -> ClientResult<PendingDeployment> {
        self.record(MockCall::Deploy(factory.name().to_string()))?;
        Ok(PendingDeployment {
            tx_hash: self.inner.lock().unwrap().tx_hash,
        })
    }

    async fn wait_for_deployment(
        &self,
        pending: &PendingDeployment,
    ) -> ClientResult<DeploymentReceipt> {
        self.record(MockCall::WaitForDeployment(pending.tx_hash))?;
        let inner = self.inner.lock().unwrap();
        Ok(DeploymentReceipt {
            contract_address: inner.contract_address,
            tx_hash: pending.tx_hash,
            block_number: inner.block_number,
        })
    }

    async fn wait_for_confirmations(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
    ) -> ClientResult<()> {
        self.record(MockCall::WaitForConfirmations(tx_hash, confirmations))
    }
}

impl TokenizationView for MockClient {
    async fn owner(&self, contract: Address) -> ClientResult<Address> {
        self.record(MockCall::Owner(contract))?;
        Ok(self.inner.lock().unwrap().signer)
    }

    async fn property_counter(&self, contract: Address) -> ClientResult<U256> {
        self.record(MockCall::PropertyCounter(contract))?;
        Ok(self.inner.lock().unwrap().property_counter)
    }

    async fn total_value_locked(&self, contract: Address) -> ClientResult<U256> {
        self.record(MockCall::TotalValueLocked(contract))?;
        Ok(self.inner.lock().unwrap().total_value_locked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let client = MockClient::new();

        let signer = client.signer().await.unwrap();
        client.balance(signer).await.unwrap();

        assert_eq!(
            client.calls(),
            vec![MockCall::Signer, MockCall::Balance(DEPLOYER)]
        );
    }

    #[tokio::test]
    async fn test_mock_failure_still_records_call() {
        let client = MockClient::new();
        client.fail_on("balance", "connection refused");

        let err = client.balance(DEPLOYER).await.unwrap_err();
        assert_eq!(err.to_string(), "RPC request failed: connection refused");
        assert_eq!(client.methods(), vec!["balance"]);
    }

    #[tokio::test]
    async fn test_mock_deployment_receipt() {
        let client = MockClient::new();
        client.set_block_number(Some(42));

        let pending = PendingDeployment {
            tx_hash: DEPLOY_TX_HASH,
        };
        let receipt = client.wait_for_deployment(&pending).await.unwrap();
        assert_eq!(receipt.contract_address, CONTRACT_ADDRESS);
        assert_eq!(receipt.block_number, Some(42));
    }
}
