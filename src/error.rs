//! Error types for deployment operations

use alloy_primitives::TxHash;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a contract factory from build artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact for contract {name} not found under {}", .root.display())]
    NotFound { name: String, root: PathBuf },

    #[error("Contract name {name} is ambiguous, use one of: {}", .candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },

    #[error("Artifact declares contract {found}, expected {expected}")]
    NameMismatch { expected: String, found: String },

    #[error("Contract {0} is abstract and can't be deployed")]
    Abstract(String),

    #[error("Contract {name} needs to be linked against libraries: {}", .libraries.join(", "))]
    UnlinkedLibraries {
        name: String,
        libraries: Vec<String>,
    },

    #[error("Invalid bytecode for contract {name}: {reason}")]
    InvalidBytecode { name: String, reason: String },

    #[error("Failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by a chain client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("RPC request failed: {0}")]
    Rpc(String),

    #[error("Chain ID mismatch: configured {expected}, node reports {actual}")]
    ChainIdMismatch { expected: u64, actual: u64 },

    #[error("Failed waiting for transaction: {0}")]
    Pending(String),

    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    #[error("Transaction {0} did not create a contract")]
    NoContractCreated(TxHash),

    #[error("Contract call failed: {0}")]
    Call(String),
}

/// A step of the deployment sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ResolveFactory,
    ResolveSigner,
    QueryBalance,
    SubmitDeployment,
    AwaitDeployment,
    AwaitConfirmations,
    ReadOwner,
    ReadPropertyCounter,
    ReadTotalValueLocked,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResolveFactory => write!(f, "resolving contract factory"),
            Self::ResolveSigner => write!(f, "resolving deployer account"),
            Self::QueryBalance => write!(f, "querying deployer balance"),
            Self::SubmitDeployment => write!(f, "submitting deployment"),
            Self::AwaitDeployment => write!(f, "waiting for deployment"),
            Self::AwaitConfirmations => write!(f, "waiting for confirmations"),
            Self::ReadOwner => write!(f, "reading owner"),
            Self::ReadPropertyCounter => write!(f, "reading property counter"),
            Self::ReadTotalValueLocked => write!(f, "reading total value locked"),
        }
    }
}

/// The failure of a deployment run
///
/// Every error path of the driver ends up here; callers map it to a single
/// failure exit code.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("resolving contract factory failed: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("{step} failed: {source}")]
    Client {
        step: Step,
        #[source]
        source: ClientError,
    },
}

impl DeployError {
    pub(crate) const fn client(step: Step, source: ClientError) -> Self {
        Self::Client { step, source }
    }

    /// The step at which the deployment stopped
    #[must_use]
    pub const fn step(&self) -> Step {
        match self {
            Self::Artifact(_) => Step::ResolveFactory,
            Self::Client { step, .. } => *step,
        }
    }
}
