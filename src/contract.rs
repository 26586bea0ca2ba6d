//! Contract factories built from compiled creation bytecode

use crate::error::ArtifactError;
use alloy_primitives::Bytes;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Compiled creation bytecode for a named contract, ready to be deployed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFactory {
    name: String,
    source_name: Option<String>,
    bytecode: Bytes,
}

/// The parts of a Hardhat artifact (`hh-sol-artifact-1`) needed for deployment
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    contract_name: String,
    #[serde(default)]
    source_name: Option<String>,
    bytecode: String,
    #[serde(default)]
    link_references: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

impl ContractFactory {
    /// Create a factory from raw creation bytecode
    ///
    /// # Examples
    ///
    /// ```
    /// use estate_deploy::ContractFactory;
    ///
    /// let factory = ContractFactory::new("Counter", vec![0x60, 0x80].into()).unwrap();
    /// assert_eq!(factory.name(), "Counter");
    /// assert!(ContractFactory::new("Abstract", Default::default()).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the bytecode is empty, which is what the compiler
    /// emits for abstract contracts and interfaces.
    pub fn new(name: impl Into<String>, bytecode: Bytes) -> Result<Self, ArtifactError> {
        let name = name.into();
        if bytecode.is_empty() {
            return Err(ArtifactError::Abstract(name));
        }

        Ok(Self {
            name,
            source_name: None,
            bytecode,
        })
    }

    /// Parse a factory from the JSON of a Hardhat artifact
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid, the bytecode is not hex, the
    /// contract is abstract, or it references libraries that were never linked.
    pub fn from_artifact_json(json: &str) -> Result<Self, ArtifactError> {
        let artifact: Artifact = serde_json::from_str(json)?;

        let libraries: Vec<String> = artifact
            .link_references
            .iter()
            .flat_map(|(source, libs)| libs.keys().map(move |lib| format!("{source}:{lib}")))
            .collect();
        if !libraries.is_empty() {
            return Err(ArtifactError::UnlinkedLibraries {
                name: artifact.contract_name,
                libraries,
            });
        }

        let bytecode = artifact.bytecode.parse::<Bytes>().map_err(|e| {
            ArtifactError::InvalidBytecode {
                name: artifact.contract_name.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut factory = Self::new(artifact.contract_name, bytecode)?;
        factory.source_name = artifact.source_name;
        Ok(factory)
    }

    /// Load a factory from a Hardhat artifact file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a deployable artifact.
    pub fn from_artifact_file<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_artifact_json(&json)
    }

    /// Get the contract name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the source file the contract was compiled from, if known
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Get the fully qualified name (`contracts/File.sol:Name`), if the source is known
    #[must_use]
    pub fn fully_qualified_name(&self) -> Option<String> {
        self.source_name
            .as_ref()
            .map(|source| format!("{source}:{}", self.name))
    }

    /// Get the creation bytecode
    #[must_use]
    pub const fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }
}
