//! Test fixtures and constants for deployment tests

#![allow(dead_code)] // Test fixtures may not all be used in every test

use alloy_primitives::{address, b256, Address, TxHash};
use std::path::{Path, PathBuf};

/// Source path of the tokenization contract inside a Hardhat project
pub const TOKENIZATION_SOURCE: &str = "contracts/RealEstateTokenization.sol";

/// Stand-in creation bytecode (`PUSH1 0x80 PUSH1 0x40 MSTORE CALLVALUE`)
pub const TOKENIZATION_BYTECODE: &str = "0x608060405234";

/// Account that signs deployments in tests
pub const DEPLOYER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// Address the mock places the deployed contract at
pub const CONTRACT_ADDRESS: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

/// Hash of the mocked creation transaction
pub const DEPLOY_TX_HASH: TxHash =
    b256!("4c8a3b1f2e6d9c7a5b3f1e0d2c4a6b8e9f7d5c3b1a2e4f6d8c0b9a7e5d3c1f2a");

/// Build the JSON of a Hardhat artifact
#[must_use]
pub fn artifact_json(name: &str, source: &str, bytecode: &str) -> String {
    serde_json::json!({
        "_format": "hh-sol-artifact-1",
        "contractName": name,
        "sourceName": source,
        "abi": [
            {
                "inputs": [],
                "name": "owner",
                "outputs": [{ "internalType": "address", "name": "", "type": "address" }],
                "stateMutability": "view",
                "type": "function"
            }
        ],
        "bytecode": bytecode,
        "deployedBytecode": bytecode,
        "linkReferences": {},
        "deployedLinkReferences": {}
    })
    .to_string()
}

/// Write an artifact (and its debug file) the way Hardhat lays them out
pub fn write_artifact(root: &Path, source: &str, name: &str, bytecode: &str) -> PathBuf {
    let dir = root.join(source);
    std::fs::create_dir_all(&dir).expect("create artifact dir");

    let path = dir.join(format!("{name}.json"));
    std::fs::write(&path, artifact_json(name, source, bytecode)).expect("write artifact");
    std::fs::write(
        dir.join(format!("{name}.dbg.json")),
        r#"{ "_format": "hh-sol-dbg-1", "buildInfo": "../../build-info/0.json" }"#,
    )
    .expect("write debug file");
    path
}
