//! Resolution of contract factories from a Hardhat artifacts directory
//!
//! Hardhat writes one JSON artifact per compiled contract, laid out as
//! `<root>/<source path>/<Contract>.json`, next to a `<Contract>.dbg.json`
//! debug file. Build metadata lives under `<root>/build-info` and is skipped.

use crate::contract::ContractFactory;
use crate::error::ArtifactError;
use std::path::{Component, Path, PathBuf};

/// Default artifacts directory of a Hardhat project
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

const BUILD_INFO_DIR: &str = "build-info";

/// A directory of compiled contract artifacts
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACTS_DIR)
    }
}

impl ArtifactStore {
    /// Create a store rooted at the given directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a contract factory by name
    ///
    /// `name` is either a bare contract name (`RealEstateTokenization`) or a
    /// fully qualified one (`contracts/RealEstateTokenization.sol:RealEstateTokenization`).
    ///
    /// # Errors
    ///
    /// Returns an error if no artifact or more than one artifact matches, or
    /// if the matching artifact is not deployable.
    pub fn contract_factory(&self, name: &str) -> Result<ContractFactory, ArtifactError> {
        let path = self.artifact_path(name)?;
        let factory = ContractFactory::from_artifact_file(&path)?;

        let expected = contract_name(name);
        if factory.name() != expected {
            return Err(ArtifactError::NameMismatch {
                expected: expected.to_string(),
                found: factory.name().to_string(),
            });
        }

        Ok(factory)
    }

    /// Find the artifact file for a contract
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::NotFound`] or [`ArtifactError::Ambiguous`] when
    /// the name does not identify exactly one artifact.
    pub fn artifact_path(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        if let Some((source, contract)) = name.rsplit_once(':') {
            if !is_relative_source(source) || contract.contains(['/', '\\']) {
                return Err(self.not_found(name));
            }
            let path = self.root.join(source).join(format!("{contract}.json"));
            return if path.is_file() {
                Ok(path)
            } else {
                Err(self.not_found(name))
            };
        }

        let file_name = format!("{name}.json");
        let mut matches = Vec::new();
        if self.root.is_dir() {
            collect_artifacts(&self.root, &file_name, &mut matches)?;
        }

        match matches.len() {
            0 => Err(self.not_found(name)),
            1 => Ok(matches.remove(0)),
            _ => {
                let mut candidates: Vec<String> = matches
                    .iter()
                    .map(|path| self.fully_qualified_name(path, name))
                    .collect();
                candidates.sort();
                Err(ArtifactError::Ambiguous {
                    name: name.to_string(),
                    candidates,
                })
            }
        }
    }

    fn not_found(&self, name: &str) -> ArtifactError {
        ArtifactError::NotFound {
            name: name.to_string(),
            root: self.root.clone(),
        }
    }

    /// `<root>/contracts/A.sol/Name.json` becomes `contracts/A.sol:Name`
    fn fully_qualified_name(&self, path: &Path, name: &str) -> String {
        let source = path
            .parent()
            .and_then(|dir| dir.strip_prefix(&self.root).ok())
            .map(|dir| {
                dir.components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_default();
        format!("{source}:{name}")
    }
}

/// Source paths of fully qualified names must stay inside the artifacts root
fn is_relative_source(source: &str) -> bool {
    Path::new(source)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn contract_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, contract)| contract)
}

fn collect_artifacts(
    dir: &Path,
    file_name: &str,
    matches: &mut Vec<PathBuf>,
) -> Result<(), ArtifactError> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let entry_name = entry.file_name();
        let entry_name = entry_name.to_string_lossy();

        if entry.file_type()?.is_dir() {
            if entry_name != BUILD_INFO_DIR {
                collect_artifacts(&path, file_name, matches)?;
            }
        } else if entry_name == file_name {
            matches.push(path);
        }
    }
    Ok(())
}
