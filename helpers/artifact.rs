//! Compiled contract artifact (`{ "data": { "bytecode": { "object": ... } } }`)

use std::path::Path;

use serde::Deserialize;

use crate::error::ArtifactError;

/// Bytecode extracted from a compiler output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractArtifact {
    pub bytecode: String,
}

#[derive(Deserialize)]
struct ArtifactDocument {
    data: Option<ArtifactData>,
}

#[derive(Deserialize)]
struct ArtifactData {
    bytecode: Option<BytecodeSection>,
}

#[derive(Deserialize)]
struct BytecodeSection {
    object: Option<String>,
}

impl ContractArtifact {
    /// Reads the artifact at `path`. The read is synchronous; it happens once,
    /// before any transaction is built.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ArtifactError> {
        let document: ArtifactDocument = serde_json::from_str(raw)?;
        let bytecode = document
            .data
            .and_then(|data| data.bytecode)
            .and_then(|bytecode| bytecode.object)
            .ok_or(ArtifactError::MissingBytecode)?;

        if bytecode.trim().is_empty() {
            return Err(ArtifactError::EmptyBytecode);
        }

        Ok(Self { bytecode })
    }
}
