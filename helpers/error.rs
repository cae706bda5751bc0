use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Missing or invalid operator/network configuration. Always raised before
/// any network call.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("environment variable {0} must be set (expected OPERATOR_ACCOUNT_ID and OPERATOR_ACCOUNT_PRIVATE_KEY)")]
    MissingVariable(&'static str),
    #[error("unknown network {0:?}, expected one of testnet, previewnet, mainnet")]
    UnknownNetwork(String),
    #[error("invalid operator account id {account_id:?}: {reason}")]
    InvalidAccountId { account_id: String, reason: String },
    #[error("operator private key is not a valid ECDSA key: {0}")]
    InvalidPrivateKey(String),
}

/// The compiled contract artifact could not be used.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read contract artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("contract artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("contract artifact has no string field data.bytecode.object")]
    MissingBytecode,
    #[error("contract artifact bytecode is empty")]
    EmptyBytecode,
}

/// Which of the two ledger transactions an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    FileCreate,
    ContractCreate,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::FileCreate => f.write_str("file create"),
            TransactionKind::ContractCreate => f.write_str("contract create"),
        }
    }
}

/// A ledger-side rejection or a failure talking to the ledger. Never retried.
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("{kind} transaction rejected with status {status}")]
    Rejected { kind: TransactionKind, status: String },
    #[error("{kind} transaction failed: {message}")]
    Failed { kind: TransactionKind, message: String },
    #[error("{kind} receipt did not contain a {field}")]
    MissingReceiptField { kind: TransactionKind, field: &'static str },
}

impl TransactionError {
    pub fn kind(&self) -> TransactionKind {
        match self {
            TransactionError::Rejected { kind, .. }
            | TransactionError::Failed { kind, .. }
            | TransactionError::MissingReceiptField { kind, .. } => *kind,
        }
    }

    /// Status code reported by the ledger, if the failure carried one.
    pub fn status(&self) -> Option<&str> {
        match self {
            TransactionError::Rejected { status, .. } => Some(status),
            _ => None,
        }
    }
}

/// Top-level error of a deployment run.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    #[error("failed to write deployment output: {0}")]
    Output(#[from] std::io::Error),
}
