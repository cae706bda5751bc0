//! Boundary to the ledger network: identifiers, requests and the client capability

use std::fmt;

use async_trait::async_trait;

use crate::{
    config::{ClientSettings, OperatorCredential},
    error::{ConfigurationError, TransactionError},
};

/// Ledger file holding uploaded content, e.g. `0.0.1001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileIdentifier(pub String);

/// Instantiated smart contract, e.g. `0.0.2002`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractIdentifier(pub String);

impl fmt::Display for FileIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ContractIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request to store `contents` in a new ledger file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCreateRequest {
    pub contents: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorParam {
    String(String),
}

/// Ordered constructor parameters, ABI-encoded by the client at submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstructorArgs {
    params: Vec<ConstructorParam>,
}

impl ConstructorArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_string(mut self, value: impl Into<String>) -> Self {
        self.params.push(ConstructorParam::String(value.into()));
        self
    }

    pub fn params(&self) -> &[ConstructorParam] {
        &self.params
    }
}

/// Request to instantiate a contract from bytecode already stored in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCreateRequest {
    pub bytecode_file_id: FileIdentifier,
    pub gas: u64,
    pub constructor_args: ConstructorArgs,
}

/// A connected client handle, authenticated as the operator.
///
/// The two submissions deliberately have different shapes. A file-creation
/// transaction must be frozen against the client and then signed with
/// `signer` before it is executed; signing an unfrozen transaction is not
/// allowed. A contract-creation transaction is executed as built, paid and
/// signed by the operator only.
///
/// Both methods wait for the receipt and never retry.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Key used to sign transactions that need an explicit signature.
    type Signer: Send + Sync;

    fn operator_signer(&self) -> &Self::Signer;

    async fn submit_file(
        &self,
        request: FileCreateRequest,
        signer: &Self::Signer,
    ) -> Result<FileIdentifier, TransactionError>;

    async fn submit_contract(
        &self,
        request: ContractCreateRequest,
    ) -> Result<ContractIdentifier, TransactionError>;
}

/// Builds a [`LedgerClient`] for an operator. Connecting performs no network
/// call; every failure here is a configuration problem.
pub trait LedgerConnector {
    type Client: LedgerClient;

    fn connect(
        &self,
        operator: &OperatorCredential,
        settings: &ClientSettings,
    ) -> Result<Self::Client, ConfigurationError>;
}
