//! Common helpers for deploying a contract to a Hedera network

mod artifact;
mod config;
mod deploy;
mod error;
#[cfg(feature = "hedera")]
mod hedera_client;
mod ledger;

pub use artifact::ContractArtifact;
pub use config::{
    artifact_base_dir, ClientSettings, DeployConfig, Network, OperatorCredential, ARTIFACT_PATH,
    CONSTRUCTOR_MESSAGE, CONTRACT_GAS_LIMIT, HEDERA_NETWORK, MAX_QUERY_PAYMENT_HBAR,
    MAX_TRANSACTION_FEE_HBAR, OPERATOR_ACCOUNT_ID, OPERATOR_ACCOUNT_PRIVATE_KEY,
};
pub use deploy::{deploy, instantiate_contract, run, upload_bytecode, Deployment};
pub use error::{ArtifactError, ConfigurationError, DeployError, TransactionError, TransactionKind};
#[cfg(feature = "hedera")]
pub use hedera_client::{HederaClient, HederaConnector};
pub use ledger::{
    ConstructorArgs, ConstructorParam, ContractCreateRequest, ContractIdentifier,
    FileCreateRequest, FileIdentifier, LedgerClient, LedgerConnector,
};
