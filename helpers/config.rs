//! Deployment configuration loaded from the environment

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::ConfigurationError;

pub const OPERATOR_ACCOUNT_ID: &str = "OPERATOR_ACCOUNT_ID";
pub const OPERATOR_ACCOUNT_PRIVATE_KEY: &str = "OPERATOR_ACCOUNT_PRIVATE_KEY";
pub const HEDERA_NETWORK: &str = "HEDERA_NETWORK";

/// Default maximum transaction fee, in hbar.
pub const MAX_TRANSACTION_FEE_HBAR: i64 = 100;
/// Default maximum query payment, in hbar.
pub const MAX_QUERY_PAYMENT_HBAR: i64 = 50;
/// Gas authorized for the contract-creation transaction.
pub const CONTRACT_GAS_LIMIT: u64 = 100_000;
pub const CONSTRUCTOR_MESSAGE: &str = "Hello from Hedera!";
/// Compiled contract location, relative to the script directory.
pub const ARTIFACT_PATH: &str = "contract/contract.json";

/// Account that pays for every transaction and query made through a client.
#[derive(Clone, PartialEq, Eq)]
pub struct OperatorCredential {
    pub account_id: String,
    /// ECDSA private key, as a hex/DER string.
    pub private_key: String,
}

impl fmt::Debug for OperatorCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorCredential")
            .field("account_id", &self.account_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl OperatorCredential {
    pub fn from_vars(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let account_id = required(&lookup, OPERATOR_ACCOUNT_ID)?;
        let private_key = required(&lookup, OPERATOR_ACCOUNT_PRIVATE_KEY)?;
        Ok(Self {
            account_id,
            private_key,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigurationError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigurationError::MissingVariable(name)),
    }
}

/// Same names `hedera::Client::for_name` accepts; keep the two lists in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Testnet,
    Previewnet,
    Mainnet,
}

impl FromStr for Network {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "previewnet" => Ok(Network::Previewnet),
            "mainnet" => Ok(Network::Mainnet),
            _ => Err(ConfigurationError::UnknownNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Testnet => "testnet",
            Network::Previewnet => "previewnet",
            Network::Mainnet => "mainnet",
        };
        f.write_str(name)
    }
}

/// Network and fee ceilings applied to a client handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub network: Network,
    pub max_transaction_fee_hbar: i64,
    pub max_query_payment_hbar: i64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            max_transaction_fee_hbar: MAX_TRANSACTION_FEE_HBAR,
            max_query_payment_hbar: MAX_QUERY_PAYMENT_HBAR,
        }
    }
}

/// Everything a deployment run needs, passed explicitly into [`crate::run`].
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub operator: OperatorCredential,
    pub client: ClientSettings,
    pub artifact_path: PathBuf,
    pub gas_limit: u64,
    pub constructor_message: String,
}

impl DeployConfig {
    /// Config with the fixed deployment constants and the given operator.
    pub fn new(operator: OperatorCredential, artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            operator,
            client: ClientSettings::default(),
            artifact_path: artifact_path.into(),
            gas_limit: CONTRACT_GAS_LIMIT,
            constructor_message: CONSTRUCTOR_MESSAGE.to_string(),
        }
    }

    /// Builds the config from `lookup` instead of the process environment.
    pub fn from_vars(
        lookup: impl Fn(&str) -> Option<String>,
        artifact_path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigurationError> {
        let operator = OperatorCredential::from_vars(&lookup)?;
        let mut config = Self::new(operator, artifact_path);
        if let Some(network) = lookup(HEDERA_NETWORK).filter(|v| !v.trim().is_empty()) {
            config.client.network = network.parse()?;
        }
        Ok(config)
    }

    /// Loads `.env` (searching upward from the working directory) and reads the
    /// process environment. The artifact is resolved against `base_dir`.
    pub fn from_env(base_dir: &Path) -> Result<Self, ConfigurationError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(err) if err.not_found() => tracing::debug!("no .env file found"),
            Err(err) => tracing::warn!(%err, "ignoring unreadable .env file"),
        }
        Self::from_vars(|name| std::env::var(name).ok(), base_dir.join(ARTIFACT_PATH))
    }
}

/// First of `candidates` that holds [`ARTIFACT_PATH`], in order.
pub fn artifact_base_dir(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates
        .into_iter()
        .find(|dir| dir.join(ARTIFACT_PATH).is_file())
}
