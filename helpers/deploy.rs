//! Upload-then-instantiate deployment pipeline

use std::io::Write;

use tracing::info;

use crate::{
    artifact::ContractArtifact,
    config::DeployConfig,
    error::{DeployError, TransactionError},
    ledger::{
        ConstructorArgs, ContractCreateRequest, ContractIdentifier, FileCreateRequest,
        FileIdentifier, LedgerClient, LedgerConnector,
    },
};

/// Identifiers produced by a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub file_id: FileIdentifier,
    pub contract_id: ContractIdentifier,
}

/// Stores `bytecode` in a new ledger file, signed by the client's operator.
pub async fn upload_bytecode<C: LedgerClient>(
    client: &C,
    bytecode: &str,
) -> Result<FileIdentifier, TransactionError> {
    let request = FileCreateRequest {
        contents: bytecode.as_bytes().to_vec(),
    };
    let file_id = client.submit_file(request, client.operator_signer()).await?;
    info!(%file_id, "bytecode file created");
    Ok(file_id)
}

/// Instantiates a contract from the bytecode stored in `file_id`.
pub async fn instantiate_contract<C: LedgerClient>(
    client: &C,
    file_id: &FileIdentifier,
    gas: u64,
    constructor_args: ConstructorArgs,
) -> Result<ContractIdentifier, TransactionError> {
    let request = ContractCreateRequest {
        bytecode_file_id: file_id.clone(),
        gas,
        constructor_args,
    };
    let contract_id = client.submit_contract(request).await?;
    info!(%contract_id, "contract instantiated");
    Ok(contract_id)
}

/// Connects, loads the artifact, uploads it and instantiates the contract,
/// writing both identifiers to `out`.
///
/// A file uploaded before a failed instantiation is left on the ledger.
pub async fn run<N, W>(
    config: &DeployConfig,
    connector: &N,
    out: &mut W,
) -> Result<Deployment, DeployError>
where
    N: LedgerConnector,
    W: Write,
{
    info!(
        account = %config.operator.account_id,
        network = %config.client.network,
        "using operator account"
    );
    let client = connector.connect(&config.operator, &config.client)?;

    let artifact = ContractArtifact::load(&config.artifact_path)?;
    info!(
        path = %config.artifact_path.display(),
        bytecode_len = artifact.bytecode.len(),
        "loaded contract artifact"
    );

    let file_id = upload_bytecode(&client, &artifact.bytecode).await?;
    writeln!(out, "The smart contract byte code file ID is {file_id}")?;

    let constructor_args = ConstructorArgs::new().add_string(config.constructor_message.as_str());
    let contract_id =
        instantiate_contract(&client, &file_id, config.gas_limit, constructor_args).await?;
    writeln!(out, "The smart contract ID is {contract_id}")?;

    Ok(Deployment {
        file_id,
        contract_id,
    })
}

/// [`run`] with configuration read through `lookup`. Configuration errors
/// surface before the connector is touched.
pub async fn deploy<N, W>(
    lookup: impl Fn(&str) -> Option<String>,
    artifact_path: impl Into<std::path::PathBuf>,
    connector: &N,
    out: &mut W,
) -> Result<Deployment, DeployError>
where
    N: LedgerConnector,
    W: Write,
{
    let config = DeployConfig::from_vars(lookup, artifact_path)?;
    run(&config, connector, out).await
}
