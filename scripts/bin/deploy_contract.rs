//! Uploads `contract/contract.json` to Hedera and instantiates it.
//!
//! The artifact is looked up next to this crate's sources first, then next to
//! the running executable, then in the working directory.

use helpers::{artifact_base_dir, run, DeployConfig, DeployError, Deployment, HederaConnector};

use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn script_dir() -> PathBuf {
    let compiled = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from));
    let cwd = std::env::current_dir().ok();

    let candidates = [Some(compiled.clone()), exe_dir, cwd];
    artifact_base_dir(candidates.into_iter().flatten()).unwrap_or(compiled)
}

async fn deploy_contract() -> Result<Deployment, DeployError> {
    let config = DeployConfig::from_env(&script_dir())?;

    let mut stdout = std::io::stdout();
    run(&config, &HederaConnector, &mut stdout).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // logs go to stderr, stdout only carries the identifiers
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Hello Future World - deploy smart contract - start");

    match deploy_contract().await {
        Ok(deployment) => {
            info!(
                file_id = %deployment.file_id,
                contract_id = %deployment.contract_id,
                "Hello Future World - deploy smart contract - complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "deployment failed");
            ExitCode::FAILURE
        }
    }
}
