//! Implementations of the CLI commands

use std::{fs, path::Path};

use strategy_registry::{registry::to_json, validation::validate, ADDRESS_BOOK, LEV_CONVEX};
use tracing::info;

use crate::{
    accounts::CliAccounts,
    chain::ChainDeployments,
    cli::{DeployArgs, ExportStrategiesArgs},
    deploy::{all_scripts, run_scripts},
    deployments::{DeployEnv, DeploymentsStore},
    errors::ScriptError,
    utils::setup_client,
};

/// Run the deploy scripts selected by the given tags against the chain
pub async fn deploy(
    args: DeployArgs,
    priv_key: &str,
    rpc_url: &str,
    deployments_path: &Path,
    artifacts_dir: &Path,
) -> Result<(), ScriptError> {
    let (provider, deployer) = setup_client(priv_key, rpc_url).await?;

    let deployments = ChainDeployments::new(
        provider,
        deployer,
        artifacts_dir,
        DeploymentsStore::new(deployments_path),
    );
    let accounts = CliAccounts::new(deployer, args.accounts);
    let env = DeployEnv::new(&accounts, &deployments);

    let scripts = all_scripts();
    let ran = run_scripts(&scripts, &args.tags, &env).await?;
    info!("ran deploy scripts: {}", ran.join(", "));

    Ok(())
}

/// Validate the strategy registry and write it as JSON
pub fn export_strategies(args: ExportStrategiesArgs) -> Result<(), ScriptError> {
    validate(LEV_CONVEX, &ADDRESS_BOOK).map_err(|e| ScriptError::InvalidRegistry(e.to_string()))?;

    let json = to_json(&ADDRESS_BOOK, LEV_CONVEX)
        .and_then(|export| serde_json::to_string_pretty(&export))
        .map_err(|e| ScriptError::Serde(e.to_string()))?;

    match args.output {
        Some(path) => {
            fs::write(&path, json).map_err(|e| ScriptError::WriteFile(e.to_string()))?;
            info!("wrote {} strategies to {}", LEV_CONVEX.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
