//! Definitions of CLI arguments and commands for deploy scripts

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy, export_strategies},
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, DEFAULT_RPC_URL},
    errors::ScriptError,
};

/// Deploy the Sector cross-chain vault & export the strategy registry
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PKEY")]
    pub priv_key: Option<String>,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Path to the file in which deployments are recorded
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: PathBuf,

    /// Directory holding the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The commands of the CLI
#[derive(Subcommand)]
pub enum Command {
    /// Run the deploy scripts
    Deploy(DeployArgs),
    /// Write the strategy registry as JSON
    ExportStrategies(ExportStrategiesArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        priv_key: Option<&str>,
        rpc_url: &str,
        deployments_path: &Path,
        artifacts_dir: &Path,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => {
                let priv_key = priv_key.ok_or_else(|| {
                    ScriptError::ClientInitialization(
                        "a private key is required to deploy".to_string(),
                    )
                })?;
                deploy(args, priv_key, rpc_url, deployments_path, artifacts_dir).await
            }
            Command::ExportStrategies(args) => export_strategies(args),
        }
    }
}

/// Run the deploy scripts selected by tag, dependencies first
#[derive(Args)]
pub struct DeployArgs {
    /// Tags of the scripts to run, all scripts if empty
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// The named accounts the scripts deploy with
    #[command(flatten)]
    pub accounts: AccountArgs,
}

/// The named accounts, as hex addresses. The deployer is always the account
/// of the private key.
#[derive(Args, Clone, Debug)]
pub struct AccountArgs {
    /// Owner of the deployed contracts
    #[arg(long, env = "OWNER")]
    pub owner: String,

    /// Guardian of the deployed contracts
    #[arg(long, env = "GUARDIAN")]
    pub guardian: String,

    /// Manager of the deployed contracts
    #[arg(long, env = "MANAGER")]
    pub manager: String,

    /// Address of a real USDC token; a mock is deployed if unset
    #[arg(long, env = "USDC")]
    pub usdc: Option<String>,
}

/// Write the strategy registry as JSON
#[derive(Args)]
pub struct ExportStrategiesArgs {
    /// File to write to, stdout if unset
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
