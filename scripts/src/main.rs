use clap::Parser;
use sector_scripts::{cli::Cli, errors::ScriptError};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        deployments_path,
        artifacts_dir,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    command
        .run(
            priv_key.as_deref(),
            &rpc_url,
            &deployments_path,
            &artifacts_dir,
        )
        .await
}
