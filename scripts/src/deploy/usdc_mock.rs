//! Deploys a mock USDC token on chains without a real one

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    constants::{USDC_MOCK_CONTRACT, USDC_MOCK_DEPLOYMENT, USDC_MOCK_TAG},
    deployments::DeployEnv,
    errors::ScriptError,
    types::DeployOptions,
};

use super::DeployScript;

/// Deploys `USDCMock` when no real USDC is configured, reusing an existing
/// deployment if one is recorded
pub struct UsdcMock;

#[async_trait]
impl DeployScript for UsdcMock {
    fn id(&self) -> &'static str {
        "usdcMock"
    }

    fn tags(&self) -> &'static [&'static str] {
        &[USDC_MOCK_TAG]
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[]
    }

    async fn run(&self, env: &DeployEnv<'_>) -> Result<(), ScriptError> {
        let accounts = env.accounts.named_accounts().await?;
        if let Some(usdc) = accounts.usdc {
            info!("usdc configured at {usdc:#x}, not deploying `{USDC_MOCK_CONTRACT}`");
            return Ok(());
        }

        warn!("Deploying `{USDC_MOCK_CONTRACT}` - THIS SHOULD ONLY BE DONE FOR TESTING");
        env.deployments
            .deploy(
                USDC_MOCK_DEPLOYMENT,
                DeployOptions {
                    contract: USDC_MOCK_CONTRACT.to_string(),
                    from: accounts.deployer,
                    args: vec![],
                    skip_if_already_deployed: true,
                    log: true,
                },
            )
            .await?;

        Ok(())
    }
}
