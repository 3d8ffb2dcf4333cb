//! Deploys the cross-chain vault

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
};
use async_trait::async_trait;

use crate::{
    constants::{
        USDC_MOCK_DEPLOYMENT, USDC_MOCK_TAG, X_VAULT_CONTRACT, X_VAULT_DEPLOYMENT, X_VAULT_TAG,
        X_VAULT_TOKEN_NAME, X_VAULT_TOKEN_SYMBOL,
    },
    deployments::DeployEnv,
    errors::ScriptError,
    types::{DeployOptions, NamedAccounts},
};

use super::DeployScript;

/// Deploys `SectorCrossVault` under `SectorCrossVault-0`, over the configured
/// USDC or the previously deployed `USDCMock`
///
/// The vault is redeployed on every run.
pub struct XVault;

/// The vault's constructor arguments, in ABI order:
/// `(asset, name, symbol, owner, guardian, manager, feeRecipient, uint256)`
///
/// The owner doubles as the fee recipient.
pub fn x_vault_constructor_args(
    asset: Address,
    owner: Address,
    guardian: Address,
    manager: Address,
) -> Vec<DynSolValue> {
    vec![
        DynSolValue::Address(asset),
        DynSolValue::String(X_VAULT_TOKEN_NAME.to_string()),
        DynSolValue::String(X_VAULT_TOKEN_SYMBOL.to_string()),
        DynSolValue::Address(owner),
        DynSolValue::Address(guardian),
        DynSolValue::Address(manager),
        DynSolValue::Address(owner),
        DynSolValue::Uint(U256::ZERO, 256),
    ]
}

#[async_trait]
impl DeployScript for XVault {
    fn id(&self) -> &'static str {
        "xVault"
    }

    fn tags(&self) -> &'static [&'static str] {
        &[X_VAULT_TAG]
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[USDC_MOCK_TAG]
    }

    async fn run(&self, env: &DeployEnv<'_>) -> Result<(), ScriptError> {
        let accounts = env.accounts.named_accounts().await?;
        let NamedAccounts {
            deployer,
            owner,
            guardian,
            manager,
            ..
        } = accounts;

        let usdc = match accounts.usdc {
            Some(usdc) => usdc,
            None => env.deployments.get(USDC_MOCK_DEPLOYMENT).await?.address,
        };

        let vault = env
            .deployments
            .deploy(
                X_VAULT_DEPLOYMENT,
                DeployOptions {
                    contract: X_VAULT_CONTRACT.to_string(),
                    from: deployer,
                    args: x_vault_constructor_args(usdc, owner, guardian, manager),
                    skip_if_already_deployed: false,
                    log: true,
                },
            )
            .await?;

        println!("x-vault deployed to {:#x}", vault.address);

        Ok(())
    }
}
