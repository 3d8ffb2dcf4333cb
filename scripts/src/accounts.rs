//! Resolution of the named accounts from the command line

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::{
    cli::AccountArgs,
    deployments::NamedAccountsResolver,
    errors::ScriptError,
    types::NamedAccounts,
    utils::parse_account,
};

/// Resolves the named accounts from CLI arguments, with the deployer being the
/// account the client signs for
pub struct CliAccounts {
    /// The account the client signs for
    deployer: Address,
    /// The remaining accounts, unparsed
    args: AccountArgs,
}

impl CliAccounts {
    /// Create a new resolver
    pub fn new(deployer: Address, args: AccountArgs) -> Self {
        Self { deployer, args }
    }
}

#[async_trait]
impl NamedAccountsResolver for CliAccounts {
    async fn named_accounts(&self) -> Result<NamedAccounts, ScriptError> {
        let usdc = match self.args.usdc.as_deref() {
            Some(usdc) if !usdc.is_empty() => Some(parse_account("usdc", usdc)?),
            _ => None,
        };

        Ok(NamedAccounts {
            deployer: self.deployer,
            owner: parse_account("owner", &self.args.owner)?,
            guardian: parse_account("guardian", &self.args.guardian)?,
            manager: parse_account("manager", &self.args.manager)?,
            usdc,
        })
    }
}
