//! Type definitions used throughout the scripts

use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};

/// The accounts a deploy script may refer to by role
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedAccounts {
    /// The account sending the deployment transactions
    pub deployer: Address,
    /// The owner of the deployed contracts
    pub owner: Address,
    /// The guardian of the deployed contracts
    pub guardian: Address,
    /// The manager of the deployed contracts
    pub manager: Address,
    /// The address of a real USDC token, if one exists on the target chain
    pub usdc: Option<Address>,
}

/// The options of a single deployment
#[derive(Clone, Debug, PartialEq)]
pub struct DeployOptions {
    /// The name of the contract artifact to deploy
    pub contract: String,
    /// The account sending the deployment transaction
    pub from: Address,
    /// The constructor arguments, in ABI order
    pub args: Vec<DynSolValue>,
    /// Whether to reuse a deployment already recorded under the same name
    pub skip_if_already_deployed: bool,
    /// Whether to log the progress of the deployment
    pub log: bool,
}

/// A deployment as recorded in the `deployments.json` file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// The address of the deployed contract
    pub address: Address,
    /// The name of the deployed contract artifact
    pub contract: String,
    /// The hash of the deployment transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<TxHash>,
    /// The rendered constructor arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}
