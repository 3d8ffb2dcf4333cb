//! The deployment facade backed by a live chain and the `deployments.json` file

use std::path::PathBuf;

use alloy::{
    network::TransactionBuilder,
    primitives::Address,
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;
use tracing::info;

use crate::{
    constants::NUM_DEPLOY_CONFIRMATIONS,
    deployments::{Deployments, DeploymentsStore},
    errors::ScriptError,
    types::{DeployOptions, Deployment},
    utils::{encode_constructor_args, load_artifact_bytecode, render_arg},
};

/// Deploys compiled artifacts to a chain, recording each deployment in the
/// `deployments.json` file
pub struct ChainDeployments {
    /// The provider used to send deployment transactions
    provider: DynProvider,
    /// The account the provider signs for
    sender: Address,
    /// The directory holding compiled contract artifacts
    artifacts_dir: PathBuf,
    /// The file deployments are recorded in
    store: DeploymentsStore,
}

impl ChainDeployments {
    /// Create a new facade
    pub fn new(
        provider: DynProvider,
        sender: Address,
        artifacts_dir: impl Into<PathBuf>,
        store: DeploymentsStore,
    ) -> Self {
        Self {
            provider,
            sender,
            artifacts_dir: artifacts_dir.into(),
            store,
        }
    }
}

#[async_trait]
impl Deployments for ChainDeployments {
    async fn deploy(&self, name: &str, options: DeployOptions) -> Result<Deployment, ScriptError> {
        if options.skip_if_already_deployed {
            if let Some(existing) = self.store.get(name)? {
                if options.log {
                    info!("reusing \"{name}\" at {:#x}", existing.address);
                }
                return Ok(existing);
            }
        }

        if options.from != self.sender {
            return Err(ScriptError::SenderMismatch(format!(
                "cannot deploy from {:#x}, client signs for {:#x}",
                options.from, self.sender
            )));
        }

        let bytecode = load_artifact_bytecode(&self.artifacts_dir, &options.contract)?;
        let mut deploy_code = bytecode.to_vec();
        deploy_code.extend(encode_constructor_args(&options.args));
        let tx = TransactionRequest::default()
            .with_from(options.from)
            .with_deploy_code(deploy_code);

        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        let tx_hash = *pending_tx.tx_hash();
        if options.log {
            info!("deploying \"{name}\" (tx: {tx_hash:#x})...");
        }

        let receipt = pending_tx
            .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        if !receipt.status() {
            return Err(ScriptError::ContractDeployment(format!(
                "deployment of \"{name}\" reverted (tx: {tx_hash:#x})"
            )));
        }

        let address = receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(format!("no contract address for \"{name}\""))
        })?;
        if options.log {
            info!(
                "deployed \"{name}\" at {address:#x} with {} gas",
                receipt.gas_used
            );
        }

        let deployment = Deployment {
            address,
            contract: options.contract,
            transaction_hash: Some(tx_hash),
            args: options.args.iter().map(render_arg).collect(),
        };
        self.store.insert(name, deployment.clone())?;

        Ok(deployment)
    }

    async fn get(&self, name: &str) -> Result<Deployment, ScriptError> {
        self.store
            .get(name)?
            .ok_or_else(|| ScriptError::DeploymentNotFound(name.to_string()))
    }
}
