//! The deployment facade the deploy scripts run against, and the JSON file
//! in which deployments are recorded

use std::{collections::BTreeMap, fs, path::PathBuf};

use async_trait::async_trait;

use crate::{
    errors::ScriptError,
    types::{DeployOptions, Deployment, NamedAccounts},
};

/// Resolves the named accounts available to the deploy scripts
#[async_trait]
pub trait NamedAccountsResolver: Send + Sync {
    /// Resolve the named accounts
    async fn named_accounts(&self) -> Result<NamedAccounts, ScriptError>;
}

#[async_trait]
impl NamedAccountsResolver for NamedAccounts {
    async fn named_accounts(&self) -> Result<NamedAccounts, ScriptError> {
        Ok(*self)
    }
}

/// Deploys contracts and looks up previous deployments by logical name
#[async_trait]
pub trait Deployments: Send + Sync {
    /// Deploy a contract, recording it under the given logical name
    async fn deploy(&self, name: &str, options: DeployOptions) -> Result<Deployment, ScriptError>;

    /// Look up the deployment recorded under the given logical name
    async fn get(&self, name: &str) -> Result<Deployment, ScriptError>;
}

/// The environment a deploy script runs in
#[derive(Clone, Copy)]
pub struct DeployEnv<'a> {
    /// The named account resolver
    pub accounts: &'a dyn NamedAccountsResolver,
    /// The deployment facade
    pub deployments: &'a dyn Deployments,
}

impl<'a> DeployEnv<'a> {
    /// Create a new environment from a resolver and a facade
    pub fn new(accounts: &'a dyn NamedAccountsResolver, deployments: &'a dyn Deployments) -> Self {
        Self {
            accounts,
            deployments,
        }
    }
}

// ---------------------
// | DEPLOYMENTS STORE |
// ---------------------

/// The `deployments.json` file, mapping logical names to deployments
#[derive(Clone, Debug)]
pub struct DeploymentsStore {
    /// The path of the file
    path: PathBuf,
}

impl DeploymentsStore {
    /// Create a store backed by the file at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every recorded deployment, empty if the file doesn't exist yet
    pub fn load(&self) -> Result<BTreeMap<String, Deployment>, ScriptError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            ScriptError::ReadDeployments(format!("{}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
    }

    /// Read the deployment recorded under the given name
    pub fn get(&self, name: &str) -> Result<Option<Deployment>, ScriptError> {
        Ok(self.load()?.remove(name))
    }

    /// Record a deployment under the given name, replacing any previous record
    pub fn insert(&self, name: &str, deployment: Deployment) -> Result<(), ScriptError> {
        let mut deployments = self.load()?;
        deployments.insert(name.to_string(), deployment);

        let contents = serde_json::to_string_pretty(&deployments)
            .map_err(|e| ScriptError::Serde(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| {
            ScriptError::WriteDeployments(format!("{}: {}", self.path.display(), e))
        })
    }
}
