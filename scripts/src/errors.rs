//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Error reading the `deployments.json` file
    ReadDeployments(String),
    /// Error writing the `deployments.json` file
    WriteDeployments(String),
    /// Error writing an output file
    WriteFile(String),
    /// Error reading or parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error resolving one of the named accounts
    AccountResolution(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// No deployment is recorded under the given name
    DeploymentNotFound(String),
    /// The requested sender is not the account the client signs for
    SenderMismatch(String),
    /// Error de/serializing JSON
    Serde(String),
    /// The strategy registry violates one of its invariants
    InvalidRegistry(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::WriteFile(s) => write!(f, "error writing file: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::AccountResolution(s) => write!(f, "error resolving account: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::DeploymentNotFound(s) => write!(f, "no deployment found for {}", s),
            ScriptError::SenderMismatch(s) => write!(f, "sender mismatch: {}", s),
            ScriptError::Serde(s) => write!(f, "error de/serializing json: {}", s),
            ScriptError::InvalidRegistry(s) => write!(f, "invalid strategy registry: {}", s),
        }
    }
}

impl Error for ScriptError {}
