//! Helpers shared by the deploy script tests

#![allow(dead_code)]

use std::{collections::BTreeMap, sync::Mutex};

use alloy::primitives::{address, Address, TxHash};
use async_trait::async_trait;
use sector_scripts::{
    deployments::{Deployments, NamedAccountsResolver},
    errors::ScriptError,
    types::{DeployOptions, Deployment, NamedAccounts},
};

/// The mainnet USDC address
pub const MAINNET_USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// Named accounts for the tests, with the given USDC
pub fn named_accounts(usdc: Option<Address>) -> NamedAccounts {
    NamedAccounts {
        deployer: address!("DE00000000000000000000000000000000000000"),
        owner: address!("0100000000000000000000000000000000000000"),
        guardian: address!("0200000000000000000000000000000000000000"),
        manager: address!("0300000000000000000000000000000000000000"),
        usdc,
    }
}

/// A facade recording every deploy call, handing out sequential addresses
#[derive(Default)]
pub struct RecordingDeployments {
    /// The recorded deployments, by logical name
    records: Mutex<BTreeMap<String, Deployment>>,
    /// Every deploy call, in order
    calls: Mutex<Vec<(String, DeployOptions)>>,
    /// Whether deploy calls fail
    fail_deploys: bool,
}

impl RecordingDeployments {
    /// A facade with no prior deployments
    pub fn new() -> Self {
        Self::default()
    }

    /// A facade whose deploy calls always fail
    pub fn failing() -> Self {
        Self {
            fail_deploys: true,
            ..Self::default()
        }
    }

    /// Record a prior deployment
    pub fn with_deployment(self, name: &str, address: Address) -> Self {
        self.records.lock().unwrap().insert(
            name.to_string(),
            Deployment {
                address,
                contract: name.to_string(),
                transaction_hash: None,
                args: vec![],
            },
        );
        self
    }

    /// The deploy calls made so far
    pub fn calls(&self) -> Vec<(String, DeployOptions)> {
        self.calls.lock().unwrap().clone()
    }

    /// The logical names of the deploy calls made so far
    pub fn call_names(&self) -> Vec<String> {
        self.calls().into_iter().map(|(name, _)| name).collect()
    }
}

#[async_trait]
impl Deployments for RecordingDeployments {
    async fn deploy(&self, name: &str, options: DeployOptions) -> Result<Deployment, ScriptError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((name.to_string(), options.clone()));
        if self.fail_deploys {
            return Err(ScriptError::ContractDeployment("execution reverted".to_string()));
        }

        let mut records = self.records.lock().unwrap();
        if options.skip_if_already_deployed {
            if let Some(existing) = records.get(name) {
                return Ok(existing.clone());
            }
        }

        let nonce = calls.len() as u8;
        let deployment = Deployment {
            address: Address::with_last_byte(0xc0 + nonce),
            contract: options.contract,
            transaction_hash: Some(TxHash::with_last_byte(nonce)),
            args: vec![],
        };
        records.insert(name.to_string(), deployment.clone());

        Ok(deployment)
    }

    async fn get(&self, name: &str) -> Result<Deployment, ScriptError> {
        self.records
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| ScriptError::DeploymentNotFound(name.to_string()))
    }
}

/// A resolver that cannot resolve any account
pub struct UnresolvableAccounts;

#[async_trait]
impl NamedAccountsResolver for UnresolvableAccounts {
    async fn named_accounts(&self) -> Result<NamedAccounts, ScriptError> {
        Err(ScriptError::AccountResolution("guardian is not configured".to_string()))
    }
}
