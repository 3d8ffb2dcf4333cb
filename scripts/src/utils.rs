//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy::{
    dyn_abi::DynSolValue,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, Bytes};
use serde_json::Value;
use tracing::info;

use crate::{
    constants::{ARTIFACT_EXTENSION, BYTECODE_KEY, BYTECODE_OBJECT_KEY},
    errors::ScriptError,
};

/// Sets up the provider with which to send deployment transactions, signing with
/// the given private key, and returns it alongside the signer's address
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<(DynProvider, Address), ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let sender = signer.address();

    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let provider = DynProvider::new(ProviderBuilder::new().wallet(signer).connect_http(url));

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!("connected to chain {chain_id} as {sender:#x}");

    Ok((provider, sender))
}

/// Parse the address of a named account
pub fn parse_account(role: &str, value: &str) -> Result<Address, ScriptError> {
    Address::from_str(value)
        .map_err(|e| ScriptError::AccountResolution(format!("{role} ({value}): {e}")))
}

/// Read the creation bytecode of the given contract from its compiled artifact,
/// `<artifacts_dir>/<contract>.json`
///
/// Both the Hardhat (`"bytecode": "0x..."`) and Foundry
/// (`"bytecode": { "object": "0x..." }`) artifact layouts are accepted.
pub fn load_artifact_bytecode(artifacts_dir: &Path, contract: &str) -> Result<Bytes, ScriptError> {
    let artifact_path = artifacts_dir
        .join(contract)
        .with_extension(ARTIFACT_EXTENSION);
    let contents = fs::read_to_string(&artifact_path).map_err(|e| {
        ScriptError::ArtifactParsing(format!("{}: {}", artifact_path.display(), e))
    })?;
    let artifact: Value =
        serde_json::from_str(&contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode_hex = match &artifact[BYTECODE_KEY] {
        Value::String(hex) => hex.as_str(),
        Value::Object(obj) => obj
            .get(BYTECODE_OBJECT_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default(),
        _ => "",
    };

    let bytecode =
        Bytes::from_str(bytecode_hex).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
    if bytecode.is_empty() {
        return Err(ScriptError::ArtifactParsing(format!(
            "no creation bytecode for {contract}"
        )));
    }

    Ok(bytecode)
}

/// ABI-encode constructor arguments, to be appended to the creation bytecode
pub fn encode_constructor_args(args: &[DynSolValue]) -> Vec<u8> {
    if args.is_empty() {
        return Vec::new();
    }

    DynSolValue::Tuple(args.to_vec()).abi_encode_params()
}

/// Render a constructor argument for the deployments file
pub fn render_arg(arg: &DynSolValue) -> String {
    match arg {
        DynSolValue::Address(addr) => format!("{addr:#x}"),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Uint(value, _) => value.to_string(),
        DynSolValue::Bool(b) => b.to_string(),
        other => format!("{other:?}"),
    }
}
