//! Constants used in the deploy scripts

// ---------------------
// | CROSS-CHAIN VAULT |
// ---------------------

/// The name of the cross-chain vault contract artifact
pub const X_VAULT_CONTRACT: &str = "SectorCrossVault";

/// The logical name under which the cross-chain vault deployment is recorded
pub const X_VAULT_DEPLOYMENT: &str = "SectorCrossVault-0";

/// The tag selecting the cross-chain vault deploy script
pub const X_VAULT_TAG: &str = "XVault";

/// The display name of the vault's share token
pub const X_VAULT_TOKEN_NAME: &str = "PichaToken";

/// The symbol of the vault's share token
pub const X_VAULT_TOKEN_SYMBOL: &str = "PTK";

// -------------
// | USDC MOCK |
// -------------

/// The name of the mock USDC contract artifact
pub const USDC_MOCK_CONTRACT: &str = "USDCMock";

/// The logical name under which the mock USDC deployment is recorded
pub const USDC_MOCK_DEPLOYMENT: &str = "USDCMock";

/// The tag selecting the mock USDC deploy script
pub const USDC_MOCK_TAG: &str = "USDCMock";

// ------------
// | DEFAULTS |
// ------------

/// The default RPC url, a local devnet node
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The default directory holding compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The extension of a compiled contract artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The key of the creation bytecode in a compiled contract artifact
pub const BYTECODE_KEY: &str = "bytecode";

/// The key of the bytecode hex string when the bytecode is nested in an object
pub const BYTECODE_OBJECT_KEY: &str = "object";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;
