//! Addresses and parameters shared by the strategy descriptors

use alloy_primitives::{address, Address};

// ---------------------
// | MAINNET ADDRESSES |
// ---------------------

/// The USDC token on Ethereum mainnet
pub const MAINNET_USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// The WETH token on Ethereum mainnet
pub const MAINNET_WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

/// The CRV token on Ethereum mainnet
pub const MAINNET_CRV: Address = address!("D533a949740bb3306d119CC777fa900bA034cd52");

/// The CVX token on Ethereum mainnet
pub const MAINNET_CVX: Address = address!("4e3FBD56CD56c3e72c1403e103b45Db9da5B9D2B");

/// The SNX token on Ethereum mainnet
pub const MAINNET_SNX: Address = address!("C011a73ee8576Fb46F5E1c5751cA3B9Fe0af2a6F");

/// The Uniswap V3 swap router on Ethereum mainnet
pub const MAINNET_UNISWAP_V3_ROUTER: Address =
    address!("E592427A0AEce92De3Edee1F18E0157C05861564");

/// The Curve 3pool LP token (DAI/USDC/USDT) on Ethereum mainnet
pub const MAINNET_THREE_CRV: Address = address!("6c3F90f043a72FA612cbac8115EE7e52BDe6E490");

/// The Gearbox credit facade shared by all the USDC levConvex strategies
pub const MAINNET_USDC_CREDIT_FACADE: Address =
    address!("61fbb350e39cc7bF22C01A469cf03085774184aa");

/// The Convex booster on Ethereum mainnet
pub const MAINNET_CONVEX_BOOSTER: Address = address!("B548DaCb7e5d61BF47A026903904680564855B4E");

// -----------------------
// | STRATEGY PARAMETERS |
// -----------------------

/// The leverage factor used by every levConvex strategy
pub const DEFAULT_LEVERAGE_FACTOR: u32 = 500;

/// The index of the USDC coin in the plain (non-metapool) Curve pools
pub const USDC_COIN_ID: u8 = 1;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The length of an address rendered as `0x`-prefixed hex
pub const ADDRESS_HEX_LEN: usize = 2 + 2 * NUM_BYTES_ADDRESS;
