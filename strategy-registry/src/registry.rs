//! The static table of levConvex strategy instances

use alloy_primitives::{address, Address};
use serde::Serialize;
use serde_json::Value;

use crate::{
    constants::{
        DEFAULT_LEVERAGE_FACTOR, MAINNET_CONVEX_BOOSTER, MAINNET_CRV, MAINNET_CVX, MAINNET_SNX,
        MAINNET_THREE_CRV, MAINNET_UNISWAP_V3_ROUTER, MAINNET_USDC, MAINNET_USDC_CREDIT_FACADE,
        MAINNET_WETH, USDC_COIN_ID,
    },
    types::{AddressBook, Chain, CurvePool, StrategyDescriptor, StrategyType},
};

/// The address book entries for Ethereum mainnet
const MAINNET_ENTRIES: &[(&str, Address)] = &[
    ("USDC", MAINNET_USDC),
    ("WETH", MAINNET_WETH),
    ("CRV", MAINNET_CRV),
    ("CVX", MAINNET_CVX),
    ("SNX", MAINNET_SNX),
    ("UniswapV3Router", MAINNET_UNISWAP_V3_ROUTER),
    ("THREE_CRV", MAINNET_THREE_CRV),
];

/// The tokens farmed by every mainnet levConvex strategy
const MAINNET_CONVEX_FARM_TOKENS: &[Address] = &[MAINNET_CRV, MAINNET_CVX];

/// The address book of every chain strategies are deployed on
pub const ADDRESS_BOOK: AddressBook = AddressBook {
    chains: &[(Chain::Mainnet, MAINNET_ENTRIES)],
};

/// The levConvex strategy instances
pub const LEV_CONVEX: &[StrategyDescriptor] = &[
    StrategyDescriptor {
        name: "USDC-sUSD-levConvex",
        strategy_type: StrategyType::LevConvex,
        pool: CurvePool::Plain {
            coin_id: USDC_COIN_ID,
        },
        curve_adapter: address!("bfB212e5D9F880bf93c47F3C32f6203fa4845222"),
        convex_reward_pool: address!("bEf6108D1F6B85c4c9AA3975e15904Bb3DFcA980"),
        credit_facade: MAINNET_USDC_CREDIT_FACADE,
        convex_booster: MAINNET_CONVEX_BOOSTER,
        underlying: MAINNET_USDC,
        leverage_factor: DEFAULT_LEVERAGE_FACTOR,
        farm_router: MAINNET_UNISWAP_V3_ROUTER,
        farm_tokens: MAINNET_CONVEX_FARM_TOKENS,
        chain: Chain::Mainnet,
    },
    StrategyDescriptor {
        name: "USDC-FRAXUSDC-levConvex",
        strategy_type: StrategyType::LevConvex,
        pool: CurvePool::Plain {
            coin_id: USDC_COIN_ID,
        },
        curve_adapter: address!("a4b2b3Dede9317fCbd9D78b8250ac44Bf23b64F4"),
        convex_reward_pool: address!("023e429Df8129F169f9756A4FBd885c18b05Ec2d"),
        credit_facade: MAINNET_USDC_CREDIT_FACADE,
        convex_booster: MAINNET_CONVEX_BOOSTER,
        underlying: MAINNET_USDC,
        leverage_factor: DEFAULT_LEVERAGE_FACTOR,
        farm_router: MAINNET_UNISWAP_V3_ROUTER,
        farm_tokens: MAINNET_CONVEX_FARM_TOKENS,
        chain: Chain::Mainnet,
    },
    StrategyDescriptor {
        name: "USDC-gUSD-levConvex",
        strategy_type: StrategyType::LevConvex,
        pool: CurvePool::ThreeCrv,
        curve_adapter: address!("6fA17Ffe020d72212A4DcA1560b27eA3cDAf965D"),
        convex_reward_pool: address!("3D4a70e5F355EAd0690213Ae9909f3Dc41236E3C"),
        credit_facade: MAINNET_USDC_CREDIT_FACADE,
        convex_booster: MAINNET_CONVEX_BOOSTER,
        underlying: MAINNET_USDC,
        leverage_factor: DEFAULT_LEVERAGE_FACTOR,
        farm_router: MAINNET_UNISWAP_V3_ROUTER,
        farm_tokens: MAINNET_CONVEX_FARM_TOKENS,
        chain: Chain::Mainnet,
    },
    StrategyDescriptor {
        name: "USDC-lUSD-levConvex",
        strategy_type: StrategyType::LevConvex,
        pool: CurvePool::ThreeCrv,
        curve_adapter: address!("D4c39a18338EA89B29965a8CAd28B7fb063c1429"),
        convex_reward_pool: address!("c34Ef7306B82f4e38E3fAB975034Ed0f76e0fdAA"),
        credit_facade: MAINNET_USDC_CREDIT_FACADE,
        convex_booster: MAINNET_CONVEX_BOOSTER,
        underlying: MAINNET_USDC,
        leverage_factor: DEFAULT_LEVERAGE_FACTOR,
        farm_router: MAINNET_UNISWAP_V3_ROUTER,
        farm_tokens: MAINNET_CONVEX_FARM_TOKENS,
        chain: Chain::Mainnet,
    },
    StrategyDescriptor {
        name: "USDC-FRAX3CRV-levConvex",
        strategy_type: StrategyType::LevConvex,
        pool: CurvePool::ThreeCrv,
        curve_adapter: address!("1C8281606377d79522515681BD94fc9d02b0d20B"),
        convex_reward_pool: address!("B26e063F062F76f9F7Dfa1a3f4b7fDa4A2197DfB"),
        credit_facade: MAINNET_USDC_CREDIT_FACADE,
        convex_booster: MAINNET_CONVEX_BOOSTER,
        underlying: MAINNET_USDC,
        leverage_factor: DEFAULT_LEVERAGE_FACTOR,
        farm_router: MAINNET_UNISWAP_V3_ROUTER,
        farm_tokens: MAINNET_CONVEX_FARM_TOKENS,
        chain: Chain::Mainnet,
    },
];

/// Find a strategy by name
pub fn by_name(name: &str) -> Option<&'static StrategyDescriptor> {
    LEV_CONVEX.iter().find(|strategy| strategy.name == name)
}

/// The registry in the shape consumed by downstream tooling
#[derive(Serialize)]
pub struct RegistryExport<'a> {
    /// The address book
    pub addrs: &'a AddressBook,
    /// The levConvex strategies
    #[serde(rename = "levConvex")]
    pub lev_convex: &'a [StrategyDescriptor],
}

/// Render the address book & strategies as a JSON value
pub fn to_json(
    book: &AddressBook,
    strategies: &[StrategyDescriptor],
) -> Result<Value, serde_json::Error> {
    serde_json::to_value(RegistryExport {
        addrs: book,
        lev_convex: strategies,
    })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{constants::ADDRESS_HEX_LEN, custom_serde::address_to_hex_string};

    #[test]
    fn test_names_unique() {
        assert!(LEV_CONVEX.iter().map(|s| s.name).all_unique());
    }

    #[test]
    fn test_addresses_well_formed() {
        for strategy in LEV_CONVEX {
            for (field, address) in strategy.addresses() {
                let hex = address_to_hex_string(&address);
                assert_eq!(hex.len(), ADDRESS_HEX_LEN, "{} {field}", strategy.name);
                assert!(hex.starts_with("0x"));
                assert!(hex[2..].chars().all(|c| c.is_ascii_hexdigit()));
                assert_eq!(hex, hex.to_lowercase());
            }
        }
    }

    #[test]
    fn test_underlying_is_mainnet_usdc() {
        let usdc = ADDRESS_BOOK.lookup(Chain::Mainnet, "USDC").unwrap();
        assert!(LEV_CONVEX.iter().all(|s| s.underlying == usdc));
    }

    #[test]
    fn test_farm_tokens_crv_then_cvx() {
        let crv = ADDRESS_BOOK.lookup(Chain::Mainnet, "CRV").unwrap();
        let cvx = ADDRESS_BOOK.lookup(Chain::Mainnet, "CVX").unwrap();
        for strategy in LEV_CONVEX {
            assert_eq!(strategy.farm_tokens, &[crv, cvx]);
        }
    }

    #[test]
    fn test_leverage_factor() {
        assert!(LEV_CONVEX.iter().all(|s| s.leverage_factor == 500));
    }

    #[test]
    fn test_coin_id_only_on_plain_pools() {
        for strategy in LEV_CONVEX {
            if strategy.is_3crv() {
                assert_eq!(strategy.coin_id(), None, "{}", strategy.name);
            } else {
                assert_eq!(strategy.coin_id(), Some(1), "{}", strategy.name);
            }
        }

        let three_crv = LEV_CONVEX.iter().filter(|s| s.is_3crv()).count();
        assert_eq!(three_crv, 3);
    }

    #[test]
    fn test_by_name() {
        let strategy = by_name("USDC-gUSD-levConvex").unwrap();
        assert!(strategy.is_3crv());
        assert!(by_name("USDC-unknown-levConvex").is_none());
    }

    #[test]
    fn test_json_export_shape() {
        let value = to_json(&ADDRESS_BOOK, LEV_CONVEX).unwrap();

        assert_eq!(
            value["addrs"]["mainnet"]["USDC"],
            "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
        );

        let first = &value["levConvex"][0];
        assert_eq!(first["name"], "USDC-sUSD-levConvex");
        assert_eq!(first["type"], "levConvex");
        assert_eq!(first["coinId"], 1);
        assert!(first.get("is3crv").is_none());
        assert_eq!(first["leverageFactor"], 500);
        assert_eq!(first["chain"], "mainnet");
        assert_eq!(
            first["farmTokens"][1],
            "0x4e3fbd56cd56c3e72c1403e103b45db9da5b9d2b"
        );

        let metapool = &value["levConvex"][2];
        assert_eq!(metapool["is3crv"], true);
        assert!(metapool.get("coinId").is_none());
    }
}
