//! Types describing strategy instances and the addresses they reference

use std::fmt::{self, Display};

use alloy_primitives::Address;
use serde::Serialize;

use crate::custom_serde::{serialize_address, serialize_address_seq};

/// A chain on which strategies are deployed
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Ethereum mainnet
    Mainnet,
}

impl Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Mainnet => write!(f, "mainnet"),
        }
    }
}

/// The kind of strategy a descriptor parameterizes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StrategyType {
    /// A leveraged Curve/Convex position opened through a credit account
    #[serde(rename = "levConvex")]
    LevConvex,
}

/// The shape of the Curve pool a strategy supplies liquidity to
///
/// Serialized back into the flat shape downstream tools expect, i.e. either
/// `"coinId": <index>` or `"is3crv": true`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurvePool {
    /// A plain pool, entered through the coin at the given index
    Plain {
        /// The index of the underlying in the pool's coin list
        coin_id: u8,
    },
    /// A metapool paired with the DAI/USDC/USDT base pool
    ThreeCrv,
}

impl CurvePool {
    /// The coin index of a plain pool, `None` for a 3crv metapool
    pub fn coin_id(&self) -> Option<u8> {
        match self {
            CurvePool::Plain { coin_id } => Some(*coin_id),
            CurvePool::ThreeCrv => None,
        }
    }

    /// Whether this is a 3crv metapool
    pub fn is_3crv(&self) -> bool {
        matches!(self, CurvePool::ThreeCrv)
    }
}

/// The full parameterization of a single strategy instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDescriptor {
    /// The unique, human-readable name of the strategy
    pub name: &'static str,
    /// The kind of strategy
    #[serde(rename = "type")]
    pub strategy_type: StrategyType,
    /// The shape of the Curve pool the strategy enters
    #[serde(flatten)]
    pub pool: CurvePool,
    /// The Curve adapter of the credit manager
    #[serde(serialize_with = "serialize_address")]
    pub curve_adapter: Address,
    /// The Convex reward pool the LP position is staked in
    #[serde(serialize_with = "serialize_address")]
    pub convex_reward_pool: Address,
    /// The credit facade through which leverage is taken
    #[serde(serialize_with = "serialize_address")]
    pub credit_facade: Address,
    /// The Convex booster
    #[serde(serialize_with = "serialize_address")]
    pub convex_booster: Address,
    /// The asset the strategy accepts
    #[serde(serialize_with = "serialize_address")]
    pub underlying: Address,
    /// The leverage factor, interpreted by the strategy contracts
    pub leverage_factor: u32,
    /// The router used to sell farmed rewards
    #[serde(serialize_with = "serialize_address")]
    pub farm_router: Address,
    /// The reward tokens farmed by the strategy, in harvest order
    #[serde(serialize_with = "serialize_address_seq")]
    pub farm_tokens: &'static [Address],
    /// The chain the strategy is deployed on
    pub chain: Chain,
}

impl StrategyDescriptor {
    /// Whether the strategy's Curve pool is a 3crv metapool
    pub fn is_3crv(&self) -> bool {
        self.pool.is_3crv()
    }

    /// The coin index of the strategy's Curve pool, if it is a plain pool
    pub fn coin_id(&self) -> Option<u8> {
        self.pool.coin_id()
    }

    /// All the addresses the descriptor references, labelled by field name
    pub fn addresses(&self) -> Vec<(&'static str, Address)> {
        let mut addrs = vec![
            ("curveAdapter", self.curve_adapter),
            ("convexRewardPool", self.convex_reward_pool),
            ("creditFacade", self.credit_facade),
            ("convexBooster", self.convex_booster),
            ("underlying", self.underlying),
            ("farmRouter", self.farm_router),
        ];
        addrs.extend(self.farm_tokens.iter().map(|token| ("farmTokens", *token)));
        addrs
    }
}

/// The symbolic addresses of tokens & routers, grouped by chain
#[derive(Clone, Copy, Debug)]
pub struct AddressBook {
    /// The entries of each chain in the book
    pub chains: &'static [(Chain, &'static [(&'static str, Address)])],
}

impl AddressBook {
    /// The chains present in the book
    pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
        self.chains.iter().map(|(chain, _)| *chain)
    }

    /// The `(symbol, address)` entries of the given chain, empty if the chain
    /// is not in the book
    pub fn entries(&self, chain: Chain) -> &'static [(&'static str, Address)] {
        self.chains
            .iter()
            .find(|(c, _)| *c == chain)
            .map(|(_, entries)| *entries)
            .unwrap_or_default()
    }

    /// Look up an address by its symbol on the given chain
    pub fn lookup(&self, chain: Chain, symbol: &str) -> Option<Address> {
        self.entries(chain)
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, addr)| *addr)
    }

    /// Whether the given address is one of the book's entries for the chain
    pub fn contains(&self, chain: Chain, address: Address) -> bool {
        self.entries(chain).iter().any(|(_, addr)| *addr == address)
    }
}
