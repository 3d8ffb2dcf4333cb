//! Custom serialization logic used to render the registry in the shape
//! consumed by downstream tooling:
//! 1. addresses as lowercase, `0x`-prefixed hex
//! 2. the Curve pool shape as the flat `is3crv` / `coinId` fields
//! 3. the address book as nested `chain -> symbol -> address` maps

use alloy_primitives::Address;
use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serialize, Serializer,
};

use crate::types::{AddressBook, CurvePool};

/// The key marking a 3crv metapool strategy
const IS_3CRV_KEY: &str = "is3crv";
/// The key holding the coin index of a plain pool strategy
const COIN_ID_KEY: &str = "coinId";

/// Render an address as lowercase, `0x`-prefixed hex
pub fn address_to_hex_string(address: &Address) -> String {
    format!("{address:#x}")
}

/// Serialize an address as lowercase, `0x`-prefixed hex
pub fn serialize_address<S: Serializer>(address: &Address, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&address_to_hex_string(address))
}

/// Serialize a sequence of addresses as lowercase, `0x`-prefixed hex
pub fn serialize_address_seq<S: Serializer>(
    addresses: &[Address],
    s: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = s.serialize_seq(Some(addresses.len()))?;
    for address in addresses {
        seq.serialize_element(&address_to_hex_string(address))?;
    }
    seq.end()
}

impl Serialize for CurvePool {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(1))?;
        match self {
            CurvePool::Plain { coin_id } => map.serialize_entry(COIN_ID_KEY, coin_id)?,
            CurvePool::ThreeCrv => map.serialize_entry(IS_3CRV_KEY, &true)?,
        }
        map.end()
    }
}

/// The entries of a single chain in the address book
struct ChainEntries(&'static [(&'static str, Address)]);

impl Serialize for ChainEntries {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.0.len()))?;
        for (symbol, address) in self.0 {
            map.serialize_entry(symbol, &address_to_hex_string(address))?;
        }
        map.end()
    }
}

impl Serialize for AddressBook {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.chains.len()))?;
        for (chain, entries) in self.chains {
            map.serialize_entry(chain, &ChainEntries(entries))?;
        }
        map.end()
    }
}
