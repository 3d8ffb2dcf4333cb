//! Errors surfaced when validating the strategy registry

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy_primitives::Address;

use crate::types::Chain;

/// A violation of one of the registry's invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two descriptors share the same name
    DuplicateName(String),
    /// A descriptor references a chain missing from the address book
    UnknownChain {
        /// The name of the offending descriptor
        strategy: String,
        /// The chain it references
        chain: Chain,
    },
    /// A descriptor references the zero address
    ZeroAddress {
        /// The name of the offending descriptor
        strategy: String,
        /// The field holding the zero address
        field: &'static str,
    },
    /// A token the descriptor depends on is not an address book entry
    UnbookedAddress {
        /// The name of the offending descriptor
        strategy: String,
        /// The field holding the address
        field: &'static str,
        /// The address missing from the book
        address: Address,
    },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateName(name) => write!(f, "duplicate strategy name: {name}"),
            RegistryError::UnknownChain { strategy, chain } => {
                write!(f, "strategy {strategy} references unknown chain {chain}")
            }
            RegistryError::ZeroAddress { strategy, field } => {
                write!(f, "strategy {strategy} has a zero address in {field}")
            }
            RegistryError::UnbookedAddress {
                strategy,
                field,
                address,
            } => write!(
                f,
                "strategy {strategy} references {address:#x} in {field}, which is not in the address book"
            ),
        }
    }
}

impl Error for RegistryError {}
