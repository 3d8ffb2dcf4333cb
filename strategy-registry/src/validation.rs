//! Load-time checks of the registry's invariants
//!
//! The registry is a literal and cannot fail at runtime; these checks are run
//! by the test suite and before the registry is exported.

use std::collections::HashSet;

use alloy_primitives::Address;

use crate::{
    errors::RegistryError,
    types::{AddressBook, StrategyDescriptor},
};

/// Validate the given strategies against the address book
///
/// Checks that:
/// - strategy names are unique
/// - each strategy's chain is present in the book
/// - no address field is the zero address
/// - the underlying and farm tokens are book entries for the strategy's chain
pub fn validate(
    strategies: &[StrategyDescriptor],
    book: &AddressBook,
) -> Result<(), RegistryError> {
    let mut names = HashSet::new();
    for strategy in strategies {
        if !names.insert(strategy.name) {
            return Err(RegistryError::DuplicateName(strategy.name.to_string()));
        }

        validate_strategy(strategy, book)?;
    }

    Ok(())
}

/// Validate a single strategy against the address book
fn validate_strategy(
    strategy: &StrategyDescriptor,
    book: &AddressBook,
) -> Result<(), RegistryError> {
    if !book.chains().any(|chain| chain == strategy.chain) {
        return Err(RegistryError::UnknownChain {
            strategy: strategy.name.to_string(),
            chain: strategy.chain,
        });
    }

    for (field, address) in strategy.addresses() {
        if address == Address::ZERO {
            return Err(RegistryError::ZeroAddress {
                strategy: strategy.name.to_string(),
                field,
            });
        }
    }

    let booked = std::iter::once(("underlying", strategy.underlying))
        .chain(strategy.farm_tokens.iter().map(|t| ("farmTokens", *t)));
    for (field, address) in booked {
        if !book.contains(strategy.chain, address) {
            return Err(RegistryError::UnbookedAddress {
                strategy: strategy.name.to_string(),
                field,
                address,
            });
        }
    }

    Ok(())
}
