//! The registry of leveraged-Convex strategy instances and the address book
//! of the on-chain tokens & routers they bind to

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod constants;
pub mod custom_serde;
pub mod errors;
pub mod registry;
pub mod types;
pub mod validation;

pub use registry::{ADDRESS_BOOK, LEV_CONVEX};
pub use types::{AddressBook, Chain, CurvePool, StrategyDescriptor, StrategyType};
