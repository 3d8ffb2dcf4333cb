//! Scripts for deploying the Sector cross-chain vault and exporting the
//! levConvex strategy registry.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod accounts;
pub mod chain;
pub mod cli;
mod commands;
pub mod constants;
pub mod deploy;
pub mod deployments;
pub mod errors;
pub mod types;
pub mod utils;
