//! Rosetta Asserter
//!
//! Static validation of the objects a blockchain data provider returns:
//! blocks, transactions, operations, identifiers and amounts.
//!
//! Checks that only depend on the object being checked are free functions.
//! Checks that depend on what the provider declared during the handshake
//! (allowed operation types and statuses, the genesis block, its error
//! catalog) are methods on [`Asserter`]. Every check returns the first
//! violation it finds and never modifies its input.

pub mod account;
pub mod asserter;
pub mod block;
pub mod config;
pub mod error;
pub mod network;

pub use account::account_balance_response;
pub use asserter::{initialized, Asserter};
pub use block::{
    account_identifier, amount, amount_value, block_identifier, operation_identifier,
    partial_block_identifier, timestamp, transaction_identifier,
};
pub use config::AsserterConfiguration;
pub use error::{AsserterError, ErrorKind, Result};
pub use network::{
    allow, network_identifier, network_list_response, network_options_response,
    network_status_response, operation_statuses, operation_types, peer, version,
};
