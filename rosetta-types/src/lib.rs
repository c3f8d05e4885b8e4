//! Protocol objects returned by blockchain data providers.
//!
//! These are plain data carriers produced by deserializing provider
//! responses. Sub-structures that a provider may omit are `Option`s so that
//! a missing field can be told apart from an empty one.

pub mod account;
pub mod amount;
pub mod block;
pub mod identifiers;
pub mod network;
pub mod operation;

pub use account::AccountBalanceResponse;
pub use amount::{Amount, Currency};
pub use block::{Block, Transaction};
pub use identifiers::{
    AccountIdentifier, BlockIdentifier, NetworkIdentifier, OperationIdentifier,
    PartialBlockIdentifier, SubAccountIdentifier, SubNetworkIdentifier, TransactionIdentifier,
};
pub use network::{
    Allow, ApiError, NetworkListResponse, NetworkOptionsResponse, NetworkStatusResponse, Peer,
    Version,
};
pub use operation::{Operation, OperationStatus};
